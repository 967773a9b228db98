//! Archive Reader: classifies an upload by filename and extracts the
//! recognized JSON documents from it.
//!
//! Plain `.json` uploads are parsed whole and carried as the `config`
//! document. `.zip` uploads are opened in memory; only the four recognized
//! member names are read, anything else in the archive is ignored. Any other
//! extension is rejected here, before submission.
//!
//! The reader is a pure transform: output depends only on the bytes and the
//! filename. No clock reads (timestamp defaults are the normalizer's job),
//! no filesystem access, no size limit (the transport layer owns that).
use std::io::{Cursor, Read, Seek};

use serde_json::Value;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::IngestError;
use crate::types::ExtractedDocuments;

/// Extensions the upload surface advertises. `.txt` is accepted by the file
/// picker but rejected by [`read_upload`] with
/// [`IngestError::UnsupportedFormat`].
pub const ADVERTISED_EXTENSIONS: [&str; 3] = [".json", ".zip", ".txt"];

/// Archive member names recognized during extraction. Extension-stripped,
/// they become the logical document keys.
const MEMBER_METADATA: &str = "metadata.json";
const MEMBER_BLOCKS: &str = "blocks.json";
const MEMBER_DEPENDENCIES: &str = "dependencies.json";
const MEMBER_CONFIG: &str = "config.json";

/// Classifies `filename` and extracts whichever recognized documents the
/// buffer contains.
///
/// # Errors
///
/// - [`IngestError::Parse`] when the buffer (for `.json`), the container, or
///   a recognized member (for `.zip`) is not valid JSON; the message names
///   what failed.
/// - [`IngestError::UnsupportedFormat`] for any other extension.
pub fn read_upload(bytes: &[u8], filename: &str) -> Result<ExtractedDocuments, IngestError> {
    let lower = filename.to_ascii_lowercase();

    if lower.ends_with(".json") {
        let document =
            serde_json::from_slice(bytes).map_err(|err| IngestError::parse(filename, err))?;
        return Ok(ExtractedDocuments::from_config(document));
    }

    if lower.ends_with(".zip") {
        return read_archive(bytes, filename);
    }

    Err(IngestError::UnsupportedFormat(extension_of(filename)))
}

/// Opens the buffer as a zip container and pulls out the recognized members.
fn read_archive(bytes: &[u8], filename: &str) -> Result<ExtractedDocuments, IngestError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|err| IngestError::parse(filename, err))?;

    let docs = ExtractedDocuments {
        metadata: read_member(&mut archive, MEMBER_METADATA)?,
        blocks: read_member(&mut archive, MEMBER_BLOCKS)?,
        dependencies: read_member(&mut archive, MEMBER_DEPENDENCIES)?,
        config: read_member(&mut archive, MEMBER_CONFIG)?,
    };

    if docs.is_empty() {
        debug!(filename, "archive contained no recognized members");
    }
    Ok(docs)
}

/// Reads one named member as UTF-8 JSON; `None` when the member is absent.
fn read_member<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    member: &str,
) -> Result<Option<Value>, IngestError> {
    let mut entry = match archive.by_name(member) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(IngestError::parse(member, err)),
    };

    let mut text = String::new();
    entry
        .read_to_string(&mut text)
        .map_err(|err| IngestError::parse(member, err))?;

    let value = serde_json::from_str(&text).map_err(|err| IngestError::parse(member, err))?;
    Ok(Some(value))
}

/// The trailing extension of `filename` (with its dot), or the whole name
/// when there is none. Used to report what was rejected.
fn extension_of(filename: &str) -> String {
    match filename.rfind('.') {
        Some(idx) => filename[idx..].to_string(),
        None => filename.to_string(),
    }
}
