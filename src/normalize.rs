//! Config Normalizer: merges extracted documents into one
//! [`CanonicalConfig`] and runs the validation gate.
//!
//! Every output field has an explicit, ordered list of sources; the first
//! source whose key is *present* wins. Presence means the key exists in the
//! source document — an empty string or an explicit `0` is a present value,
//! never "missing". Defaults are filled only when no source carried the key,
//! so normalization never overwrites an explicit value.
use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::error::IngestError;
use crate::types::{CanonicalConfig, ExtractedDocuments};

/// Version stamped on configs whose metadata does not carry one.
pub const DEFAULT_CONFIG_VERSION: &str = "1.0.0";

/// Metadata key holding the creation timestamp.
const KEY_CREATED_AT: &str = "createdAt";
/// Metadata key holding the config version.
const KEY_VERSION: &str = "version";

/// Merges the extracted documents into a canonical record and validates it.
///
/// Field resolution (first present source wins):
///
/// | field          | sources                                             |
/// |----------------|-----------------------------------------------------|
/// | `name`         | `metadata.name` → `config.name` → filename stem     |
/// | `description`  | `metadata.description` → `config.description` → `""`|
/// | `blocks`       | `blocks` doc → `config.blocks` → `{}`               |
/// | `dependencies` | `dependencies` doc → `config.dependencies` → `{}`   |
/// | `metadata`     | `metadata` doc → `config.metadata` → `{}`           |
///
/// The merged metadata map always ends up with `createdAt` (RFC 3339, now
/// when absent — the normalizer's only clock read) and `version`
/// (`"1.0.0"` when absent).
///
/// # Errors
///
/// [`IngestError::InvalidConfig`] when the resolved `name` is not a string
/// or is empty after trimming.
pub fn normalize_config(
    docs: &ExtractedDocuments,
    filename: &str,
) -> Result<CanonicalConfig, IngestError> {
    let config = CanonicalConfig {
        name: resolve_name(docs, filename)?,
        description: resolve_description(docs),
        blocks: resolve_map(docs.blocks.as_ref(), field(&docs.config, "blocks")),
        dependencies: resolve_dependencies(docs),
        metadata: resolve_metadata(docs),
    };

    validate_config(&config)?;
    Ok(config)
}

/// The validation gate: a usable record needs a non-empty trimmed `name`.
/// Nothing else is shape-checked here — `blocks`, `dependencies`, and extra
/// metadata keys pass through opaquely for the backend to judge.
pub fn validate_config(config: &CanonicalConfig) -> Result<(), IngestError> {
    if config.name.trim().is_empty() {
        return Err(IngestError::InvalidConfig("missing or empty name".into()));
    }
    Ok(())
}

/// Looks up `key` in an optional document; `None` when the document is
/// absent, not an object, or lacks the key.
fn field<'a>(doc: &'a Option<Value>, key: &str) -> Option<&'a Value> {
    doc.as_ref().and_then(|value| value.get(key))
}

fn resolve_name(docs: &ExtractedDocuments, filename: &str) -> Result<String, IngestError> {
    match field(&docs.metadata, "name").or_else(|| field(&docs.config, "name")) {
        Some(Value::String(name)) => Ok(name.clone()),
        // A present non-string name fails the gate rather than silently
        // borrowing the filename.
        Some(_) => Err(IngestError::InvalidConfig("missing or empty name".into())),
        None => Ok(file_stem(filename)),
    }
}

fn resolve_description(docs: &ExtractedDocuments) -> String {
    match field(&docs.metadata, "description").or_else(|| field(&docs.config, "description")) {
        Some(value) => json_text(value),
        None => String::new(),
    }
}

/// Resolves an object-valued field; non-object sources fall through to the
/// next source in the chain.
fn resolve_map(primary: Option<&Value>, fallback: Option<&Value>) -> Map<String, Value> {
    primary
        .and_then(Value::as_object)
        .or_else(|| fallback.and_then(Value::as_object))
        .cloned()
        .unwrap_or_default()
}

fn resolve_dependencies(docs: &ExtractedDocuments) -> BTreeMap<String, String> {
    let source = docs
        .dependencies
        .as_ref()
        .and_then(Value::as_object)
        .or_else(|| field(&docs.config, "dependencies").and_then(Value::as_object));

    source
        .map(|entries| {
            entries
                .iter()
                .map(|(package, version)| (package.clone(), json_text(version)))
                .collect()
        })
        .unwrap_or_default()
}

fn resolve_metadata(docs: &ExtractedDocuments) -> Map<String, Value> {
    let mut metadata = resolve_map(docs.metadata.as_ref(), field(&docs.config, "metadata"));

    // Fill defaults without touching explicit values, so re-normalizing a
    // record that already carries createdAt leaves that timestamp intact.
    if !metadata.contains_key(KEY_CREATED_AT) {
        metadata.insert(
            KEY_CREATED_AT.to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
    }
    if !metadata.contains_key(KEY_VERSION) {
        metadata.insert(
            KEY_VERSION.to_string(),
            Value::String(DEFAULT_CONFIG_VERSION.to_string()),
        );
    }
    metadata
}

/// Renders a JSON value as text: strings verbatim, everything else as its
/// compact JSON form (`5` → `"5"`). Used where the canonical model is typed
/// `String` but the permissiveness policy forbids rejecting other scalars.
fn json_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The filename with its `.zip`/`.json` extension stripped, used as the
/// last-resort name source.
fn file_stem(filename: &str) -> String {
    let lower = filename.to_ascii_lowercase();
    for ext in [".zip", ".json"] {
        if lower.ends_with(ext) {
            return filename[..filename.len() - ext.len()].to_string();
        }
    }
    filename.to_string()
}
