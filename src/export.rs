//! Serializes a received report verbatim to a local JSON file.
//!
//! Export is presentation plumbing, not part of the ingestion core: the
//! report is written exactly as received, pretty-printed, with no
//! reinterpretation.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::report::AnalysisResult;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the report as pretty JSON to
/// `prodlens-analysis-{app}-{unix_millis}.json` under `dir` and returns the
/// path. The app name is slugged so arbitrary display names stay
/// filesystem-safe.
pub fn export_report(result: &AnalysisResult, dir: &Path) -> Result<PathBuf, ExportError> {
    let json = serde_json::to_string_pretty(result)?;
    let path = dir.join(format!(
        "prodlens-analysis-{}-{}.json",
        slug(&result.app_name),
        Utc::now().timestamp_millis()
    ));
    fs::write(&path, json)?;
    Ok(path)
}

/// ASCII alphanumerics, `-`, and `_` pass through; every other character
/// becomes `-`. Runs are collapsed and edges trimmed.
fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_keeps_safe_characters_and_collapses_the_rest() {
        assert_eq!(slug("E-Commerce Dashboard"), "E-Commerce-Dashboard");
        assert_eq!(slug("app/..//etc"), "app-etc");
        assert_eq!(slug("  padded  "), "padded");
    }
}
