//! Data model for the ingestion pipeline and the analysis wire contract.
//!
//! # Type flow
//!
//! ```text
//! raw upload (bytes + filename)
//!
//!         ↓ read_upload()
//!
//! ExtractedDocuments
//! ├── metadata:     Option<Value>   (metadata.json, if present)
//! ├── blocks:       Option<Value>   (blocks.json, if present)
//! ├── dependencies: Option<Value>   (dependencies.json, if present)
//! └── config:       Option<Value>   (config.json, or the whole .json upload)
//!
//!         ↓ normalize_config()
//!
//! CanonicalConfig
//! ├── name:         String                 (validated non-empty)
//! ├── description:  String                 (default "")
//! ├── blocks:       Map<String, Value>     (default {})
//! ├── dependencies: BTreeMap<String, String>  (default {})
//! └── metadata:     Map<String, Value>     (always has createdAt + version)
//! ```
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Logical documents extracted from one upload.
///
/// This is the intermediate result of archive extraction: one slot per
/// recognized member name, `Some` only when that member existed in the
/// source. A plain `.json` upload is carried whole in the `config` slot.
/// Produced by [`read_upload`](crate::read_upload), consumed and discarded by
/// [`normalize_config`](crate::normalize_config).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedDocuments {
    /// Parsed `metadata.json`.
    pub metadata: Option<Value>,
    /// Parsed `blocks.json`.
    pub blocks: Option<Value>,
    /// Parsed `dependencies.json`.
    pub dependencies: Option<Value>,
    /// Parsed `config.json`, or the whole document of a plain JSON upload.
    pub config: Option<Value>,
}

impl ExtractedDocuments {
    /// Wraps a single parsed JSON document as the `config` document.
    pub fn from_config(document: Value) -> Self {
        Self {
            config: Some(document),
            ..Self::default()
        }
    }

    /// True when no recognized document was found in the upload.
    pub fn is_empty(&self) -> bool {
        self.metadata.is_none()
            && self.blocks.is_none()
            && self.dependencies.is_none()
            && self.config.is_none()
    }
}

/// The normalized, validated application configuration submitted for
/// analysis.
///
/// After [`normalize_config`](crate::normalize_config) every field is always
/// present (defaults are filled, never `null` on the wire), and a record that
/// passed the validation gate always has a non-empty trimmed `name`. The
/// record is never mutated after construction; it lives for one
/// ingest-and-submit cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalConfig {
    /// Display name of the application. The only field whose absence or
    /// emptiness invalidates the record.
    pub name: String,
    /// Free-form description, empty when no source provided one.
    pub description: String,
    /// UI/layout block definitions, passed through opaquely.
    pub blocks: Map<String, Value>,
    /// Package name → version spec.
    pub dependencies: BTreeMap<String, String>,
    /// Arbitrary metadata; normalization guarantees `createdAt` (RFC 3339)
    /// and `version` keys, everything else passes through unchanged.
    pub metadata: Map<String, Value>,
}

/// Body of the analysis request sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub app_config: CanonicalConfig,
    pub app_name: String,
}

/// Response envelope used by every backend endpoint.
///
/// `success: false` means `data` must not be interpreted; the caller
/// surfaces `error` (or a generic fallback) instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
