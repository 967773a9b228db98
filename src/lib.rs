//! ProdLens client core.
//!
//! This is where an app configuration enters the system. We take an uploaded
//! file (plain JSON or a zip of named JSON members), extract and merge its
//! documents into one canonical record, validate it, and submit it to the
//! remote analysis backend. The scoring itself is the backend's job; this
//! crate owns ingestion, the wire contract, and report export.
//!
//! ## Pipeline
//!
//! ```text
//! raw upload → read_upload() → ExtractedDocuments → normalize_config()
//!   → CanonicalConfig → validation gate → AnalysisClient → AnalysisResult
//! ```
//!
//! Failures at any stage are typed ([`IngestError`], [`ClientError`]) and
//! surface before anything later runs: a rejected upload never reaches the
//! network, and a failed analysis never yields a partial report.
//!
//! ## Example
//!
//! ```
//! use prodlens::ingest_upload;
//!
//! let config = ingest_upload(br#"{"name": "Checkout", "blocks": {}}"#, "checkout.json")
//!     .expect("valid upload");
//! assert_eq!(config.name, "Checkout");
//! assert!(config.metadata.contains_key("createdAt"));
//! ```
use std::time::Instant;

use tracing::{info, warn, Level};

mod archive;
mod client;
mod error;
mod export;
mod normalize;
mod report;
mod sample;
mod session;
mod types;

pub use crate::archive::{read_upload, ADVERTISED_EXTENSIONS};
pub use crate::client::{
    AnalysisClient, AnalysisTransport, ClientConfig, HttpTransport, GENERIC_BACKEND_ERROR,
};
pub use crate::error::{ClientError, IngestError, PipelineError};
pub use crate::export::{export_report, ExportError};
pub use crate::normalize::{normalize_config, validate_config, DEFAULT_CONFIG_VERSION};
pub use crate::report::{
    AnalysisResult, CategoryScore, CategoryScores, Insight, Priority, ReadinessLevel,
    Recommendation, Risk, ScaleAnalysis, ScoreLevel, Severity, TestKind, TestSuggestion,
};
pub use crate::sample::sample_app_config;
pub use crate::session::{AnalysisSession, Outcome};
pub use crate::types::{AnalysisRequest, ApiResponse, CanonicalConfig, ExtractedDocuments};

/// Ingest one upload: classify, extract, merge, validate.
///
/// This is the whole pipeline short of submission. On success the returned
/// record has passed the validation gate and is ready for
/// [`AnalysisClient::analyze`].
pub fn ingest_upload(bytes: &[u8], filename: &str) -> Result<CanonicalConfig, IngestError> {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "prodlens.ingest", filename);
    let _guard = span.enter();

    match ingest_inner(bytes, filename) {
        Ok(config) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                app_name = %config.name,
                raw_bytes = bytes.len(),
                elapsed_micros,
                "ingest_success"
            );
            Ok(config)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "ingest_failure");
            Err(err)
        }
    }
}

fn ingest_inner(bytes: &[u8], filename: &str) -> Result<CanonicalConfig, IngestError> {
    let docs = archive::read_upload(bytes, filename)?;
    normalize::normalize_config(&docs, filename)
}
