//! Error types for the ingestion pipeline and the analysis client.
//!
//! Ingestion errors are typed (not strings) so callers can handle specific
//! cases, map them to UI states, and assert on them in tests. All of them are
//! recoverable at the caller: the user sees a message and a retry action,
//! never a crash and never a partial result.
use thiserror::Error;

/// Errors raised while turning an uploaded file into a validated
/// [`CanonicalConfig`](crate::CanonicalConfig).
///
/// Every variant is produced before any network request is made. The enum is
/// cloneable and comparable so tests can match exact cases, and marked
/// `#[non_exhaustive]` to allow future additions without breaking callers.
///
/// # Examples
///
/// ```rust
/// use prodlens::{ingest_upload, IngestError};
///
/// let err = ingest_upload(b"not json", "app.json").unwrap_err();
/// assert!(matches!(err, IngestError::Parse { .. }));
///
/// let err = ingest_upload(b"anything", "notes.txt").unwrap_err();
/// assert!(err.to_string().contains(".txt"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// Filename extension is neither `.json` nor `.zip`.
    ///
    /// The upload surface advertises `.txt` as well, so this error is the
    /// gate that rejects accepted-but-unparseable files before submission.
    /// The message names the rejected extension.
    #[error("unsupported file format `{0}`: upload a .json or .zip file")]
    UnsupportedFormat(String),

    /// The buffer, the archive container, or a named archive member could
    /// not be parsed. `member` identifies what failed: the whole file for
    /// plain JSON uploads and broken containers, or the member name (e.g.
    /// `blocks.json`) for archives.
    #[error("failed to parse `{member}`: {detail}")]
    Parse { member: String, detail: String },

    /// The merged record failed the validation gate.
    ///
    /// Only one rule is enforced here — `name` must be a string with a
    /// non-empty trimmed value. Deeper semantic validation is the analysis
    /// backend's job.
    #[error("invalid app config: {0}")]
    InvalidConfig(String),
}

impl IngestError {
    pub(crate) fn parse(member: impl Into<String>, detail: impl ToString) -> Self {
        IngestError::Parse {
            member: member.into(),
            detail: detail.to_string(),
        }
    }
}

/// Errors surfaced by the analysis backend client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    /// The backend answered with `success: false`. Carries the backend's
    /// error string verbatim, or the generic fallback when it supplied none,
    /// so `to_string()` is exactly what the user should see.
    #[error("{0}")]
    Backend(String),

    /// The request never produced a decodable response envelope (connect
    /// failure, timeout, or malformed body).
    #[error("analysis request failed: {0}")]
    Transport(String),

    /// The backend claimed success but sent no result. Treated as an error
    /// because partial results are never shown.
    #[error("analysis backend returned success without a result")]
    MissingData,
}

/// Umbrella error for the full ingest-and-submit flow.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("ingest failure: {0}")]
    Ingest(#[from] IngestError),

    #[error("analysis failure: {0}")]
    Client(#[from] ClientError),
}
