//! Coordinates one user action end to end: ingest, validate, submit.
//!
//! Each action (file selection or demo press) takes a ticket from a
//! monotonically increasing sequence. When a backend response arrives, the
//! session checks whether its ticket is still current; a result whose action
//! was superseded by a newer one is reported as [`Outcome::Superseded`] and
//! discarded instead of being delivered. A stale late-arriving response can
//! therefore never overwrite a newer one.
//!
//! Validation failures reject an upload before any network call is made.
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use crate::client::{AnalysisClient, AnalysisTransport};
use crate::error::PipelineError;
use crate::ingest_upload;
use crate::report::AnalysisResult;

/// Result of one session action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The action ran to completion and its report is current.
    Completed(AnalysisResult),
    /// A newer action started while this one was in flight; its report was
    /// discarded on arrival.
    Superseded,
}

impl Outcome {
    /// The report, when the action completed and was not superseded.
    pub fn into_result(self) -> Option<AnalysisResult> {
        match self {
            Outcome::Completed(result) => Some(result),
            Outcome::Superseded => None,
        }
    }
}

/// One user's ingest-and-analyze session.
///
/// Holds no cross-action state beyond the ticket sequence: every action
/// operates on its own buffer and produces its own record.
pub struct AnalysisSession<T: AnalysisTransport> {
    client: AnalysisClient<T>,
    sequence: AtomicU64,
}

impl<T: AnalysisTransport> AnalysisSession<T> {
    pub fn new(client: AnalysisClient<T>) -> Self {
        Self {
            client,
            sequence: AtomicU64::new(0),
        }
    }

    /// Full pipeline for an uploaded file: read, normalize, validate,
    /// submit. Ingestion errors mean zero transport calls were made.
    pub async fn analyze_upload(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<Outcome, PipelineError> {
        let ticket = self.begin();
        let config = ingest_upload(bytes, filename)?;
        let result = self.client.analyze(config).await?;
        Ok(self.finish(ticket, result))
    }

    /// Demo path: fetches the canned sample report, bypassing ingestion.
    pub async fn analyze_sample(&self) -> Result<Outcome, PipelineError> {
        let ticket = self.begin();
        let result = self.client.sample_analysis().await?;
        Ok(self.finish(ticket, result))
    }

    fn begin(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn finish(&self, ticket: u64, result: AnalysisResult) -> Outcome {
        let current = self.sequence.load(Ordering::SeqCst);
        if current != ticket {
            warn!(ticket, current, "discarding stale analysis result");
            return Outcome::Superseded;
        }
        Outcome::Completed(result)
    }
}
