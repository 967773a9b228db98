//! Thin HTTP client for the analysis backend.
//!
//! The transport is a trait so the submit path can be exercised against an
//! in-memory double; nothing here holds process-global state — construct a
//! transport, hand it to [`AnalysisClient`], done. Timeouts are enforced
//! only at this boundary; the ingestion pipeline upstream is in-process and
//! completes well under the bound.
//!
//! There is no automatic retry: a failed analysis is surfaced to the user,
//! who retries by re-selecting a file or pressing the demo button again.
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ClientError;
use crate::report::AnalysisResult;
use crate::types::{AnalysisRequest, ApiResponse, CanonicalConfig};

/// Fallback surfaced when the backend reports failure without a message.
pub const GENERIC_BACKEND_ERROR: &str = "An error occurred";

/// Where and how to reach the analysis backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    /// Upper bound on waiting for any single backend response.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// One method per backend endpoint, each returning the raw response
/// envelope. Implemented by [`HttpTransport`] in production and by spies in
/// tests.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    /// `POST {base}/analyze`.
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ApiResponse<AnalysisResult>, ClientError>;

    /// `GET {base}/sample-analysis` — the demo path, no request body.
    async fn sample_analysis(&self) -> Result<ApiResponse<AnalysisResult>, ClientError>;
}

// Shared handles keep working as transports, so a session can own an
// `Arc` to a transport the caller still observes.
#[async_trait]
impl<T: AnalysisTransport + ?Sized> AnalysisTransport for std::sync::Arc<T> {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ApiResponse<AnalysisResult>, ClientError> {
        (**self).analyze(request).await
    }

    async fn sample_analysis(&self) -> Result<ApiResponse<AnalysisResult>, ClientError> {
        (**self).sample_analysis().await
    }
}

/// reqwest-backed transport with a fixed per-request timeout.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AnalysisTransport for HttpTransport {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ApiResponse<AnalysisResult>, ClientError> {
        let url = format!("{}/analyze", self.base_url);
        debug!(%url, app_name = %request.app_name, "submitting analysis request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        // The envelope's `success` field is authoritative; error statuses
        // still carry a decodable envelope with the backend's message.
        response
            .json()
            .await
            .map_err(|err| ClientError::Transport(err.to_string()))
    }

    async fn sample_analysis(&self) -> Result<ApiResponse<AnalysisResult>, ClientError> {
        let url = format!("{}/sample-analysis", self.base_url);
        debug!(%url, "fetching sample analysis");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        response
            .json()
            .await
            .map_err(|err| ClientError::Transport(err.to_string()))
    }
}

/// Unwraps the backend's response envelope so callers only ever see a
/// complete [`AnalysisResult`] or an error — never a partial result.
pub struct AnalysisClient<T: AnalysisTransport> {
    transport: T,
}

impl<T: AnalysisTransport> AnalysisClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submits a validated config for analysis. The request's `appName` is
    /// taken from the config, which the validation gate guarantees is
    /// non-empty.
    pub async fn analyze(&self, config: CanonicalConfig) -> Result<AnalysisResult, ClientError> {
        let request = AnalysisRequest {
            app_name: config.name.clone(),
            app_config: config,
        };
        unwrap_envelope(self.transport.analyze(&request).await?)
    }

    /// Fetches the canned demo report, bypassing ingestion entirely.
    pub async fn sample_analysis(&self) -> Result<AnalysisResult, ClientError> {
        unwrap_envelope(self.transport.sample_analysis().await?)
    }
}

fn unwrap_envelope(
    response: ApiResponse<AnalysisResult>,
) -> Result<AnalysisResult, ClientError> {
    if !response.success {
        let message = response
            .error
            .or(response.message)
            .unwrap_or_else(|| GENERIC_BACKEND_ERROR.to_string());
        return Err(ClientError::Backend(message));
    }
    response.data.ok_or(ClientError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(error: Option<&str>, message: Option<&str>) -> ApiResponse<AnalysisResult> {
        ApiResponse {
            success: false,
            data: None,
            error: error.map(str::to_owned),
            message: message.map(str::to_owned),
        }
    }

    #[test]
    fn failure_envelope_surfaces_backend_error() {
        let err = unwrap_envelope(failure(Some("quota exceeded"), None)).unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn failure_envelope_falls_back_to_message_then_generic() {
        let err = unwrap_envelope(failure(None, Some("be patient"))).unwrap_err();
        assert_eq!(err.to_string(), "be patient");

        let err = unwrap_envelope(failure(None, None)).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_BACKEND_ERROR);
    }

    #[test]
    fn success_without_data_is_an_error() {
        let envelope = ApiResponse::<AnalysisResult> {
            success: true,
            data: None,
            error: None,
            message: None,
        };
        assert!(matches!(
            unwrap_envelope(envelope),
            Err(ClientError::MissingData)
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let transport = HttpTransport::new(&ClientConfig {
            base_url: "http://localhost:8000/api/".into(),
            ..ClientConfig::default()
        })
        .expect("client builds");
        assert_eq!(transport.base_url, "http://localhost:8000/api");
    }
}
