//! Shared fixtures for integration tests: a canned report and a spy
//! transport that counts calls without touching the network.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use prodlens::{
    AnalysisRequest, AnalysisResult, AnalysisTransport, ApiResponse, CategoryScore,
    CategoryScores, ClientError, Insight, Priority, ReadinessLevel, Recommendation, Risk,
    ScaleAnalysis, ScoreLevel, Severity, TestKind, TestSuggestion,
};

fn category(score: u8, level: ScoreLevel) -> CategoryScore {
    CategoryScore {
        score,
        level,
        issues: vec![],
        suggestions: vec![],
    }
}

/// A small but fully-populated report, the way the backend would shape it.
pub fn sample_report(app_name: &str) -> AnalysisResult {
    AnalysisResult {
        app_name: app_name.to_string(),
        timestamp: "2024-06-01T12:00:00".to_string(),
        overall_score: 74,
        categories: CategoryScores {
            scalability: category(68, ScoreLevel::Medium),
            security: category(81, ScoreLevel::High),
            testability: category(55, ScoreLevel::Low),
            maintainability: category(77, ScoreLevel::High),
            performance: category(71, ScoreLevel::Medium),
        },
        risks: vec![Risk {
            category: "security".to_string(),
            severity: Severity::High,
            title: "No rate limiting".to_string(),
            description: "API endpoints accept unbounded traffic".to_string(),
            impact: "abuse can exhaust backend capacity".to_string(),
            mitigation: "add per-client rate limits".to_string(),
        }],
        insights: vec![Insight {
            category: "architecture".to_string(),
            title: "Monolithic block layout".to_string(),
            description: "all components share one container".to_string(),
            actionable: true,
        }],
        test_suggestions: vec![TestSuggestion {
            kind: TestKind::Api,
            title: "Contract tests for checkout".to_string(),
            description: "pin the request/response shapes".to_string(),
            priority: Priority::High,
            estimated_duration: "2 days".to_string(),
        }],
        scale_analysis: ScaleAnalysis {
            title: "Scale readiness".to_string(),
            breaking_points: vec!["10k concurrent users".to_string()],
            recommendations: vec!["introduce a cache layer".to_string()],
            readiness_level: ReadinessLevel::PartiallyReady,
        },
        recommendations: vec![Recommendation {
            priority: Priority::Critical,
            category: "security".to_string(),
            action: "enable authentication on admin routes".to_string(),
            rationale: "currently open to anyone".to_string(),
            estimated_effort: "1 week".to_string(),
        }],
    }
}

pub fn success_envelope(result: AnalysisResult) -> ApiResponse<AnalysisResult> {
    ApiResponse {
        success: true,
        data: Some(result),
        error: None,
        message: Some("Analysis completed successfully".to_string()),
    }
}

pub fn failure_envelope(error: Option<&str>) -> ApiResponse<AnalysisResult> {
    ApiResponse {
        success: false,
        data: None,
        error: error.map(str::to_owned),
        message: None,
    }
}

/// Transport double that records calls and returns a fixed envelope.
/// The atomic counters are the proof that rejected uploads never reach the
/// network.
pub struct SpyTransport {
    pub analyze_calls: AtomicUsize,
    pub sample_calls: AtomicUsize,
    pub last_request: Mutex<Option<AnalysisRequest>>,
    response: ApiResponse<AnalysisResult>,
}

impl SpyTransport {
    pub fn returning(response: ApiResponse<AnalysisResult>) -> Self {
        Self {
            analyze_calls: AtomicUsize::new(0),
            sample_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            response,
        }
    }

    pub fn calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst) + self.sample_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisTransport for SpyTransport {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ApiResponse<AnalysisResult>, ClientError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("request lock") = Some(request.clone());
        Ok(self.response.clone())
    }

    async fn sample_analysis(&self) -> Result<ApiResponse<AnalysisResult>, ClientError> {
        self.sample_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}
