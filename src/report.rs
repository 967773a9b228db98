//! Typed model of the readiness report returned by the analysis backend.
//!
//! The shapes mirror the backend contract field for field, camelCase on the
//! wire, with closed enums for every level/severity vocabulary so a typo in
//! a backend spelling fails loudly at decode time instead of leaking into
//! display code.
use serde::{Deserialize, Serialize};

/// Complete production-readiness report for one analyzed configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub app_name: String,
    /// Backend-assigned analysis timestamp (ISO-8601).
    pub timestamp: String,
    /// 0–100.
    pub overall_score: u8,
    pub categories: CategoryScores,
    pub risks: Vec<Risk>,
    pub insights: Vec<Insight>,
    pub test_suggestions: Vec<TestSuggestion>,
    pub scale_analysis: ScaleAnalysis,
    pub recommendations: Vec<Recommendation>,
}

/// Per-category scores; the category set is fixed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryScores {
    pub scalability: CategoryScore,
    pub security: CategoryScore,
    pub testability: CategoryScore,
    pub maintainability: CategoryScore,
    pub performance: CategoryScore,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryScore {
    /// 0–100.
    pub score: u8,
    pub level: ScoreLevel,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreLevel {
    Critical,
    High,
    Medium,
    Low,
    Excellent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Priority vocabulary shared by test suggestions and recommendations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Risk {
    pub category: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub category: String,
    pub title: String,
    pub description: String,
    pub actionable: bool,
}

/// Test types use the backend's uppercase spellings on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TestKind {
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "UI")]
    Ui,
    Automation,
    Load,
    Security,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestSuggestion {
    #[serde(rename = "type")]
    pub kind: TestKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScaleAnalysis {
    pub title: String,
    pub breaking_points: Vec<String>,
    pub recommendations: Vec<String>,
    pub readiness_level: ReadinessLevel,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReadinessLevel {
    Ready,
    #[serde(rename = "Partially Ready")]
    PartiallyReady,
    #[serde(rename = "Not Ready")]
    NotReady,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub action: String,
    pub rationale: String,
    pub estimated_effort: String,
}
