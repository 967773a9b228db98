//! Canned sample configuration used by the demo binary and tests.
use serde_json::json;

use crate::normalize::DEFAULT_CONFIG_VERSION;
use crate::types::CanonicalConfig;

/// A representative e-commerce dashboard config, already canonical: running
/// it through [`normalize_config`](crate::normalize_config) again changes
/// nothing.
pub fn sample_app_config() -> CanonicalConfig {
    CanonicalConfig {
        name: "E-Commerce Dashboard".to_string(),
        description: "AI-generated e-commerce dashboard application".to_string(),
        blocks: json!({
            "layout": {"type": "grid", "columns": 12},
            "components": [
                {"id": "header", "type": "header"},
                {"id": "sidebar", "type": "sidebar"},
                {"id": "main", "type": "container"}
            ]
        })
        .as_object()
        .cloned()
        .unwrap_or_default(),
        dependencies: [
            ("react", "^18.2.0"),
            ("react-query", "^3.39.0"),
            ("lodash", "^4.17.21"),
            ("moment", "^2.29.4"),
        ]
        .into_iter()
        .map(|(package, version)| (package.to_string(), version.to_string()))
        .collect(),
        metadata: json!({
            "createdAt": chrono::Utc::now().to_rfc3339(),
            "version": DEFAULT_CONFIG_VERSION,
            "author": "AI",
            "tags": ["dashboard", "ecommerce"],
            "complexity": "medium",
            "estimatedUsers": 1000
        })
        .as_object()
        .cloned()
        .unwrap_or_default(),
    }
}
