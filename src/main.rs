use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use prodlens::{
    export_report, sample_app_config, AnalysisClient, AnalysisSession, ClientConfig,
    HttpTransport, Outcome,
};

/// Analyze a config file against the ProdLens backend and export the report.
///
/// Usage: `prodlens [path/to/app.json|app.zip]`. With no argument the
/// built-in sample config is submitted. Backend base URL comes from
/// `PRODLENS_API_URL` (default `http://localhost:8000/api`).
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = ClientConfig::default();
    if let Ok(url) = env::var("PRODLENS_API_URL") {
        config.base_url = url;
    }
    let client = AnalysisClient::new(HttpTransport::new(&config)?);

    let result = match env::args().nth(1) {
        Some(path) => {
            let bytes = fs::read(&path)?;
            let filename = Path::new(&path)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(path.as_str())
                .to_string();

            let session = AnalysisSession::new(client);
            match session.analyze_upload(&bytes, &filename).await? {
                Outcome::Completed(result) => result,
                // A single-action run has nothing that could supersede it.
                Outcome::Superseded => return Ok(()),
            }
        }
        None => client.analyze(sample_app_config()).await?,
    };

    println!(
        "{}: overall readiness {}/100 ({} risks, {} recommendations)",
        result.app_name,
        result.overall_score,
        result.risks.len(),
        result.recommendations.len()
    );

    let report_path = export_report(&result, Path::new("."))?;
    println!("report written to {}", report_path.display());
    Ok(())
}
