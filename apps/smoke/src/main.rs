use std::process::ExitCode;

use dotenvy::dotenv;
use ecoai_sdk::{EcoAiClient, EcoAiConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod checks;

const DEFAULT_BASE_URL: &str = "http://localhost:8001";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    init_tracing();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ECOAI_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = EcoAiClient::new(EcoAiConfig::new(base_url))?;

    info!(target_url = %client.base_url(), "Starting EcoAI API smoke checks");

    let report = checks::run_all(&client).await;
    report.log_summary();

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "ecoai_smoke=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
