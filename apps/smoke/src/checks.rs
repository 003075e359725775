//! The smoke checks and their report.

use anyhow::{Context, bail, ensure};
use chrono::{DateTime, Local};
use ecoai_sdk::{
    CorsHeaders, EcoAiClient, SdkError, WaitlistEntry, WaitlistResponse,
};
use tracing::{error, info, warn};

/// Statuses that prove the server is answering on its base URL.
const REACHABLE_STATUSES: [u16; 3] = [200, 404, 307];

const PREFLIGHT_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub details: String,
    pub finished_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct SmokeReport {
    results: Vec<CheckResult>,
}

impl SmokeReport {
    pub fn record(&mut self, name: &'static str, outcome: anyhow::Result<String>) {
        let (passed, details) = match outcome {
            Ok(details) => {
                info!(check = name, %details, "PASSED");
                (true, details)
            }
            Err(e) => {
                let details = format!("{e:#}");
                error!(check = name, %details, "FAILED");
                (false, details)
            }
        };

        self.results.push(CheckResult {
            name,
            passed,
            details,
            finished_at: Local::now(),
        });
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn success_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.passed() as f64 / self.total() as f64 * 100.0
    }

    pub fn log_summary(&self) {
        info!(
            passed = self.passed(),
            total = self.total(),
            success_rate = %format!("{:.1}%", self.success_rate()),
            "Smoke check summary"
        );
        if self.all_passed() {
            info!("All checks passed. The API is working correctly.");
            return;
        }

        warn!(failed = self.total() - self.passed(), "Some checks failed");
        for result in self.results().iter().filter(|r| !r.passed) {
            warn!(
                check = result.name,
                details = %result.details,
                finished_at = %result.finished_at,
                "failed check"
            );
        }
    }
}

/// Runs every check in order against `client`.
pub async fn run_all(client: &EcoAiClient) -> SmokeReport {
    let mut report = SmokeReport::default();

    report.record("Server Connectivity", check_connectivity(client).await);
    report.record("Health Check Endpoint", check_health(client).await);
    report.record("Stats Endpoint", check_stats(client).await);
    report.record(
        "Waitlist Endpoint (Valid Email)",
        check_waitlist_valid(client).await,
    );
    report.record(
        "Waitlist Endpoint (Invalid Email)",
        evaluate_invalid_waitlist(client.join_waitlist(&WaitlistEntry::new("invalid-email")).await),
    );
    report.record("CORS Configuration", check_cors(client).await);

    report
}

async fn check_connectivity(client: &EcoAiClient) -> anyhow::Result<String> {
    let status = client.probe().await.context("server unreachable")?;
    evaluate_connectivity(status)
}

async fn check_health(client: &EcoAiClient) -> anyhow::Result<String> {
    let health = client.health().await?;
    ensure!(
        health.status == "healthy",
        "unexpected status {:?}",
        health.status
    );
    ensure!(!health.message.is_empty(), "empty health message");
    Ok(health.message)
}

async fn check_stats(client: &EcoAiClient) -> anyhow::Result<String> {
    let stats = client.stats().await?;
    let values = [
        ("websites_optimized", &stats.websites_optimized),
        ("carbon_reduced", &stats.carbon_reduced),
        ("load_time_improved", &stats.load_time_improved),
        ("automation_level", &stats.automation_level),
    ];
    for (key, value) in values {
        ensure!(!value.is_empty(), "{key} is empty");
    }
    Ok(format!("{stats:?}"))
}

async fn check_waitlist_valid(client: &EcoAiClient) -> anyhow::Result<String> {
    let email = test_email(Local::now());
    let entry = WaitlistEntry::new(email.clone())
        .with_company("Test Company")
        .with_name("Test User");

    let response = client.join_waitlist(&entry).await?;
    evaluate_valid_waitlist(&email, &response)
}

async fn check_cors(client: &EcoAiClient) -> anyhow::Result<String> {
    let headers = client.preflight("api/health", PREFLIGHT_ORIGIN).await?;
    evaluate_cors(&headers)
}

fn test_email(now: DateTime<Local>) -> String {
    format!("test_{}@example.com", now.format("%H%M%S"))
}

fn evaluate_connectivity(status: u16) -> anyhow::Result<String> {
    ensure!(
        REACHABLE_STATUSES.contains(&status),
        "unexpected status: {status}"
    );
    Ok(format!("server answered with {status}"))
}

fn evaluate_valid_waitlist(email: &str, response: &WaitlistResponse) -> anyhow::Result<String> {
    ensure!(response.success, "success flag is false");
    ensure!(!response.message.is_empty(), "empty message");
    ensure!(
        response.data.email == email,
        "echoed email {:?} does not match {email:?}",
        response.data.email
    );
    Ok(response.message.clone())
}

fn evaluate_invalid_waitlist(
    result: Result<WaitlistResponse, SdkError>,
) -> anyhow::Result<String> {
    match result {
        Err(SdkError::Validation(issues)) => Ok(format!(
            "correctly rejected with 422 ({} issue(s))",
            issues.len()
        )),
        Err(SdkError::Network(e)) => Err(e).context("request failed"),
        Err(e) => bail!("expected 422, got {}", status_label(&e)),
        Ok(_) => bail!("expected 422, got 200"),
    }
}

fn evaluate_cors(headers: &CorsHeaders) -> anyhow::Result<String> {
    let missing = headers.missing();
    ensure!(missing.is_empty(), "missing headers: {}", missing.join(", "));
    Ok(format!(
        "origin={} methods={} headers={}",
        headers.allow_origin.as_deref().unwrap_or_default(),
        headers.allow_methods.as_deref().unwrap_or_default(),
        headers.allow_headers.as_deref().unwrap_or_default()
    ))
}

fn status_label(err: &SdkError) -> String {
    err.status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| err.to_string())
}
