//! EcoAI client implementation.

use std::time::Duration;

use ecoai_types::{HealthCheck, LandingStats, WaitlistEntry, WaitlistResponse};
use reqwest::{
    Method,
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, HeaderMap, HeaderName, ORIGIN,
    },
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::SdkError;

/// Configuration for the EcoAI client.
#[derive(Debug, Clone)]
pub struct EcoAiConfig {
    /// Base URL of the deployment (e.g., "http://localhost:8001")
    pub base_url: String,

    /// Per-request timeout (default: 10 seconds)
    pub timeout: Option<Duration>,
}

impl EcoAiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }
}

/// CORS headers returned for a preflight request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsHeaders {
    pub allow_origin: Option<String>,
    pub allow_methods: Option<String>,
    pub allow_headers: Option<String>,
}

impl CorsHeaders {
    fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            allow_origin: get(ACCESS_CONTROL_ALLOW_ORIGIN),
            allow_methods: get(ACCESS_CONTROL_ALLOW_METHODS),
            allow_headers: get(ACCESS_CONTROL_ALLOW_HEADERS),
        }
    }

    /// Names of the three `Access-Control-Allow-*` headers that are absent.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.allow_origin.is_none() {
            missing.push("Access-Control-Allow-Origin");
        }
        if self.allow_methods.is_none() {
            missing.push("Access-Control-Allow-Methods");
        }
        if self.allow_headers.is_none() {
            missing.push("Access-Control-Allow-Headers");
        }
        missing
    }
}

/// Typed client for the EcoAI API.
pub struct EcoAiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl EcoAiClient {
    /// Create a new client.
    ///
    /// Fails if the base URL is empty, unparsable, or not http(s).
    pub fn new(config: EcoAiConfig) -> Result<Self, SdkError> {
        if config.base_url.trim().is_empty() {
            return Err(SdkError::Config("base_url is required".into()));
        }

        let mut base_url = Url::parse(config.base_url.trim())
            .map_err(|e| SdkError::Config(format!("invalid base_url: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SdkError::Config(format!(
                "unsupported scheme: {}",
                base_url.scheme()
            )));
        }

        // Joining relative paths replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(Duration::from_secs(10)))
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthCheck, SdkError> {
        let response = self.http_client.get(self.endpoint("api/health")?).send().await?;
        decode(response).await
    }

    /// `GET /api/stats`
    pub async fn stats(&self) -> Result<LandingStats, SdkError> {
        let response = self.http_client.get(self.endpoint("api/stats")?).send().await?;
        decode(response).await
    }

    /// `POST /api/waitlist`
    ///
    /// A rejected email comes back as `SdkError::Validation`.
    pub async fn join_waitlist(&self, entry: &WaitlistEntry) -> Result<WaitlistResponse, SdkError> {
        let response = self
            .http_client
            .post(self.endpoint("api/waitlist")?)
            .json(entry)
            .send()
            .await?;
        decode(response).await
    }

    /// Sends a CORS preflight for `POST` on `path` from `origin`.
    pub async fn preflight(&self, path: &str, origin: &str) -> Result<CorsHeaders, SdkError> {
        let response = self
            .http_client
            .request(Method::OPTIONS, self.endpoint(path)?)
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .send()
            .await?;

        Ok(CorsHeaders::from_headers(response.headers()))
    }

    /// `GET` on the base URL, returning whatever status the server answers with.
    pub async fn probe(&self) -> Result<u16, SdkError> {
        let response = self.http_client.get(self.base_url.clone()).send().await?;
        Ok(response.status().as_u16())
    }

    fn endpoint(&self, path: &str) -> Result<Url, SdkError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SdkError::Config(format!("invalid path {path}: {e}")))
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SdkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await?;
    Err(SdkError::from_response(status.as_u16(), &body))
}
