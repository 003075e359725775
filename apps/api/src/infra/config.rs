use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::get_env_default;

use crate::infra::error::InfraError;

pub const DEFAULT_SERVICE_NAME: &str = "EcoAI";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Name reported by the health check ("<name> API is running").
    pub service_name: String,
    /// Restricts CORS to a single origin. When unset, any origin is allowed.
    pub cors_origin: Option<HeaderValue>,
    /// Optional path for structured JSON logs in addition to the console.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", default_bind_addr());
        let service_name: String =
            get_env_default("SERVICE_NAME", DEFAULT_SERVICE_NAME.to_string());
        let cors_origin = match std::env::var("CORS_ORIGIN") {
            Ok(origin) => Some(parse_cors_origin(&origin)?),
            Err(_) => None,
        };
        let log_file: Option<PathBuf> = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Ok(Self {
            bind_addr,
            service_name,
            cors_origin,
            log_file,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            cors_origin: None,
            log_file: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8001))
}

fn parse_cors_origin(origin: &str) -> Result<HeaderValue, InfraError> {
    let origin = origin.trim();
    if origin.is_empty() || origin == "*" {
        return Err(InfraError::ConfigInvalid { var: "CORS_ORIGIN" });
    }
    origin
        .parse()
        .map_err(|_| InfraError::ConfigInvalid { var: "CORS_ORIGIN" })
}
