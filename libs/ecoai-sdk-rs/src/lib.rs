//! Rust client for the EcoAI API.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecoai_sdk::{EcoAiClient, EcoAiConfig, WaitlistEntry};
//!
//! let client = EcoAiClient::new(EcoAiConfig::new("http://localhost:8001"))?;
//!
//! let health = client.health().await?;
//! println!("{}", health.message);
//!
//! let joined = client
//!     .join_waitlist(&WaitlistEntry::new("user@example.com").with_company("Acme"))
//!     .await?;
//! assert!(joined.success);
//! ```

mod client;
mod error;

pub use client::{CorsHeaders, EcoAiClient, EcoAiConfig};
pub use error::SdkError;

// Re-export shared types for convenience
pub use ecoai_types::{
    HealthCheck, LandingStats, ValidationIssue, WaitlistData, WaitlistEntry, WaitlistResponse,
};
