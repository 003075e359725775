//! Shared request and response types for the EcoAI API.
//!
//! This crate provides:
//! - The waitlist request body (`WaitlistEntry`)
//! - Response bodies for health, stats and waitlist endpoints
//! - The error body shapes returned on validation and internal failures

mod errors;
mod requests;
mod responses;

pub use errors::{ErrorDetail, ValidationIssue, ValidationIssues};
pub use requests::WaitlistEntry;
pub use responses::{HealthCheck, LandingStats, WaitlistData, WaitlistResponse};
