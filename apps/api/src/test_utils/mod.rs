//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - In-memory and failing `WaitlistSink` implementations
//! - `TestAppStateBuilder` for constructing an `AppState` without env config

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
