//! Test app state builder for HTTP-level integration testing.

use std::sync::Arc;

use crate::{
    adapters::{http::app_state::AppState, waitlist::DiscardWaitlistSink},
    infra::config::AppConfig,
    use_cases::{
        service_info::ServiceInfoUseCases,
        waitlist::{WaitlistSink, WaitlistUseCases},
    },
};

pub struct TestAppStateBuilder {
    config: AppConfig,
    sink: Arc<dyn WaitlistSink>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            sink: Arc::new(DiscardWaitlistSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn WaitlistSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_service_name(mut self, name: &str) -> Self {
        self.config.service_name = name.to_string();
        self
    }

    pub fn with_cors_origin(mut self, origin: &'static str) -> Self {
        self.config.cors_origin = Some(axum::http::HeaderValue::from_static(origin));
        self
    }

    pub fn build(self) -> AppState {
        let service_info = ServiceInfoUseCases::new(self.config.service_name.clone());
        let waitlist = WaitlistUseCases::new(self.sink);

        AppState {
            config: Arc::new(self.config),
            service_info_use_cases: Arc::new(service_info),
            waitlist_use_cases: Arc::new(waitlist),
        }
    }
}
