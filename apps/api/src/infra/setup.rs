use crate::{
    adapters::{http::app_state::AppState, waitlist::DiscardWaitlistSink},
    infra::{config::AppConfig, error::InfraError},
    use_cases::{
        service_info::ServiceInfoUseCases,
        waitlist::{WaitlistSink, WaitlistUseCases},
    },
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> AppState {
    let sink = Arc::new(DiscardWaitlistSink) as Arc<dyn WaitlistSink>;

    let service_info_use_cases = ServiceInfoUseCases::new(config.service_name.clone());
    let waitlist_use_cases = WaitlistUseCases::new(sink);

    AppState {
        config: Arc::new(config),
        service_info_use_cases: Arc::new(service_info_use_cases),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    }
}

pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ecoai_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
