use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{service_info::ServiceInfoUseCases, waitlist::WaitlistUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service_info_use_cases: Arc<ServiceInfoUseCases>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
}
