use ecoai_types::{HealthCheck, LandingStats};

use crate::domain::entities::landing_stats::{LANDING_STATS, LandingStatsSnapshot};

pub const HEALTHY: &str = "healthy";

/// Read-only service surface: liveness and landing page figures.
#[derive(Clone)]
pub struct ServiceInfoUseCases {
    service_name: String,
    stats: LandingStatsSnapshot,
}

impl ServiceInfoUseCases {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            stats: LANDING_STATS,
        }
    }

    pub fn health(&self) -> HealthCheck {
        HealthCheck {
            status: HEALTHY.to_string(),
            message: format!("{} API is running", self.service_name),
        }
    }

    pub fn stats(&self) -> LandingStats {
        LandingStats {
            websites_optimized: self.stats.websites_optimized.to_string(),
            carbon_reduced: self.stats.carbon_reduced.to_string(),
            load_time_improved: self.stats.load_time_improved.to_string(),
            automation_level: self.stats.automation_level.to_string(),
        }
    }
}
