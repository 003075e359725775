/// Marketing figures shown on the landing page. These are fixed values,
/// not derived from any data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingStatsSnapshot {
    pub websites_optimized: &'static str,
    pub carbon_reduced: &'static str,
    pub load_time_improved: &'static str,
    pub automation_level: &'static str,
}

pub const LANDING_STATS: LandingStatsSnapshot = LandingStatsSnapshot {
    websites_optimized: "2,500+",
    carbon_reduced: "45%",
    load_time_improved: "30%",
    automation_level: "100%",
};
