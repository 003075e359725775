use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

/// Body of `GET /api/stats`. All values are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingStats {
    pub websites_optimized: String,
    pub carbon_reduced: String,
    pub load_time_improved: String,
    pub automation_level: String,
}

/// Body of a successful `POST /api/waitlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub success: bool,
    pub message: String,
    pub data: WaitlistData,
}

/// Echo of the accepted submission. The acceptance timestamp is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistData {
    pub email: String,
    pub company: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waitlist_data_serializes_absent_fields_as_null() {
        let data = WaitlistData {
            email: "user@example.com".to_string(),
            company: None,
            name: None,
        };

        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"email": "user@example.com", "company": null, "name": null})
        );
    }

    #[test]
    fn test_landing_stats_keys() {
        let stats = LandingStats {
            websites_optimized: "1".into(),
            carbon_reduced: "2".into(),
            load_time_improved: "3".into(),
            automation_level: "4".into(),
        };

        let json = serde_json::to_value(&stats).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(
            keys,
            vec![
                "automation_level",
                "carbon_reduced",
                "load_time_improved",
                "websites_optimized"
            ]
        );
    }
}
