use serde::{Deserialize, Serialize};

/// Body of `POST /api/waitlist`.
///
/// `email` is optional at the wire level so that a missing field is reported
/// as a per-field validation issue rather than a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaitlistEntry {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

impl WaitlistEntry {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_ignored() {
        let entry: WaitlistEntry = serde_json::from_str(
            r#"{"email":"a@b.co","created_at":"2020-01-01T00:00:00Z","submitted_at":"x"}"#,
        )
        .unwrap();

        assert_eq!(entry.email.as_deref(), Some("a@b.co"));
        assert!(entry.company.is_none());
        assert!(entry.name.is_none());
    }

    #[test]
    fn test_missing_email_decodes_as_none() {
        let entry: WaitlistEntry = serde_json::from_str(r#"{"company":"Acme"}"#).unwrap();

        assert!(entry.email.is_none());
        assert_eq!(entry.company.as_deref(), Some("Acme"));
    }
}
