use serde::{Deserialize, Serialize};

/// One field-level problem in a rejected request.
///
/// `loc` is the path to the offending value, starting with `"body"`
/// (e.g. `["body", "email"]`). `kind` is a stable machine-readable tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn body_field(field: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    pub fn body(msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// The field this issue refers to, if it points inside the body.
    pub fn field(&self) -> Option<&str> {
        match self.loc.as_slice() {
            [root, field, ..] if root == "body" => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Body of a 422 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssues {
    pub detail: Vec<ValidationIssue>,
}

/// Body of any non-validation error response (404, 500).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
