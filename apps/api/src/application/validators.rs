use validator::ValidateEmail;

/// Validates that the input is a deliverable-looking email address.
/// Rules:
/// - No whitespace anywhere (input is not trimmed)
/// - Non-empty local part and domain
/// - Domain has at least one dot and no empty labels
/// - Passes the `validator` crate's HTML5 email grammar
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || !domain.contains('.') {
        return false;
    }

    if domain.split('.').any(str::is_empty) {
        return false;
    }

    email.validate_email()
}

/// Returns the canonical form of a valid address, or `None` if it is invalid.
///
/// Surrounding whitespace is dropped and the domain is lowercased. The local
/// part keeps its case.
pub fn normalize_email(email: &str) -> Option<String> {
    let email = email.trim();
    if !is_valid_email(email) {
        return None;
    }

    let (local, domain) = email.rsplit_once('@')?;
    Some(format!("{}@{}", local, domain.to_lowercase()))
}
