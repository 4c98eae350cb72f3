pub mod forms;
pub mod rule;
pub mod validation_failure;

use crate::MIN_PASSWORD_LENGTH;

/// Check `s` has the shape `local@domain.tld`.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with
/// a dot that is neither its first nor its last character.
pub fn validate_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check `s` is at least `MIN_PASSWORD_LENGTH` characters long.
pub fn validate_password(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LENGTH
}
