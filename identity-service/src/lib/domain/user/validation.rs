//! Registration input validation

use std::future::Future;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::user::errors::ErrorKind;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;

/// Check an email against `local@label(.label)*.tld`.
///
/// Local part: ASCII letters, digits and `._%+-`. Domain labels: letters,
/// digits and `-`. Final label: 2 to 6 letters. Case-insensitive, whole string.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@(?:[A-Z0-9-]+\.)+[A-Z]{2,6}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(email)
}

/// Validate registration credentials.
///
/// Every rule is evaluated, so the returned list holds all violations in a
/// fixed order: `PasswordBlank`, `EmailBlank`, `EmailInvalid`, `EmailExists`.
/// An empty list means the candidate is valid.
///
/// # Arguments
/// * `candidate` - Credentials with an already normalized email
/// * `exists` - Existence check against the store, given the normalized email
///
/// # Errors
/// * `DatabaseError` - The existence check failed
pub async fn validate<F, Fut>(
    candidate: &Credentials,
    exists: F,
) -> Result<Vec<ErrorKind>, UserError>
where
    F: FnOnce(EmailAddress) -> Fut,
    Fut: Future<Output = Result<bool, UserError>>,
{
    let mut violations = Vec::new();

    if candidate.password.is_empty() {
        violations.push(ErrorKind::PasswordBlank);
    }

    if candidate.email.is_empty() {
        violations.push(ErrorKind::EmailBlank);
    }

    if !is_valid_email(candidate.email.as_str()) {
        violations.push(ErrorKind::EmailInvalid);
    }

    if exists(candidate.email.clone()).await? {
        violations.push(ErrorKind::EmailExists);
    }

    Ok(violations)
}
