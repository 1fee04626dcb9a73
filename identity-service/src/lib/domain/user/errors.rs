use std::fmt;

use thiserror::Error;

use crate::domain::user::models::UserId;

/// Named failure reason surfaced to callers.
///
/// The `Display` form is the stable string clients receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PasswordBlank,
    EmailBlank,
    EmailInvalid,
    EmailExists,
    EmailNotFound,
    EmailPasswordInvalid,
    TokenNotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::PasswordBlank => "password is blank",
            ErrorKind::EmailBlank => "email is blank",
            ErrorKind::EmailInvalid => "email format is invalid",
            ErrorKind::EmailExists => "email already exists",
            ErrorKind::EmailNotFound => "email does not exist",
            ErrorKind::EmailPasswordInvalid => "email and/or password is invalid",
            ErrorKind::TokenNotFound => "token does not exist",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error for all identity operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// One or more registration parameters were rejected, all reported together.
    #[error("Invalid parameters: {}", join_kinds(.0))]
    Validation(Vec<ErrorKind>),

    /// Wrong password and unknown email both map here.
    #[error("email and/or password is invalid")]
    InvalidCredentials,

    /// Bearer token missing, invalid, or naming an account that cannot be resolved.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("email does not exist: {0}")]
    EmailNotFound(String),

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Password error: {0}")]
    Password(String),

    #[error("Token error: {0}")]
    Token(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl UserError {
    /// Kinds a caller should see for this failure, if it is a parameter failure.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            UserError::Validation(kinds) => kinds.clone(),
            UserError::InvalidCredentials => vec![ErrorKind::EmailPasswordInvalid],
            _ => Vec::new(),
        }
    }
}

impl From<auth::PasswordError> for UserError {
    fn from(err: auth::PasswordError) -> Self {
        UserError::Password(err.to_string())
    }
}

impl From<auth::JwtError> for UserError {
    fn from(err: auth::JwtError) -> Self {
        UserError::Token(err.to_string())
    }
}

fn join_kinds(kinds: &[ErrorKind]) -> String {
    kinds
        .iter()
        .map(ErrorKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_strings() {
        assert_eq!(ErrorKind::PasswordBlank.to_string(), "password is blank");
        assert_eq!(ErrorKind::EmailBlank.to_string(), "email is blank");
        assert_eq!(ErrorKind::EmailInvalid.to_string(), "email format is invalid");
        assert_eq!(ErrorKind::EmailExists.to_string(), "email already exists");
        assert_eq!(
            ErrorKind::EmailPasswordInvalid.to_string(),
            "email and/or password is invalid"
        );
    }

    #[test]
    fn test_validation_error_lists_every_kind() {
        let err = UserError::Validation(vec![ErrorKind::EmailBlank, ErrorKind::EmailInvalid]);

        assert_eq!(
            err.to_string(),
            "Invalid parameters: email is blank, email format is invalid"
        );
        assert_eq!(
            err.kinds(),
            vec![ErrorKind::EmailBlank, ErrorKind::EmailInvalid]
        );
    }

    #[test]
    fn test_invalid_credentials_kind() {
        assert_eq!(
            UserError::InvalidCredentials.kinds(),
            vec![ErrorKind::EmailPasswordInvalid]
        );
        assert!(UserError::DatabaseError("down".to_string()).kinds().is_empty());
    }
}
