use std::fmt;

/// User aggregate entity.
///
/// Represents a registered identity. `password_hash` never leaves the
/// service; outward representations are built from the other fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub token: Option<String>,
}

/// Store-assigned user identifier.
///
/// Only the repository creates ids; they are never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lower-case `raw` and drop every whitespace character, wherever it occurs.
///
/// Total and idempotent. Registration, login and identity lookup all key
/// accounts by this form.
pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Normalized email address.
///
/// Can only be built through normalization, so every value compares by the
/// canonical key. Shape is not checked here; see `validation`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize a raw address as supplied by a client or a token claim.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_email(raw))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email and password pair submitted to registration or login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw client input, normalizing the email.
    pub fn new(email: &str, password: impl Into<String>) -> Self {
        Self {
            email: EmailAddress::normalize(email),
            password: password.into(),
        }
    }
}

/// Record handed to the repository on registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
    pub token: String,
}

impl NewUser {
    /// Attach the store-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            token: Some(self.token),
        }
    }
}
