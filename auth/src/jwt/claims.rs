use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// `email` is the only required claim. Decoding fails when it is absent or
/// not a string. `iat` is stamped at issuance and `exp` only when the issuer
/// is configured with a lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Normalized email of the account the token speaks for
    pub email: String,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create claims carrying only the email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            iat: None,
            exp: None,
        }
    }

    /// Create claims for an account, stamped with the current time.
    ///
    /// # Arguments
    /// * `email` - Normalized account email
    /// * `expiration_hours` - Token lifetime; `None` issues a non-expiring token
    pub fn for_email(email: impl Into<String>, expiration_hours: Option<i64>) -> Self {
        let now = Utc::now();

        Self {
            email: email.into(),
            iat: Some(now.timestamp()),
            exp: expiration_hours.map(|hours| (now + Duration::hours(hours)).timestamp()),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }
}
