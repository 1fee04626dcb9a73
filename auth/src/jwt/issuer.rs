use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signs and verifies bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256) keyed by a secret supplied once at
/// construction. Issuance and verification always share the same key and
/// algorithm.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    expiration_hours: Option<i64>,
}

impl TokenIssuer {
    /// Create a new token issuer with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from the environment or a vault, never from code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration_hours: None,
        }
    }

    /// Stamp issued tokens with an `exp` claim this many hours ahead.
    pub fn with_expiration_hours(mut self, hours: Option<i64>) -> Self {
        self.expiration_hours = hours;
        self
    }

    /// Issue a token whose `email` claim is the given address.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, email: &str) -> Result<String, JwtError> {
        let claims = Claims::for_email(email, self.expiration_hours);
        let token = self.encode(&claims)?;
        tracing::debug!(email = %email, "Token issued");
        Ok(token)
    }

    /// Encode arbitrary claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this issuer's secret
    /// * `TokenExpired` - Token carries an `exp` claim in the past
    /// * `InvalidClaims` - Payload is not a claims object with a string `email`
    /// * `MissingClaim` - `email` claim is empty
    /// * `Malformed` - Token structure or encoding is invalid
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Tokens without `exp` are accepted; an `exp` that is present is still enforced.
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    ErrorKind::Json(err) => JwtError::InvalidClaims(err.to_string()),
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        if token_data.claims.email.is_empty() {
            return Err(JwtError::MissingClaim("email".to_string()));
        }

        Ok(token_data.claims)
    }
}
