//! Authentication utilities library
//!
//! Provides the credential primitives of the identity service:
//! - Password hashing (Argon2id, configurable work factor)
//! - Bearer token issuance and verification (HS256, typed `email` claim)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::minimal();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let token = issuer.issue("foo@bar.com").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.email, "foo@bar.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenIssuer};
//!
//! let auth = Authenticator::with_parts(
//!     PasswordHasher::minimal(),
//!     TokenIssuer::new(b"secret_key_at_least_32_bytes_long!"),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "foo@bar.com").unwrap();
//!
//! // Identity lookup: validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.email, "foo@bar.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
