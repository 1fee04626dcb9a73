use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::validation::validate;
use crate::user::errors::UserError;
use crate::user::ports::IdentityServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementing registration, login and identity lookup.
///
/// Stateless between calls: every flow reads or writes the repository
/// directly, and the authenticator only holds the read-only signing secret.
pub struct IdentityService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> IdentityService<UR>
where
    UR: UserRepository,
{
    /// Create a new identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token issuer sharing the signing secret
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> IdentityServicePort for IdentityService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, credentials: Credentials) -> Result<User, UserError> {
        let violations = validate(&credentials, |email| async move {
            self.repository.exists_by_email(&email).await
        })
        .await?;

        if !violations.is_empty() {
            tracing::debug!(
                email = %credentials.email,
                violations = ?violations,
                "Registration rejected"
            );
            return Err(UserError::Validation(violations));
        }

        let password_hash = self
            .authenticator
            .hash_password(&credentials.password)
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                UserError::from(e)
            })?;
        let token = self
            .authenticator
            .generate_token(credentials.email.as_str())?;

        let new_user = NewUser {
            email: credentials.email,
            password_hash,
            token,
        };

        let id = self.repository.create(new_user.clone()).await?;
        tracing::info!(user_id = %id, email = %new_user.email, "User registered");

        Ok(new_user.into_user(id))
    }

    async fn create_session(&self, credentials: Credentials) -> Result<User, UserError> {
        let user = match self.repository.fetch_by_email(&credentials.email).await {
            Ok(user) => user,
            Err(UserError::EmailNotFound(_)) => {
                tracing::debug!(email = %credentials.email, "Login for unknown email");
                return Err(UserError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &user.password_hash,
                user.email.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(user_id = %user.id, "Login with wrong password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(
                        user_id = %user.id,
                        error = %err,
                        "Stored password hash is unreadable"
                    );
                    UserError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => UserError::from(err),
            })?;

        self.repository
            .update(&user.id, &result.access_token)
            .await?;
        tracing::info!(user_id = %user.id, "Session created");

        Ok(User {
            token: Some(result.access_token),
            ..user
        })
    }

    async fn get_current_user(&self, token: &str) -> Result<User, UserError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            UserError::Unauthorized(e.to_string())
        })?;

        let email = EmailAddress::normalize(&claims.email);

        self.repository
            .fetch_by_email(&email)
            .await
            .map_err(|e| match e {
                UserError::EmailNotFound(_) => {
                    tracing::debug!(email = %email, "Token names an unknown account");
                    UserError::Unauthorized(e.to_string())
                }
                other => {
                    tracing::error!(error = %other, "Identity lookup failed");
                    UserError::Unauthorized(other.to_string())
                }
            })
    }
}
