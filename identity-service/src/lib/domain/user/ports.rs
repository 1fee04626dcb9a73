use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for the identity use cases.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first token.
    ///
    /// # Arguments
    /// * `credentials` - Email (normalized) and plaintext password
    ///
    /// # Returns
    /// Created user with assigned id and token
    ///
    /// # Errors
    /// * `Validation` - Every violated rule, reported together
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, credentials: Credentials) -> Result<User, UserError>;

    /// Verify credentials and replace the account's token with a fresh one.
    ///
    /// # Arguments
    /// * `credentials` - Email (normalized) and plaintext password
    ///
    /// # Returns
    /// User carrying the newly issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn create_session(&self, credentials: Credentials) -> Result<User, UserError>;

    /// Resolve the account a bearer token speaks for.
    ///
    /// # Arguments
    /// * `token` - Presented bearer token
    ///
    /// # Returns
    /// User with its currently stored token
    ///
    /// # Errors
    /// * `Unauthorized` - Token invalid or its account cannot be resolved
    async fn get_current_user(&self, token: &str) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Check whether an account with this normalized email exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError>;

    /// Insert a new user.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `Validation([EmailExists])` - Uniqueness constraint rejected the email
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<UserId, UserError>;

    /// Persist a new token for an existing user.
    ///
    /// # Errors
    /// * `NotFound` - No user with this id
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: &UserId, token: &str) -> Result<(), UserError>;

    /// Retrieve a user by normalized email.
    ///
    /// # Errors
    /// * `EmailNotFound` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn fetch_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;
}
