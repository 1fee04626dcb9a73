use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::errors::ErrorKind;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Ids are assigned sequentially from 1 in insertion order, and the email
/// uniqueness constraint is enforced under the write lock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|user| &user.email == email))
    }

    async fn create(&self, user: NewUser) -> Result<UserId, UserError> {
        let mut users = self.users.write().await;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(UserError::Validation(vec![ErrorKind::EmailExists]));
        }

        let id = UserId(users.len() as i64 + 1);
        users.push(user.into_user(id));

        Ok(id)
    }

    async fn update(&self, id: &UserId, token: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or(UserError::NotFound(*id))?;
        user.token = Some(token.to_string());

        Ok(())
    }

    async fn fetch_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        let users = self.users.read().await;

        users
            .iter()
            .find(|user| &user.email == email)
            .cloned()
            .ok_or_else(|| UserError::EmailNotFound(email.to_string()))
    }
}
