use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{CreateUser, User};

/// Repository trait for User persistence
///
/// Username uniqueness is a storage constraint: `create` and `update` fail
/// with a duplicate-username error when it would be violated. Credential
/// lookup compares username and password exactly, byte for byte.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and assign its id
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Get a user by id
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Get a user by username (the alternate key)
    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// The user whose username and password both match exactly, if any
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> UserResult<Option<User>>;

    /// All users, unordered
    async fn list_all(&self) -> UserResult<Vec<User>>;

    /// Overwrite the record matching `user.id`; false when no match
    async fn update(&self, user: &User) -> UserResult<bool>;

    /// Remove the record matching `id`; false when no match
    async fn delete(&self, id: i64) -> UserResult<bool>;

    /// Whether a user with this username already exists
    async fn username_exists(&self, username: &str) -> UserResult<bool>;
}
