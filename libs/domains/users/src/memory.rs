//! In-memory implementation of the user storage contract.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// In-memory implementation of [`UserRepository`].
///
/// Enforces the username unique constraint the way a durable store's
/// schema would: duplicates are rejected at create and update.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == input.username) {
            return Err(UserError::DuplicateUsername(input.username));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::from_create(id, input)?;
        users.insert(id, user.clone());

        tracing::info!(user_id = id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn update(&self, user: &User) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(UserError::DuplicateUsername(user.username.clone()));
        }

        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn username_exists(&self, username: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn admin_input() -> CreateUser {
        CreateUser {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: "admin".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(admin_input()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.role, Role::Admin);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_default_construction_starts_ids_at_one() {
        let repo = InMemoryUserRepository::default();

        let created = repo.create(admin_input()).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(admin_input()).await.unwrap();

        let result = repo.create(admin_input()).await;
        assert!(matches!(result, Err(UserError::DuplicateUsername(_))));
    }

    #[tokio::test]
    async fn test_find_by_credentials_exact_match_only() {
        let repo = InMemoryUserRepository::new();
        repo.create(admin_input()).await.unwrap();

        let found = repo
            .find_by_credentials("admin", "admin123")
            .await
            .unwrap();
        assert!(found.is_some());

        assert!(repo
            .find_by_credentials("admin", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_by_credentials("Admin", "admin123")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_update_cannot_steal_a_username() {
        let repo = InMemoryUserRepository::new();
        repo.create(admin_input()).await.unwrap();
        let staff = repo
            .create(CreateUser {
                username: "bob".to_string(),
                password: "pw".to_string(),
                role: "staff".to_string(),
            })
            .await
            .unwrap();

        let renamed = User {
            username: "admin".to_string(),
            ..staff
        };
        let result = repo.update(&renamed).await;
        assert!(matches!(result, Err(UserError::DuplicateUsername(_))));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_existence_once() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(admin_input()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
