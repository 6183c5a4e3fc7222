use std::collections::HashMap;
use std::sync::Arc;

use registration_core::{Email, NewUser, User, UserId, UserStore, UserStoreError};
use tokio::sync::RwLock;

use super::password_hash::compute_password_hash;

/// In-memory user store for tests and local development.
///
/// Clone shares the underlying map, so a cloned handle observes all writes.
#[derive(Clone, Default)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(new_user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        if users.contains_key(new_user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = User::new(
            UserId::new(),
            new_user.first_name().to_string(),
            new_user.last_name().to_string(),
            new_user.email().clone(),
            password_hash,
            new_user.role(),
            false,
        );
        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn enable_user(&self, id: UserId) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users
            .values_mut()
            .find(|user| user.id() == id)
            .ok_or(UserStoreError::UserNotFound)?;

        *user = User::new(
            user.id(),
            user.first_name().to_string(),
            user.last_name().to_string(),
            user.email().clone(),
            user.password_hash().clone(),
            user.role(),
            true,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};

    fn new_user(address: &str) -> NewUser {
        NewUser::new(
            "Alice".to_string(),
            "Smith".to_string(),
            Email::try_from(Secret::from(address.to_string())).unwrap(),
            registration_core::Password::try_from(Secret::from("password123".to_string())).unwrap(),
        )
    }

    #[tokio::test]
    async fn added_user_is_disabled_and_has_a_hashed_password() {
        let store = HashMapUserStore::new();
        let user = store.add_user(new_user("alice@example.com")).await.unwrap();

        assert!(!user.enabled());
        assert_ne!(user.password_hash().expose_secret(), "password123");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = HashMapUserStore::new();
        store.add_user(new_user("alice@example.com")).await.unwrap();

        let result = store.add_user(new_user("alice@example.com")).await;
        assert_eq!(result.unwrap_err(), UserStoreError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn users_are_found_by_email_and_by_id() {
        let store = HashMapUserStore::new();
        let user = store.add_user(new_user("alice@example.com")).await.unwrap();

        let by_email = store.get_user_by_email(user.email()).await.unwrap();
        assert_eq!(by_email.id(), user.id());

        let by_id = store.get_user(user.id()).await.unwrap();
        assert_eq!(by_id.id(), user.id());
    }

    #[tokio::test]
    async fn missing_user_is_reported() {
        let store = HashMapUserStore::new();
        let result = store.get_user(UserId::new()).await;
        assert_eq!(result.unwrap_err(), UserStoreError::UserNotFound);
    }

    #[tokio::test]
    async fn enable_user_flips_the_flag() {
        let store = HashMapUserStore::new();
        let user = store.add_user(new_user("alice@example.com")).await.unwrap();

        store.enable_user(user.id()).await.unwrap();

        assert!(store.get_user(user.id()).await.unwrap().enabled());
    }
}
