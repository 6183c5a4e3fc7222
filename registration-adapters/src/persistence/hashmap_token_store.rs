use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use registration_core::{ConfirmationToken, ConfirmationTokenStore, TokenStoreError};
use tokio::sync::RwLock;

/// In-memory confirmation-token store for tests and local development.
#[derive(Clone, Default)]
pub struct HashMapTokenStore {
    tokens: Arc<RwLock<HashMap<String, ConfirmationToken>>>,
}

impl HashMapTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ConfirmationTokenStore for HashMapTokenStore {
    async fn add_token(&self, token: ConfirmationToken) -> Result<(), TokenStoreError> {
        let mut tokens = self.tokens.write().await;
        if tokens.contains_key(token.token()) {
            return Err(TokenStoreError::TokenAlreadyExists);
        }
        tokens.insert(token.token().to_string(), token);
        Ok(())
    }

    async fn get_token(&self, token: &str) -> Result<ConfirmationToken, TokenStoreError> {
        self.tokens
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(TokenStoreError::TokenNotFound)
    }

    async fn mark_validated(
        &self,
        token: &str,
        validated_at: DateTime<Utc>,
    ) -> Result<(), TokenStoreError> {
        let mut tokens = self.tokens.write().await;
        let saved = tokens
            .get_mut(token)
            .ok_or(TokenStoreError::TokenNotFound)?;

        *saved = ConfirmationToken::from_parts(
            saved.token().to_string(),
            saved.user_id(),
            saved.created_at(),
            saved.expires_at(),
            Some(validated_at),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration_core::UserId;

    #[tokio::test]
    async fn stored_token_round_trips() {
        let store = HashMapTokenStore::new();
        let token = ConfirmationToken::issue(UserId::new(), Utc::now());
        store.add_token(token.clone()).await.unwrap();

        let saved = store.get_token(token.token()).await.unwrap();
        assert_eq!(saved.user_id(), token.user_id());
        assert_eq!(saved.expires_at(), token.expires_at());
    }

    #[tokio::test]
    async fn duplicate_token_string_is_rejected() {
        let store = HashMapTokenStore::new();
        let token = ConfirmationToken::issue(UserId::new(), Utc::now());
        store.add_token(token.clone()).await.unwrap();

        let result = store.add_token(token).await;
        assert_eq!(result.unwrap_err(), TokenStoreError::TokenAlreadyExists);
    }

    #[tokio::test]
    async fn unknown_token_is_reported() {
        let store = HashMapTokenStore::new();
        let result = store.get_token("missing").await;
        assert_eq!(result.unwrap_err(), TokenStoreError::TokenNotFound);
    }

    #[tokio::test]
    async fn mark_validated_stamps_the_timestamp() {
        let store = HashMapTokenStore::new();
        let now = Utc::now();
        let token = ConfirmationToken::issue(UserId::new(), now);
        store.add_token(token.clone()).await.unwrap();

        store.mark_validated(token.token(), now).await.unwrap();

        let saved = store.get_token(token.token()).await.unwrap();
        assert_eq!(saved.validated_at(), Some(now));
    }
}
