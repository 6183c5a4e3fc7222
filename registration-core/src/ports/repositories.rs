use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    confirmation_token::ConfirmationToken,
    email::Email,
    user::{NewUser, User, UserId},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Credential store. Implementations hash the raw password of a `NewUser`
/// before persisting it and enforce email uniqueness at the storage level.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn get_user(&self, id: UserId) -> Result<User, UserStoreError>;
    async fn enable_user(&self, id: UserId) -> Result<(), UserStoreError>;
}

// ConfirmationTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token already exists")]
    TokenAlreadyExists,
    #[error("Token not found")]
    TokenNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TokenAlreadyExists, Self::TokenAlreadyExists) => true,
            (Self::TokenNotFound, Self::TokenNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Confirmation-token store. Token strings are unique at the storage level.
/// Tokens are never deleted; validation stamps `validated_at` in place.
#[async_trait]
pub trait ConfirmationTokenStore: Send + Sync {
    async fn add_token(&self, token: ConfirmationToken) -> Result<(), TokenStoreError>;
    async fn get_token(&self, token: &str) -> Result<ConfirmationToken, TokenStoreError>;
    async fn mark_validated(
        &self,
        token: &str,
        validated_at: DateTime<Utc>,
    ) -> Result<(), TokenStoreError>;
}
