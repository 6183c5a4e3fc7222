use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::user::UserId;

/// How long a confirmation token stays valid after issuance.
pub const CONFIRMATION_TOKEN_TTL_MINUTES: i64 = 10;

/// Lifecycle state of a single token instance, derived from its timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    Issued,
    Validated,
    Expired,
}

/// An email-confirmation token.
///
/// Holds a plain user id reference rather than a user record. Expiry is fixed
/// at issuance; a token past its expiry is never revived, confirmation issues
/// a fresh one instead.
#[derive(Debug, Clone)]
pub struct ConfirmationToken {
    token: String,
    user_id: UserId,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    validated_at: Option<DateTime<Utc>>,
}

impl ConfirmationToken {
    /// Issue a fresh token for `user_id`, valid for the next ten minutes.
    pub fn issue(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            user_id,
            created_at: now,
            expires_at: now + Duration::minutes(CONFIRMATION_TOKEN_TTL_MINUTES),
            validated_at: None,
        }
    }

    /// Reconstruct a token from its persisted parts.
    pub fn from_parts(
        token: String,
        user_id: UserId,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        validated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            token,
            user_id,
            created_at,
            expires_at,
            validated_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn validated_at(&self) -> Option<DateTime<Utc>> {
        self.validated_at
    }

    /// A token is expired strictly after its expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn state(&self, now: DateTime<Utc>) -> TokenState {
        if self.validated_at.is_some() {
            TokenState::Validated
        } else if self.is_expired(now) {
            TokenState::Expired
        } else {
            TokenState::Issued
        }
    }
}
