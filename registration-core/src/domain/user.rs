use std::fmt;

use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, password::Password};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Unknown user role: {0}")]
    UnknownRole(String),
}

/// Opaque unique user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UserError> {
        match value {
            "USER" => Ok(UserRole::User),
            other => Err(UserError::UnknownRole(other.to_string())),
        }
    }
}

/// A registration accepted by the service but not yet persisted.
///
/// Carries the raw password; the user store hashes it before storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    first_name: String,
    last_name: String,
    email: Email,
    password: Password,
    role: UserRole,
}

impl NewUser {
    pub fn new(first_name: String, last_name: String, email: Email, password: Password) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password,
            role: UserRole::User,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

/// A persisted user record.
///
/// Immutable snapshot of a store row; the enabled flag only changes through
/// `UserStore::enable_user`.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: Email,
    password_hash: Secret<String>,
    role: UserRole,
    enabled: bool,
}

impl User {
    pub fn new(
        id: UserId,
        first_name: String,
        last_name: String,
        email: Email,
        password_hash: Secret<String>,
        role: UserRole,
        enabled: bool,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password_hash,
            role,
            enabled,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}
