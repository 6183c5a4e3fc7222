pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    confirmation_token::{CONFIRMATION_TOKEN_TTL_MINUTES, ConfirmationToken, TokenState},
    email::Email,
    password::Password,
    user::{NewUser, User, UserError, UserId, UserRole},
};

pub use ports::{
    clock::Clock,
    repositories::{ConfirmationTokenStore, TokenStoreError, UserStore, UserStoreError},
    services::{EmailClient, EmailClientError},
};
