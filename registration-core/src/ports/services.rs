use async_trait::async_trait;
use thiserror::Error;

use crate::domain::email::Email;

#[derive(Debug, Error)]
pub enum EmailClientError {
    #[error("Failed to deliver email: {0}")]
    DeliveryFailed(String),
}

/// Port trait for the confirmation-mail transport.
#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Send the confirmation email for `recipient`, addressing them by
    /// `recipient_name`, with a link to `confirmation_url`.
    async fn send_confirmation(
        &self,
        recipient: &Email,
        recipient_name: &str,
        confirmation_url: &str,
    ) -> Result<(), EmailClientError>;
}
