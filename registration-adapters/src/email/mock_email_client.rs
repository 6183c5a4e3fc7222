use registration_core::{Email, EmailClient, EmailClientError};

/// Email client that accepts every send without doing anything.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient;

impl MockEmailClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_confirmation(
        &self,
        _recipient: &Email,
        _recipient_name: &str,
        _confirmation_url: &str,
    ) -> Result<(), EmailClientError> {
        Ok(())
    }
}
