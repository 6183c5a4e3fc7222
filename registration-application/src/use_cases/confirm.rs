use registration_core::{
    Clock, ConfirmationToken, ConfirmationTokenStore, EmailClient, EmailClientError,
    TokenStoreError, UserStore, UserStoreError,
};

/// Outcome of a confirmation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The token was valid; the owning user is now enabled.
    Confirmed,
    /// The token had expired; a fresh token was issued and mailed.
    Reissued,
}

/// Error types specific to the confirm use case
#[derive(Debug, thiserror::Error)]
pub enum ConfirmError {
    #[error("Token store error: {0}")]
    TokenStoreError(#[from] TokenStoreError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Failed to send email: {0}")]
    EmailError(#[from] EmailClientError),
}

/// Confirm use case - owns the confirmation-token lifecycle
pub struct ConfirmUseCase<U, T, E, C>
where
    U: UserStore,
    T: ConfirmationTokenStore,
    E: EmailClient,
    C: Clock,
{
    user_store: U,
    token_store: T,
    email_client: E,
    clock: C,
    confirmation_url: String,
}

impl<U, T, E, C> ConfirmUseCase<U, T, E, C>
where
    U: UserStore,
    T: ConfirmationTokenStore,
    E: EmailClient,
    C: Clock,
{
    pub fn new(
        user_store: U,
        token_store: T,
        email_client: E,
        clock: C,
        confirmation_url: String,
    ) -> Self {
        Self {
            user_store,
            token_store,
            email_client,
            clock,
            confirmation_url,
        }
    }

    /// Execute the confirm use case
    ///
    /// An expired token triggers issuance of a fresh token for the same user;
    /// the expired instance is left as-is. A live token enables the owning
    /// user and gets its validated timestamp stamped. Confirmation does not
    /// check whether the token was already validated, so re-confirming a
    /// live token succeeds again without further side effects.
    #[tracing::instrument(name = "ConfirmUseCase::execute", skip(self))]
    pub async fn execute(&self, token: &str) -> Result<ConfirmOutcome, ConfirmError> {
        let saved = self.token_store.get_token(token).await?;
        let now = self.clock.now();

        if saved.is_expired(now) {
            let user = self.user_store.get_user(saved.user_id()).await?;

            let reissued = ConfirmationToken::issue(user.id(), now);
            self.token_store.add_token(reissued.clone()).await?;

            let confirmation_url =
                format!("{}?token={}", self.confirmation_url, reissued.token());
            self.email_client
                .send_confirmation(user.email(), user.first_name(), &confirmation_url)
                .await?;

            return Ok(ConfirmOutcome::Reissued);
        }

        let user = self.user_store.get_user(saved.user_id()).await?;
        self.user_store.enable_user(user.id()).await?;
        self.token_store.mark_validated(saved.token(), now).await?;

        Ok(ConfirmOutcome::Confirmed)
    }
}
