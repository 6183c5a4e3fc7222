use registration_core::{
    Clock, ConfirmationToken, ConfirmationTokenStore, Email, EmailClient, EmailClientError,
    NewUser, Password, TokenStoreError, UserStore, UserStoreError,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Token store error: {0}")]
    TokenStoreError(#[from] TokenStoreError),
    #[error("Failed to send email: {0}")]
    EmailError(#[from] EmailClientError),
}

/// Register use case - creates a disabled user and mails a confirmation link
pub struct RegisterUseCase<U, T, E, C>
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

impl<U, T, E, C> RegisterUseCase<U, T, E, C>
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

    /// Execute the register use case
    ///
    /// Persists a new disabled user, issues a confirmation token and sends the
    /// confirmation email. A mail failure surfaces as an error but does not
    /// roll back the user or token writes.
    ///
    /// # Returns
    /// The generated token string, or a RegisterError
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        first_name: String,
        last_name: String,
        email: Email,
        password: Password,
    ) -> Result<String, RegisterError> {
        // Duplicate pre-check; the store's unique constraint still backs the race
        match self.user_store.get_user_by_email(&email).await {
            Ok(_) => return Err(UserStoreError::UserAlreadyExists.into()),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let user = self
            .user_store
            .add_user(NewUser::new(first_name, last_name, email, password))
            .await?;

        let token = ConfirmationToken::issue(user.id(), self.clock.now());
        self.token_store.add_token(token.clone()).await?;

        let confirmation_url = format!("{}?token={}", self.confirmation_url, token.token());
        self.email_client
            .send_confirmation(user.email(), user.first_name(), &confirmation_url)
            .await?;

        Ok(token.token().to_string())
    }
}
