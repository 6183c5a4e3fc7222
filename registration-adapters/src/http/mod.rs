pub mod routes;

use registration_core::{Clock, ConfirmationTokenStore, EmailClient, UserStore};

/// Shared state for the registration routes.
///
/// Stores implement Clone via a shared pool or Arc, so cloning the state per
/// request stays cheap.
#[derive(Clone)]
pub struct AppState<U, T, E, C>
where
    U: UserStore + Clone,
    T: ConfirmationTokenStore + Clone,
    E: EmailClient + Clone,
    C: Clock + Clone,
{
    pub user_store: U,
    pub token_store: T,
    pub email_client: E,
    pub clock: C,
    pub confirmation_url: String,
}

impl<U, T, E, C> AppState<U, T, E, C>
where
    U: UserStore + Clone,
    T: ConfirmationTokenStore + Clone,
    E: EmailClient + Clone,
    C: Clock + Clone,
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
}
