use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use registration_application::{ConfirmOutcome, ConfirmUseCase};
use registration_core::{Clock, ConfirmationTokenStore, EmailClient, UserStore};
use serde::Deserialize;

use super::error::ApiError;
use crate::http::AppState;

pub const CONFIRMED_MESSAGE: &str = "Your account has been successfully activated";
pub const REISSUED_MESSAGE: &str = "Token expired, a new token has been sent to your email";

#[derive(Debug, Deserialize)]
pub struct ConfirmParams {
    pub token: String,
}

/// `GET /confirm?token=...` - validate a confirmation token.
#[tracing::instrument(name = "Confirm", skip_all)]
pub async fn confirm<U, T, E, C>(
    State(state): State<AppState<U, T, E, C>>,
    Query(params): Query<ConfirmParams>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    T: ConfirmationTokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let use_case = ConfirmUseCase::new(
        state.user_store,
        state.token_store,
        state.email_client,
        state.clock,
        state.confirmation_url,
    );

    let message = match use_case.execute(&params.token).await? {
        ConfirmOutcome::Confirmed => CONFIRMED_MESSAGE,
        ConfirmOutcome::Reissued => REISSUED_MESSAGE,
    };

    Ok((StatusCode::OK, message))
}
