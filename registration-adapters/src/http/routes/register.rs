use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use registration_application::RegisterUseCase;
use registration_core::{Clock, ConfirmationTokenStore, Email, EmailClient, Password, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;
use crate::http::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// `POST /register` - create a disabled user and mail a confirmation link.
///
/// Returns the generated token string in the body.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, T, E, C>(
    State(state): State<AppState<U, T, E, C>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    T: ConfirmationTokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
    C: Clock + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = RegisterUseCase::new(
        state.user_store,
        state.token_store,
        state.email_client,
        state.clock,
        state.confirmation_url,
    );

    let token = use_case
        .execute(request.first_name, request.last_name, email, password)
        .await?;

    Ok((StatusCode::OK, token))
}
