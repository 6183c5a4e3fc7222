use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registration_application::{ConfirmError, RegisterError};
use registration_core::{EmailClientError, TokenStoreError, UserError, UserStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Token not found")]
    TokenNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to send email: {0}")]
    MailDelivery(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            ApiError::UserAlreadyExists => (StatusCode::CONFLICT, self.to_string()),

            ApiError::TokenNotFound | ApiError::UserNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }

            ApiError::MailDelivery(_) | ApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::UserAlreadyExists,
            UserStoreError::UserNotFound => ApiError::UserNotFound,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenStoreError> for ApiError {
    fn from(error: TokenStoreError) -> Self {
        match error {
            TokenStoreError::TokenNotFound => ApiError::TokenNotFound,
            TokenStoreError::TokenAlreadyExists | TokenStoreError::UnexpectedError(_) => {
                ApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<EmailClientError> for ApiError {
    fn from(error: EmailClientError) -> Self {
        ApiError::MailDelivery(error.to_string())
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserStoreError(e) => e.into(),
            RegisterError::TokenStoreError(e) => e.into(),
            RegisterError::EmailError(e) => e.into(),
        }
    }
}

impl From<ConfirmError> for ApiError {
    fn from(error: ConfirmError) -> Self {
        match error {
            ConfirmError::TokenStoreError(e) => e.into(),
            ConfirmError::UserStoreError(e) => e.into(),
            ConfirmError::EmailError(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_user_maps_to_conflict() {
        let response = ApiError::from(RegisterError::UserStoreError(
            UserStoreError::UserAlreadyExists,
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unknown_token_maps_to_not_found() {
        let response =
            ApiError::from(ConfirmError::TokenStoreError(TokenStoreError::TokenNotFound))
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failure_maps_to_bad_request() {
        let response = ApiError::from(UserError::InvalidEmail).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn mail_failure_maps_to_internal_server_error() {
        let response = ApiError::from(EmailClientError::DeliveryFailed("down".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
