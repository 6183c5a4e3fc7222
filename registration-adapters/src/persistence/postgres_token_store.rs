use chrono::{DateTime, Utc};
use registration_core::{ConfirmationToken, ConfirmationTokenStore, TokenStoreError, UserId};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresTokenStore {
    pool: sqlx::PgPool,
}

impl PostgresTokenStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresTokenStore { pool }
    }
}

#[async_trait::async_trait]
impl ConfirmationTokenStore for PostgresTokenStore {
    #[tracing::instrument(name = "Adding confirmation token to PostgreSQL", skip_all)]
    async fn add_token(&self, token: ConfirmationToken) -> Result<(), TokenStoreError> {
        let user_id = token.user_id();
        let query = sqlx::query(
            r#"
                INSERT INTO confirmation_tokens (token, user_id, created_at, expires_at, validated_at)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token.token())
        .bind(user_id.as_uuid())
        .bind(token.created_at())
        .bind(token.expires_at())
        .bind(token.validated_at());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return TokenStoreError::TokenAlreadyExists;
                }
            }
            TokenStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving confirmation token from PostgreSQL", skip_all)]
    async fn get_token(&self, token: &str) -> Result<ConfirmationToken, TokenStoreError> {
        let row = sqlx::query(
            r#"
                SELECT token, user_id, created_at, expires_at, validated_at
                FROM confirmation_tokens
                WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(TokenStoreError::TokenNotFound);
        };

        let token: String = row
            .try_get("token")
            .map_err(|e| TokenStoreError::UnexpectedError(e.to_string()))?;
        let user_id: Uuid = row
            .try_get("user_id")
            .map_err(|e| TokenStoreError::UnexpectedError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| TokenStoreError::UnexpectedError(e.to_string()))?;
        let expires_at: DateTime<Utc> = row
            .try_get("expires_at")
            .map_err(|e| TokenStoreError::UnexpectedError(e.to_string()))?;
        let validated_at: Option<DateTime<Utc>> = row
            .try_get("validated_at")
            .map_err(|e| TokenStoreError::UnexpectedError(e.to_string()))?;

        Ok(ConfirmationToken::from_parts(
            token,
            UserId::from_uuid(user_id),
            created_at,
            expires_at,
            validated_at,
        ))
    }

    #[tracing::instrument(name = "Stamping confirmation token in PostgreSQL", skip_all)]
    async fn mark_validated(
        &self,
        token: &str,
        validated_at: DateTime<Utc>,
    ) -> Result<(), TokenStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE confirmation_tokens
                SET validated_at = $1
                WHERE token = $2
            "#,
        )
        .bind(validated_at)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TokenStoreError::TokenNotFound);
        }

        Ok(())
    }
}
