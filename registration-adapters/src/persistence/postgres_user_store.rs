use registration_core::{Email, NewUser, User, UserId, UserRole, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres, Row, postgres::PgRow};
use uuid::Uuid;

use super::password_hash::compute_password_hash;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(new_user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let user = User::new(
            UserId::new(),
            new_user.first_name().to_string(),
            new_user.last_name().to_string(),
            new_user.email().clone(),
            password_hash,
            new_user.role(),
            false,
        );

        let user_id = user.id();
        let query = sqlx::query(
            r#"
                INSERT INTO users (id, first_name, last_name, email, password_hash, role, enabled)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email().as_ref().expose_secret().as_str())
        .bind(user.password_hash().expose_secret().as_str())
        .bind(user.role().as_str())
        .bind(user.enabled());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(user)
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, first_name, last_name, email, password_hash, role, enabled
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret().as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row_to_user(&row)
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn get_user(&self, id: UserId) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, first_name, last_name, email, password_hash, role, enabled
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row_to_user(&row)
    }

    #[tracing::instrument(name = "Enabling user in PostgreSQL", skip_all)]
    async fn enable_user(&self, id: UserId) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET enabled = TRUE
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

fn row_to_user(row: &PgRow) -> Result<User, UserStoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let first_name: String = row
        .try_get("first_name")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let last_name: String = row
        .try_get("last_name")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let enabled: bool = row
        .try_get("enabled")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    let email = Email::try_from(Secret::from(email))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let role =
        UserRole::parse(&role).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    Ok(User::new(
        UserId::from_uuid(id),
        first_name,
        last_name,
        email,
        Secret::from(password_hash),
        role,
        enabled,
    ))
}
