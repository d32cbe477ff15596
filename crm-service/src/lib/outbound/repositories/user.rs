use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::RepositoryError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRole;
use crate::domain::user::ports::UserRepository;

/// Credential store adapter backed by Postgres.
///
/// Both lookups are point reads on unique keys; email uniqueness is
/// enforced by the table constraint.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, RepositoryError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        let lastname: String = row
            .try_get("lastname")
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        let created_at = row
            .try_get("created_at")
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(User {
            id: UserId::new(id).map_err(|e| RepositoryError::Corrupt(e.to_string()))?,
            name,
            lastname,
            email: EmailAddress::new(email)
                .map_err(|e| RepositoryError::Corrupt(e.to_string()))?,
            password_hash,
            role: UserRole::parse(&role)
                .map_err(|e| RepositoryError::Corrupt(e.to_string()))?,
            created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, lastname, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, lastname, email, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }
}
