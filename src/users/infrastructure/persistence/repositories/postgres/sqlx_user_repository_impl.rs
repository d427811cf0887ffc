use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;

use crate::{
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
    users::{
        domain::model::{
            entities::user::User, enums::users_domain_error::UsersDomainError,
            value_objects::password_hash::PasswordHash,
        },
        infrastructure::persistence::repositories::user_repository::UserRepository,
    },
};

pub struct SqlxUserRepositoryImpl {
    pool: PgPool,
}

impl SqlxUserRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<User, UsersDomainError> {
        let username_raw: String = row.try_get("username").map_err(map_infra_error)?;
        let password_hash_raw: String = row.try_get("password_hash").map_err(map_infra_error)?;
        let role_raw: String = row.try_get("role").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        let username =
            Username::new(username_raw).map_err(UsersDomainError::InfrastructureError)?;
        let role = UserRole::from_str(&role_raw).map_err(|_| {
            UsersDomainError::InfrastructureError("unknown role stored".to_string())
        })?;

        Ok(User::restore(
            username,
            PasswordHash::new(password_hash_raw)?,
            role,
            created_at,
        ))
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepositoryImpl {
    async fn save_new(&self, user: &User) -> Result<(), UsersDomainError> {
        let statement = r#"
            INSERT INTO users (username, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4)
        "#;

        sqlx::query(statement)
            .bind(user.username().value())
            .bind(user.password_hash().value())
            .bind(user.role().as_str())
            .bind(user.created_at())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                if let sqlx::Error::Database(db) = &error {
                    if db.is_unique_violation() {
                        return UsersDomainError::UsernameAlreadyExists;
                    }
                }
                map_infra_error(error)
            })?;

        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UsersDomainError> {
        let statement = r#"
            SELECT username, password_hash, role, created_at
            FROM users
            WHERE username = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(username.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list_by_role(&self, role: UserRole) -> Result<Vec<User>, UsersDomainError> {
        let statement = r#"
            SELECT username, password_hash, role, created_at
            FROM users
            WHERE role = $1
            ORDER BY username ASC
        "#;

        let rows = sqlx::query(statement)
            .bind(role.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> UsersDomainError {
    UsersDomainError::InfrastructureError(error.to_string())
}
