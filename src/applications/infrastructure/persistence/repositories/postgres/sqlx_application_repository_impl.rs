use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    applications::{
        domain::model::{
            entities::application::{Application, ApplicationSnapshot},
            enums::{
                application_domain_error::ApplicationDomainError,
                application_status::ApplicationStatus, application_type::ApplicationType,
            },
            value_objects::{application_id::ApplicationId, role_promotion::RolePromotion},
        },
        infrastructure::persistence::repositories::application_repository::{
            ApplicationMutation, ApplicationRepository,
        },
    },
    shared::domain::model::value_objects::username::Username,
};

const SELECT_COLUMNS: &str =
    "id, from_user, for_user, app_type, status, admin_votes, created_at, updated_at";

pub struct SqlxApplicationRepositoryImpl {
    pool: PgPool,
}

impl SqlxApplicationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Application, ApplicationDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let from_user_raw: String = row.try_get("from_user").map_err(map_infra_error)?;
        let for_user_raw: String = row.try_get("for_user").map_err(map_infra_error)?;
        let app_type_raw: String = row.try_get("app_type").map_err(map_infra_error)?;
        let status_raw: String = row.try_get("status").map_err(map_infra_error)?;
        let admin_votes_raw: Vec<String> = row.try_get("admin_votes").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        let application_type = ApplicationType::from_str(&app_type_raw).map_err(|_| {
            ApplicationDomainError::InfrastructureError("unknown app type stored".to_string())
        })?;
        let status = ApplicationStatus::from_str(&status_raw).map_err(|_| {
            ApplicationDomainError::InfrastructureError("unknown status stored".to_string())
        })?;
        let admin_votes = admin_votes_raw
            .into_iter()
            .map(stored_username)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Application::restore(ApplicationSnapshot {
            id: ApplicationId::from_uuid(id),
            from_user: stored_username(from_user_raw)?,
            for_user: stored_username(for_user_raw)?,
            application_type,
            status,
            admin_votes,
            created_at,
            updated_at,
        }))
    }
}

#[async_trait]
impl ApplicationRepository for SqlxApplicationRepositoryImpl {
    async fn create(
        &self,
        application: Application,
    ) -> Result<Application, ApplicationDomainError> {
        let statement = r#"
            INSERT INTO applications (id, from_user, for_user, app_type, status, admin_votes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(statement)
            .bind(application.id().value())
            .bind(application.from_user().value())
            .bind(application.for_user().value())
            .bind(application.application_type().as_str())
            .bind(application.status().as_str())
            .bind(vote_values(&application))
            .bind(application.created_at())
            .bind(application.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(application)
    }

    async fn find_by_id(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationDomainError> {
        let statement = format!("SELECT {SELECT_COLUMNS} FROM applications WHERE id = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(application_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_all_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<Application>, ApplicationDomainError> {
        let statement = format!(
            "SELECT {SELECT_COLUMNS} FROM applications WHERE status = $1 ORDER BY created_at ASC, id ASC"
        );

        let rows = sqlx::query(&statement)
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn update(
        &self,
        application_id: &ApplicationId,
        mutation: ApplicationMutation,
    ) -> Result<(Application, Option<RolePromotion>), ApplicationDomainError> {
        // The row lock serializes concurrent votes on the same application.
        // Dropping the transaction on any early return rolls it back.
        let mut transaction = self.pool.begin().await.map_err(map_infra_error)?;

        let statement =
            format!("SELECT {SELECT_COLUMNS} FROM applications WHERE id = $1 FOR UPDATE");
        let row = sqlx::query(&statement)
            .bind(application_id.value())
            .fetch_optional(&mut *transaction)
            .await
            .map_err(map_infra_error)?
            .ok_or(ApplicationDomainError::ApplicationNotFound)?;

        let mut application = Self::row_to_entity(row)?;
        let promotion = mutation(&mut application)?;

        sqlx::query(
            r#"
            UPDATE applications
            SET status = $2, admin_votes = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(application.id().value())
        .bind(application.status().as_str())
        .bind(vote_values(&application))
        .bind(application.updated_at())
        .execute(&mut *transaction)
        .await
        .map_err(map_infra_error)?;

        // Role write shares the transaction so a quorum never commits without it.
        if let Some(promotion) = &promotion {
            let result = sqlx::query("UPDATE users SET role = $2 WHERE username = $1")
                .bind(promotion.username.value())
                .bind(promotion.role.as_str())
                .execute(&mut *transaction)
                .await
                .map_err(map_infra_error)?;

            if result.rows_affected() == 0 {
                return Err(ApplicationDomainError::UserNotFound);
            }
        }

        transaction.commit().await.map_err(map_infra_error)?;

        Ok((application, promotion))
    }
}

fn vote_values(application: &Application) -> Vec<String> {
    application
        .admin_votes()
        .iter()
        .map(|voter| voter.value().to_string())
        .collect()
}

fn stored_username(value: String) -> Result<Username, ApplicationDomainError> {
    Username::new(value).map_err(ApplicationDomainError::InfrastructureError)
}

fn map_infra_error(error: sqlx::Error) -> ApplicationDomainError {
    ApplicationDomainError::InfrastructureError(error.to_string())
}
