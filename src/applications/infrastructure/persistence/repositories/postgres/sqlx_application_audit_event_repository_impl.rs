use async_trait::async_trait;
use sqlx::PgPool;

use crate::applications::{
    domain::model::enums::application_domain_error::ApplicationDomainError,
    infrastructure::persistence::repositories::application_audit_event_repository::{
        ApplicationAuditEventRecord, ApplicationAuditEventRepository,
    },
};

pub struct SqlxApplicationAuditEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxApplicationAuditEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationAuditEventRepository for SqlxApplicationAuditEventRepositoryImpl {
    async fn append(
        &self,
        event: &ApplicationAuditEventRecord,
    ) -> Result<(), ApplicationDomainError> {
        let vote_count = i32::try_from(event.vote_count()).map_err(|_| {
            ApplicationDomainError::InfrastructureError("vote count out of range".to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO application_audit_events (
                application_id, kind, actor, for_user, app_type,
                status, vote_count, promoted_role, occurred_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event.application_id().value())
        .bind(event.kind().as_str())
        .bind(event.actor().value())
        .bind(event.for_user().value())
        .bind(event.application_type().as_str())
        .bind(event.status().as_str())
        .bind(vote_count)
        .bind(event.promoted_role().map(|role| role.as_str()))
        .bind(event.occurred_at())
        .execute(&self.pool)
        .await
        .map_err(|e| ApplicationDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
