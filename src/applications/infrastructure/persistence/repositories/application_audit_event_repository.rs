use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    applications::domain::model::{
        entities::application::Application,
        enums::{
            application_audit_event_kind::ApplicationAuditEventKind,
            application_domain_error::ApplicationDomainError,
            application_status::ApplicationStatus, application_type::ApplicationType,
        },
        value_objects::{application_id::ApplicationId, role_promotion::RolePromotion},
    },
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
};

/// One row of the application audit trail: who acted, and the state the
/// application was left in afterwards.
#[derive(Clone, Debug)]
pub struct ApplicationAuditEventRecord {
    kind: ApplicationAuditEventKind,
    application_id: ApplicationId,
    actor: Username,
    for_user: Username,
    application_type: ApplicationType,
    status: ApplicationStatus,
    vote_count: usize,
    promoted_role: Option<UserRole>,
    occurred_at: DateTime<Utc>,
}

impl ApplicationAuditEventRecord {
    pub fn capture(
        kind: ApplicationAuditEventKind,
        application: &Application,
        actor: &Username,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            application_id: application.id(),
            actor: actor.clone(),
            for_user: application.for_user().clone(),
            application_type: application.application_type(),
            status: application.status(),
            vote_count: application.admin_votes().len(),
            promoted_role: None,
            occurred_at,
        }
    }

    pub fn with_promotion(mut self, promotion: &RolePromotion) -> Self {
        self.promoted_role = Some(promotion.role);
        self
    }

    pub fn kind(&self) -> ApplicationAuditEventKind {
        self.kind
    }

    pub fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    pub fn actor(&self) -> &Username {
        &self.actor
    }

    pub fn for_user(&self) -> &Username {
        &self.for_user
    }

    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn vote_count(&self) -> usize {
        self.vote_count
    }

    pub fn promoted_role(&self) -> Option<UserRole> {
        self.promoted_role
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Append-only sink for audit rows. Callers treat failures as non-fatal.
#[async_trait]
pub trait ApplicationAuditEventRepository: Send + Sync {
    async fn append(
        &self,
        event: &ApplicationAuditEventRecord,
    ) -> Result<(), ApplicationDomainError>;
}
