use chrono::{DateTime, Utc};

use crate::applications::domain::model::value_objects::{
    application_id::ApplicationId, role_promotion::RolePromotion,
};

#[derive(Clone, Debug)]
pub struct ApplicationApprovedEvent {
    pub application_id: ApplicationId,
    pub promotion: RolePromotion,
    pub occurred_at: DateTime<Utc>,
}

impl ApplicationApprovedEvent {
    pub fn new(
        application_id: ApplicationId,
        promotion: RolePromotion,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            application_id,
            promotion,
            occurred_at,
        }
    }
}
