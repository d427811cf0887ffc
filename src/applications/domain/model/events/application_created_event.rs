use chrono::{DateTime, Utc};

use crate::{
    applications::domain::model::{
        enums::application_type::ApplicationType, value_objects::application_id::ApplicationId,
    },
    shared::domain::model::value_objects::username::Username,
};

#[derive(Clone, Debug)]
pub struct ApplicationCreatedEvent {
    pub application_id: ApplicationId,
    pub from_user: Username,
    pub for_user: Username,
    pub application_type: ApplicationType,
    pub occurred_at: DateTime<Utc>,
}

impl ApplicationCreatedEvent {
    pub fn new(
        application_id: ApplicationId,
        from_user: Username,
        for_user: Username,
        application_type: ApplicationType,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            application_id,
            from_user,
            for_user,
            application_type,
            occurred_at,
        }
    }
}
