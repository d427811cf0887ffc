use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::applications::domain::model::entities::application::Application;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResource {
    pub id: String,
    pub from_user: String,
    pub for_user: String,
    pub app_type: String,
    pub status: String,
    pub admin_votes: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Application> for ApplicationResource {
    fn from(application: Application) -> Self {
        Self {
            id: application.id().value().to_string(),
            from_user: application.from_user().value().to_string(),
            for_user: application.for_user().value().to_string(),
            app_type: application.application_type().as_str().to_string(),
            status: application.status().as_str().to_string(),
            admin_votes: application
                .admin_votes()
                .iter()
                .map(|voter| voter.value().to_string())
                .collect(),
            created_at: application.created_at().to_rfc3339(),
            updated_at: application.updated_at().to_rfc3339(),
        }
    }
}
