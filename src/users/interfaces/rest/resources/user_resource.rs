use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::users::domain::model::entities::user::User;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResource {
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            username: user.username().value().to_string(),
            role: user.role().as_str().to_string(),
            created_at: user.created_at(),
        }
    }
}
