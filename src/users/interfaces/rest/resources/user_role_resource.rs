use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserRoleResource {
    pub username: String,
    pub role: String,
}
