use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetUserRoleQueryResource {
    pub username: String,
}
