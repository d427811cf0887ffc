use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequestResource {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 8, max = 256))]
    pub password: String,
}
