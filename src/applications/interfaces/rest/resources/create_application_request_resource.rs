use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequestResource {
    #[validate(length(min = 1, max = 64))]
    pub for_user: String,
    #[validate(length(min = 1))]
    pub app_type: String,
}
