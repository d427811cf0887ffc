use crate::shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username};

/// Role change that must be committed together with the application that
/// reached quorum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RolePromotion {
    pub username: Username,
    pub role: UserRole,
}
