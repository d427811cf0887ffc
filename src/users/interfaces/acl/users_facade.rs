use async_trait::async_trait;

use crate::{
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
    users::domain::model::enums::users_domain_error::UsersDomainError,
};

/// What other contexts may know about a user. Never carries credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub username: Username,
    pub role: UserRole,
}

#[async_trait]
pub trait UsersFacade: Send + Sync {
    async fn find_user(&self, username: &Username)
    -> Result<Option<UserProfile>, UsersDomainError>;

    /// Sorted by username.
    async fn list_usernames_by_role(
        &self,
        role: UserRole,
    ) -> Result<Vec<Username>, UsersDomainError>;
}
