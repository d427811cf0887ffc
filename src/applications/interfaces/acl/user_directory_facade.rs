use async_trait::async_trait;

use crate::{
    applications::domain::model::enums::application_domain_error::ApplicationDomainError,
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryUser {
    pub username: Username,
    pub role: UserRole,
}

/// User lookups the application workflow depends on.
#[async_trait]
pub trait UserDirectoryFacade: Send + Sync {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<DirectoryUser>, ApplicationDomainError>;

    /// Usernames currently holding `role`, sorted ascending.
    async fn list_usernames_by_role(
        &self,
        role: UserRole,
    ) -> Result<Vec<Username>, ApplicationDomainError>;
}
