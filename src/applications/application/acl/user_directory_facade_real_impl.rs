use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    applications::{
        domain::model::enums::application_domain_error::ApplicationDomainError,
        interfaces::acl::user_directory_facade::{DirectoryUser, UserDirectoryFacade},
    },
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
    users::interfaces::acl::users_facade::UsersFacade,
};

pub struct UserDirectoryFacadeRealImpl {
    facade: Arc<dyn UsersFacade>,
}

impl UserDirectoryFacadeRealImpl {
    pub fn new(facade: Arc<dyn UsersFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl UserDirectoryFacade for UserDirectoryFacadeRealImpl {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<DirectoryUser>, ApplicationDomainError> {
        let profile = self
            .facade
            .find_user(username)
            .await
            .map_err(|e| ApplicationDomainError::InfrastructureError(e.to_string()))?;

        Ok(profile.map(|profile| DirectoryUser {
            username: profile.username,
            role: profile.role,
        }))
    }

    async fn list_usernames_by_role(
        &self,
        role: UserRole,
    ) -> Result<Vec<Username>, ApplicationDomainError> {
        self.facade
            .list_usernames_by_role(role)
            .await
            .map_err(|e| ApplicationDomainError::InfrastructureError(e.to_string()))
    }
}
