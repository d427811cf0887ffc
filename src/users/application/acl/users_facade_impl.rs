use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
    users::{
        domain::model::enums::users_domain_error::UsersDomainError,
        infrastructure::persistence::repositories::user_repository::UserRepository,
        interfaces::acl::users_facade::{UserProfile, UsersFacade},
    },
};

pub struct UsersFacadeImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UsersFacadeImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UsersFacade for UsersFacadeImpl {
    async fn find_user(
        &self,
        username: &Username,
    ) -> Result<Option<UserProfile>, UsersDomainError> {
        Ok(self
            .user_repository
            .find_by_username(username)
            .await?
            .map(|user| UserProfile {
                username: user.username().clone(),
                role: user.role(),
            }))
    }

    async fn list_usernames_by_role(
        &self,
        role: UserRole,
    ) -> Result<Vec<Username>, UsersDomainError> {
        Ok(self
            .user_repository
            .list_by_role(role)
            .await?
            .into_iter()
            .map(|user| user.username().clone())
            .collect())
    }
}
