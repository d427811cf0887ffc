use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    shared::domain::model::enums::user_role::UserRole,
    users::{
        domain::{
            model::{
                entities::user::User,
                enums::users_domain_error::UsersDomainError,
                queries::{
                    authenticate_user_query::AuthenticateUserQuery,
                    get_user_role_query::GetUserRoleQuery,
                },
            },
            services::{credential_hasher::CredentialHasher, user_query_service::UserQueryService},
        },
        infrastructure::persistence::repositories::user_repository::UserRepository,
    },
};

pub struct UserQueryServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    credential_hasher: Arc<dyn CredentialHasher>,
}

impl UserQueryServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        credential_hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            user_repository,
            credential_hasher,
        }
    }
}

#[async_trait]
impl UserQueryService for UserQueryServiceImpl {
    async fn handle_authenticate(
        &self,
        query: AuthenticateUserQuery,
    ) -> Result<User, UsersDomainError> {
        let Some(user) = self
            .user_repository
            .find_by_username(query.username())
            .await?
        else {
            debug!(username = %query.username(), "login for unknown user");
            return Err(UsersDomainError::InvalidCredentials);
        };

        if !self
            .credential_hasher
            .verify(query.password(), user.password_hash())
            .await?
        {
            debug!(username = %query.username(), "login with wrong password");
            return Err(UsersDomainError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn handle_get_role(
        &self,
        query: GetUserRoleQuery,
    ) -> Result<UserRole, UsersDomainError> {
        self.user_repository
            .find_by_username(query.username())
            .await?
            .map(|user| user.role())
            .ok_or(UsersDomainError::UserNotFound)
    }
}
