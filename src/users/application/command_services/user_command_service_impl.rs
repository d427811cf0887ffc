use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::users::{
    domain::{
        model::{
            commands::register_user_command::RegisterUserCommand, entities::user::User,
            enums::users_domain_error::UsersDomainError,
        },
        services::{credential_hasher::CredentialHasher, user_command_service::UserCommandService},
    },
    infrastructure::persistence::repositories::user_repository::UserRepository,
};

pub struct UserCommandServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    credential_hasher: Arc<dyn CredentialHasher>,
}

impl UserCommandServiceImpl {
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
impl UserCommandService for UserCommandServiceImpl {
    async fn handle_register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<User, UsersDomainError> {
        if self
            .user_repository
            .find_by_username(command.username())
            .await?
            .is_some()
        {
            return Err(UsersDomainError::UsernameAlreadyExists);
        }

        let password_hash = self.credential_hasher.hash(command.password()).await?;
        let user = User::new_registered(command.username().clone(), password_hash, Utc::now());

        // The unique index still guards a concurrent registration of the same name.
        self.user_repository.save_new(&user).await?;

        info!(username = %user.username(), role = user.role().as_str(), "user registered");
        Ok(user)
    }
}
