use async_trait::async_trait;

use crate::users::domain::model::{
    commands::register_user_command::RegisterUserCommand, entities::user::User,
    enums::users_domain_error::UsersDomainError,
};

#[async_trait]
pub trait UserCommandService: Send + Sync {
    async fn handle_register(&self, command: RegisterUserCommand)
    -> Result<User, UsersDomainError>;
}
