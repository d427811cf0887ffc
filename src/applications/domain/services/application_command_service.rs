use async_trait::async_trait;

use crate::applications::domain::model::{
    commands::{
        cast_vote_command::CastVoteCommand, create_application_command::CreateApplicationCommand,
        delete_application_command::DeleteApplicationCommand,
    },
    entities::application::Application,
    enums::application_domain_error::ApplicationDomainError,
};

#[async_trait]
pub trait ApplicationCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateApplicationCommand,
    ) -> Result<Application, ApplicationDomainError>;

    async fn handle_cast_vote(&self, command: CastVoteCommand)
    -> Result<(), ApplicationDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteApplicationCommand,
    ) -> Result<(), ApplicationDomainError>;
}
