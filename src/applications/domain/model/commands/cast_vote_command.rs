use crate::{
    applications::domain::model::{
        enums::{application_domain_error::ApplicationDomainError, vote_type::VoteType},
        value_objects::application_id::ApplicationId,
    },
    shared::domain::model::value_objects::username::Username,
};

#[derive(Clone, Debug)]
pub struct CastVoteCommand {
    application_id: ApplicationId,
    voter: Username,
    vote_type: VoteType,
}

impl CastVoteCommand {
    pub fn new(
        application_id: String,
        voter: String,
        vote_type: String,
    ) -> Result<Self, ApplicationDomainError> {
        Ok(Self {
            application_id: ApplicationId::new(application_id)?,
            voter: Username::new(voter).map_err(|_| ApplicationDomainError::InvalidUsername)?,
            vote_type: vote_type.parse()?,
        })
    }

    pub fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    pub fn voter(&self) -> &Username {
        &self.voter
    }

    pub fn vote_type(&self) -> VoteType {
        self.vote_type
    }
}
