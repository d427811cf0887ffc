use crate::applications::domain::model::enums::{
    application_domain_error::ApplicationDomainError, application_type::ApplicationType,
};

#[derive(Clone, Debug)]
pub struct AvailableCandidatesQuery {
    application_type: ApplicationType,
}

impl AvailableCandidatesQuery {
    pub fn new(application_type: String) -> Result<Self, ApplicationDomainError> {
        Ok(Self {
            application_type: application_type.parse()?,
        })
    }

    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }
}
