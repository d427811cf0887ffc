use crate::applications::domain::model::{
    enums::application_domain_error::ApplicationDomainError,
    value_objects::application_id::ApplicationId,
};

#[derive(Clone, Debug)]
pub struct GetApplicationQuery {
    application_id: ApplicationId,
}

impl GetApplicationQuery {
    pub fn new(application_id: String) -> Result<Self, ApplicationDomainError> {
        Ok(Self {
            application_id: ApplicationId::new(application_id)?,
        })
    }

    pub fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }
}
