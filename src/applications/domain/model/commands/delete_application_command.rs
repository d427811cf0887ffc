use crate::{
    applications::domain::model::{
        enums::application_domain_error::ApplicationDomainError,
        value_objects::application_id::ApplicationId,
    },
    shared::domain::model::value_objects::username::Username,
};

#[derive(Clone, Debug)]
pub struct DeleteApplicationCommand {
    application_id: ApplicationId,
    requested_by: Username,
}

impl DeleteApplicationCommand {
    pub fn new(
        application_id: String,
        requested_by: String,
    ) -> Result<Self, ApplicationDomainError> {
        let requested_by =
            Username::new(requested_by).map_err(|_| ApplicationDomainError::InvalidUsername)?;

        Ok(Self {
            application_id: ApplicationId::new(application_id)?,
            requested_by,
        })
    }

    pub fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    pub fn requested_by(&self) -> &Username {
        &self.requested_by
    }
}
