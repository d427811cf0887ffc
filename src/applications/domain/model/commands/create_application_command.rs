use crate::{
    applications::domain::model::enums::{
        application_domain_error::ApplicationDomainError, application_type::ApplicationType,
    },
    shared::domain::model::value_objects::username::Username,
};

#[derive(Clone, Debug)]
pub struct CreateApplicationCommand {
    from_user: Username,
    for_user: Username,
    application_type: ApplicationType,
}

impl CreateApplicationCommand {
    pub fn new(
        from_user: String,
        for_user: String,
        application_type: String,
    ) -> Result<Self, ApplicationDomainError> {
        Ok(Self {
            from_user: Username::new(from_user)
                .map_err(|_| ApplicationDomainError::InvalidUsername)?,
            for_user: Username::new(for_user)
                .map_err(|_| ApplicationDomainError::InvalidUsername)?,
            application_type: application_type.parse()?,
        })
    }

    pub fn from_user(&self) -> &Username {
        &self.from_user
    }

    pub fn for_user(&self) -> &Username {
        &self.for_user
    }

    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }
}
