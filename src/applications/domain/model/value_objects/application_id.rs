use uuid::Uuid;

use crate::applications::domain::model::enums::application_domain_error::ApplicationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ApplicationId(Uuid);

impl ApplicationId {
    pub fn new(value: String) -> Result<Self, ApplicationDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| ApplicationDomainError::InvalidApplicationId)?;
        Ok(Self(parsed))
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
