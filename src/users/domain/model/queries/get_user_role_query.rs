use crate::{
    shared::domain::model::value_objects::username::Username,
    users::domain::model::enums::users_domain_error::UsersDomainError,
};

#[derive(Clone, Debug)]
pub struct GetUserRoleQuery {
    username: Username,
}

impl GetUserRoleQuery {
    pub fn new(username: String) -> Result<Self, UsersDomainError> {
        Ok(Self {
            username: Username::new(username).map_err(|_| UsersDomainError::InvalidUsername)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}
