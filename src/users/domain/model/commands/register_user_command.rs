use crate::{
    shared::domain::model::value_objects::username::Username,
    users::domain::model::{
        enums::users_domain_error::UsersDomainError, value_objects::plain_password::PlainPassword,
    },
};

#[derive(Clone, Debug)]
pub struct RegisterUserCommand {
    username: Username,
    password: PlainPassword,
}

impl RegisterUserCommand {
    pub fn new(username: String, password: String) -> Result<Self, UsersDomainError> {
        Ok(Self {
            username: Username::new(username).map_err(|_| UsersDomainError::InvalidUsername)?,
            password: PlainPassword::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &PlainPassword {
        &self.password
    }
}
