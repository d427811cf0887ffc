use crate::{
    shared::domain::model::value_objects::username::Username,
    users::domain::model::enums::users_domain_error::UsersDomainError,
};

#[derive(Clone)]
pub struct AuthenticateUserQuery {
    username: Username,
    password: String,
}

impl AuthenticateUserQuery {
    /// Malformed usernames are reported as bad credentials so login never
    /// reveals which part was wrong.
    pub fn new(username: String, password: String) -> Result<Self, UsersDomainError> {
        Ok(Self {
            username: Username::new(username).map_err(|_| UsersDomainError::InvalidCredentials)?,
            password,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
