use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

/// PHC-formatted argon2 hash.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: String) -> Result<Self, UsersDomainError> {
        let trimmed = value.trim().to_string();

        if !trimmed.starts_with("$argon2") {
            return Err(UsersDomainError::InfrastructureError(
                "password hash is not an argon2 PHC string".to_string(),
            ));
        }

        Ok(Self(trimmed))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
