use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

#[derive(Clone, Eq, PartialEq)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub const MIN_LENGTH: usize = 8;

    pub fn new(value: String) -> Result<Self, UsersDomainError> {
        if value.chars().count() < Self::MIN_LENGTH {
            return Err(UsersDomainError::InvalidPassword);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PlainPassword(***)")
    }
}
