use std::str::FromStr;

use crate::{
    applications::domain::model::enums::application_domain_error::ApplicationDomainError,
    shared::domain::model::enums::user_role::UserRole,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ApplicationType {
    Member,
    Admin,
}

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }

    /// Role a user must currently hold to be proposed for this type.
    pub fn source_role(&self) -> UserRole {
        match self {
            Self::Member => UserRole::Bro,
            Self::Admin => UserRole::Member,
        }
    }

    /// Role granted to the subject once the application reaches quorum.
    pub fn promoted_role(&self) -> UserRole {
        match self {
            Self::Member => UserRole::Member,
            Self::Admin => UserRole::Admin,
        }
    }
}

impl FromStr for ApplicationType {
    type Err = ApplicationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            _ => Err(ApplicationDomainError::InvalidApplicationType),
        }
    }
}
