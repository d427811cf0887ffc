use std::str::FromStr;

use crate::applications::domain::model::enums::application_domain_error::ApplicationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageContext {
    AdminPage,
    MemberPage,
}

impl PageContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminPage => "admin",
            Self::MemberPage => "member",
        }
    }
}

impl FromStr for PageContext {
    type Err = ApplicationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::AdminPage),
            "member" => Ok(Self::MemberPage),
            _ => Err(ApplicationDomainError::InvalidPageContext),
        }
    }
}
