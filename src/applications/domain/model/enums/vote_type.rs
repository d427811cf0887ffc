use std::str::FromStr;

use crate::applications::domain::model::enums::application_domain_error::ApplicationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteType {
    Vote,
    Unvote,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vote => "vote",
            Self::Unvote => "unvote",
        }
    }
}

impl FromStr for VoteType {
    type Err = ApplicationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "vote" => Ok(Self::Vote),
            "unvote" => Ok(Self::Unvote),
            _ => Err(ApplicationDomainError::InvalidVoteType),
        }
    }
}
