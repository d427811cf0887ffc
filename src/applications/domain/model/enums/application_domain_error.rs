use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationDomainError {
    #[error("username is invalid")]
    InvalidUsername,

    #[error("application id is invalid")]
    InvalidApplicationId,

    #[error("application type is invalid; use member or admin")]
    InvalidApplicationType,

    #[error("page type is invalid; use admin or member")]
    InvalidPageContext,

    #[error("vote type is invalid; use vote or unvote")]
    InvalidVoteType,

    #[error("viewer identity is missing")]
    MissingViewerIdentity,

    #[error("user not found")]
    UserNotFound,

    #[error("application not found")]
    ApplicationNotFound,

    #[error("viewer is not authorized for this page")]
    PageNotAuthorized,

    #[error("user is not authorized to propose this application")]
    ProposalNotAuthorized,

    #[error("only the proposer or an admin can delete this application")]
    DeleteNotAuthorized,

    #[error("only admins can vote")]
    OnlyAdminsCanVote,

    #[error("user already voted")]
    AlreadyVoted,

    #[error("user cannot unvote, did not vote")]
    VoteNotFound,

    #[error("an open application already exists for this user and type")]
    DuplicateOpenApplication,

    #[error("invalid status transition")]
    InvalidStatusTransition,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
