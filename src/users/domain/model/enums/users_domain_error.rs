use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersDomainError {
    #[error("username is invalid; use [A-Za-z0-9_.-] and length 1..64")]
    InvalidUsername,

    #[error("password is invalid; minimum length is 8")]
    InvalidPassword,

    #[error("username already exists")]
    UsernameAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
