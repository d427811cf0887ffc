use async_trait::async_trait;

use crate::users::domain::model::{
    enums::users_domain_error::UsersDomainError,
    value_objects::{password_hash::PasswordHash, plain_password::PlainPassword},
};

#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &PlainPassword) -> Result<PasswordHash, UsersDomainError>;

    /// `Ok(false)` on mismatch; errors only for malformed hashes or a failed worker.
    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, UsersDomainError>;
}
