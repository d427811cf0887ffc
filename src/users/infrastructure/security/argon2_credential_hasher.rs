use argon2::{
    Argon2,
    password_hash::{PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;
use rand::rngs::OsRng;

use crate::users::domain::{
    model::{
        enums::users_domain_error::UsersDomainError,
        value_objects::{password_hash::PasswordHash, plain_password::PlainPassword},
    },
    services::credential_hasher::CredentialHasher,
};

/// Argon2id with the crate defaults. Hashing runs on the blocking pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &PlainPassword) -> Result<PasswordHash, UsersDomainError> {
        let password = password.value().to_string();

        let encoded = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?
        .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        PasswordHash::new(encoded)
    }

    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, UsersDomainError> {
        let password = password.to_string();
        let encoded = hash.value().to_string();

        tokio::task::spawn_blocking(move || {
            let parsed = PhcHash::new(&encoded)
                .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?
    }
}
