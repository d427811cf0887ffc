use std::{collections::BTreeMap, sync::Mutex};

use async_trait::async_trait;
use membership_applications_api::{
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
    users::{
        domain::{
            model::{
                entities::user::User,
                enums::users_domain_error::UsersDomainError,
                value_objects::{password_hash::PasswordHash, plain_password::PlainPassword},
            },
            services::credential_hasher::CredentialHasher,
        },
        infrastructure::persistence::repositories::user_repository::UserRepository,
    },
};

pub struct FakeUserRepository {
    users: Mutex<BTreeMap<String, User>>,
}

impl FakeUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .map(|user| (user.username().value().to_string(), user))
                    .collect(),
            ),
        }
    }

    pub fn stored(&self, username: &str) -> Option<User> {
        self.users
            .lock()
            .expect("mutex poisoned")
            .get(username)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().expect("mutex poisoned").len()
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn save_new(&self, user: &User) -> Result<(), UsersDomainError> {
        let mut users = self.users.lock().expect("mutex poisoned");
        if users.contains_key(user.username().value()) {
            return Err(UsersDomainError::UsernameAlreadyExists);
        }
        users.insert(user.username().value().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UsersDomainError> {
        Ok(self.stored(username.value()))
    }

    async fn list_by_role(&self, role: UserRole) -> Result<Vec<User>, UsersDomainError> {
        let users = self.users.lock().expect("mutex poisoned");
        Ok(users
            .values()
            .filter(|user| user.role() == role)
            .cloned()
            .collect())
    }
}

/// Reversible stand-in that keeps tests fast; the argon2 hasher has its own tests.
pub struct FakeCredentialHasher;

impl FakeCredentialHasher {
    pub fn encode(password: &str) -> PasswordHash {
        PasswordHash::new(format!("$argon2-fake${password}")).expect("valid fake hash")
    }
}

#[async_trait]
impl CredentialHasher for FakeCredentialHasher {
    async fn hash(&self, password: &PlainPassword) -> Result<PasswordHash, UsersDomainError> {
        Ok(Self::encode(password.value()))
    }

    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, UsersDomainError> {
        Ok(Self::encode(password) == *hash)
    }
}
