use async_trait::async_trait;

use crate::{
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
    users::domain::model::{entities::user::User, enums::users_domain_error::UsersDomainError},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `UsernameAlreadyExists` when the username is taken.
    async fn save_new(&self, user: &User) -> Result<(), UsersDomainError>;

    async fn find_by_username(&self, username: &Username)
    -> Result<Option<User>, UsersDomainError>;

    /// Sorted by username.
    async fn list_by_role(&self, role: UserRole) -> Result<Vec<User>, UsersDomainError>;
}
