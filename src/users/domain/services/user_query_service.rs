use async_trait::async_trait;

use crate::{
    shared::domain::model::enums::user_role::UserRole,
    users::domain::model::{
        entities::user::User,
        enums::users_domain_error::UsersDomainError,
        queries::{
            authenticate_user_query::AuthenticateUserQuery, get_user_role_query::GetUserRoleQuery,
        },
    },
};

#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn handle_authenticate(
        &self,
        query: AuthenticateUserQuery,
    ) -> Result<User, UsersDomainError>;

    async fn handle_get_role(&self, query: GetUserRoleQuery)
    -> Result<UserRole, UsersDomainError>;
}
