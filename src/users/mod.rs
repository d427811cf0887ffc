pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::users::{
    application::{
        acl::users_facade_impl::UsersFacadeImpl,
        command_services::user_command_service_impl::UserCommandServiceImpl,
        query_services::user_query_service_impl::UserQueryServiceImpl,
    },
    domain::services::credential_hasher::CredentialHasher,
    infrastructure::{
        persistence::repositories::{
            postgres::sqlx_user_repository_impl::SqlxUserRepositoryImpl,
            user_repository::UserRepository,
        },
        security::argon2_credential_hasher::Argon2CredentialHasher,
    },
    interfaces::{
        acl::users_facade::UsersFacade,
        rest::controllers::users_rest_controller::{UsersRestControllerState, router},
    },
};

/// Wired users context: its HTTP routes plus the facade other contexts consume.
pub struct UsersModule {
    pub router: Router,
    pub facade: Arc<dyn UsersFacade>,
}

pub fn build_users_module(pool: PgPool) -> UsersModule {
    let user_repository: Arc<dyn UserRepository> = Arc::new(SqlxUserRepositoryImpl::new(pool));
    let credential_hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2CredentialHasher::new());

    let command_service = Arc::new(UserCommandServiceImpl::new(
        user_repository.clone(),
        credential_hasher.clone(),
    ));
    let query_service = Arc::new(UserQueryServiceImpl::new(
        user_repository.clone(),
        credential_hasher,
    ));

    UsersModule {
        router: router(UsersRestControllerState {
            command_service,
            query_service,
        }),
        facade: Arc::new(UsersFacadeImpl::new(user_repository)),
    }
}
