use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    applications::{
        application::{
            acl::user_directory_facade_real_impl::UserDirectoryFacadeRealImpl,
            command_services::application_command_service_impl::ApplicationCommandServiceImpl,
            query_services::application_query_service_impl::ApplicationQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_application_audit_event_repository_impl::SqlxApplicationAuditEventRepositoryImpl,
            sqlx_application_repository_impl::SqlxApplicationRepositoryImpl,
        },
        interfaces::rest::controllers::application_rest_controller::{
            ApplicationRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    users::interfaces::acl::users_facade::UsersFacade,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_applications_router(
    config: &AppConfig,
    pool: PgPool,
    users_facade: Arc<dyn UsersFacade>,
) -> Router {
    let application_repository = Arc::new(SqlxApplicationRepositoryImpl::new(pool.clone()));
    let audit_event_repository = Arc::new(SqlxApplicationAuditEventRepositoryImpl::new(pool));
    let user_directory = Arc::new(UserDirectoryFacadeRealImpl::new(users_facade));

    let command_service = Arc::new(ApplicationCommandServiceImpl::new(
        application_repository.clone(),
        user_directory.clone(),
        audit_event_repository,
        config.workflow,
    ));
    let query_service = Arc::new(ApplicationQueryServiceImpl::new(
        application_repository,
        user_directory,
    ));

    router(ApplicationRestControllerState {
        command_service,
        query_service,
    })
}
