use axum::Router;
use dotenvy::dotenv;
use sqlx::{PgPool, migrate};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    applications::{
        build_applications_router,
        interfaces::rest::resources::{
            application_error_response_resource::ApplicationErrorResponseResource,
            application_resource::ApplicationResource,
            available_candidates_resource::AvailableCandidatesResource,
            cast_vote_request_resource::CastVoteRequestResource,
            create_application_request_resource::CreateApplicationRequestResource,
        },
    },
    config::app_config::AppConfig,
    error::StartupError,
    shared::interfaces::rest::openapi::security::GatewayIdentitySecurityAddon,
    telemetry,
    users::{
        build_users_module,
        interfaces::rest::resources::{
            login_request_resource::LoginRequestResource,
            register_user_request_resource::RegisterUserRequestResource,
            user_resource::UserResource, user_role_resource::UserRoleResource,
            users_error_response_resource::UsersErrorResponseResource,
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::applications::interfaces::rest::controllers::application_rest_controller::list_applications,
        crate::applications::interfaces::rest::controllers::application_rest_controller::list_available_candidates,
        crate::applications::interfaces::rest::controllers::application_rest_controller::create_application,
        crate::applications::interfaces::rest::controllers::application_rest_controller::get_application,
        crate::applications::interfaces::rest::controllers::application_rest_controller::cast_vote,
        crate::applications::interfaces::rest::controllers::application_rest_controller::delete_application,
        crate::users::interfaces::rest::controllers::users_rest_controller::register_user,
        crate::users::interfaces::rest::controllers::users_rest_controller::login,
        crate::users::interfaces::rest::controllers::users_rest_controller::get_user_role
    ),
    components(
        schemas(
            ApplicationResource,
            ApplicationErrorResponseResource,
            AvailableCandidatesResource,
            CastVoteRequestResource,
            CreateApplicationRequestResource,
            RegisterUserRequestResource,
            LoginRequestResource,
            UserResource,
            UserRoleResource,
            UsersErrorResponseResource
        )
    ),
    tags(
        (name = "applications", description = "Membership applications and admin voting"),
        (name = "users", description = "User registration, credentials and roles")
    ),
    modifiers(&GatewayIdentitySecurityAddon)
)]
pub struct ApiDoc;

/// Full HTTP surface over an already migrated pool.
pub fn build_app(config: &AppConfig, pool: PgPool) -> Router {
    let users = build_users_module(pool.clone());
    let applications_router = build_applications_router(config, pool, users.facade);

    Router::new()
        .merge(users.router)
        .merge(applications_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init(&config.log_level)?;

    let pool = PgPool::connect(&config.database_url()).await?;
    migrate!("./migrations").run(&pool).await?;

    let app = build_app(&config, pool);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        %addr,
        quorum_threshold = config.workflow.quorum_threshold,
        reject_duplicate_open = config.workflow.reject_duplicate_open_applications,
        "membership applications api ready; swagger ui at /swagger-ui"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
