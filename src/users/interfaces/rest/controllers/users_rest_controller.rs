use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::users::{
    domain::{
        model::{
            commands::register_user_command::RegisterUserCommand,
            enums::users_domain_error::UsersDomainError,
            queries::{
                authenticate_user_query::AuthenticateUserQuery,
                get_user_role_query::GetUserRoleQuery,
            },
        },
        services::{user_command_service::UserCommandService, user_query_service::UserQueryService},
    },
    interfaces::rest::resources::{
        get_user_role_query_resource::GetUserRoleQueryResource,
        login_request_resource::LoginRequestResource,
        register_user_request_resource::RegisterUserRequestResource,
        user_resource::UserResource, user_role_resource::UserRoleResource,
        users_error_response_resource::UsersErrorResponseResource,
    },
};

type UsersErrorResponse = (StatusCode, Json<UsersErrorResponseResource>);

#[derive(Clone)]
pub struct UsersRestControllerState {
    pub command_service: Arc<dyn UserCommandService>,
    pub query_service: Arc<dyn UserQueryService>,
}

pub fn router(state: UsersRestControllerState) -> Router {
    Router::new()
        .route("/users", get(get_user_role).post(register_user))
        .route("/users/login", post(login))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = RegisterUserRequestResource,
    responses(
        (status = 201, description = "User registered", body = UserResource),
        (status = 400, description = "Invalid payload", body = UsersErrorResponseResource),
        (status = 409, description = "Username already exists", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = UsersErrorResponseResource)
    )
)]
pub async fn register_user(
    State(state): State<UsersRestControllerState>,
    Json(request): Json<RegisterUserRequestResource>,
) -> Result<(StatusCode, Json<UserResource>), UsersErrorResponse> {
    validate(&request)?;

    let command =
        RegisterUserCommand::new(request.username, request.password).map_err(map_domain_error)?;

    let user = state
        .command_service
        .handle_register(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(UserResource::from(user))))
}

#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginRequestResource,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResource),
        (status = 400, description = "Invalid payload", body = UsersErrorResponseResource),
        (status = 401, description = "Invalid username or password", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = UsersErrorResponseResource)
    )
)]
pub async fn login(
    State(state): State<UsersRestControllerState>,
    Json(request): Json<LoginRequestResource>,
) -> Result<Json<UserResource>, UsersErrorResponse> {
    validate(&request)?;

    let query =
        AuthenticateUserQuery::new(request.username, request.password).map_err(map_domain_error)?;

    let user = state
        .query_service
        .handle_authenticate(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UserResource::from(user)))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(("username" = String, Query, description = "Username to look up")),
    responses(
        (status = 200, description = "User role", body = UserRoleResource),
        (status = 400, description = "Invalid username", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = UsersErrorResponseResource)
    )
)]
pub async fn get_user_role(
    State(state): State<UsersRestControllerState>,
    Query(query): Query<GetUserRoleQueryResource>,
) -> Result<Json<UserRoleResource>, UsersErrorResponse> {
    let query = GetUserRoleQuery::new(query.username).map_err(map_domain_error)?;
    let username = query.username().value().to_string();

    let role = state
        .query_service
        .handle_get_role(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UserRoleResource {
        username,
        role: role.as_str().to_string(),
    }))
}

fn validate(request: &impl Validate) -> Result<(), UsersErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(UsersErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: UsersDomainError) -> UsersErrorResponse {
    let status = match error {
        UsersDomainError::InvalidUsername | UsersDomainError::InvalidPassword => {
            StatusCode::BAD_REQUEST
        }
        UsersDomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        UsersDomainError::UserNotFound => StatusCode::NOT_FOUND,
        UsersDomainError::UsernameAlreadyExists => StatusCode::CONFLICT,
        UsersDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(UsersErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
