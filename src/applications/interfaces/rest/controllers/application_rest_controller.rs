use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use validator::Validate;

use crate::{
    applications::{
        domain::{
            model::{
                commands::{
                    cast_vote_command::CastVoteCommand,
                    create_application_command::CreateApplicationCommand,
                    delete_application_command::DeleteApplicationCommand,
                },
                enums::application_domain_error::ApplicationDomainError,
                queries::{
                    available_candidates_query::AvailableCandidatesQuery,
                    get_application_query::GetApplicationQuery,
                    list_applications_query::ListApplicationsQuery,
                },
            },
            services::{
                application_command_service::ApplicationCommandService,
                application_query_service::ApplicationQueryService,
            },
        },
        interfaces::rest::resources::{
            application_error_response_resource::ApplicationErrorResponseResource,
            application_resource::ApplicationResource,
            available_candidates_resource::AvailableCandidatesResource,
            cast_vote_request_resource::CastVoteRequestResource,
            create_application_request_resource::CreateApplicationRequestResource,
            list_applications_query_resource::ListApplicationsQueryResource,
        },
    },
    shared::interfaces::rest::openapi::security::GATEWAY_IDENTITY_HEADER,
};

type ApplicationErrorResponse = (StatusCode, Json<ApplicationErrorResponseResource>);

#[derive(Clone)]
pub struct ApplicationRestControllerState {
    pub command_service: Arc<dyn ApplicationCommandService>,
    pub query_service: Arc<dyn ApplicationQueryService>,
}

pub fn router(state: ApplicationRestControllerState) -> Router {
    Router::new()
        .route(
            "/applications",
            get(list_applications).post(create_application),
        )
        .route(
            "/applications/available/:app_type",
            get(list_available_candidates),
        )
        .route(
            "/applications/:application_id",
            get(get_application)
                .patch(cast_vote)
                .delete(delete_application),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/applications",
    tag = "applications",
    params(
        ("pageType" = String, Query, description = "admin or member"),
        ("x-username" = String, Header, description = "Authenticated username")
    ),
    security(
        ("gatewayIdentity" = [])
    ),
    responses(
        (status = 200, description = "Visible open applications", body = [ApplicationResource]),
        (status = 400, description = "Invalid page type", body = ApplicationErrorResponseResource),
        (status = 401, description = "Viewer may not open this page", body = ApplicationErrorResponseResource),
        (status = 404, description = "Viewer not found", body = ApplicationErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ApplicationErrorResponseResource)
    )
)]
pub async fn list_applications(
    State(state): State<ApplicationRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<ListApplicationsQueryResource>,
) -> Result<Json<Vec<ApplicationResource>>, ApplicationErrorResponse> {
    let viewer = viewer_username(&headers)?;
    let query = ListApplicationsQuery::new(viewer, query.page_type).map_err(map_domain_error)?;

    let applications = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResource::from)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/applications/available/{app_type}",
    tag = "applications",
    params(
        ("app_type" = String, Path, description = "member or admin"),
        ("x-username" = String, Header, description = "Authenticated username")
    ),
    security(
        ("gatewayIdentity" = [])
    ),
    responses(
        (status = 200, description = "Users that can still be proposed", body = AvailableCandidatesResource),
        (status = 400, description = "Invalid application type", body = ApplicationErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ApplicationErrorResponseResource)
    )
)]
pub async fn list_available_candidates(
    State(state): State<ApplicationRestControllerState>,
    headers: HeaderMap,
    Path(app_type): Path<String>,
) -> Result<Json<AvailableCandidatesResource>, ApplicationErrorResponse> {
    viewer_username(&headers)?;
    let query = AvailableCandidatesQuery::new(app_type).map_err(map_domain_error)?;
    let application_type = query.application_type();

    let usernames = state
        .query_service
        .handle_available_candidates(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AvailableCandidatesResource {
        app_type: application_type.as_str().to_string(),
        usernames: usernames
            .into_iter()
            .map(|username| username.value().to_string())
            .collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/applications",
    tag = "applications",
    request_body = CreateApplicationRequestResource,
    params(("x-username" = String, Header, description = "Authenticated username")),
    security(
        ("gatewayIdentity" = [])
    ),
    responses(
        (status = 201, description = "Application created", body = ApplicationResource),
        (status = 400, description = "Invalid payload", body = ApplicationErrorResponseResource),
        (status = 401, description = "Sender may not propose this application", body = ApplicationErrorResponseResource),
        (status = 404, description = "Sender not found", body = ApplicationErrorResponseResource),
        (status = 409, description = "Open application already exists", body = ApplicationErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ApplicationErrorResponseResource)
    )
)]
pub async fn create_application(
    State(state): State<ApplicationRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateApplicationRequestResource>,
) -> Result<(StatusCode, Json<ApplicationResource>), ApplicationErrorResponse> {
    let from_user = viewer_username(&headers)?;
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApplicationErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = CreateApplicationCommand::new(from_user, request.for_user, request.app_type)
        .map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(ApplicationResource::from(created))))
}

#[utoipa::path(
    get,
    path = "/applications/{application_id}",
    tag = "applications",
    params(
        ("application_id" = String, Path, description = "Application identifier"),
        ("x-username" = String, Header, description = "Authenticated username")
    ),
    security(
        ("gatewayIdentity" = [])
    ),
    responses(
        (status = 200, description = "Application", body = ApplicationResource),
        (status = 400, description = "Invalid application id", body = ApplicationErrorResponseResource),
        (status = 404, description = "Application not found", body = ApplicationErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ApplicationErrorResponseResource)
    )
)]
pub async fn get_application(
    State(state): State<ApplicationRestControllerState>,
    headers: HeaderMap,
    Path(application_id): Path<String>,
) -> Result<Json<ApplicationResource>, ApplicationErrorResponse> {
    viewer_username(&headers)?;
    let query = GetApplicationQuery::new(application_id).map_err(map_domain_error)?;

    let application = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApplicationResource::from(application)))
}

#[utoipa::path(
    patch,
    path = "/applications/{application_id}",
    tag = "applications",
    request_body = CastVoteRequestResource,
    params(
        ("application_id" = String, Path, description = "Application identifier"),
        ("x-username" = String, Header, description = "Authenticated username")
    ),
    security(
        ("gatewayIdentity" = [])
    ),
    responses(
        (status = 204, description = "Vote recorded"),
        (status = 400, description = "Invalid payload", body = ApplicationErrorResponseResource),
        (status = 403, description = "Only admins can vote", body = ApplicationErrorResponseResource),
        (status = 404, description = "Application not found or closed", body = ApplicationErrorResponseResource),
        (status = 409, description = "Duplicate vote or redundant unvote", body = ApplicationErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ApplicationErrorResponseResource)
    )
)]
pub async fn cast_vote(
    State(state): State<ApplicationRestControllerState>,
    headers: HeaderMap,
    Path(application_id): Path<String>,
    Json(request): Json<CastVoteRequestResource>,
) -> Result<StatusCode, ApplicationErrorResponse> {
    let voter = viewer_username(&headers)?;
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApplicationErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command =
        CastVoteCommand::new(application_id, voter, request.vote_type).map_err(map_domain_error)?;

    state
        .command_service
        .handle_cast_vote(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/applications/{application_id}",
    tag = "applications",
    params(
        ("application_id" = String, Path, description = "Application identifier"),
        ("x-username" = String, Header, description = "Authenticated username")
    ),
    security(
        ("gatewayIdentity" = [])
    ),
    responses(
        (status = 204, description = "Application deleted or already closed"),
        (status = 400, description = "Invalid application id", body = ApplicationErrorResponseResource),
        (status = 403, description = "Requester is neither the proposer nor an admin", body = ApplicationErrorResponseResource),
        (status = 404, description = "Application not found", body = ApplicationErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ApplicationErrorResponseResource)
    )
)]
pub async fn delete_application(
    State(state): State<ApplicationRestControllerState>,
    headers: HeaderMap,
    Path(application_id): Path<String>,
) -> Result<StatusCode, ApplicationErrorResponse> {
    let requested_by = viewer_username(&headers)?;
    let command = DeleteApplicationCommand::new(application_id, requested_by)
        .map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn viewer_username(headers: &HeaderMap) -> Result<String, ApplicationErrorResponse> {
    headers
        .get(GATEWAY_IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| map_domain_error(ApplicationDomainError::MissingViewerIdentity))
}

fn map_domain_error(error: ApplicationDomainError) -> ApplicationErrorResponse {
    let status = match error {
        ApplicationDomainError::InvalidUsername
        | ApplicationDomainError::InvalidApplicationId
        | ApplicationDomainError::InvalidApplicationType
        | ApplicationDomainError::InvalidPageContext
        | ApplicationDomainError::InvalidVoteType => StatusCode::BAD_REQUEST,
        ApplicationDomainError::MissingViewerIdentity
        | ApplicationDomainError::PageNotAuthorized
        | ApplicationDomainError::ProposalNotAuthorized => StatusCode::UNAUTHORIZED,
        ApplicationDomainError::OnlyAdminsCanVote
        | ApplicationDomainError::DeleteNotAuthorized => StatusCode::FORBIDDEN,
        ApplicationDomainError::UserNotFound | ApplicationDomainError::ApplicationNotFound => {
            StatusCode::NOT_FOUND
        }
        ApplicationDomainError::AlreadyVoted
        | ApplicationDomainError::VoteNotFound
        | ApplicationDomainError::DuplicateOpenApplication
        | ApplicationDomainError::InvalidStatusTransition => StatusCode::CONFLICT,
        ApplicationDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ApplicationErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
