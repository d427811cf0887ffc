pub mod application_error_response_resource;
pub mod application_resource;
pub mod available_candidates_resource;
pub mod cast_vote_request_resource;
pub mod create_application_request_resource;
pub mod list_applications_query_resource;
