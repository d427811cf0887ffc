pub mod get_user_role_query_resource;
pub mod login_request_resource;
pub mod register_user_request_resource;
pub mod user_resource;
pub mod users_error_response_resource;
pub mod user_role_resource;
