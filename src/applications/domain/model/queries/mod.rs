pub mod available_candidates_query;
pub mod get_application_query;
pub mod list_applications_query;
