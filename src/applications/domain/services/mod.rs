pub mod access_policy;
pub mod application_command_service;
pub mod application_query_service;
