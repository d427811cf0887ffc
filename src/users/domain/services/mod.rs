pub mod credential_hasher;
pub mod user_command_service;
pub mod user_query_service;
