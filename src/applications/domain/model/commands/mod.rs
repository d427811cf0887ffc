pub mod cast_vote_command;
pub mod create_application_command;
pub mod delete_application_command;
