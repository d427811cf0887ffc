pub mod register_user_command;
