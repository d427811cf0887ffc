pub mod user_command_service_impl;
