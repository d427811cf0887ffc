pub mod application_command_service_impl;
