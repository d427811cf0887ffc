pub mod application_rest_controller;
