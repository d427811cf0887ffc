pub mod application_approved_event;
pub mod application_created_event;
