pub mod sqlx_application_audit_event_repository_impl;
pub mod sqlx_application_repository_impl;
