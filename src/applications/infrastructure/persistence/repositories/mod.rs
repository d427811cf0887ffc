pub mod application_audit_event_repository;
pub mod application_repository;
pub mod postgres;
