pub mod application_audit_event_kind;
pub mod application_domain_error;
pub mod application_status;
pub mod application_type;
pub mod page_context;
pub mod vote_type;
