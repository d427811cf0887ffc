pub mod application_id;
pub mod role_promotion;
