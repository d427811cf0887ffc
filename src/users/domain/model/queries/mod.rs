pub mod authenticate_user_query;
pub mod get_user_role_query;
