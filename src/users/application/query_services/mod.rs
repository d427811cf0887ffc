pub mod user_query_service_impl;
