pub mod application_query_service_impl;
