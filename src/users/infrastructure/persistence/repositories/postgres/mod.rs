pub mod sqlx_user_repository_impl;
