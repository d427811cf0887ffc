pub mod user_directory_facade_real_impl;
