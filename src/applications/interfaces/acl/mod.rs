pub mod user_directory_facade;
