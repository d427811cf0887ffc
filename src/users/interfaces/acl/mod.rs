pub mod users_facade;
