pub mod applications;
pub mod config;
pub mod error;
pub mod server;
pub mod shared;
pub mod telemetry;
pub mod users;
