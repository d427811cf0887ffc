pub mod persistence;
pub mod security;
