pub mod password_hash;
pub mod plain_password;
