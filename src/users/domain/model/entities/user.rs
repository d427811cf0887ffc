use chrono::{DateTime, Utc};

use crate::{
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
    users::domain::model::value_objects::password_hash::PasswordHash,
};

#[derive(Clone, Debug)]
pub struct User {
    username: Username,
    password_hash: PasswordHash,
    role: UserRole,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new_registered(
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            role: UserRole::default(),
            created_at,
        }
    }

    pub fn restore(
        username: Username,
        password_hash: PasswordHash,
        role: UserRole,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            role,
            created_at,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
