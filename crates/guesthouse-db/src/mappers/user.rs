//! User entity <-> model mapper

use guesthouse_core::entities::{User, UserRole};
use guesthouse_core::value_objects::{Lifecycle, Snowflake};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            display_name: model.display_name,
            role: UserRole::from(model.role),
            lifecycle: Lifecycle::from(model.lifecycle),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert User entity reference to values for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub username: &'a str,
    pub display_name: &'a str,
    pub password_hash: &'a str,
    pub role: i16,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            display_name: &user.display_name,
            password_hash,
            role: user.role.as_i16(),
        }
    }
}

/// Convert User entity reference to values for database update
pub struct UserUpdate<'a> {
    pub id: i64,
    pub display_name: &'a str,
    pub role: i16,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            display_name: &user.display_name,
            role: user.role.as_i16(),
        }
    }
}
