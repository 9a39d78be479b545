//! User rows and their request/response shapes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// Complete row of the `users` table, password hash included. Never
/// serialized; responses go through [`UserResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub condominium_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User as exposed over the API: role resolved to its name, no hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// Role name, e.g. `"owner"`.
    pub role: String,
    pub role_id: DbId,
    pub condominium_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl UserResponse {
    /// Project a row into the API shape with an already-resolved role name.
    pub fn from_user(user: &User, role: String) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role,
            role_id: user.role_id,
            condominium_id: user.condominium_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            national_id: user.national_id.clone(),
            phone: user.phone.clone(),
            emergency_phone: user.emergency_phone.clone(),
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// Insert shape; the caller hashes the password first.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub condominium_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
}

/// Patch shape; `None` fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<DbId>,
    pub condominium_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
    pub is_active: Option<bool>,
}
