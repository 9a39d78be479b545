//! Extractors carrying authentication ([`auth::AuthUser`]) and role
//! gates ([`rbac::RequireAdmin`], [`rbac::RequireStaff`]).

pub mod auth;
pub mod rbac;
