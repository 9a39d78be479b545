//! Canonical role names.
//!
//! Must agree with the rows seeded by `20260612000001_create_roles_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_OWNER: &str = "owner";
pub const ROLE_TENANT: &str = "tenant";
pub const ROLE_SECURITY: &str = "security";
pub const ROLE_MAINTENANCE: &str = "maintenance";

/// Whether the role grants access to the security/operations surface
/// (cameras, alerts, visitor checkout, access logs, maintenance dispatch).
pub fn is_staff(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_SECURITY || role == ROLE_MAINTENANCE
}

/// Whether the role is a resident role (owner or tenant).
pub fn is_resident(role: &str) -> bool {
    role == ROLE_OWNER || role == ROLE_TENANT
}

/// The announcement audience group a role belongs to. Staff roles only
/// match posts addressed to `all`.
pub fn audience_for_role(role: &str) -> &'static str {
    match role {
        ROLE_OWNER => "owners",
        ROLE_TENANT => "tenants",
        _ => "all",
    }
}
