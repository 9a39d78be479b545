//! Visitor registry model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// A visitor row from the `visitors` table.
///
/// A visitor is "on premises" while `left_at` is `NULL`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Visitor {
    pub id: DbId,
    pub condominium_id: DbId,
    pub unit_id: DbId,
    pub authorized_by: DbId,
    pub name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub reason: String,
    pub vehicle_plate: Option<String>,
    pub entered_at: Timestamp,
    pub left_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for registering a visitor.
pub struct CreateVisitor {
    pub condominium_id: DbId,
    pub unit_id: DbId,
    pub authorized_by: DbId,
    pub name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub reason: String,
    pub vehicle_plate: Option<String>,
}
