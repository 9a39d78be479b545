//! Repository for the `maintenance_categories` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::maintenance::{
    CreateMaintenanceCategory, MaintenanceCategory, UpdateMaintenanceCategory,
};

/// Column list for `maintenance_categories` queries.
const COLUMNS: &str = "id, condominium_id, name, description, is_preventive, \
                        estimated_cost, is_active, created_at";

/// Provides CRUD operations for maintenance categories.
pub struct MaintenanceCategoryRepo;

impl MaintenanceCategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// Fails with a unique violation on `uq_maintenance_categories_name` when
    /// the name is already used within the condominium.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenanceCategory,
    ) -> Result<MaintenanceCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_categories
                (condominium_id, name, description, is_preventive, estimated_cost)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceCategory>(&query)
            .bind(input.condominium_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_preventive)
            .bind(input.estimated_cost)
            .fetch_one(pool)
            .await
    }

    /// Find a category by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_categories WHERE id = $1");
        sqlx::query_as::<_, MaintenanceCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List categories of a condominium ordered by name. Inactive categories
    /// are excluded unless `include_inactive` is set.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<MaintenanceCategory>, sqlx::Error> {
        let filter = if include_inactive {
            ""
        } else {
            "AND is_active = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_categories \
             WHERE condominium_id = $1 {filter} \
             ORDER BY name"
        );
        sqlx::query_as::<_, MaintenanceCategory>(&query)
            .bind(condominium_id)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenanceCategory,
    ) -> Result<Option<MaintenanceCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance_categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_preventive = COALESCE($4, is_preventive),
                estimated_cost = COALESCE($5, estimated_cost),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_preventive)
            .bind(input.estimated_cost)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
