//! Repository for the `unit_types` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::unit_type::{CreateUnitType, UnitType, UpdateUnitType};

/// Column list for `unit_types` queries.
const COLUMNS: &str = "id, name, description, cost_factor, created_at";

/// Provides CRUD operations for unit types.
pub struct UnitTypeRepo;

impl UnitTypeRepo {
    /// Insert a new unit type, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUnitType) -> Result<UnitType, sqlx::Error> {
        let query = format!(
            "INSERT INTO unit_types (name, description, cost_factor)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnitType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.cost_factor)
            .fetch_one(pool)
            .await
    }

    /// Find a unit type by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UnitType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unit_types WHERE id = $1");
        sqlx::query_as::<_, UnitType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all unit types ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<UnitType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unit_types ORDER BY name");
        sqlx::query_as::<_, UnitType>(&query).fetch_all(pool).await
    }

    /// Update a unit type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnitType,
    ) -> Result<Option<UnitType>, sqlx::Error> {
        let query = format!(
            "UPDATE unit_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                cost_factor = COALESCE($4, cost_factor)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnitType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.cost_factor)
            .fetch_optional(pool)
            .await
    }
}
