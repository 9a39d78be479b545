//! Repository for the `units` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::unit::{CreateUnit, Unit, UpdateUnit};

/// Column list for `units` queries.
const COLUMNS: &str = "id, condominium_id, unit_type_id, number, floor, block, \
                        area_m2, bedrooms, bathrooms, ownership_share, is_active, \
                        created_at";

/// Provides CRUD operations for units.
pub struct UnitRepo;

impl UnitRepo {
    /// Insert a new unit, returning the created row.
    ///
    /// Fails with a unique violation on `uq_units_condominium_number` when the
    /// number is already taken within the condominium.
    pub async fn create(pool: &PgPool, input: &CreateUnit) -> Result<Unit, sqlx::Error> {
        let query = format!(
            "INSERT INTO units
                (condominium_id, unit_type_id, number, floor, block, area_m2,
                 bedrooms, bathrooms, ownership_share)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(input.condominium_id)
            .bind(input.unit_type_id)
            .bind(&input.number)
            .bind(input.floor)
            .bind(&input.block)
            .bind(input.area_m2)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.ownership_share)
            .fetch_one(pool)
            .await
    }

    /// Find a unit by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE id = $1");
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List units of a condominium ordered by number. Inactive units are
    /// excluded unless `include_inactive` is set.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Unit>, sqlx::Error> {
        let filter = if include_inactive {
            ""
        } else {
            "AND is_active = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM units \
             WHERE condominium_id = $1 {filter} \
             ORDER BY number"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(condominium_id)
            .fetch_all(pool)
            .await
    }

    /// Update a unit. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnit,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!(
            "UPDATE units SET
                unit_type_id = COALESCE($2, unit_type_id),
                number = COALESCE($3, number),
                floor = COALESCE($4, floor),
                block = COALESCE($5, block),
                area_m2 = COALESCE($6, area_m2),
                bedrooms = COALESCE($7, bedrooms),
                bathrooms = COALESCE($8, bathrooms),
                ownership_share = COALESCE($9, ownership_share),
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(input.unit_type_id)
            .bind(&input.number)
            .bind(input.floor)
            .bind(&input.block)
            .bind(input.area_m2)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.ownership_share)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a unit. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE units SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
