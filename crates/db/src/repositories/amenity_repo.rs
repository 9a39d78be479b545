//! Repository for the `amenities` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};

/// Column list for `amenities` queries.
const COLUMNS: &str = "id, condominium_id, name, description, capacity, hourly_rate, \
                        deposit_required, deposit_amount, opens_at, closes_at, \
                        is_active, created_at";

/// Provides CRUD operations for shared amenities.
pub struct AmenityRepo;

impl AmenityRepo {
    /// Insert a new amenity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAmenity) -> Result<Amenity, sqlx::Error> {
        let query = format!(
            "INSERT INTO amenities
                (condominium_id, name, description, capacity, hourly_rate,
                 deposit_required, deposit_amount, opens_at, closes_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(input.condominium_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.capacity)
            .bind(input.hourly_rate)
            .bind(input.deposit_required)
            .bind(input.deposit_amount)
            .bind(input.opens_at)
            .bind(input.closes_at)
            .fetch_one(pool)
            .await
    }

    /// Find an amenity by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amenities WHERE id = $1");
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List amenities of a condominium ordered by name. Inactive amenities are
    /// excluded unless `include_inactive` is set.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Amenity>, sqlx::Error> {
        let filter = if include_inactive {
            ""
        } else {
            "AND is_active = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM amenities \
             WHERE condominium_id = $1 {filter} \
             ORDER BY name"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(condominium_id)
            .fetch_all(pool)
            .await
    }

    /// Update an amenity. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAmenity,
    ) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!(
            "UPDATE amenities SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                capacity = COALESCE($4, capacity),
                hourly_rate = COALESCE($5, hourly_rate),
                deposit_required = COALESCE($6, deposit_required),
                deposit_amount = COALESCE($7, deposit_amount),
                opens_at = COALESCE($8, opens_at),
                closes_at = COALESCE($9, closes_at),
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.capacity)
            .bind(input.hourly_rate)
            .bind(input.deposit_required)
            .bind(input.deposit_amount)
            .bind(input.opens_at)
            .bind(input.closes_at)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate an amenity. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE amenities SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
