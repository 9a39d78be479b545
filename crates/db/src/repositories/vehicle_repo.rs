//! Repository for the `vehicles` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::vehicle::{CreateVehicle, Vehicle};

/// Column list for `vehicles` queries.
const COLUMNS: &str = "id, owner_id, plate, kind, make, model, year, color, \
                        is_active, created_at";

/// Provides CRUD operations for resident vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Register a vehicle for a user, returning the created row.
    ///
    /// Fails with a unique violation on `uq_vehicles_plate` when the plate is
    /// already registered.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateVehicle,
    ) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (owner_id, plate, kind, make, model, year, color)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(owner_id)
            .bind(&input.plate)
            .bind(&input.kind)
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// List a user's active vehicles ordered by plate.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles \
             WHERE owner_id = $1 AND is_active = true \
             ORDER BY plate"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Soft-deactivate a vehicle owned by the given user.
    ///
    /// The owner scoping means a user cannot remove someone else's vehicle.
    /// Returns `true` if the row was updated.
    pub async fn deactivate_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE vehicles SET is_active = false \
             WHERE id = $1 AND owner_id = $2 AND is_active = true",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
