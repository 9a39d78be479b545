//! Repository for the `cameras` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::camera::{Camera, CreateCamera, UpdateCamera};

/// Column list for `cameras` queries.
const COLUMNS: &str = "id, condominium_id, name, location, ip_address, port, \
                        is_active, installed_at, created_at";

/// Provides CRUD operations for security cameras.
pub struct CameraRepo;

impl CameraRepo {
    /// Register a new camera, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCamera) -> Result<Camera, sqlx::Error> {
        let query = format!(
            "INSERT INTO cameras (condominium_id, name, location, ip_address, port, installed_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(input.condominium_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.ip_address)
            .bind(input.port)
            .bind(input.installed_at)
            .fetch_one(pool)
            .await
    }

    /// Find a camera by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Camera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cameras WHERE id = $1");
        sqlx::query_as::<_, Camera>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cameras of a condominium ordered by name. Inactive cameras are
    /// excluded unless `include_inactive` is set.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Camera>, sqlx::Error> {
        let filter = if include_inactive {
            ""
        } else {
            "AND is_active = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM cameras \
             WHERE condominium_id = $1 {filter} \
             ORDER BY name"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(condominium_id)
            .fetch_all(pool)
            .await
    }

    /// Update a camera. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCamera,
    ) -> Result<Option<Camera>, sqlx::Error> {
        let query = format!(
            "UPDATE cameras SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                ip_address = COALESCE($4, ip_address),
                port = COALESCE($5, port),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.ip_address)
            .bind(input.port)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a camera. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE cameras SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
