//! Repository for the `residencies` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::residency::{CreateResidency, Residency, UpdateResidency};

/// Column list for `residencies` queries.
const COLUMNS: &str = "id, user_id, unit_id, is_owner, ownership_share, starts_on, \
                        ends_on, is_active, created_at";

/// Provides CRUD operations for residencies (user-unit links).
pub struct ResidencyRepo;

impl ResidencyRepo {
    /// Insert a new residency, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateResidency) -> Result<Residency, sqlx::Error> {
        let query = format!(
            "INSERT INTO residencies (user_id, unit_id, is_owner, ownership_share, starts_on)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Residency>(&query)
            .bind(input.user_id)
            .bind(input.unit_id)
            .bind(input.is_owner)
            .bind(input.ownership_share)
            .bind(input.starts_on)
            .fetch_one(pool)
            .await
    }

    /// Find a residency by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Residency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM residencies WHERE id = $1");
        sqlx::query_as::<_, Residency>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List residencies for a unit, active first, then newest start date first.
    pub async fn list_for_unit(
        pool: &PgPool,
        unit_id: DbId,
    ) -> Result<Vec<Residency>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM residencies \
             WHERE unit_id = $1 \
             ORDER BY is_active DESC, starts_on DESC"
        );
        sqlx::query_as::<_, Residency>(&query)
            .bind(unit_id)
            .fetch_all(pool)
            .await
    }

    /// List active residencies for a user, oldest start date first.
    pub async fn list_active_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Residency>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM residencies \
             WHERE user_id = $1 AND is_active = true \
             ORDER BY starts_on"
        );
        sqlx::query_as::<_, Residency>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a user's primary residency: the active one with the earliest
    /// start date.
    pub async fn primary_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Residency>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM residencies \
             WHERE user_id = $1 AND is_active = true \
             ORDER BY starts_on \
             LIMIT 1"
        );
        sqlx::query_as::<_, Residency>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a user currently resides in a unit.
    pub async fn user_resides_in_unit(
        pool: &PgPool,
        user_id: DbId,
        unit_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM residencies \
             WHERE user_id = $1 AND unit_id = $2 AND is_active = true",
        )
        .bind(user_id)
        .bind(unit_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0) > 0)
    }

    /// Update a residency. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResidency,
    ) -> Result<Option<Residency>, sqlx::Error> {
        let query = format!(
            "UPDATE residencies SET
                is_owner = COALESCE($2, is_owner),
                ownership_share = COALESCE($3, ownership_share),
                starts_on = COALESCE($4, starts_on)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Residency>(&query)
            .bind(id)
            .bind(input.is_owner)
            .bind(input.ownership_share)
            .bind(input.starts_on)
            .fetch_optional(pool)
            .await
    }

    /// End a residency: set `ends_on` and clear the active flag.
    ///
    /// Returns `None` if the residency does not exist or is already ended.
    pub async fn end(
        pool: &PgPool,
        id: DbId,
        ends_on: NaiveDate,
    ) -> Result<Option<Residency>, sqlx::Error> {
        let query = format!(
            "UPDATE residencies SET ends_on = $2, is_active = false
             WHERE id = $1 AND is_active = true
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Residency>(&query)
            .bind(id)
            .bind(ends_on)
            .fetch_optional(pool)
            .await
    }
}
