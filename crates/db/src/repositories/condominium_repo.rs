//! Repository for the `condominiums` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::condominium::{Condominium, CreateCondominium, UpdateCondominium};

/// Column list for `condominiums` queries.
const COLUMNS: &str = "id, name, address, city, country, phone, email, tax_id, \
                        is_active, created_at, updated_at";

/// Provides CRUD operations for condominiums.
pub struct CondominiumRepo;

impl CondominiumRepo {
    /// Insert a new condominium, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCondominium,
    ) -> Result<Condominium, sqlx::Error> {
        let query = format!(
            "INSERT INTO condominiums (name, address, city, country, phone, email, tax_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Condominium>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.country)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.tax_id)
            .fetch_one(pool)
            .await
    }

    /// Find a condominium by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Condominium>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM condominiums WHERE id = $1");
        sqlx::query_as::<_, Condominium>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List condominiums ordered by name. Inactive ones are excluded unless
    /// `include_inactive` is set.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<Condominium>, sqlx::Error> {
        let filter = if include_inactive {
            ""
        } else {
            "WHERE is_active = true"
        };
        let query = format!("SELECT {COLUMNS} FROM condominiums {filter} ORDER BY name");
        sqlx::query_as::<_, Condominium>(&query).fetch_all(pool).await
    }

    /// Update a condominium. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCondominium,
    ) -> Result<Option<Condominium>, sqlx::Error> {
        let query = format!(
            "UPDATE condominiums SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                city = COALESCE($4, city),
                country = COALESCE($5, country),
                phone = COALESCE($6, phone),
                email = COALESCE($7, email),
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Condominium>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.country)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a condominium. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE condominiums SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
