//! Repository for the `payment_methods` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::payment_method::{CreatePaymentMethod, PaymentMethod, UpdatePaymentMethod};

/// Column list for `payment_methods` queries.
const COLUMNS: &str = "id, condominium_id, name, description, requires_receipt, \
                        is_active, created_at";

/// Provides CRUD operations for the payment method catalog.
pub struct PaymentMethodRepo;

impl PaymentMethodRepo {
    /// Insert a new payment method, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePaymentMethod,
    ) -> Result<PaymentMethod, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment_methods (condominium_id, name, description, requires_receipt)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(input.condominium_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.requires_receipt)
            .fetch_one(pool)
            .await
    }

    /// Find a payment method by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PaymentMethod>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_methods WHERE id = $1");
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List payment methods of a condominium ordered by name. Inactive
    /// methods are excluded unless `include_inactive` is set.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<PaymentMethod>, sqlx::Error> {
        let filter = if include_inactive {
            ""
        } else {
            "AND is_active = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM payment_methods \
             WHERE condominium_id = $1 {filter} \
             ORDER BY name"
        );
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(condominium_id)
            .fetch_all(pool)
            .await
    }

    /// Update a payment method. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePaymentMethod,
    ) -> Result<Option<PaymentMethod>, sqlx::Error> {
        let query = format!(
            "UPDATE payment_methods SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                requires_receipt = COALESCE($4, requires_receipt),
                is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.requires_receipt)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
