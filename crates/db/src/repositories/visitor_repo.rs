//! Repository for the `visitors` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::visitor::{CreateVisitor, Visitor};

/// Column list for `visitors` queries.
const COLUMNS: &str = "id, condominium_id, unit_id, authorized_by, name, national_id, \
                        phone, reason, vehicle_plate, entered_at, left_at, created_at";

/// Provides CRUD operations for the visitor registry.
pub struct VisitorRepo;

impl VisitorRepo {
    /// Register a visitor entering the premises, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVisitor) -> Result<Visitor, sqlx::Error> {
        let query = format!(
            "INSERT INTO visitors
                (condominium_id, unit_id, authorized_by, name, national_id,
                 phone, reason, vehicle_plate)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visitor>(&query)
            .bind(input.condominium_id)
            .bind(input.unit_id)
            .bind(input.authorized_by)
            .bind(&input.name)
            .bind(&input.national_id)
            .bind(&input.phone)
            .bind(&input.reason)
            .bind(&input.vehicle_plate)
            .fetch_one(pool)
            .await
    }

    /// Find a visitor by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Visitor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visitors WHERE id = $1");
        sqlx::query_as::<_, Visitor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List visitors for a condominium, most recent entry first.
    ///
    /// When `on_premises_only` is `true`, only visitors who have not left
    /// (`left_at IS NULL`) are returned. `authorized_by` narrows the list to
    /// visitors a specific resident authorized.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        on_premises_only: bool,
        authorized_by: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Visitor>, sqlx::Error> {
        let mut conditions = vec!["condominium_id = $1".to_string()];
        let mut bind_idx: u32 = 2;

        if on_premises_only {
            conditions.push("left_at IS NULL".to_string());
        }
        if authorized_by.is_some() {
            conditions.push(format!("authorized_by = ${bind_idx}"));
            bind_idx += 1;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM visitors \
             WHERE {} \
             ORDER BY entered_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            conditions.join(" AND "),
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Visitor>(&query).bind(condominium_id);
        if let Some(uid) = authorized_by {
            q = q.bind(uid);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Check a visitor out by setting `left_at`.
    ///
    /// Returns `None` if the visitor does not exist or already left.
    pub async fn checkout(pool: &PgPool, id: DbId) -> Result<Option<Visitor>, sqlx::Error> {
        let query = format!(
            "UPDATE visitors SET left_at = NOW()
             WHERE id = $1 AND left_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visitor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
