//! Repository for the `access_logs` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::access_log::{AccessLog, CreateAccessLog};

/// Column list for `access_logs` queries.
const COLUMNS: &str = "id, condominium_id, user_id, visitor_id, vehicle_id, camera_id, \
                        direction, method, occurred_at, is_authorized, notes, created_at";

/// Provides operations for the access log. Entries are append-only.
pub struct AccessLogRepo;

impl AccessLogRepo {
    /// Record an access event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAccessLog) -> Result<AccessLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO access_logs
                (condominium_id, user_id, visitor_id, vehicle_id, camera_id,
                 direction, method, is_authorized, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccessLog>(&query)
            .bind(input.condominium_id)
            .bind(input.user_id)
            .bind(input.visitor_id)
            .bind(input.vehicle_id)
            .bind(input.camera_id)
            .bind(&input.direction)
            .bind(&input.method)
            .bind(input.is_authorized)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List access events for a condominium, most recent first, with optional
    /// user and direction filters.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        user_id: Option<DbId>,
        direction: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AccessLog>, sqlx::Error> {
        let mut conditions = vec!["condominium_id = $1".to_string()];
        let mut bind_idx: u32 = 2;

        if user_id.is_some() {
            conditions.push(format!("user_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if direction.is_some() {
            conditions.push(format!("direction = ${bind_idx}"));
            bind_idx += 1;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM access_logs \
             WHERE {} \
             ORDER BY occurred_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            conditions.join(" AND "),
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, AccessLog>(&query).bind(condominium_id);
        if let Some(uid) = user_id {
            q = q.bind(uid);
        }
        if let Some(dir) = direction {
            q = q.bind(dir);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }
}
