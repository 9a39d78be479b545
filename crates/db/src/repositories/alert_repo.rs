//! Repository for the `security_alerts` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::alert::{CreateAlert, SecurityAlert};

/// Column list for `security_alerts` queries.
const COLUMNS: &str = "id, condominium_id, camera_id, alert_type, severity, \
                        description, occurred_at, is_reviewed, reviewed_by, \
                        reviewed_at, action_taken, created_at";

/// Provides CRUD operations for security alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Raise a new alert, returning the created row.
    ///
    /// `occurred_at` defaults to now when the caller does not supply one.
    pub async fn create(pool: &PgPool, input: &CreateAlert) -> Result<SecurityAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO security_alerts
                (condominium_id, camera_id, alert_type, severity, description, occurred_at)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SecurityAlert>(&query)
            .bind(input.condominium_id)
            .bind(input.camera_id)
            .bind(&input.alert_type)
            .bind(&input.severity)
            .bind(&input.description)
            .bind(input.occurred_at)
            .fetch_one(pool)
            .await
    }

    /// Find an alert by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SecurityAlert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM security_alerts WHERE id = $1");
        sqlx::query_as::<_, SecurityAlert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List alerts for a condominium, most recent first.
    ///
    /// When `unreviewed_only` is `true`, only alerts with `is_reviewed = false`
    /// are returned; `severity` narrows to one severity level.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        unreviewed_only: bool,
        severity: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SecurityAlert>, sqlx::Error> {
        let mut conditions = vec!["condominium_id = $1".to_string()];
        let mut bind_idx: u32 = 2;

        if unreviewed_only {
            conditions.push("is_reviewed = false".to_string());
        }
        if severity.is_some() {
            conditions.push(format!("severity = ${bind_idx}"));
            bind_idx += 1;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM security_alerts \
             WHERE {} \
             ORDER BY occurred_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            conditions.join(" AND "),
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, SecurityAlert>(&query).bind(condominium_id);
        if let Some(sev) = severity {
            q = q.bind(sev);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Mark an alert as reviewed, recording the reviewer and any action taken.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        reviewed_by: DbId,
        action_taken: Option<&str>,
    ) -> Result<Option<SecurityAlert>, sqlx::Error> {
        let query = format!(
            "UPDATE security_alerts SET
                is_reviewed = true,
                reviewed_by = $2,
                reviewed_at = NOW(),
                action_taken = COALESCE($3, action_taken)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SecurityAlert>(&query)
            .bind(id)
            .bind(reviewed_by)
            .bind(action_taken)
            .fetch_optional(pool)
            .await
    }
}
