//! Repository for the `maintenance_fees` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::fee::Fee;

/// Column list for `maintenance_fees` queries.
const COLUMNS: &str = "id, unit_id, schedule_id, amount_administration, \
                        amount_maintenance, amount_security, amount_cleaning, \
                        amount_extras, amount_penalties, amount_interest, \
                        amount_total, amount_paid, amount_due, status, due_on, \
                        last_paid_at, created_at";

/// Column list with the `f.` alias (used in JOIN queries).
const JOINED_COLUMNS: &str = "f.id, f.unit_id, f.schedule_id, f.amount_administration, \
                               f.amount_maintenance, f.amount_security, f.amount_cleaning, \
                               f.amount_extras, f.amount_penalties, f.amount_interest, \
                               f.amount_total, f.amount_paid, f.amount_due, f.status, \
                               f.due_on, f.last_paid_at, f.created_at";

/// Provides read operations for maintenance fees.
///
/// Fee rows are created by the schedule generation pass and mutated only by
/// the billing passes and payment application, which own the totals/status
/// recomputation.
pub struct FeeRepo;

impl FeeRepo {
    /// Find a fee by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_fees WHERE id = $1");
        sqlx::query_as::<_, Fee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List fees with optional unit and status filters, newest due date
    /// first (admin view).
    pub async fn list(
        pool: &PgPool,
        unit_id: Option<DbId>,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Fee>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if unit_id.is_some() {
            conditions.push(format!("unit_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_fees \
             {where_clause} \
             ORDER BY due_on DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Fee>(&query);
        if let Some(uid) = unit_id {
            q = q.bind(uid);
        }
        if let Some(st) = status {
            q = q.bind(st);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// List fees for every unit the user actively resides in, newest due
    /// date first (resident view).
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Fee>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM maintenance_fees f \
             JOIN residencies r ON r.unit_id = f.unit_id \
             WHERE r.user_id = $1 AND r.is_active = true \
             ORDER BY f.due_on DESC, f.id DESC"
        );
        sqlx::query_as::<_, Fee>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
