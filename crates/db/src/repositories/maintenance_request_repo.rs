//! Repository for the `maintenance_requests` table.

use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::maintenance::{
    CreateMaintenanceRequest, MaintenanceRequest, UpdateMaintenanceRequest,
};

/// Column list for `maintenance_requests` queries.
const COLUMNS: &str = "id, condominium_id, category_id, requested_by, unit_id, \
                        amenity_id, title, description, location, priority, status, \
                        assigned_to, assigned_by, assigned_at, scheduled_for, \
                        completed_at, estimated_cost, actual_cost, rating, \
                        rating_comment, created_at";

/// Provides CRUD operations for maintenance work orders.
pub struct MaintenanceRequestRepo;

impl MaintenanceRequestRepo {
    /// File a new request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenanceRequest,
    ) -> Result<MaintenanceRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_requests
                (condominium_id, category_id, requested_by, unit_id, amenity_id,
                 title, description, location, priority)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(input.condominium_id)
            .bind(input.category_id)
            .bind(input.requested_by)
            .bind(input.unit_id)
            .bind(input.amenity_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_requests WHERE id = $1");
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests for a condominium, newest first, with optional status,
    /// priority, and requester filters.
    ///
    /// `requested_by` limits to one user's requests (resident view); the
    /// other filters serve the staff view.
    pub async fn list_for_condominium(
        pool: &PgPool,
        condominium_id: DbId,
        requested_by: Option<DbId>,
        status: Option<&str>,
        priority: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MaintenanceRequest>, sqlx::Error> {
        let mut conditions = vec!["condominium_id = $1".to_string()];
        let mut bind_idx: u32 = 2;

        if requested_by.is_some() {
            conditions.push(format!("requested_by = ${bind_idx}"));
            bind_idx += 1;
        }
        if status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if priority.is_some() {
            conditions.push(format!("priority = ${bind_idx}"));
            bind_idx += 1;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_requests \
             WHERE {} \
             ORDER BY created_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            conditions.join(" AND "),
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, MaintenanceRequest>(&query).bind(condominium_id);
        if let Some(uid) = requested_by {
            q = q.bind(uid);
        }
        if let Some(st) = status {
            q = q.bind(st);
        }
        if let Some(pr) = priority {
            q = q.bind(pr);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Apply a staff update. Only non-`None` fields in `input` are applied.
    ///
    /// Setting `assigned_to` also records who assigned and when; moving the
    /// status to `completed` stamps `completed_at` once. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenanceRequest,
        actor_id: DbId,
    ) -> Result<Option<MaintenanceRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance_requests SET
                status = COALESCE($2, status),
                priority = COALESCE($3, priority),
                assigned_to = COALESCE($4, assigned_to),
                assigned_by = CASE WHEN $4 IS NOT NULL THEN $5 ELSE assigned_by END,
                assigned_at = CASE WHEN $4 IS NOT NULL THEN NOW() ELSE assigned_at END,
                scheduled_for = COALESCE($6, scheduled_for),
                estimated_cost = COALESCE($7, estimated_cost),
                actual_cost = COALESCE($8, actual_cost),
                completed_at = CASE WHEN COALESCE($2, status) = 'completed'
                                    THEN COALESCE(completed_at, NOW())
                                    ELSE completed_at END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.assigned_to)
            .bind(actor_id)
            .bind(input.scheduled_for)
            .bind(input.estimated_cost)
            .bind(input.actual_cost)
            .fetch_optional(pool)
            .await
    }

    /// Record the requester's rating of a completed request.
    ///
    /// Returns `None` when the request does not exist, was filed by someone
    /// else, or is not completed.
    pub async fn rate(
        pool: &PgPool,
        id: DbId,
        requested_by: DbId,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<Option<MaintenanceRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance_requests SET rating = $3, rating_comment = $4
             WHERE id = $1 AND requested_by = $2 AND status = 'completed'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(id)
            .bind(requested_by)
            .bind(rating)
            .bind(comment)
            .fetch_optional(pool)
            .await
    }
}
