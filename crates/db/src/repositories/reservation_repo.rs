//! Repository for the `reservations` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use strata_core::types::DbId;

use crate::models::reservation::{CreateReservation, Reservation};

/// Column list for `reservations` queries.
const COLUMNS: &str = "id, amenity_id, user_id, reserved_on, starts_at, ends_at, \
                        party_size, purpose, notes, status, total_amount, \
                        deposit_paid, created_at";

/// Provides CRUD operations for amenity reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a reservation if its slot is free.
    ///
    /// Runs in a transaction that first locks the amenity row, so two
    /// concurrent requests for the same amenity serialize and cannot both
    /// pass the overlap check. Two slots overlap when one starts before the
    /// other ends on the same date; back-to-back slots do not conflict.
    ///
    /// Returns `Ok(None)` when a blocking reservation (status `pending` or
    /// `confirmed`) already occupies part of the slot.
    pub async fn create_checked(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Serialization point for concurrent bookings of this amenity.
        sqlx::query_scalar::<_, DbId>("SELECT id FROM amenities WHERE id = $1 FOR UPDATE")
            .bind(input.amenity_id)
            .fetch_one(&mut *tx)
            .await?;

        let conflicts: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations \
             WHERE amenity_id = $1 \
               AND reserved_on = $2 \
               AND status IN ('pending', 'confirmed') \
               AND starts_at < $4 \
               AND ends_at > $3",
        )
        .bind(input.amenity_id)
        .bind(input.reserved_on)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .fetch_one(&mut *tx)
        .await?;

        if conflicts.unwrap_or(0) > 0 {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO reservations
                (amenity_id, user_id, reserved_on, starts_at, ends_at,
                 party_size, purpose, notes, status, total_amount)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(input.amenity_id)
            .bind(input.user_id)
            .bind(input.reserved_on)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(input.party_size)
            .bind(&input.purpose)
            .bind(&input.notes)
            .bind(&input.status)
            .bind(input.total_amount)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(reservation))
    }

    /// Find a reservation by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reservations with optional filters, newest slot first.
    ///
    /// `user_id` limits to one user's reservations (resident view); the other
    /// filters serve the admin view.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
        amenity_id: Option<DbId>,
        reserved_on: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if user_id.is_some() {
            conditions.push(format!("user_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if amenity_id.is_some() {
            conditions.push(format!("amenity_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if reserved_on.is_some() {
            conditions.push(format!("reserved_on = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM reservations \
             {where_clause} \
             ORDER BY reserved_on DESC, starts_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Reservation>(&query);
        if let Some(uid) = user_id {
            q = q.bind(uid);
        }
        if let Some(aid) = amenity_id {
            q = q.bind(aid);
        }
        if let Some(date) = reserved_on {
            q = q.bind(date);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Cancel a reservation, freeing its slot.
    ///
    /// Only `pending` or `confirmed` reservations can be cancelled. Returns
    /// `None` when the reservation does not exist or is no longer cancellable.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET status = 'cancelled'
             WHERE id = $1 AND status IN ('pending', 'confirmed')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
