//! Repository for the `fee_schedules` table and the billing passes that run
//! off a schedule (fee generation and late charges).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use strata_core::fees;
use strata_core::types::DbId;

use crate::models::fee_schedule::{CreateFeeSchedule, FeeSchedule, UpdateFeeSchedule};

/// Column list for `fee_schedules` queries.
const COLUMNS: &str = "id, condominium_id, period_month, period_year, \
                        base_administration, base_maintenance, base_security, \
                        base_cleaning, late_fee, grace_days, monthly_interest_pct, \
                        due_on, is_active, created_at";

/// Column list for `maintenance_fees` rows touched by the billing passes.
const FEE_COLUMNS: &str = "id, amount_administration, amount_maintenance, amount_security, \
                            amount_cleaning, amount_extras, amount_paid, due_on";

/// A fee row as loaded by the late-charge pass.
#[derive(sqlx::FromRow)]
struct ChargeableFee {
    id: DbId,
    amount_administration: Decimal,
    amount_maintenance: Decimal,
    amount_security: Decimal,
    amount_cleaning: Decimal,
    amount_extras: Decimal,
    amount_paid: Decimal,
    due_on: NaiveDate,
}

/// Provides CRUD operations for fee schedules and runs the per-schedule
/// billing passes.
pub struct FeeScheduleRepo;

impl FeeScheduleRepo {
    /// Insert a new fee schedule, returning the created row.
    ///
    /// Fails with a unique violation on `uq_fee_schedules_period` when the
    /// condominium already has a schedule for the period.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeeSchedule,
    ) -> Result<FeeSchedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO fee_schedules
                (condominium_id, period_month, period_year, base_administration,
                 base_maintenance, base_security, base_cleaning, late_fee,
                 grace_days, monthly_interest_pct, due_on)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeeSchedule>(&query)
            .bind(input.condominium_id)
            .bind(input.period_month)
            .bind(input.period_year)
            .bind(input.base_administration)
            .bind(input.base_maintenance)
            .bind(input.base_security)
            .bind(input.base_cleaning)
            .bind(input.late_fee)
            .bind(input.grace_days)
            .bind(input.monthly_interest_pct)
            .bind(input.due_on)
            .fetch_one(pool)
            .await
    }

    /// Find a fee schedule by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FeeSchedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fee_schedules WHERE id = $1");
        sqlx::query_as::<_, FeeSchedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List fee schedules with optional condominium and year filters, newest
    /// period first.
    pub async fn list(
        pool: &PgPool,
        condominium_id: Option<DbId>,
        period_year: Option<i32>,
    ) -> Result<Vec<FeeSchedule>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if condominium_id.is_some() {
            conditions.push(format!("condominium_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if period_year.is_some() {
            conditions.push(format!("period_year = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM fee_schedules \
             {where_clause} \
             ORDER BY period_year DESC, period_month DESC"
        );

        let mut q = sqlx::query_as::<_, FeeSchedule>(&query);
        if let Some(cid) = condominium_id {
            q = q.bind(cid);
        }
        if let Some(year) = period_year {
            q = q.bind(year);
        }
        q.fetch_all(pool).await
    }

    /// Update a fee schedule. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeeSchedule,
    ) -> Result<Option<FeeSchedule>, sqlx::Error> {
        let query = format!(
            "UPDATE fee_schedules SET
                base_administration = COALESCE($2, base_administration),
                base_maintenance = COALESCE($3, base_maintenance),
                base_security = COALESCE($4, base_security),
                base_cleaning = COALESCE($5, base_cleaning),
                late_fee = COALESCE($6, late_fee),
                grace_days = COALESCE($7, grace_days),
                monthly_interest_pct = COALESCE($8, monthly_interest_pct),
                due_on = COALESCE($9, due_on),
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeeSchedule>(&query)
            .bind(id)
            .bind(input.base_administration)
            .bind(input.base_maintenance)
            .bind(input.base_security)
            .bind(input.base_cleaning)
            .bind(input.late_fee)
            .bind(input.grace_days)
            .bind(input.monthly_interest_pct)
            .bind(input.due_on)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Generate fees for every active unit of the schedule's condominium that
    /// does not have one yet. Base amounts are scaled by each unit type's cost
    /// factor; extras, penalties, and interest start at zero.
    ///
    /// Idempotent: units that already have a fee for this schedule are
    /// skipped, and `uq_fees_unit_schedule` backstops the check. Returns the
    /// number of fees created, or `None` when the schedule does not exist.
    pub async fn generate_fees(
        pool: &PgPool,
        schedule_id: DbId,
        today: NaiveDate,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query =
            format!("SELECT {COLUMNS} FROM fee_schedules WHERE id = $1 FOR UPDATE");
        let Some(schedule) = sqlx::query_as::<_, FeeSchedule>(&lock_query)
            .bind(schedule_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let pending_units: Vec<(DbId, Decimal)> = sqlx::query_as(
            "SELECT u.id, ut.cost_factor \
             FROM units u \
             JOIN unit_types ut ON ut.id = u.unit_type_id \
             WHERE u.condominium_id = $1 \
               AND u.is_active = true \
               AND NOT EXISTS (SELECT 1 FROM maintenance_fees f \
                               WHERE f.unit_id = u.id AND f.schedule_id = $2) \
             ORDER BY u.id",
        )
        .bind(schedule.condominium_id)
        .bind(schedule_id)
        .fetch_all(&mut *tx)
        .await?;

        let mut generated = 0u64;
        for (unit_id, cost_factor) in pending_units {
            let components = fees::scaled_components(
                schedule.base_administration,
                schedule.base_maintenance,
                schedule.base_security,
                schedule.base_cleaning,
                cost_factor,
            );
            let total = components.total();
            let status = fees::derive_status(total, Decimal::ZERO, schedule.due_on, today);

            sqlx::query(
                "INSERT INTO maintenance_fees
                    (unit_id, schedule_id, amount_administration, amount_maintenance,
                     amount_security, amount_cleaning, amount_total, amount_due,
                     status, due_on)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $7, $8, $9)",
            )
            .bind(unit_id)
            .bind(schedule_id)
            .bind(components.administration)
            .bind(components.maintenance)
            .bind(components.security)
            .bind(components.cleaning)
            .bind(total)
            .bind(status.as_str())
            .bind(schedule.due_on)
            .execute(&mut *tx)
            .await?;
            generated += 1;
        }

        tx.commit().await?;
        Ok(Some(generated))
    }

    /// Apply late charges to unpaid fees of a schedule whose due date plus
    /// grace days has passed: penalty = the schedule's flat late fee,
    /// interest = the monthly rate applied to the outstanding amount. Totals
    /// and status are recomputed in the same transaction.
    ///
    /// Idempotent: fees that already carry a penalty or interest are skipped.
    /// Returns the number of fees charged, or `None` when the schedule does
    /// not exist.
    pub async fn apply_late_charges(
        pool: &PgPool,
        schedule_id: DbId,
        today: NaiveDate,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query =
            format!("SELECT {COLUMNS} FROM fee_schedules WHERE id = $1 FOR UPDATE");
        let Some(schedule) = sqlx::query_as::<_, FeeSchedule>(&lock_query)
            .bind(schedule_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let cutoff = schedule.due_on + chrono::Days::new(schedule.grace_days.max(0) as u64);
        if today <= cutoff {
            tx.commit().await?;
            return Ok(Some(0));
        }

        let fee_query = format!(
            "SELECT {FEE_COLUMNS} FROM maintenance_fees \
             WHERE schedule_id = $1 \
               AND amount_due > 0 \
               AND amount_penalties = 0 \
               AND amount_interest = 0 \
             ORDER BY id \
             FOR UPDATE"
        );
        let chargeable: Vec<ChargeableFee> = sqlx::query_as(&fee_query)
            .bind(schedule_id)
            .fetch_all(&mut *tx)
            .await?;

        let mut charged = 0u64;
        for fee in chargeable {
            let outstanding = fee.amount_administration
                + fee.amount_maintenance
                + fee.amount_security
                + fee.amount_cleaning
                + fee.amount_extras
                - fee.amount_paid;
            let (penalty, interest) = fees::late_charges(
                outstanding,
                schedule.late_fee,
                schedule.monthly_interest_pct,
            );
            let total = fee.amount_administration
                + fee.amount_maintenance
                + fee.amount_security
                + fee.amount_cleaning
                + fee.amount_extras
                + penalty
                + interest;
            let due = total - fee.amount_paid;
            let status = fees::derive_status(due, fee.amount_paid, fee.due_on, today);

            sqlx::query(
                "UPDATE maintenance_fees SET
                    amount_penalties = $2,
                    amount_interest = $3,
                    amount_total = $4,
                    amount_due = $5,
                    status = $6
                 WHERE id = $1",
            )
            .bind(fee.id)
            .bind(penalty)
            .bind(interest)
            .bind(total)
            .bind(due)
            .bind(status.as_str())
            .execute(&mut *tx)
            .await?;
            charged += 1;
        }

        tx.commit().await?;
        Ok(Some(charged))
    }
}
