//! Repository for the `payments` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use strata_core::fees;
use strata_core::types::DbId;

use crate::models::fee::Fee;
use crate::models::payment::{CreatePayment, Payment};

/// Column list for `payments` queries.
const COLUMNS: &str = "id, fee_id, method_id, amount, transaction_ref, receipt_number, \
                        status, paid_at, notes, recorded_by, verified_by, verified_at, \
                        created_at";

/// Column list for the fee row mutated alongside a payment.
const FEE_COLUMNS: &str = "id, unit_id, schedule_id, amount_administration, \
                            amount_maintenance, amount_security, amount_cleaning, \
                            amount_extras, amount_penalties, amount_interest, \
                            amount_total, amount_paid, amount_due, status, due_on, \
                            last_paid_at, created_at";

/// Provides operations for payments against maintenance fees.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a payment and update the fee it pays, atomically.
    ///
    /// Runs in a transaction that locks the fee row, inserts the payment as
    /// `completed`, then recomputes the fee's paid/due amounts and status.
    /// The payment row and the fee totals can never diverge.
    ///
    /// Returns `Ok(None)` when the fee does not exist.
    pub async fn apply(
        pool: &PgPool,
        fee_id: DbId,
        input: &CreatePayment,
        today: NaiveDate,
    ) -> Result<Option<(Payment, Fee)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query =
            format!("SELECT {FEE_COLUMNS} FROM maintenance_fees WHERE id = $1 FOR UPDATE");
        let Some(fee) = sqlx::query_as::<_, Fee>(&lock_query)
            .bind(fee_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let insert_query = format!(
            "INSERT INTO payments
                (fee_id, method_id, amount, transaction_ref, receipt_number,
                 notes, recorded_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let payment = sqlx::query_as::<_, Payment>(&insert_query)
            .bind(fee_id)
            .bind(input.method_id)
            .bind(input.amount)
            .bind(&input.transaction_ref)
            .bind(&input.receipt_number)
            .bind(&input.notes)
            .bind(input.recorded_by)
            .fetch_one(&mut *tx)
            .await?;

        let total = fee.components().total();
        let paid = fee.amount_paid + input.amount;
        let due = total - paid;
        let status = fees::derive_status(due, paid, fee.due_on, today);

        let update_query = format!(
            "UPDATE maintenance_fees SET
                amount_total = $2,
                amount_paid = $3,
                amount_due = $4,
                status = $5,
                last_paid_at = NOW()
             WHERE id = $1
             RETURNING {FEE_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Fee>(&update_query)
            .bind(fee_id)
            .bind(total)
            .bind(paid)
            .bind(due)
            .bind(status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((payment, updated)))
    }

    /// Find a payment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List payments recorded against a fee, most recent first.
    pub async fn list_for_fee(pool: &PgPool, fee_id: DbId) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments \
             WHERE fee_id = $1 \
             ORDER BY paid_at DESC, id DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(fee_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a payment as verified by an administrator.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn verify(
        pool: &PgPool,
        id: DbId,
        verified_by: DbId,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payments SET verified_by = $2, verified_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .bind(verified_by)
            .fetch_optional(pool)
            .await
    }
}
