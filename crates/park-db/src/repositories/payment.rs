//! PostgreSQL implementation of PaymentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::{NewPayment, Payment, PaymentStatus};
use park_core::error::DomainError;
use park_core::traits::{PaymentRepository, PaymentWithResident, RepoResult};
use park_core::value_objects::{RecordId, YearMonth};

use crate::models::{PaymentModel, PaymentWithResidentModel};

use super::error::{map_constraint_violation, map_db_error, payment_not_found};

const PAYMENT_COLUMNS: &str =
    "id, resident_id, month, amount, status, paid_at, created_at, updated_at";

/// PostgreSQL implementation of PaymentRepository
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    /// Create a new PgPaymentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Payment>> {
        let result = sqlx::query_as::<_, PaymentModel>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Payment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_with_residents(
        &self,
        status: Option<PaymentStatus>,
        month: Option<&YearMonth>,
    ) -> RepoResult<Vec<PaymentWithResident>> {
        // NULL parameters disable their filter
        let rows = sqlx::query_as::<_, PaymentWithResidentModel>(
            r"
            SELECT p.id, p.resident_id, p.month, p.amount, p.status, p.paid_at,
                   p.created_at, p.updated_at,
                   r.name AS r_name, r.room_number AS r_room_number,
                   r.contact_info AS r_contact_info, r.status AS r_status,
                   r.created_at AS r_created_at, r.updated_at AS r_updated_at
            FROM payments p
            JOIN residents r ON r.id = p.resident_id
            WHERE ($1::TEXT IS NULL OR p.status = $1)
              AND ($2::TEXT IS NULL OR p.month = $2)
            ORDER BY p.month DESC, r.room_number, p.id
            ",
        )
        .bind(status.map(|s| s.as_str()))
        .bind(month.map(ToString::to_string))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(PaymentWithResident::try_from).collect()
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewPayment) -> RepoResult<Payment> {
        let model = sqlx::query_as::<_, PaymentModel>(&format!(
            r"
            INSERT INTO payments (resident_id, month, amount, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {PAYMENT_COLUMNS}
            "
        ))
        .bind(new.resident_id.into_inner())
        .bind(new.month.to_string())
        .bind(new.amount)
        .bind(new.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || DomainError::PaymentExists {
                    resident_id: new.resident_id,
                    month: new.month.to_string(),
                },
                || DomainError::ResidentNotFound(new.resident_id),
            )
        })?;

        Payment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn generate_monthly(&self, month: &YearMonth, amount: i64) -> RepoResult<i64> {
        // One unpaid row per eligible resident: active, holds at least one
        // slot, and has no payment for the month yet. A single set-based
        // statement, so re-running for the same month inserts nothing; the
        // ON CONFLICT arm absorbs a concurrent run that passed NOT EXISTS
        // before this one committed.
        let result = sqlx::query(
            r"
            INSERT INTO payments (resident_id, month, amount, status)
            SELECT r.id, $1, $2, 'unpaid'
            FROM residents r
            WHERE r.status = 'active'
              AND EXISTS (
                  SELECT 1 FROM bicycle_slots s WHERE s.resident_id = r.id
              )
              AND NOT EXISTS (
                  SELECT 1 FROM payments p
                  WHERE p.resident_id = r.id AND p.month = $1
              )
            ON CONFLICT (resident_id, month) DO NOTHING
            ",
        )
        .bind(month.to_string())
        .bind(amount)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() as i64)
    }

    #[instrument(skip(self))]
    async fn mark_paid(&self, id: RecordId, paid_at: DateTime<Utc>) -> RepoResult<Payment> {
        // COALESCE keeps the original collection time when marked twice
        let model = sqlx::query_as::<_, PaymentModel>(&format!(
            r"
            UPDATE payments
            SET status = 'paid', paid_at = COALESCE(paid_at, $2), updated_at = NOW()
            WHERE id = $1
            RETURNING {PAYMENT_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(paid_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| payment_not_found(id))?;

        Payment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn mark_unpaid(&self, id: RecordId) -> RepoResult<Payment> {
        let model = sqlx::query_as::<_, PaymentModel>(&format!(
            r"
            UPDATE payments
            SET status = 'unpaid', paid_at = NULL, updated_at = NOW()
            WHERE id = $1
            RETURNING {PAYMENT_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| payment_not_found(id))?;

        Payment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_unpaid(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments WHERE status = 'unpaid'")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_month(&self, month: &YearMonth) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments WHERE month = $1")
            .bind(month.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPaymentRepository>();
    }
}
