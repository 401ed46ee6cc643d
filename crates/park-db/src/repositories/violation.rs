//! PostgreSQL implementation of ViolationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::{NewViolation, ViolationLog};
use park_core::traits::{RepoResult, ViolationRepository};
use park_core::value_objects::RecordId;

use crate::models::ViolationModel;

use super::error::{map_db_error, violation_not_found};

const VIOLATION_COLUMNS: &str =
    "id, location, memo, photo_url, reported_at, created_at, updated_at";

/// PostgreSQL implementation of ViolationRepository
#[derive(Clone)]
pub struct PgViolationRepository {
    pool: PgPool,
}

impl PgViolationRepository {
    /// Create a new PgViolationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViolationRepository for PgViolationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<ViolationLog>> {
        let result = sqlx::query_as::<_, ViolationModel>(&format!(
            "SELECT {VIOLATION_COLUMNS} FROM violation_logs WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ViolationLog::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ViolationLog>> {
        let rows = sqlx::query_as::<_, ViolationModel>(&format!(
            "SELECT {VIOLATION_COLUMNS} FROM violation_logs ORDER BY reported_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ViolationLog::try_from).collect()
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewViolation) -> RepoResult<ViolationLog> {
        let model = sqlx::query_as::<_, ViolationModel>(&format!(
            r"
            INSERT INTO violation_logs (location, memo, photo_url, reported_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {VIOLATION_COLUMNS}
            "
        ))
        .bind(&new.location)
        .bind(&new.memo)
        .bind(&new.photo_url)
        .bind(new.reported_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        ViolationLog::try_from(model)
    }

    #[instrument(skip(self, violation))]
    async fn update(&self, violation: &ViolationLog) -> RepoResult<ViolationLog> {
        let model = sqlx::query_as::<_, ViolationModel>(&format!(
            r"
            UPDATE violation_logs
            SET location = $2, memo = $3, photo_url = $4, reported_at = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {VIOLATION_COLUMNS}
            "
        ))
        .bind(violation.id.into_inner())
        .bind(&violation.location)
        .bind(&violation.memo)
        .bind(&violation.photo_url)
        .bind(violation.reported_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| violation_not_found(violation.id))?;

        ViolationLog::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM violation_logs WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(violation_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM violation_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_reported_since(&self, since: DateTime<Utc>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM violation_logs WHERE reported_at >= $1",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
