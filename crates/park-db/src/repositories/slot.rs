//! PostgreSQL implementation of SlotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::{BicycleSlot, NewSlot, SlotStatus};
use park_core::error::DomainError;
use park_core::traits::{RepoResult, SlotRepository, SlotWithResident};
use park_core::value_objects::RecordId;

use crate::models::{SlotModel, SlotWithResidentModel};

use super::error::{map_db_error, map_unique_violation, slot_not_found};

const SLOT_COLUMNS: &str = "id, slot_code, location, resident_id, status, created_at, updated_at";

/// PostgreSQL implementation of SlotRepository
#[derive(Clone)]
pub struct PgSlotRepository {
    pool: PgPool,
}

impl PgSlotRepository {
    /// Create a new PgSlotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PgSlotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<BicycleSlot>> {
        let result = sqlx::query_as::<_, SlotModel>(&format!(
            "SELECT {SLOT_COLUMNS} FROM bicycle_slots WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(BicycleSlot::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_with_residents(&self) -> RepoResult<Vec<SlotWithResident>> {
        let rows = sqlx::query_as::<_, SlotWithResidentModel>(
            r"
            SELECT s.id, s.slot_code, s.location, s.resident_id, s.status,
                   s.created_at, s.updated_at,
                   r.id AS r_id, r.name AS r_name, r.room_number AS r_room_number,
                   r.contact_info AS r_contact_info, r.status AS r_status,
                   r.created_at AS r_created_at, r.updated_at AS r_updated_at
            FROM bicycle_slots s
            LEFT JOIN residents r ON r.id = s.resident_id
            ORDER BY s.slot_code
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(SlotWithResident::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_available(&self) -> RepoResult<Vec<BicycleSlot>> {
        let rows = sqlx::query_as::<_, SlotModel>(&format!(
            r"
            SELECT {SLOT_COLUMNS}
            FROM bicycle_slots
            WHERE status = 'available' AND resident_id IS NULL
            ORDER BY slot_code
            "
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(BicycleSlot::try_from).collect()
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewSlot) -> RepoResult<BicycleSlot> {
        let model = sqlx::query_as::<_, SlotModel>(&format!(
            r"
            INSERT INTO bicycle_slots (slot_code, location, status)
            VALUES ($1, $2, $3)
            RETURNING {SLOT_COLUMNS}
            "
        ))
        .bind(&new.slot_code)
        .bind(&new.location)
        .bind(new.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlotCodeExists(new.slot_code.clone())))?;

        BicycleSlot::try_from(model)
    }

    #[instrument(skip(self, slot))]
    async fn update(&self, slot: &BicycleSlot) -> RepoResult<BicycleSlot> {
        let model = sqlx::query_as::<_, SlotModel>(&format!(
            r"
            UPDATE bicycle_slots
            SET slot_code = $2, location = $3, status = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING {SLOT_COLUMNS}
            "
        ))
        .bind(slot.id.into_inner())
        .bind(&slot.slot_code)
        .bind(&slot.location)
        .bind(slot.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlotCodeExists(slot.slot_code.clone())))?
        .ok_or_else(|| slot_not_found(slot.id))?;

        BicycleSlot::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM bicycle_slots WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(slot_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn release(&self, id: RecordId) -> RepoResult<BicycleSlot> {
        // Only an occupied slot transitions; anything else is resolved by
        // reading the current row afterwards.
        let released = sqlx::query_as::<_, SlotModel>(&format!(
            r"
            UPDATE bicycle_slots
            SET resident_id = NULL, status = 'available', updated_at = NOW()
            WHERE id = $1 AND status = 'occupied'
            RETURNING {SLOT_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = released {
            return BicycleSlot::try_from(model);
        }

        let current = self.find_by_id(id).await?.ok_or_else(|| slot_not_found(id))?;
        resolve_release_miss(current)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bicycle_slots")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_available(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bicycle_slots WHERE status = 'available' AND resident_id IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_occupied(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bicycle_slots WHERE status = 'occupied'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

/// Resolve a release whose compare-and-swap matched no row.
///
/// `Available` means the slot was already vacant, a no-op. `Occupied`
/// means an assignment committed between the update and the re-read;
/// retrying would strip that fresh assignment, so it is a conflict.
fn resolve_release_miss(current: BicycleSlot) -> RepoResult<BicycleSlot> {
    match current.status {
        SlotStatus::Available => Ok(current),
        SlotStatus::Maintenance => Err(DomainError::SlotUnderMaintenance(current.id)),
        SlotStatus::Occupied => Err(DomainError::SlotReassigned(current.id)),
    }
}
