//! PostgreSQL implementation of the assignment workflow
//!
//! Assignment is the only multi-table write in the system and runs as a
//! single transaction: optionally insert the resident, compare-and-swap
//! the slot to occupied, insert the sticker, commit. A lost race on the
//! slot aborts the whole transaction, so no orphan resident or sticker
//! rows are ever visible.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use park_core::entities::{BicycleSlot, Resident, Sticker};
use park_core::error::DomainError;
use park_core::traits::{
    AssignTarget, AssignmentCommand, AssignmentOutcome, AssignmentRepository, RepoResult,
};
use park_core::value_objects::RecordId;

use crate::models::{ResidentModel, SlotModel, StickerModel};

use super::error::{map_db_error, resident_not_found, slot_not_found};

/// PostgreSQL implementation of AssignmentRepository
#[derive(Clone)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    /// Create a new PgAssignmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn resolve_resident(
        tx: &mut Transaction<'_, Postgres>,
        target: &AssignTarget,
    ) -> RepoResult<Resident> {
        match target {
            AssignTarget::Existing(id) => {
                let model = sqlx::query_as::<_, ResidentModel>(
                    r"
                    SELECT id, name, room_number, contact_info, status, created_at, updated_at
                    FROM residents
                    WHERE id = $1
                    ",
                )
                .bind(id.into_inner())
                .fetch_optional(&mut **tx)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| resident_not_found(*id))?;

                Resident::try_from(model)
            }
            AssignTarget::New(new) => {
                let model = sqlx::query_as::<_, ResidentModel>(
                    r"
                    INSERT INTO residents (name, room_number, contact_info, status)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, room_number, contact_info, status, created_at, updated_at
                    ",
                )
                .bind(&new.name)
                .bind(&new.room_number)
                .bind(&new.contact_info)
                .bind(new.status.as_str())
                .fetch_one(&mut **tx)
                .await
                .map_err(map_db_error)?;

                Resident::try_from(model)
            }
        }
    }

    /// Compare-and-swap the slot to occupied. Zero rows means the slot is
    /// missing or not open; a follow-up read disambiguates.
    async fn occupy_slot(
        tx: &mut Transaction<'_, Postgres>,
        slot_id: RecordId,
        resident_id: RecordId,
    ) -> RepoResult<BicycleSlot> {
        let updated = sqlx::query_as::<_, SlotModel>(
            r"
            UPDATE bicycle_slots
            SET resident_id = $2, status = 'occupied', updated_at = NOW()
            WHERE id = $1 AND status = 'available' AND resident_id IS NULL
            RETURNING id, slot_code, location, resident_id, status, created_at, updated_at
            ",
        )
        .bind(slot_id.into_inner())
        .bind(resident_id.into_inner())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = updated {
            return BicycleSlot::try_from(model);
        }

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bicycle_slots WHERE id = $1)",
        )
        .bind(slot_id.into_inner())
        .fetch_one(&mut **tx)
        .await
        .map_err(map_db_error)?;

        if exists {
            Err(DomainError::SlotNotAvailable(slot_id))
        } else {
            Err(slot_not_found(slot_id))
        }
    }

    async fn record_sticker(
        tx: &mut Transaction<'_, Postgres>,
        command: &AssignmentCommand,
    ) -> RepoResult<Sticker> {
        let model = sqlx::query_as::<_, StickerModel>(
            r"
            INSERT INTO stickers (slot_id, sticker_number, issued_date)
            VALUES ($1, $2, $3)
            RETURNING id, slot_id, sticker_number, issued_date, created_at, updated_at
            ",
        )
        .bind(command.slot_id.into_inner())
        .bind(&command.sticker_number)
        .bind(command.issued_date)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Sticker::try_from(model)
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    #[instrument(skip(self, command), fields(slot_id = %command.slot_id))]
    async fn assign(&self, command: &AssignmentCommand) -> RepoResult<AssignmentOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let resident = Self::resolve_resident(&mut tx, &command.target).await?;
        let slot = Self::occupy_slot(&mut tx, command.slot_id, resident.id).await?;
        let sticker = Self::record_sticker(&mut tx, command).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(AssignmentOutcome {
            resident,
            slot,
            sticker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAssignmentRepository>();
    }
}
