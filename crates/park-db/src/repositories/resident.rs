//! PostgreSQL implementation of ResidentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::{BicycleSlot, NewResident, Resident};
use park_core::traits::{RepoResult, ResidentRepository, ResidentWithSlots};
use park_core::value_objects::RecordId;

use crate::models::{ResidentModel, SlotModel};

use super::error::{map_db_error, resident_not_found};

const RESIDENT_COLUMNS: &str = "id, name, room_number, contact_info, status, created_at, updated_at";

/// PostgreSQL implementation of ResidentRepository
#[derive(Clone)]
pub struct PgResidentRepository {
    pool: PgPool,
}

impl PgResidentRepository {
    /// Create a new PgResidentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn slots_for(&self, resident_id: i64) -> RepoResult<Vec<BicycleSlot>> {
        let rows = sqlx::query_as::<_, SlotModel>(
            r"
            SELECT id, slot_code, location, resident_id, status, created_at, updated_at
            FROM bicycle_slots
            WHERE resident_id = $1
            ORDER BY slot_code
            ",
        )
        .bind(resident_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(BicycleSlot::try_from).collect()
    }
}

#[async_trait]
impl ResidentRepository for PgResidentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Resident>> {
        let result = sqlx::query_as::<_, ResidentModel>(&format!(
            "SELECT {RESIDENT_COLUMNS} FROM residents WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Resident::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_with_slots(&self) -> RepoResult<Vec<ResidentWithSlots>> {
        let residents = sqlx::query_as::<_, ResidentModel>(&format!(
            "SELECT {RESIDENT_COLUMNS} FROM residents ORDER BY name, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Two queries instead of a fan-out join; resident lists are small
        // enough that grouping in memory beats row duplication.
        let slots = sqlx::query_as::<_, SlotModel>(
            r"
            SELECT id, slot_code, location, resident_id, status, created_at, updated_at
            FROM bicycle_slots
            WHERE resident_id IS NOT NULL
            ORDER BY slot_code
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_resident: std::collections::HashMap<i64, Vec<BicycleSlot>> =
            std::collections::HashMap::new();
        for model in slots {
            let Some(resident_id) = model.resident_id else {
                continue;
            };
            by_resident
                .entry(resident_id)
                .or_default()
                .push(BicycleSlot::try_from(model)?);
        }

        residents
            .into_iter()
            .map(|model| {
                let slots = by_resident.remove(&model.id).unwrap_or_default();
                Ok(ResidentWithSlots {
                    resident: Resident::try_from(model)?,
                    slots,
                })
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_with_slots(&self, id: RecordId) -> RepoResult<Option<ResidentWithSlots>> {
        let Some(resident) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let slots = self.slots_for(id.into_inner()).await?;
        Ok(Some(ResidentWithSlots { resident, slots }))
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewResident) -> RepoResult<Resident> {
        let model = sqlx::query_as::<_, ResidentModel>(&format!(
            r"
            INSERT INTO residents (name, room_number, contact_info, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {RESIDENT_COLUMNS}
            "
        ))
        .bind(&new.name)
        .bind(&new.room_number)
        .bind(&new.contact_info)
        .bind(new.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Resident::try_from(model)
    }

    #[instrument(skip(self, resident))]
    async fn update(&self, resident: &Resident) -> RepoResult<Resident> {
        let model = sqlx::query_as::<_, ResidentModel>(&format!(
            r"
            UPDATE residents
            SET name = $2, room_number = $3, contact_info = $4, status = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {RESIDENT_COLUMNS}
            "
        ))
        .bind(resident.id.into_inner())
        .bind(&resident.name)
        .bind(&resident.room_number)
        .bind(&resident.contact_info)
        .bind(resident.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| resident_not_found(resident.id))?;

        Resident::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM residents WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(resident_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn held_slot_count(&self, id: RecordId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bicycle_slots WHERE resident_id = $1",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM residents")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM residents WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
