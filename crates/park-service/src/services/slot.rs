//! Bicycle slot service
//!
//! CRUD over slots. Status edits here only move between available and
//! maintenance; occupancy changes go through the assignment and release
//! workflows so resident_id and status always move together.

use park_core::entities::{NewSlot, SlotStatus};
use park_core::value_objects::RecordId;
use tracing::{info, instrument};

use crate::dto::{
    CreateSlotRequest, SlotResponse, SlotWithResidentResponse, StickerResponse, UpdateSlotRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Slot service
pub struct SlotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SlotService<'a> {
    /// Create a new SlotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all slots with their assigned residents
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<SlotWithResidentResponse>> {
        let rows = self.ctx.slot_repo().list_with_residents().await?;
        Ok(rows.iter().map(SlotWithResidentResponse::from).collect())
    }

    /// List slots open for assignment
    #[instrument(skip(self))]
    pub async fn list_available(&self) -> ServiceResult<Vec<SlotResponse>> {
        let slots = self.ctx.slot_repo().list_available().await?;
        Ok(slots.iter().map(SlotResponse::from).collect())
    }

    /// Get a slot by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<SlotResponse> {
        let slot = self
            .ctx
            .slot_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Slot", id.to_string()))?;

        Ok(SlotResponse::from(&slot))
    }

    /// Register a new slot
    #[instrument(skip(self, request), fields(slot_code = %request.slot_code))]
    pub async fn create(&self, request: CreateSlotRequest) -> ServiceResult<SlotResponse> {
        let new = NewSlot {
            slot_code: request.slot_code,
            location: request.location,
            status: SlotStatus::Available,
        };
        let slot = self.ctx.slot_repo().create(&new).await?;

        info!(slot_id = %slot.id, "Slot registered");
        Ok(SlotResponse::from(&slot))
    }

    /// Update a slot (partial)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: RecordId,
        request: UpdateSlotRequest,
    ) -> ServiceResult<SlotResponse> {
        let mut slot = self
            .ctx
            .slot_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Slot", id.to_string()))?;

        if let Some(status) = request.status {
            match status {
                SlotStatus::Occupied => {
                    return Err(ServiceError::validation(
                        "occupancy changes only through assignment and release",
                    ));
                }
                SlotStatus::Maintenance if slot.resident_id.is_some() => {
                    return Err(ServiceError::conflict(
                        "slot must be released before entering maintenance",
                    ));
                }
                SlotStatus::Available if slot.status == SlotStatus::Occupied => {
                    return Err(ServiceError::validation(
                        "occupancy changes only through assignment and release",
                    ));
                }
                _ => slot.status = status,
            }
        }

        if let Some(slot_code) = request.slot_code {
            slot.slot_code = slot_code;
        }
        if let Some(location) = request.location {
            slot.location = location;
        }

        let updated = self.ctx.slot_repo().update(&slot).await?;

        info!(slot_id = %id, "Slot updated");
        Ok(SlotResponse::from(&updated))
    }

    /// Delete a slot
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> ServiceResult<()> {
        let slot = self
            .ctx
            .slot_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Slot", id.to_string()))?;

        if slot.resident_id.is_some() {
            return Err(ServiceError::conflict(
                "slot must be released before deletion",
            ));
        }

        self.ctx.slot_repo().delete(id).await?;

        info!(slot_id = %id, "Slot deleted");
        Ok(())
    }

    /// Sticker history for a slot, newest first
    #[instrument(skip(self))]
    pub async fn stickers(&self, id: RecordId) -> ServiceResult<Vec<StickerResponse>> {
        // 404 for a missing slot rather than an empty history
        let _slot = self
            .ctx
            .slot_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Slot", id.to_string()))?;

        let stickers = self.ctx.sticker_repo().list_by_slot(id).await?;
        Ok(stickers.iter().map(StickerResponse::from).collect())
    }
}
