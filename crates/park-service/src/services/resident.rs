//! Resident service
//!
//! CRUD over residents plus the deletion guard: a resident holding any
//! slot cannot be deleted until every slot is released.

use park_core::entities::NewResident;
use park_core::error::DomainError;
use park_core::value_objects::RecordId;
use tracing::{info, instrument};

use crate::dto::{
    CreateResidentRequest, ResidentResponse, ResidentWithSlotsResponse, UpdateResidentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Resident service
pub struct ResidentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResidentService<'a> {
    /// Create a new ResidentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all residents with the slots they hold
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ResidentWithSlotsResponse>> {
        let rows = self.ctx.resident_repo().list_with_slots().await?;
        Ok(rows.iter().map(ResidentWithSlotsResponse::from).collect())
    }

    /// Get a resident with their slots
    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<ResidentWithSlotsResponse> {
        let row = self
            .ctx
            .resident_repo()
            .find_with_slots(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resident", id.to_string()))?;

        Ok(ResidentWithSlotsResponse::from(&row))
    }

    /// Register a new resident
    #[instrument(skip(self, request), fields(room_number = %request.room_number))]
    pub async fn create(&self, request: CreateResidentRequest) -> ServiceResult<ResidentResponse> {
        let new = NewResident::active(request.name, request.room_number, request.contact_info);
        let resident = self.ctx.resident_repo().create(&new).await?;

        info!(resident_id = %resident.id, "Resident registered");
        Ok(ResidentResponse::from(&resident))
    }

    /// Update a resident (partial)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: RecordId,
        request: UpdateResidentRequest,
    ) -> ServiceResult<ResidentResponse> {
        let mut resident = self
            .ctx
            .resident_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resident", id.to_string()))?;

        if let Some(name) = request.name {
            resident.name = name;
        }
        if let Some(room_number) = request.room_number {
            resident.room_number = room_number;
        }
        if let Some(contact_info) = request.contact_info {
            resident.contact_info = contact_info;
        }
        if let Some(status) = request.status {
            resident.status = status;
        }

        let updated = self.ctx.resident_repo().update(&resident).await?;

        info!(resident_id = %id, "Resident updated");
        Ok(ResidentResponse::from(&updated))
    }

    /// Delete a resident, refusing while any slot still references them
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> ServiceResult<()> {
        let resident = self
            .ctx
            .resident_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resident", id.to_string()))?;

        let held = self.ctx.resident_repo().held_slot_count(id).await?;
        if held > 0 {
            return Err(ServiceError::Domain(DomainError::ResidentHoldsSlots {
                id,
                slots: held,
            }));
        }

        self.ctx.resident_repo().delete(resident.id).await?;

        info!(resident_id = %id, "Resident deleted");
        Ok(())
    }
}
