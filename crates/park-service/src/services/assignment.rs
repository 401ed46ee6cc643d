//! Assignment and release workflows
//!
//! Assignment ties the three-step workflow (resident, slot, sticker)
//! into one repository call that runs transactionally; this service
//! validates the request shape and picks the target.

use chrono::Utc;
use park_core::entities::NewResident;
use park_core::traits::{AssignTarget, AssignmentCommand};
use park_core::value_objects::RecordId;
use tracing::{info, instrument};

use crate::dto::{AssignSlotRequest, AssignmentResponse, SlotResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Assignment service
pub struct AssignmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AssignmentService<'a> {
    /// Create a new AssignmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assign a slot to an existing or newly created resident
    #[instrument(skip(self, request))]
    pub async fn assign(
        &self,
        slot_id: RecordId,
        request: AssignSlotRequest,
    ) -> ServiceResult<AssignmentResponse> {
        let target = match (request.resident_id, request.new_resident) {
            (Some(id), None) => AssignTarget::Existing(RecordId::new(id)),
            (None, Some(payload)) => AssignTarget::New(NewResident::active(
                payload.name,
                payload.room_number,
                payload.contact_info,
            )),
            _ => {
                return Err(ServiceError::validation(
                    "exactly one of resident_id or new_resident is required",
                ));
            }
        };

        let command = AssignmentCommand {
            slot_id,
            target,
            sticker_number: request.sticker_number,
            issued_date: request
                .issued_date
                .unwrap_or_else(|| Utc::now().date_naive()),
        };

        let outcome = self.ctx.assignment_repo().assign(&command).await?;

        info!(
            slot_id = %outcome.slot.id,
            resident_id = %outcome.resident.id,
            sticker_id = %outcome.sticker.id,
            "Slot assigned"
        );

        Ok(AssignmentResponse::from(&outcome))
    }

    /// Release a slot back to available
    ///
    /// Releasing an already-available slot is a no-op; a slot in
    /// maintenance, or one re-assigned while the release was in
    /// flight, reports a conflict.
    #[instrument(skip(self))]
    pub async fn release(&self, slot_id: RecordId) -> ServiceResult<SlotResponse> {
        let slot = self.ctx.slot_repo().release(slot_id).await?;

        info!(slot_id = %slot_id, "Slot released");
        Ok(SlotResponse::from(&slot))
    }
}
