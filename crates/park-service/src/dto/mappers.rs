//! Entity → response DTO conversions

use park_core::entities::{BicycleSlot, Payment, Resident, Sticker, ViolationLog};
use park_core::traits::{
    AssignmentOutcome, PaymentWithResident, ResidentWithSlots, SlotWithResident,
};

use super::responses::{
    AssignmentResponse, PaymentResponse, PaymentWithResidentResponse, ResidentResponse,
    ResidentWithSlotsResponse, SlotResponse, SlotWithResidentResponse, StickerResponse,
    ViolationResponse,
};

impl From<&Resident> for ResidentResponse {
    fn from(resident: &Resident) -> Self {
        Self {
            id: resident.id,
            name: resident.name.clone(),
            room_number: resident.room_number.clone(),
            contact_info: resident.contact_info.clone(),
            status: resident.status,
            created_at: resident.created_at,
            updated_at: resident.updated_at,
        }
    }
}

impl From<&BicycleSlot> for SlotResponse {
    fn from(slot: &BicycleSlot) -> Self {
        Self {
            id: slot.id,
            slot_code: slot.slot_code.clone(),
            location: slot.location.clone(),
            status: slot.status,
            resident_id: slot.resident_id,
            created_at: slot.created_at,
            updated_at: slot.updated_at,
        }
    }
}

impl From<&Sticker> for StickerResponse {
    fn from(sticker: &Sticker) -> Self {
        Self {
            id: sticker.id,
            slot_id: sticker.slot_id,
            sticker_number: sticker.sticker_number.clone(),
            issued_date: sticker.issued_date,
            created_at: sticker.created_at,
        }
    }
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id,
            resident_id: payment.resident_id,
            month: payment.month,
            amount: payment.amount,
            status: payment.status,
            paid_at: payment.paid_at,
            created_at: payment.created_at,
            updated_at: payment.updated_at,
        }
    }
}

impl From<&ViolationLog> for ViolationResponse {
    fn from(violation: &ViolationLog) -> Self {
        Self {
            id: violation.id,
            location: violation.location.clone(),
            memo: violation.memo.clone(),
            photo_url: violation.photo_url.clone(),
            reported_at: violation.reported_at,
            created_at: violation.created_at,
            updated_at: violation.updated_at,
        }
    }
}

impl From<&ResidentWithSlots> for ResidentWithSlotsResponse {
    fn from(joined: &ResidentWithSlots) -> Self {
        Self {
            id: joined.resident.id,
            name: joined.resident.name.clone(),
            room_number: joined.resident.room_number.clone(),
            contact_info: joined.resident.contact_info.clone(),
            status: joined.resident.status,
            slots: joined.slots.iter().map(SlotResponse::from).collect(),
            created_at: joined.resident.created_at,
            updated_at: joined.resident.updated_at,
        }
    }
}

impl From<&SlotWithResident> for SlotWithResidentResponse {
    fn from(joined: &SlotWithResident) -> Self {
        Self {
            id: joined.slot.id,
            slot_code: joined.slot.slot_code.clone(),
            location: joined.slot.location.clone(),
            status: joined.slot.status,
            resident: joined.resident.as_ref().map(ResidentResponse::from),
            created_at: joined.slot.created_at,
            updated_at: joined.slot.updated_at,
        }
    }
}

impl From<&PaymentWithResident> for PaymentWithResidentResponse {
    fn from(joined: &PaymentWithResident) -> Self {
        Self {
            id: joined.payment.id,
            resident_id: joined.payment.resident_id,
            resident_name: joined.resident.name.clone(),
            room_number: joined.resident.room_number.clone(),
            month: joined.payment.month,
            amount: joined.payment.amount,
            status: joined.payment.status,
            paid_at: joined.payment.paid_at,
            created_at: joined.payment.created_at,
            updated_at: joined.payment.updated_at,
        }
    }
}

impl From<&AssignmentOutcome> for AssignmentResponse {
    fn from(outcome: &AssignmentOutcome) -> Self {
        Self {
            resident: ResidentResponse::from(&outcome.resident),
            slot: SlotResponse::from(&outcome.slot),
            sticker: StickerResponse::from(&outcome.sticker),
        }
    }
}
