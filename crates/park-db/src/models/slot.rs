//! Bicycle slot database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use park_core::entities::{BicycleSlot, Resident, ResidentStatus, SlotStatus};
use park_core::error::DomainError;
use park_core::traits::SlotWithResident;
use park_core::value_objects::RecordId;

/// Database model for bicycle_slots table
#[derive(Debug, Clone, FromRow)]
pub struct SlotModel {
    pub id: i64,
    pub slot_code: String,
    pub location: String,
    pub resident_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<SlotModel> for BicycleSlot {
    type Error = DomainError;

    fn try_from(model: SlotModel) -> Result<Self, Self::Error> {
        let status = SlotStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown slot status: {}", model.status))
        })?;

        Ok(BicycleSlot {
            id: RecordId::new(model.id),
            slot_code: model.slot_code,
            location: model.location,
            resident_id: model.resident_id.map(RecordId::new),
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Flat row for the slot LEFT JOIN resident list query
///
/// Resident columns are aliased `r_*` and nullable as a group; `r_id`
/// being NULL means the slot has no assigned resident.
#[derive(Debug, Clone, FromRow)]
pub struct SlotWithResidentModel {
    pub id: i64,
    pub slot_code: String,
    pub location: String,
    pub resident_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub r_id: Option<i64>,
    pub r_name: Option<String>,
    pub r_room_number: Option<String>,
    pub r_contact_info: Option<String>,
    pub r_status: Option<String>,
    pub r_created_at: Option<DateTime<Utc>>,
    pub r_updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<SlotWithResidentModel> for SlotWithResident {
    type Error = DomainError;

    fn try_from(model: SlotWithResidentModel) -> Result<Self, Self::Error> {
        let resident = match model.r_id {
            Some(r_id) => {
                let status_text = model.r_status.unwrap_or_default();
                let status = ResidentStatus::parse(&status_text).ok_or_else(|| {
                    DomainError::InternalError(format!("unknown resident status: {status_text}"))
                })?;
                Some(Resident {
                    id: RecordId::new(r_id),
                    name: model.r_name.unwrap_or_default(),
                    room_number: model.r_room_number.unwrap_or_default(),
                    contact_info: model.r_contact_info.unwrap_or_default(),
                    status,
                    created_at: model.r_created_at.unwrap_or(model.created_at),
                    updated_at: model.r_updated_at.unwrap_or(model.updated_at),
                })
            }
            None => None,
        };

        let slot = BicycleSlot::try_from(SlotModel {
            id: model.id,
            slot_code: model.slot_code,
            location: model.location,
            resident_id: model.resident_id,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })?;

        Ok(SlotWithResident { slot, resident })
    }
}
