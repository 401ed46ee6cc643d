//! Resident database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use park_core::entities::{Resident, ResidentStatus};
use park_core::error::DomainError;
use park_core::value_objects::RecordId;

/// Database model for residents table
#[derive(Debug, Clone, FromRow)]
pub struct ResidentModel {
    pub id: i64,
    pub name: String,
    pub room_number: String,
    pub contact_info: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ResidentModel> for Resident {
    type Error = DomainError;

    fn try_from(model: ResidentModel) -> Result<Self, Self::Error> {
        let status = ResidentStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown resident status: {}", model.status))
        })?;

        Ok(Resident {
            id: RecordId::new(model.id),
            name: model.name,
            room_number: model.room_number,
            contact_info: model.contact_info,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
