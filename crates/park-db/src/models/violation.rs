//! Violation log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use park_core::entities::ViolationLog;
use park_core::error::DomainError;
use park_core::value_objects::RecordId;

/// Database model for violation_logs table
#[derive(Debug, Clone, FromRow)]
pub struct ViolationModel {
    pub id: i64,
    pub location: String,
    pub memo: Option<String>,
    pub photo_url: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ViolationModel> for ViolationLog {
    type Error = DomainError;

    fn try_from(model: ViolationModel) -> Result<Self, Self::Error> {
        Ok(ViolationLog {
            id: RecordId::new(model.id),
            location: model.location,
            memo: model.memo,
            photo_url: model.photo_url,
            reported_at: model.reported_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
