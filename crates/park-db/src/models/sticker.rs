//! Sticker database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use park_core::entities::Sticker;
use park_core::error::DomainError;
use park_core::value_objects::RecordId;

/// Database model for stickers table
#[derive(Debug, Clone, FromRow)]
pub struct StickerModel {
    pub id: i64,
    pub slot_id: i64,
    pub sticker_number: String,
    pub issued_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<StickerModel> for Sticker {
    type Error = DomainError;

    fn try_from(model: StickerModel) -> Result<Self, Self::Error> {
        Ok(Sticker {
            id: RecordId::new(model.id),
            slot_id: RecordId::new(model.slot_id),
            sticker_number: model.sticker_number,
            issued_date: model.issued_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
