//! Sticker entity - a printed permit issued on slot assignment
//!
//! Stickers are write-once: one row per assignment event, never updated,
//! and retained across reassignment cycles as an audit trail.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::RecordId;

/// Sticker entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sticker {
    pub id: RecordId,
    pub slot_id: RecordId,
    pub sticker_number: String,
    pub issued_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for inserting a sticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSticker {
    pub slot_id: RecordId,
    pub sticker_number: String,
    pub issued_date: NaiveDate,
}
