//! Violation log entity - a record of unauthorized parking

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Violation log entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationLog {
    pub id: RecordId,
    pub location: String,
    pub memo: Option<String>,
    pub photo_url: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ViolationLog {
    /// Check if a photo is attached
    #[inline]
    pub fn has_photo(&self) -> bool {
        self.photo_url.is_some()
    }
}

/// Payload for inserting a violation log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewViolation {
    pub location: String,
    pub memo: Option<String>,
    pub photo_url: Option<String>,
    pub reported_at: DateTime<Utc>,
}
