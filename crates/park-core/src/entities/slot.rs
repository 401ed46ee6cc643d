//! Bicycle slot entity - a single parking space, the unit of assignment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::RecordId;

/// Slot occupancy status
///
/// Invariant maintained by the workflows: `Occupied` always carries a
/// resident_id, `Available` never does. `Maintenance` rows carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(Self::Available),
            "occupied" => Some(Self::Occupied),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bicycle slot entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BicycleSlot {
    pub id: RecordId,
    pub slot_code: String,
    pub location: String,
    pub resident_id: Option<RecordId>,
    pub status: SlotStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BicycleSlot {
    /// Check if the slot can accept an assignment
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available && self.resident_id.is_none()
    }

    /// Check the occupied/available pairing invariant
    pub fn state_is_consistent(&self) -> bool {
        match self.status {
            SlotStatus::Occupied => self.resident_id.is_some(),
            SlotStatus::Available => self.resident_id.is_none(),
            SlotStatus::Maintenance => self.resident_id.is_none(),
        }
    }
}

/// Payload for inserting a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlot {
    pub slot_code: String,
    pub location: String,
    pub status: SlotStatus,
}
