//! Resident entity - a person registered against a room number

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::RecordId;

/// Resident registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResidentStatus {
    #[default]
    Active,
    Inactive,
}

impl ResidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for ResidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resident entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resident {
    pub id: RecordId,
    pub name: String,
    pub room_number: String,
    pub contact_info: String,
    pub status: ResidentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resident {
    /// Check if the resident is currently active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ResidentStatus::Active
    }
}

/// Payload for inserting a resident (id and timestamps are store-assigned)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResident {
    pub name: String,
    pub room_number: String,
    pub contact_info: String,
    pub status: ResidentStatus,
}

impl NewResident {
    /// A new active resident, the shape the assignment workflow creates
    pub fn active(name: String, room_number: String, contact_info: String) -> Self {
        Self {
            name,
            room_number,
            contact_info,
            status: ResidentStatus::Active,
        }
    }
}
