//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Every generator
//! produces unique values so tests can share one database.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or(0);
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    nanos * 10_000 + count
}

/// A far-future YYYY-MM that no other test run has used
pub fn unique_month() -> String {
    let suffix = unique_suffix();
    format!("{:04}-{:02}", 3000 + suffix % 999, suffix % 12 + 1)
}

// ============================================================================
// Requests
// ============================================================================

/// Resident creation request
#[derive(Debug, Serialize)]
pub struct CreateResidentRequest {
    pub name: String,
    pub room_number: String,
    pub contact_info: String,
}

impl CreateResidentRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("テスト住民{suffix}"),
            room_number: format!("R{suffix}"),
            contact_info: format!("090-{:08}", suffix % 100_000_000),
        }
    }
}

/// Slot creation request
#[derive(Debug, Serialize)]
pub struct CreateSlotRequest {
    pub slot_code: String,
    pub location: String,
}

impl CreateSlotRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            slot_code: format!("S{suffix}"),
            location: "地下1階".to_string(),
        }
    }
}

/// Assignment request targeting an existing resident
#[derive(Debug, Serialize)]
pub struct AssignExistingRequest {
    pub resident_id: i64,
    pub sticker_number: String,
}

impl AssignExistingRequest {
    pub fn unique(resident_id: i64) -> Self {
        Self {
            resident_id,
            sticker_number: format!("ST{}", unique_suffix()),
        }
    }
}

/// Assignment request registering a new resident in the same call
#[derive(Debug, Serialize)]
pub struct AssignNewRequest {
    pub new_resident: CreateResidentRequest,
    pub sticker_number: String,
}

impl AssignNewRequest {
    pub fn unique() -> Self {
        Self {
            new_resident: CreateResidentRequest::unique(),
            sticker_number: format!("ST{}", unique_suffix()),
        }
    }
}

/// Batch payment generation request
#[derive(Debug, Serialize)]
pub struct GeneratePaymentsRequest {
    pub month: String,
    pub amount: i64,
}

/// Violation creation request
#[derive(Debug, Serialize)]
pub struct CreateViolationRequest {
    pub location: String,
    pub memo: Option<String>,
    pub photo_url: Option<String>,
}

impl CreateViolationRequest {
    pub fn unique() -> Self {
        Self {
            location: format!("駐輪場入口{}", unique_suffix()),
            memo: Some("無断駐輪".to_string()),
            photo_url: None,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Resident response
#[derive(Debug, Deserialize)]
pub struct ResidentResponse {
    pub id: i64,
    pub name: String,
    pub room_number: String,
    pub contact_info: String,
    pub status: String,
}

/// Resident with held slots
#[derive(Debug, Deserialize)]
pub struct ResidentWithSlotsResponse {
    pub id: i64,
    pub name: String,
    pub slots: Vec<SlotResponse>,
}

/// Slot response
#[derive(Debug, Deserialize)]
pub struct SlotResponse {
    pub id: i64,
    pub slot_code: String,
    pub location: String,
    pub status: String,
    pub resident_id: Option<i64>,
}

/// Sticker response
#[derive(Debug, Deserialize)]
pub struct StickerResponse {
    pub id: i64,
    pub slot_id: i64,
    pub sticker_number: String,
    pub issued_date: String,
}

/// Assignment workflow response
#[derive(Debug, Deserialize)]
pub struct AssignmentResponse {
    pub resident: ResidentResponse,
    pub slot: SlotResponse,
    pub sticker: StickerResponse,
}

/// Payment response
#[derive(Debug, Deserialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub resident_id: i64,
    pub month: String,
    pub amount: i64,
    pub status: String,
    pub paid_at: Option<String>,
}

/// Payment joined with its resident
#[derive(Debug, Deserialize)]
pub struct PaymentWithResidentResponse {
    pub id: i64,
    pub resident_id: i64,
    pub resident_name: String,
    pub room_number: String,
    pub month: String,
    pub amount: i64,
    pub status: String,
    pub paid_at: Option<String>,
}

/// Batch generation response
#[derive(Debug, Deserialize)]
pub struct GeneratePaymentsResponse {
    pub month: String,
    pub amount: i64,
    pub created_count: i64,
}

/// Violation response
#[derive(Debug, Deserialize)]
pub struct ViolationResponse {
    pub id: i64,
    pub location: String,
    pub memo: Option<String>,
    pub photo_url: Option<String>,
    pub reported_at: String,
}

/// Photo upload response
#[derive(Debug, Deserialize)]
pub struct PhotoUploadResponse {
    pub photo_url: String,
}

/// Dashboard response
#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub slots: SlotStats,
    pub residents: ResidentStats,
    pub violations: ViolationStats,
    pub payments: PaymentStats,
}

#[derive(Debug, Deserialize)]
pub struct SlotStats {
    pub total: i64,
    pub available: i64,
    pub occupied: i64,
    pub maintenance: i64,
}

#[derive(Debug, Deserialize)]
pub struct ResidentStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

#[derive(Debug, Deserialize)]
pub struct ViolationStats {
    pub total: i64,
    pub last_30_days: i64,
}

#[derive(Debug, Deserialize)]
pub struct PaymentStats {
    pub total: i64,
    pub unpaid: i64,
    pub current_month: i64,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
