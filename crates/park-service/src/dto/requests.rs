//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; ones carrying user input
//! also implement `Validate`. Validation messages are the operator-facing
//! Japanese strings shown by the admin frontend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use park_core::entities::{PaymentStatus, ResidentStatus, SlotStatus};

// ============================================================================
// Auth Requests
// ============================================================================

/// Staff login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "メールアドレスの形式が正しくありません"))]
    pub email: String,

    #[validate(length(min = 1, message = "パスワードは必須項目です"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Resident Requests
// ============================================================================

/// Create resident request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResidentRequest {
    #[validate(length(min = 1, max = 100, message = "名前は必須項目です"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "部屋番号は必須項目です"))]
    pub room_number: String,

    #[validate(length(min = 1, max = 100, message = "連絡先は必須項目です"))]
    pub contact_info: String,
}

/// Update resident request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateResidentRequest {
    #[validate(length(min = 1, max = 100, message = "名前は必須項目です"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 20, message = "部屋番号は必須項目です"))]
    pub room_number: Option<String>,

    #[validate(length(min = 1, max = 100, message = "連絡先は必須項目です"))]
    pub contact_info: Option<String>,

    pub status: Option<ResidentStatus>,
}

// ============================================================================
// Slot Requests
// ============================================================================

/// Create slot request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSlotRequest {
    #[validate(length(min = 1, max = 20, message = "枠番号は必須項目です"))]
    pub slot_code: String,

    #[validate(length(min = 1, max = 100, message = "設置場所は必須項目です"))]
    pub location: String,
}

/// Update slot request (partial)
///
/// `status` only toggles between available and maintenance; occupancy
/// moves exclusively through the assignment and release workflows.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSlotRequest {
    #[validate(length(min = 1, max = 20, message = "枠番号は必須項目です"))]
    pub slot_code: Option<String>,

    #[validate(length(min = 1, max = 100, message = "設置場所は必須項目です"))]
    pub location: Option<String>,

    pub status: Option<SlotStatus>,
}

/// New-resident payload embedded in an assignment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewResidentPayload {
    #[validate(length(min = 1, max = 100, message = "名前は必須項目です"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "部屋番号は必須項目です"))]
    pub room_number: String,

    #[validate(length(min = 1, max = 100, message = "連絡先は必須項目です"))]
    pub contact_info: String,
}

/// Assignment request: exactly one of `resident_id` / `new_resident`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignSlotRequest {
    pub resident_id: Option<i64>,

    #[validate(nested)]
    pub new_resident: Option<NewResidentPayload>,

    #[validate(length(min = 1, max = 50, message = "ステッカー番号は必須項目です"))]
    pub sticker_number: String,

    /// Defaults to today when omitted
    pub issued_date: Option<NaiveDate>,
}

// ============================================================================
// Payment Requests
// ============================================================================

/// Manual single-payment creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    pub resident_id: i64,

    /// YYYY-MM
    #[validate(length(min = 7, max = 7, message = "年月はYYYY-MM形式で入力してください"))]
    pub month: String,

    #[validate(range(min = 0, message = "金額は0以上で入力してください"))]
    pub amount: i64,
}

/// Batch generation request: one unpaid row per eligible resident
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GeneratePaymentsRequest {
    /// YYYY-MM
    #[validate(length(min = 7, max = 7, message = "年月はYYYY-MM形式で入力してください"))]
    pub month: String,

    #[validate(range(min = 0, message = "金額は0以上で入力してください"))]
    pub amount: i64,
}

/// Query-string filters for the payment list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentListQuery {
    pub status: Option<PaymentStatus>,
    /// YYYY-MM
    pub month: Option<String>,
}

// ============================================================================
// Violation Requests
// ============================================================================

/// Create violation log request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateViolationRequest {
    #[validate(length(min = 1, max = 100, message = "発見場所は必須項目です"))]
    pub location: String,

    #[validate(length(max = 1000, message = "メモは1000文字以内で入力してください"))]
    pub memo: Option<String>,

    /// Public URL from a prior photo upload
    pub photo_url: Option<String>,

    /// Defaults to now when omitted
    pub reported_at: Option<DateTime<Utc>>,
}

/// Update violation log request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateViolationRequest {
    #[validate(length(min = 1, max = 100, message = "発見場所は必須項目です"))]
    pub location: Option<String>,

    #[validate(length(max = 1000, message = "メモは1000文字以内で入力してください"))]
    pub memo: Option<String>,

    pub photo_url: Option<String>,

    pub reported_at: Option<DateTime<Utc>>,
}
