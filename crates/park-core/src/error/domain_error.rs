//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Resident not found: {0}")]
    ResidentNotFound(RecordId),

    #[error("Bicycle slot not found: {0}")]
    SlotNotFound(RecordId),

    #[error("Payment not found: {0}")]
    PaymentNotFound(RecordId),

    #[error("Violation log not found: {0}")]
    ViolationNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slot {0} is not available for assignment")]
    SlotNotAvailable(RecordId),

    #[error("Slot code already exists: {0}")]
    SlotCodeExists(String),

    #[error("Slot {0} is under maintenance")]
    SlotUnderMaintenance(RecordId),

    #[error("Slot {0} was assigned again before the release completed")]
    SlotReassigned(RecordId),

    #[error("Payment for resident {resident_id} already exists for {month}")]
    PaymentExists { resident_id: RecordId, month: String },

    // =========================================================================
    // Policy Violations
    // =========================================================================
    #[error(
        "使用中の駐輪枠が割り当てられているため、この居住者を削除できません。\
         先に駐輪枠の割り当てを解除してください。"
    )]
    ResidentHoldsSlots { id: RecordId, slots: i64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ResidentNotFound(_) => "UNKNOWN_RESIDENT",
            Self::SlotNotFound(_) => "UNKNOWN_SLOT",
            Self::PaymentNotFound(_) => "UNKNOWN_PAYMENT",
            Self::ViolationNotFound(_) => "UNKNOWN_VIOLATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidMonth(_) => "INVALID_MONTH",

            // Conflict
            Self::SlotNotAvailable(_) => "SLOT_NOT_AVAILABLE",
            Self::SlotCodeExists(_) => "SLOT_CODE_EXISTS",
            Self::SlotUnderMaintenance(_) => "SLOT_UNDER_MAINTENANCE",
            Self::SlotReassigned(_) => "SLOT_REASSIGNED",
            Self::PaymentExists { .. } => "PAYMENT_EXISTS",

            // Policy
            Self::ResidentHoldsSlots { .. } => "RESIDENT_HOLDS_SLOTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ResidentNotFound(_)
                | Self::SlotNotFound(_)
                | Self::PaymentNotFound(_)
                | Self::ViolationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidMonth(_))
    }

    /// Check if this is a conflict error (precondition on shared state)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SlotNotAvailable(_)
                | Self::SlotCodeExists(_)
                | Self::SlotUnderMaintenance(_)
                | Self::SlotReassigned(_)
                | Self::PaymentExists { .. }
        )
    }

    /// Check if this is a business-rule policy violation
    pub fn is_policy(&self) -> bool {
        matches!(self, Self::ResidentHoldsSlots { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::SlotNotAvailable(RecordId::new(1));
        assert_eq!(err.code(), "SLOT_NOT_AVAILABLE");

        let err = DomainError::ResidentHoldsSlots {
            id: RecordId::new(1),
            slots: 2,
        };
        assert_eq!(err.code(), "RESIDENT_HOLDS_SLOTS");
    }

    #[test]
    fn test_classifiers() {
        assert!(DomainError::ResidentNotFound(RecordId::new(1)).is_not_found());
        assert!(DomainError::SlotNotAvailable(RecordId::new(1)).is_conflict());
        assert!(DomainError::SlotReassigned(RecordId::new(1)).is_conflict());
        assert!(DomainError::PaymentExists {
            resident_id: RecordId::new(1),
            month: "2026-08".into()
        }
        .is_conflict());
        assert!(DomainError::ValidationError("empty name".into()).is_validation());
        assert!(DomainError::ResidentHoldsSlots {
            id: RecordId::new(1),
            slots: 1
        }
        .is_policy());
        assert!(!DomainError::DatabaseError("boom".into()).is_conflict());
    }

    #[test]
    fn test_policy_message_is_operator_facing() {
        let err = DomainError::ResidentHoldsSlots {
            id: RecordId::new(1),
            slots: 1,
        };
        assert!(err.to_string().contains("駐輪枠の割り当てを解除"));
    }
}
