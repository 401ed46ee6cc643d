//! Error handling utilities for repositories

use park_core::error::DomainError;
use park_core::value_objects::RecordId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique and foreign key violations with separate fallbacks
pub fn map_constraint_violation<U, F>(e: SqlxError, on_unique: U, on_fk: F) -> DomainError
where
    U: FnOnce() -> DomainError,
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "resident not found" error
pub fn resident_not_found(id: RecordId) -> DomainError {
    DomainError::ResidentNotFound(id)
}

/// Create a "slot not found" error
pub fn slot_not_found(id: RecordId) -> DomainError {
    DomainError::SlotNotFound(id)
}

/// Create a "payment not found" error
pub fn payment_not_found(id: RecordId) -> DomainError {
    DomainError::PaymentNotFound(id)
}

/// Create a "violation not found" error
pub fn violation_not_found(id: RecordId) -> DomainError {
    DomainError::ViolationNotFound(id)
}
