//! Repository traits (ports) - define the interface for the entity store
//!
//! The domain layer defines what it needs from the backing store; the
//! infrastructure layer (park-db) provides the PostgreSQL implementation.
//! Every write returns the persisted row because ids and timestamps are
//! store-assigned.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    BicycleSlot, NewPayment, NewResident, NewSlot, NewViolation, Payment, PaymentStatus, Resident,
    Sticker, ViolationLog,
};
use crate::error::DomainError;
use crate::value_objects::{RecordId, YearMonth};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Joined read projections
// ============================================================================

/// Slot joined with its assigned resident, for list views
#[derive(Debug, Clone)]
pub struct SlotWithResident {
    pub slot: BicycleSlot,
    pub resident: Option<Resident>,
}

/// Resident joined with the slots they hold
#[derive(Debug, Clone)]
pub struct ResidentWithSlots {
    pub resident: Resident,
    pub slots: Vec<BicycleSlot>,
}

/// Payment joined with its resident, for list views and CSV export
#[derive(Debug, Clone)]
pub struct PaymentWithResident {
    pub payment: Payment,
    pub resident: Resident,
}

// ============================================================================
// Resident Repository
// ============================================================================

#[async_trait]
pub trait ResidentRepository: Send + Sync {
    /// Find resident by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Resident>>;

    /// List all residents with their slots, ordered by name
    async fn list_with_slots(&self) -> RepoResult<Vec<ResidentWithSlots>>;

    /// Find a resident with their slots
    async fn find_with_slots(&self, id: RecordId) -> RepoResult<Option<ResidentWithSlots>>;

    /// Insert a new resident, returning the persisted row
    async fn create(&self, new: &NewResident) -> RepoResult<Resident>;

    /// Update name/room/contact/status, returning the persisted row
    async fn update(&self, resident: &Resident) -> RepoResult<Resident>;

    /// Hard delete a resident (callers run the deletion guard first)
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Count slots currently referencing this resident (deletion guard)
    async fn held_slot_count(&self, id: RecordId) -> RepoResult<i64>;

    /// Count all residents
    async fn count(&self) -> RepoResult<i64>;

    /// Count residents with the given status
    async fn count_by_status(&self, status: &str) -> RepoResult<i64>;
}

// ============================================================================
// Slot Repository
// ============================================================================

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Find slot by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<BicycleSlot>>;

    /// List all slots with their residents, ordered by slot_code
    async fn list_with_residents(&self) -> RepoResult<Vec<SlotWithResident>>;

    /// List slots open for assignment (available and unassigned), ordered by slot_code
    async fn list_available(&self) -> RepoResult<Vec<BicycleSlot>>;

    /// Insert a new slot, returning the persisted row
    async fn create(&self, new: &NewSlot) -> RepoResult<BicycleSlot>;

    /// Update slot_code/location/status, returning the persisted row
    ///
    /// Never touches resident_id; assignment state only moves through
    /// the assignment/release operations.
    async fn update(&self, slot: &BicycleSlot) -> RepoResult<BicycleSlot>;

    /// Hard delete a slot
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Clear the assignment: resident_id = NULL, status = available
    ///
    /// Returns the persisted row. A no-op on an already-available slot.
    async fn release(&self, id: RecordId) -> RepoResult<BicycleSlot>;

    /// Count all slots
    async fn count(&self) -> RepoResult<i64>;

    /// Count available, unassigned slots
    async fn count_available(&self) -> RepoResult<i64>;

    /// Count occupied, assigned slots
    async fn count_occupied(&self) -> RepoResult<i64>;
}

// ============================================================================
// Assignment Repository
// ============================================================================

/// Who the slot is being assigned to
#[derive(Debug, Clone)]
pub enum AssignTarget {
    /// An existing resident
    Existing(RecordId),
    /// Create this resident first, then assign
    New(NewResident),
}

/// The full assignment workflow input
#[derive(Debug, Clone)]
pub struct AssignmentCommand {
    pub slot_id: RecordId,
    pub target: AssignTarget,
    pub sticker_number: String,
    pub issued_date: NaiveDate,
}

/// Rows produced by a successful assignment
#[derive(Debug, Clone)]
pub struct AssignmentOutcome {
    pub resident: Resident,
    pub slot: BicycleSlot,
    pub sticker: Sticker,
}

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Execute the assignment workflow as one atomic unit:
    /// optionally insert the resident, compare-and-swap the slot to
    /// occupied (failing with `SlotNotAvailable` if another assignment
    /// won the race), and record the sticker. All steps commit or abort
    /// together.
    async fn assign(&self, command: &AssignmentCommand) -> RepoResult<AssignmentOutcome>;
}

// ============================================================================
// Sticker Repository
// ============================================================================

#[async_trait]
pub trait StickerRepository: Send + Sync {
    /// Sticker history for a slot, newest first
    async fn list_by_slot(&self, slot_id: RecordId) -> RepoResult<Vec<Sticker>>;
}

// ============================================================================
// Payment Repository
// ============================================================================

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find payment by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Payment>>;

    /// List payments with residents, ordered by month desc
    ///
    /// Optional equality filters on status and month.
    async fn list_with_residents(
        &self,
        status: Option<PaymentStatus>,
        month: Option<&YearMonth>,
    ) -> RepoResult<Vec<PaymentWithResident>>;

    /// Insert a single payment, returning the persisted row
    async fn create(&self, new: &NewPayment) -> RepoResult<Payment>;

    /// Batch generation: one unpaid row per active resident holding at
    /// least one slot and lacking a payment for the month. Returns the
    /// number of rows created (zero eligible is a no-op, not an error).
    async fn generate_monthly(&self, month: &YearMonth, amount: i64) -> RepoResult<i64>;

    /// Mark paid: status = paid, paid_at set if not already (idempotent)
    async fn mark_paid(&self, id: RecordId, paid_at: DateTime<Utc>) -> RepoResult<Payment>;

    /// Revert to unpaid: status = unpaid, paid_at cleared (idempotent)
    async fn mark_unpaid(&self, id: RecordId) -> RepoResult<Payment>;

    /// Count all payments
    async fn count(&self) -> RepoResult<i64>;

    /// Count unpaid payments
    async fn count_unpaid(&self) -> RepoResult<i64>;

    /// Count payments for a month
    async fn count_by_month(&self, month: &YearMonth) -> RepoResult<i64>;
}

// ============================================================================
// Violation Repository
// ============================================================================

#[async_trait]
pub trait ViolationRepository: Send + Sync {
    /// Find violation log by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<ViolationLog>>;

    /// List all violation logs, newest first by reported_at
    async fn list(&self) -> RepoResult<Vec<ViolationLog>>;

    /// Insert a new violation log, returning the persisted row
    async fn create(&self, new: &NewViolation) -> RepoResult<ViolationLog>;

    /// Update location/memo/photo_url/reported_at, returning the persisted row
    async fn update(&self, violation: &ViolationLog) -> RepoResult<ViolationLog>;

    /// Hard delete a violation log (photo removal is the caller's job)
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Count all violation logs
    async fn count(&self) -> RepoResult<i64>;

    /// Count violations reported at or after the given instant
    async fn count_reported_since(&self, since: DateTime<Utc>) -> RepoResult<i64>;
}
