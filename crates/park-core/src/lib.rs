//! # park-core
//!
//! Domain layer for the bicycle-parking administration system: entities,
//! value objects, repository traits, and the domain error taxonomy.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BicycleSlot, NewPayment, NewResident, NewSlot, NewSticker, NewViolation, Payment,
    PaymentStatus, Resident, ResidentStatus, SlotStatus, Sticker, ViolationLog,
};
pub use error::DomainError;
pub use traits::{
    AssignTarget, AssignmentCommand, AssignmentOutcome, AssignmentRepository, PaymentRepository,
    PaymentWithResident, RepoResult, ResidentRepository, ResidentWithSlots, SlotRepository,
    SlotWithResident, StickerRepository, ViolationRepository,
};
pub use value_objects::{RecordId, RecordIdParseError, YearMonth, YearMonthParseError};
