//! PostgreSQL repository implementations

mod assignment;
mod error;
mod payment;
mod resident;
mod slot;
mod sticker;
mod violation;

pub use assignment::PgAssignmentRepository;
pub use payment::PgPaymentRepository;
pub use resident::PgResidentRepository;
pub use slot::PgSlotRepository;
pub use sticker::PgStickerRepository;
pub use violation::PgViolationRepository;
