//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Status and month columns are TEXT, so model → entity conversion is
//! fallible (`TryFrom`); a row that fails to parse means the database
//! holds data no code path writes, surfaced as an internal error.

mod payment;
mod resident;
mod slot;
mod sticker;
mod violation;

pub use payment::{PaymentModel, PaymentWithResidentModel};
pub use resident::ResidentModel;
pub use slot::{SlotModel, SlotWithResidentModel};
pub use sticker::StickerModel;
pub use violation::ViolationModel;
