//! Domain entities - the five persistent record types

mod payment;
mod resident;
mod slot;
mod sticker;
mod violation;

pub use payment::{NewPayment, Payment, PaymentStatus};
pub use resident::{NewResident, Resident, ResidentStatus};
pub use slot::{BicycleSlot, NewSlot, SlotStatus};
pub use sticker::{NewSticker, Sticker};
pub use violation::{NewViolation, ViolationLog};
