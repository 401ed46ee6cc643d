//! Repository traits (ports) for the entity store

mod repositories;

pub use repositories::{
    AssignTarget, AssignmentCommand, AssignmentOutcome, AssignmentRepository, PaymentRepository,
    PaymentWithResident, RepoResult, ResidentRepository, ResidentWithSlots, SlotRepository,
    SlotWithResident, StickerRepository, ViolationRepository,
};
