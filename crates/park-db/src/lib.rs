//! # park-db
//!
//! Database layer implementing the entity-store repository traits with
//! PostgreSQL via SQLx. It handles:
//!
//! - Connection pool management
//! - Row models with SQLx `FromRow` derives
//! - Model → entity conversions
//! - Repository implementations, including the transactional assignment
//!   workflow and the set-based monthly payment generation
//!
//! All deletes are hard deletes; ids and timestamps are assigned by the
//! database and every write statement uses `RETURNING` to hand the
//! persisted row back to the caller.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrations::{run_migrations, MIGRATOR};
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAssignmentRepository, PgPaymentRepository, PgResidentRepository, PgSlotRepository,
    PgStickerRepository, PgViolationRepository,
};
