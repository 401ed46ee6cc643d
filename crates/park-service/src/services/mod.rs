//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod assignment;
pub mod auth;
pub mod context;
pub mod error;
pub mod export;
pub mod payment;
pub mod resident;
pub mod slot;
pub mod stats;
pub mod violation;

// Re-export all services for convenience
pub use assignment::AssignmentService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use export::ExportService;
pub use payment::PaymentService;
pub use resident::ResidentService;
pub use slot::SlotService;
pub use stats::StatsService;
pub use violation::ViolationService;
