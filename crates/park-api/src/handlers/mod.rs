//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod payments;
pub mod residents;
pub mod slots;
pub mod stats;
pub mod violations;
