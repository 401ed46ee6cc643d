//! Data Transfer Objects
//!
//! Request DTOs carry `validator` derives; response DTOs are plain
//! `Serialize` structs built from entities in `mappers`.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
