//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path parameters.

mod auth;
mod path;
mod validated;

pub use auth::AuthStaff;
pub use path::RecordIdPath;
pub use validated::ValidatedJson;
