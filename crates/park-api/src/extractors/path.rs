//! Path parameter extractor
//!
//! Parses numeric record ids from path segments with a consistent
//! error body on failure.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use park_core::value_objects::RecordId;

use crate::response::ApiError;

/// A single `:id` path segment parsed into a [`RecordId`]
#[derive(Debug, Clone, Copy)]
pub struct RecordIdPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for RecordIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::invalid_path(format!("Invalid id: {raw}")))?;

        Ok(RecordIdPath(RecordId::new(id)))
    }
}
