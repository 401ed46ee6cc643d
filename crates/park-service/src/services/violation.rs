//! Violation log service
//!
//! Records of unauthorized parking with optional photo evidence. Photos
//! are uploaded first and referenced by URL; deleting a log removes its
//! photo best-effort.

use chrono::Utc;
use park_core::entities::NewViolation;
use park_core::value_objects::RecordId;
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateViolationRequest, PhotoUploadResponse, UpdateViolationRequest, ViolationResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Violation service
pub struct ViolationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViolationService<'a> {
    /// Create a new ViolationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all violation logs, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ViolationResponse>> {
        let rows = self.ctx.violation_repo().list().await?;
        Ok(rows.iter().map(ViolationResponse::from).collect())
    }

    /// Get a violation log by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<ViolationResponse> {
        let violation = self
            .ctx
            .violation_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Violation", id.to_string()))?;

        Ok(ViolationResponse::from(&violation))
    }

    /// Record a new violation
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateViolationRequest) -> ServiceResult<ViolationResponse> {
        let new = NewViolation {
            location: request.location,
            memo: request.memo,
            photo_url: request.photo_url,
            reported_at: request.reported_at.unwrap_or_else(Utc::now),
        };
        let violation = self.ctx.violation_repo().create(&new).await?;

        info!(violation_id = %violation.id, "Violation recorded");
        Ok(ViolationResponse::from(&violation))
    }

    /// Update a violation log (partial)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: RecordId,
        request: UpdateViolationRequest,
    ) -> ServiceResult<ViolationResponse> {
        let mut violation = self
            .ctx
            .violation_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Violation", id.to_string()))?;

        if let Some(location) = request.location {
            violation.location = location;
        }
        if let Some(memo) = request.memo {
            violation.memo = Some(memo);
        }
        if let Some(photo_url) = request.photo_url {
            violation.photo_url = Some(photo_url);
        }
        if let Some(reported_at) = request.reported_at {
            violation.reported_at = reported_at;
        }

        let updated = self.ctx.violation_repo().update(&violation).await?;

        info!(violation_id = %id, "Violation updated");
        Ok(ViolationResponse::from(&updated))
    }

    /// Delete a violation log, removing its photo best-effort
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> ServiceResult<()> {
        let violation = self
            .ctx
            .violation_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Violation", id.to_string()))?;

        self.ctx.violation_repo().delete(id).await?;

        // The row is gone; a stale file on disk is preferable to a
        // delete that fails after the fact.
        if let Some(photo_url) = &violation.photo_url {
            if let Err(e) = self.ctx.photo_storage().remove_by_url(photo_url).await {
                warn!(violation_id = %id, error = %e, "Failed to remove violation photo");
            }
        }

        info!(violation_id = %id, "Violation deleted");
        Ok(())
    }

    /// Store an uploaded photo and return its public URL
    #[instrument(skip(self, bytes), fields(filename = %filename, size = bytes.len()))]
    pub async fn upload_photo(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> ServiceResult<PhotoUploadResponse> {
        let photo_url = self.ctx.photo_storage().store(filename, bytes).await?;

        info!(photo_url = %photo_url, "Violation photo stored");
        Ok(PhotoUploadResponse { photo_url })
    }
}
