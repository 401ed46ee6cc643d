//! Service context - dependency container for services
//!
//! Holds the repositories, the photo store, the JWT service, and the
//! provisioned staff account.

use std::sync::Arc;

use park_common::auth::JwtService;
use park_common::config::StaffConfig;
use park_core::traits::{
    AssignmentRepository, PaymentRepository, ResidentRepository, SlotRepository,
    StickerRepository, ViolationRepository,
};
use park_db::PgPool;
use park_storage::PhotoStorage;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (health probes, ad hoc queries)
    pool: PgPool,

    // Repositories
    resident_repo: Arc<dyn ResidentRepository>,
    slot_repo: Arc<dyn SlotRepository>,
    sticker_repo: Arc<dyn StickerRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    payment_repo: Arc<dyn PaymentRepository>,
    violation_repo: Arc<dyn ViolationRepository>,

    // Photo storage
    photo_storage: Arc<dyn PhotoStorage>,

    // Auth
    jwt_service: Arc<JwtService>,
    staff: StaffConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        resident_repo: Arc<dyn ResidentRepository>,
        slot_repo: Arc<dyn SlotRepository>,
        sticker_repo: Arc<dyn StickerRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        payment_repo: Arc<dyn PaymentRepository>,
        violation_repo: Arc<dyn ViolationRepository>,
        photo_storage: Arc<dyn PhotoStorage>,
        jwt_service: Arc<JwtService>,
        staff: StaffConfig,
    ) -> Self {
        Self {
            pool,
            resident_repo,
            slot_repo,
            sticker_repo,
            assignment_repo,
            payment_repo,
            violation_repo,
            photo_storage,
            jwt_service,
            staff,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the resident repository
    pub fn resident_repo(&self) -> &dyn ResidentRepository {
        self.resident_repo.as_ref()
    }

    /// Get the slot repository
    pub fn slot_repo(&self) -> &dyn SlotRepository {
        self.slot_repo.as_ref()
    }

    /// Get the sticker repository
    pub fn sticker_repo(&self) -> &dyn StickerRepository {
        self.sticker_repo.as_ref()
    }

    /// Get the assignment repository
    pub fn assignment_repo(&self) -> &dyn AssignmentRepository {
        self.assignment_repo.as_ref()
    }

    /// Get the payment repository
    pub fn payment_repo(&self) -> &dyn PaymentRepository {
        self.payment_repo.as_ref()
    }

    /// Get the violation repository
    pub fn violation_repo(&self) -> &dyn ViolationRepository {
        self.violation_repo.as_ref()
    }

    /// Get the photo store
    pub fn photo_storage(&self) -> &dyn PhotoStorage {
        self.photo_storage.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the provisioned staff account
    pub fn staff(&self) -> &StaffConfig {
        &self.staff
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("staff_email", &self.staff.email)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    resident_repo: Option<Arc<dyn ResidentRepository>>,
    slot_repo: Option<Arc<dyn SlotRepository>>,
    sticker_repo: Option<Arc<dyn StickerRepository>>,
    assignment_repo: Option<Arc<dyn AssignmentRepository>>,
    payment_repo: Option<Arc<dyn PaymentRepository>>,
    violation_repo: Option<Arc<dyn ViolationRepository>>,
    photo_storage: Option<Arc<dyn PhotoStorage>>,
    jwt_service: Option<Arc<JwtService>>,
    staff: Option<StaffConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn resident_repo(mut self, repo: Arc<dyn ResidentRepository>) -> Self {
        self.resident_repo = Some(repo);
        self
    }

    pub fn slot_repo(mut self, repo: Arc<dyn SlotRepository>) -> Self {
        self.slot_repo = Some(repo);
        self
    }

    pub fn sticker_repo(mut self, repo: Arc<dyn StickerRepository>) -> Self {
        self.sticker_repo = Some(repo);
        self
    }

    pub fn assignment_repo(mut self, repo: Arc<dyn AssignmentRepository>) -> Self {
        self.assignment_repo = Some(repo);
        self
    }

    pub fn payment_repo(mut self, repo: Arc<dyn PaymentRepository>) -> Self {
        self.payment_repo = Some(repo);
        self
    }

    pub fn violation_repo(mut self, repo: Arc<dyn ViolationRepository>) -> Self {
        self.violation_repo = Some(repo);
        self
    }

    pub fn photo_storage(mut self, storage: Arc<dyn PhotoStorage>) -> Self {
        self.photo_storage = Some(storage);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn staff(mut self, staff: StaffConfig) -> Self {
        self.staff = Some(staff);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.resident_repo
                .ok_or_else(|| ServiceError::validation("resident_repo is required"))?,
            self.slot_repo
                .ok_or_else(|| ServiceError::validation("slot_repo is required"))?,
            self.sticker_repo
                .ok_or_else(|| ServiceError::validation("sticker_repo is required"))?,
            self.assignment_repo
                .ok_or_else(|| ServiceError::validation("assignment_repo is required"))?,
            self.payment_repo
                .ok_or_else(|| ServiceError::validation("payment_repo is required"))?,
            self.violation_repo
                .ok_or_else(|| ServiceError::validation("violation_repo is required"))?,
            self.photo_storage
                .ok_or_else(|| ServiceError::validation("photo_storage is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.staff
                .ok_or_else(|| ServiceError::validation("staff is required"))?,
        ))
    }
}
