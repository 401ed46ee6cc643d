//! Application state
//!
//! One `Arc` wraps the whole state, so handler clones are a single
//! refcount bump regardless of how many dependencies the context holds.

use std::sync::Arc;

use park_common::{AppConfig, JwtService};
use park_service::ServiceContext;

struct AppStateInner {
    service_context: ServiceContext,
    config: AppConfig,
}

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                service_context,
                config,
            }),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.inner.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.inner.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
