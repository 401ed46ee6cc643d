//! Staff authentication service
//!
//! A single staff principal is provisioned through configuration; login
//! checks the email and Argon2 hash from there, and refresh is stateless
//! (the refresh token itself carries the identity).

use park_common::auth::verify_password;
use park_common::AppError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with the staff email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let staff = self.ctx.staff();

        if request.email != staff.email {
            warn!("Login failed: unknown email");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let is_valid = verify_password(&request.password, &staff.password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!("Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token_pair = self.ctx.jwt_service().generate_token_pair(&staff.email)?;

        info!("Staff logged in");

        Ok(AuthResponse {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            token_type: token_pair.token_type,
            expires_in: token_pair.expires_in,
        })
    }

    /// Exchange a refresh token for a new pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let token_pair = self.ctx.jwt_service().refresh_tokens(&request.refresh_token)?;

        info!("Tokens refreshed");

        Ok(AuthResponse {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            token_type: token_pair.token_type,
            expires_in: token_pair.expires_in,
        })
    }
}
