//! Authentication service
//!
//! Handles user registration, login, and stateless token refresh.

use guesthouse_common::auth::{hash_password, validate_password_strength, verify_password};
use guesthouse_common::AppError;
use guesthouse_core::entities::{User, UserRole};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

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

    /// Register a new staff account
    ///
    /// Self-registration always yields a Staff account. Admin accounts are
    /// issued by an existing admin (`UserService::create_user`) or seeded at
    /// startup (`ensure_bootstrap_admin`).
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if username already exists
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::conflict("Username already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user
        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, request.display_name, UserRole::Staff);

        // Save to database
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user_id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Seed the configured admin account if it does not exist yet
    ///
    /// Idempotent: when the username is already taken the call is a no-op, so
    /// it is safe to run on every startup. This is the only path that creates
    /// an admin without an authenticated admin behind it.
    #[instrument(skip(self, password))]
    pub async fn ensure_bootstrap_admin(&self, username: &str, password: &str) -> ServiceResult<()> {
        if self.ctx.user_repo().username_exists(username).await? {
            return Ok(());
        }

        validate_password_strength(password).map_err(ServiceError::from)?;

        let password_hash =
            hash_password(password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(
            user_id,
            username.to_string(),
            "Administrator".to_string(),
            UserRole::Admin,
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, username, "Bootstrap admin created");

        Ok(())
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by username
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Refresh access token using a refresh token
    ///
    /// Stateless: the refresh JWT is validated and a new pair issued against
    /// the user's current record. A deactivated account cannot refresh.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let user_id = claims.user_id().map_err(ServiceError::from)?;

        // Re-read the user so a role change or deactivation takes effect
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "Tokens refreshed");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<guesthouse_core::Snowflake> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }
}
