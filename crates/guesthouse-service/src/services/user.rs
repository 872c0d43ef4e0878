//! User service
//!
//! Handles account operations with role-based visibility: staff accounts
//! see only themselves, admins see everyone.

use guesthouse_common::auth::{hash_password, validate_password_strength, verify_password};
use guesthouse_common::AppError;
use guesthouse_core::entities::{User, UserRole};
use guesthouse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    ChangePasswordRequest, CreateUserRequest, CurrentUserResponse, UpdateUserRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self.require_user(user_id).await?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.require_user(user_id).await
    }

    /// List all active users (admin only)
    #[instrument(skip(self, acting_user))]
    pub async fn list_users(&self, acting_user: &User) -> ServiceResult<Vec<UserResponse>> {
        self.require_admin(acting_user)?;

        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID (admin only)
    #[instrument(skip(self, acting_user))]
    pub async fn get_user(
        &self,
        acting_user: &User,
        user_id: Snowflake,
    ) -> ServiceResult<UserResponse> {
        self.require_admin(acting_user)?;

        let user = self.require_user(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Create an account with an explicit role (admin only)
    ///
    /// This is the only authenticated path that can produce an admin account;
    /// self-registration is pinned to Staff.
    #[instrument(skip(self, acting_user, request), fields(username = %request.username))]
    pub async fn create_user(
        &self,
        acting_user: &User,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        self.require_admin(acting_user)?;

        let role = match request.role.as_deref() {
            None | Some("staff") => UserRole::Staff,
            Some("admin") => UserRole::Admin,
            Some(other) => {
                return Err(ServiceError::validation(format!("Unknown role: {other}")));
            }
        };

        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::conflict("Username already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, request.display_name, role);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, created_by = %acting_user.id, role = ?user.role, "User account created");

        Ok(UserResponse::from(&user))
    }

    /// Update current user's profile
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self.require_user(user_id).await?;

        if let Some(display_name) = request.display_name {
            user.set_display_name(display_name);
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User profile updated");
        }

        Ok(CurrentUserResponse::from(&user))
    }

    /// Change the current user's password
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Snowflake,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_valid = verify_password(&request.current_password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !is_valid {
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx.user_repo().update_password(user_id, &new_hash).await?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    /// Deactivate a user account (admin only, soft delete)
    #[instrument(skip(self, acting_user))]
    pub async fn deactivate_user(
        &self,
        acting_user: &User,
        user_id: Snowflake,
    ) -> ServiceResult<()> {
        self.require_admin(acting_user)?;

        if acting_user.id == user_id {
            return Err(ServiceError::validation("Cannot deactivate own account"));
        }

        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User account deactivated");
        Ok(())
    }

    async fn require_user(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    fn require_admin(&self, acting_user: &User) -> ServiceResult<()> {
        if acting_user.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::permission_denied("manage users"))
        }
    }
}
