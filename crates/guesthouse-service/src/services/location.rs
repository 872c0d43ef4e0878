//! Location service
//!
//! Admin CRUD over guest house sites.

use guesthouse_core::entities::{Location, User};
use guesthouse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateLocationRequest, LocationResponse, UpdateLocationRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Location service
pub struct LocationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LocationService<'a> {
    /// Create a new LocationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all active locations
    #[instrument(skip(self))]
    pub async fn list_locations(&self) -> ServiceResult<Vec<LocationResponse>> {
        let locations = self.ctx.location_repo().find_all().await?;
        Ok(locations.iter().map(LocationResponse::from).collect())
    }

    /// Get a location by ID
    #[instrument(skip(self))]
    pub async fn get_location(&self, id: Snowflake) -> ServiceResult<LocationResponse> {
        let location = self.require_location(id).await?;
        Ok(LocationResponse::from(&location))
    }

    /// Create a location (admin only)
    #[instrument(skip(self, acting_user, request), fields(code = %request.code))]
    pub async fn create_location(
        &self,
        acting_user: &User,
        request: CreateLocationRequest,
    ) -> ServiceResult<LocationResponse> {
        self.require_admin(acting_user)?;

        if self
            .ctx
            .location_repo()
            .find_by_code(&request.code)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Location code already in use"));
        }

        let location = Location::new(self.ctx.generate_id(), request.name, request.code);
        self.ctx.location_repo().create(&location).await?;

        info!(location_id = %location.id, "Location created");
        Ok(LocationResponse::from(&location))
    }

    /// Update a location (admin only)
    #[instrument(skip(self, acting_user, request))]
    pub async fn update_location(
        &self,
        acting_user: &User,
        id: Snowflake,
        request: UpdateLocationRequest,
    ) -> ServiceResult<LocationResponse> {
        self.require_admin(acting_user)?;

        let mut location = self.require_location(id).await?;

        if let Some(name) = request.name {
            location.set_name(name);
            self.ctx.location_repo().update(&location).await?;
            info!(location_id = %id, "Location updated");
        }

        Ok(LocationResponse::from(&location))
    }

    /// Deactivate a location (admin only, soft delete)
    #[instrument(skip(self, acting_user))]
    pub async fn delete_location(&self, acting_user: &User, id: Snowflake) -> ServiceResult<()> {
        self.require_admin(acting_user)?;

        self.ctx.location_repo().delete(id).await?;
        info!(location_id = %id, "Location deactivated");
        Ok(())
    }

    async fn require_location(&self, id: Snowflake) -> ServiceResult<Location> {
        self.ctx
            .location_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Location", id.to_string()))
    }

    fn require_admin(&self, acting_user: &User) -> ServiceResult<()> {
        if acting_user.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::permission_denied("manage locations"))
        }
    }
}
