//! Room service
//!
//! Admin CRUD over physical rooms. Availability is a denormalized flag;
//! the resolver in `AvailabilityService` is the source of truth.

use guesthouse_core::entities::{Room, User};
use guesthouse_core::value_objects::RoomNumber;
use guesthouse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateRoomRequest, RoomResponse, UpdateRoomRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Room service
pub struct RoomService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomService<'a> {
    /// Create a new RoomService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all active rooms
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> ServiceResult<Vec<RoomResponse>> {
        let rooms = self.ctx.room_repo().find_all().await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// List active rooms within a location
    #[instrument(skip(self))]
    pub async fn list_rooms_in_location(
        &self,
        location_id: Snowflake,
    ) -> ServiceResult<Vec<RoomResponse>> {
        // Surface a 404 for an unknown or deactivated location
        self.ctx
            .location_repo()
            .find_by_id(location_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Location", location_id.to_string()))?;

        let rooms = self.ctx.room_repo().find_by_location(location_id).await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// Get a room by ID
    #[instrument(skip(self))]
    pub async fn get_room(&self, id: Snowflake) -> ServiceResult<RoomResponse> {
        let room = self.require_room(id).await?;
        Ok(RoomResponse::from(&room))
    }

    /// Create a room under a location (admin only)
    ///
    /// The location must exist and be active; a deactivated location cannot
    /// gain rooms.
    #[instrument(skip(self, acting_user, request), fields(room_number = request.room_number))]
    pub async fn create_room(
        &self,
        acting_user: &User,
        location_id: Snowflake,
        request: CreateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        self.require_admin(acting_user)?;

        self.ctx
            .location_repo()
            .find_by_id(location_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Location", location_id.to_string()))?;

        let number = RoomNumber::new(request.room_number);
        let mut room = Room::new(self.ctx.generate_id(), number, location_id);
        room.set_remark(request.remark);

        self.ctx.room_repo().create(&room).await?;

        info!(room_id = %room.id, room_number = %number, "Room created");
        Ok(RoomResponse::from(&room))
    }

    /// Update a room (admin only)
    #[instrument(skip(self, acting_user, request))]
    pub async fn update_room(
        &self,
        acting_user: &User,
        id: Snowflake,
        request: UpdateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        self.require_admin(acting_user)?;

        let mut room = self.require_room(id).await?;

        if let Some(remark) = request.remark {
            room.set_remark(Some(remark));
            self.ctx.room_repo().update(&room).await?;
            info!(room_id = %id, "Room updated");
        }

        Ok(RoomResponse::from(&room))
    }

    /// Deactivate a room (admin only, soft delete)
    ///
    /// Stay history referencing this room number is left untouched; the
    /// resolver treats those stays as orphans.
    #[instrument(skip(self, acting_user))]
    pub async fn delete_room(&self, acting_user: &User, id: Snowflake) -> ServiceResult<()> {
        self.require_admin(acting_user)?;

        self.ctx.room_repo().delete(id).await?;
        info!(room_id = %id, "Room deactivated");
        Ok(())
    }

    async fn require_room(&self, id: Snowflake) -> ServiceResult<Room> {
        self.ctx
            .room_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", id.to_string()))
    }

    fn require_admin(&self, acting_user: &User) -> ServiceResult<()> {
        if acting_user.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::permission_denied("manage rooms"))
        }
    }
}
