//! Availability service
//!
//! Wraps the occupancy resolver over fresh reads. Nothing is cached; every
//! request recomputes from the current room list and stay ledger. The two
//! reads are not isolated, so a concurrent check-out can yield one stale
//! render, which the next request corrects.

use guesthouse_core::entities::User;
use guesthouse_core::occupancy;
use guesthouse_core::traits::StayFilter;
use guesthouse_core::value_objects::RoomNumber;
use tracing::{info, instrument};

use crate::dto::{AvailabilityResponse, ReconcileResponse, RoomResponse, RoomStatusResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Availability service
pub struct AvailabilityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvailabilityService<'a> {
    /// Create a new AvailabilityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List rooms with no current stay, per the resolver
    #[instrument(skip(self))]
    pub async fn available_rooms(&self) -> ServiceResult<AvailabilityResponse> {
        let rooms = self.ctx.room_repo().find_all().await?;
        let current = self
            .ctx
            .stay_repo()
            .find_all(StayFilter {
                current_only: true,
                room_number: None,
            })
            .await?;

        let occupied = occupancy::occupied_room_numbers(&current);
        let available = occupancy::available_rooms(rooms, &occupied);

        Ok(AvailabilityResponse::new(
            available.iter().map(RoomResponse::from).collect(),
        ))
    }

    /// Resolve the status of a single room number from the ledger
    #[instrument(skip(self))]
    pub async fn room_status(&self, number: RoomNumber) -> ServiceResult<RoomStatusResponse> {
        let current = self
            .ctx
            .stay_repo()
            .find_all(StayFilter {
                current_only: true,
                room_number: Some(number),
            })
            .await?;

        let occupied = occupancy::occupied_room_numbers(&current);
        let status = occupancy::room_status(number, &occupied);

        Ok(RoomStatusResponse {
            room_number: number.into_inner(),
            status: if status.is_available() {
                "available".to_string()
            } else {
                "booked".to_string()
            },
        })
    }

    /// Rewrite every room whose denormalized flag disagrees with the ledger
    /// (admin only); reports how many were corrected
    #[instrument(skip(self, acting_user))]
    pub async fn reconcile(&self, acting_user: &User) -> ServiceResult<ReconcileResponse> {
        if !acting_user.is_admin() {
            return Err(ServiceError::permission_denied("reconcile availability"));
        }

        let rooms = self.ctx.room_repo().find_all().await?;
        let current = self
            .ctx
            .stay_repo()
            .find_all(StayFilter {
                current_only: true,
                room_number: None,
            })
            .await?;

        let occupied = occupancy::occupied_room_numbers(&current);

        let mut corrected = 0;
        for room in rooms {
            let resolved = occupancy::room_status(room.number, &occupied);
            if room.availability != resolved {
                self.ctx.room_repo().set_availability(room.id, resolved).await?;
                corrected += 1;
            }
        }

        info!(corrected, "Availability flags reconciled");
        Ok(ReconcileResponse { corrected })
    }
}
