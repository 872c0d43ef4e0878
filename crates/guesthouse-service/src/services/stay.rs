//! Stay service
//!
//! The check-in/check-out ledger. Check-in rejects an unknown or occupied
//! room number; check-out writes both halves of the pair in one update and
//! refreshes the room's denormalized availability flag.

use guesthouse_core::entities::{Availability, GuestDetails, Stay};
use guesthouse_core::occupancy;
use guesthouse_core::traits::StayFilter;
use guesthouse_core::value_objects::RoomNumber;
use guesthouse_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{CheckInRequest, CheckOutRequest, StayListQuery, StayResponse, UpdateStayRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Stay service
pub struct StayService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StayService<'a> {
    /// Create a new StayService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check a guest in, opening a new stay record
    #[instrument(skip(self, request), fields(room_number = request.room_number))]
    pub async fn check_in(&self, request: CheckInRequest) -> ServiceResult<StayResponse> {
        let number = RoomNumber::new(request.room_number);

        // The room must exist and be active
        let room = self
            .ctx
            .room_repo()
            .find_by_number(number)
            .await?
            .ok_or(DomainError::RoomNumberNotFound(number))?;

        // Reject a room the ledger says is occupied
        let current = self
            .ctx
            .stay_repo()
            .find_all(StayFilter {
                current_only: true,
                room_number: Some(number),
            })
            .await?;
        if !current.is_empty() {
            return Err(DomainError::RoomOccupied(number).into());
        }

        let guest = GuestDetails {
            name: request.guest_name,
            id_number: request.guest_id_number,
            id_type: request.guest_id_type,
            nationality: request.guest_nationality,
            contact: request.guest_contact,
            company: request.guest_company,
            address: request.guest_address,
        };

        let mut stay = Stay::check_in(
            self.ctx.generate_id(),
            guest,
            number,
            request.check_in_date,
            request.check_in_time,
        );
        stay.department = request.department;
        stay.purpose = request.purpose;

        self.ctx.stay_repo().create(&stay).await?;

        // Flip the denormalized flag; reconcile repairs any drift
        self.ctx
            .room_repo()
            .set_availability(room.id, Availability::Booked)
            .await?;

        info!(stay_id = %stay.id, room_number = %number, "Guest checked in");
        Ok(StayResponse::from(&stay))
    }

    /// Check a guest out
    #[instrument(skip(self, request))]
    pub async fn check_out(
        &self,
        id: Snowflake,
        request: CheckOutRequest,
    ) -> ServiceResult<StayResponse> {
        let mut stay = self.require_stay(id).await?;

        if stay.is_checked_out() {
            return Err(DomainError::AlreadyCheckedOut.into());
        }

        stay.check_out(request.check_out_date, request.check_out_time);
        self.ctx
            .stay_repo()
            .check_out(id, request.check_out_date, request.check_out_time)
            .await?;

        // Free the room unless another current stay still claims the number
        let remaining = self
            .ctx
            .stay_repo()
            .find_all(StayFilter {
                current_only: true,
                room_number: Some(stay.room_number),
            })
            .await?;
        if remaining.is_empty() {
            match self.ctx.room_repo().find_by_number(stay.room_number).await? {
                Some(room) => {
                    self.ctx
                        .room_repo()
                        .set_availability(room.id, Availability::Available)
                        .await?;
                }
                // Orphaned stay: the room was renumbered or deactivated
                None => {
                    warn!(stay_id = %id, room_number = %stay.room_number, "Checked out of unknown room");
                }
            }
        }

        info!(stay_id = %id, "Guest checked out");
        Ok(StayResponse::from(&stay))
    }

    /// Get a stay by ID
    #[instrument(skip(self))]
    pub async fn get_stay(&self, id: Snowflake) -> ServiceResult<StayResponse> {
        let stay = self.require_stay(id).await?;
        Ok(StayResponse::from(&stay))
    }

    /// List stays, newest check-in first
    #[instrument(skip(self))]
    pub async fn list_stays(&self, query: StayListQuery) -> ServiceResult<Vec<StayResponse>> {
        let filter = StayFilter {
            current_only: query.current,
            room_number: query.room.map(RoomNumber::new),
        };
        let stays = self.ctx.stay_repo().find_all(filter).await?;
        Ok(stays.iter().map(StayResponse::from).collect())
    }

    /// Apply corrections to a stay record
    ///
    /// Besides guest metadata, the room number and either half of the
    /// check-in/check-out pair can be corrected. Moving a current stay to an
    /// occupied room is rejected; affected room flags are recomputed from the
    /// ledger afterwards.
    #[instrument(skip(self, request))]
    pub async fn update_stay(
        &self,
        id: Snowflake,
        request: UpdateStayRequest,
    ) -> ServiceResult<StayResponse> {
        let mut stay = self.require_stay(id).await?;
        let previous_number = stay.room_number;
        let checkout_touched =
            request.check_out_date.is_some() || request.check_out_time.is_some();

        if let Some(number) = request.room_number {
            let number = RoomNumber::new(number);
            if number != stay.room_number {
                // The target room must exist and be active
                self.ctx
                    .room_repo()
                    .find_by_number(number)
                    .await?
                    .ok_or(DomainError::RoomNumberNotFound(number))?;
                stay.room_number = number;
            }
        }
        if let Some(date) = request.check_in_date {
            stay.check_in_date = date;
        }
        if let Some(time) = request.check_in_time {
            stay.check_in_time = time;
        }
        if let Some(date) = request.check_out_date {
            stay.check_out_date = Some(date);
        }
        if let Some(time) = request.check_out_time {
            stay.check_out_time = Some(time);
        }

        let room_changed = stay.room_number != previous_number;

        // A current stay cannot land on a number another current stay holds
        if room_changed && !stay.is_checked_out() {
            let holders = self
                .ctx
                .stay_repo()
                .find_all(StayFilter {
                    current_only: true,
                    room_number: Some(stay.room_number),
                })
                .await?;
            if holders.iter().any(|other| other.id != stay.id) {
                return Err(DomainError::RoomOccupied(stay.room_number).into());
            }
        }

        if let Some(name) = request.guest_name {
            stay.guest.name = name;
        }
        if let Some(nationality) = request.guest_nationality {
            stay.guest.nationality = Some(nationality);
        }
        if let Some(contact) = request.guest_contact {
            stay.guest.contact = Some(contact);
        }
        if let Some(company) = request.guest_company {
            stay.guest.company = Some(company);
        }
        if let Some(address) = request.guest_address {
            stay.guest.address = Some(address);
        }
        if let Some(department) = request.department {
            stay.department = Some(department);
        }
        if let Some(purpose) = request.purpose {
            stay.purpose = Some(purpose);
        }
        if let Some(mail_received) = request.mail_received {
            stay.mail_received = mail_received;
        }

        self.ctx.stay_repo().update(&stay).await?;

        if room_changed || checkout_touched {
            self.refresh_room_flag(previous_number).await?;
            if room_changed {
                self.refresh_room_flag(stay.room_number).await?;
            }
        }

        info!(stay_id = %id, "Stay corrected");
        Ok(StayResponse::from(&stay))
    }

    /// Soft delete a stay record
    ///
    /// A deleted current stay stops occupying its room; the flag is
    /// recomputed from the remaining ledger.
    #[instrument(skip(self))]
    pub async fn delete_stay(&self, id: Snowflake) -> ServiceResult<()> {
        let stay = self.require_stay(id).await?;

        self.ctx.stay_repo().delete(id).await?;

        if !stay.is_checked_out() {
            self.refresh_room_flag(stay.room_number).await?;
        }

        info!(stay_id = %id, "Stay deleted");
        Ok(())
    }

    async fn require_stay(&self, id: Snowflake) -> ServiceResult<Stay> {
        self.ctx
            .stay_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Stay", id.to_string()))
    }

    /// Recompute one room's availability flag from the remaining ledger
    ///
    /// A number with no matching room row is skipped; reconcile reports it.
    async fn refresh_room_flag(&self, number: RoomNumber) -> ServiceResult<()> {
        let current = self
            .ctx
            .stay_repo()
            .find_all(StayFilter {
                current_only: true,
                room_number: Some(number),
            })
            .await?;
        let status = occupancy::room_status(number, &occupancy::occupied_room_numbers(&current));
        if let Some(room) = self.ctx.room_repo().find_by_number(number).await? {
            self.ctx.room_repo().set_availability(room.id, status).await?;
        }
        Ok(())
    }
}
