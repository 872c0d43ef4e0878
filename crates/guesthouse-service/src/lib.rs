//! # guesthouse-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, AvailabilityResponse, ChangePasswordRequest, CheckInRequest, CheckOutRequest,
    CreateLocationRequest, CreateRoomRequest, CreateUserRequest, CurrentUserResponse,
    HealthResponse,
    LocationResponse, LoginRequest, ReadinessResponse, ReconcileResponse, RefreshTokenRequest,
    RegisterRequest, RoomResponse, RoomStatusResponse, StayListQuery, StayResponse,
    UpdateLocationRequest, UpdateRoomRequest, UpdateStayRequest, UpdateUserRequest, UserResponse,
};
pub use services::{
    AuthService, AvailabilityService, LocationService, RoomService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StayService, UserService,
};
