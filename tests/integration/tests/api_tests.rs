//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Log in as the bootstrap admin and return its access token
///
/// The server seeds this account at startup from ADMIN_USERNAME and
/// ADMIN_PASSWORD; registration cannot produce an admin.
async fn admin_token(server: &TestServer) -> String {
    let request = LoginRequest {
        username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
        password: std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set"),
    };
    let response = server.post("/api/v1/auth/login", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    auth.access_token
}

/// Register a fresh staff account and return its access token
async fn staff_token(server: &TestServer) -> String {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    auth.access_token
}

/// Create a location and a room inside it, returning (location, room)
async fn create_room(server: &TestServer, token: &str) -> (LocationResponse, RoomResponse) {
    let response = server
        .post_auth("/api/v1/locations", token, &CreateLocationRequest::unique())
        .await
        .unwrap();
    let location: LocationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/locations/{}/rooms", location.id),
            token,
            &CreateRoomRequest::unique(),
        )
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (location, room)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "staff");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same username
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_cannot_request_admin_role() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A role key in the anonymous registration body must not be honored
    let suffix = unique_suffix();
    let body = serde_json::json!({
        "username": format!("sneaky{suffix}"),
        "display_name": "Sneaky Guest",
        "password": "frontdesk1",
        "role": "admin",
    });

    let response = server.post("/api/v1/auth/register", &body).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.role, "staff");

    // The issued token carries no admin rights either
    let response = server
        .get_auth("/api/v1/users", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nosuchuser".to_string(),
        password: "wrongpass1".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!refreshed.access_token.is_empty());
    assert_eq!(refreshed.user.username, register_req.username);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, register_req.username);
    assert_eq!(user.display_name, register_req.display_name);
}

#[tokio::test]
async fn test_update_display_name() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = staff_token(&server).await;

    let body = serde_json::json!({ "display_name": "Night Shift" });
    let response = server
        .patch_auth("/api/v1/users/@me", &token, &body)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.display_name, "Night Shift");
}

#[tokio::test]
async fn test_staff_cannot_list_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = staff_token(&server).await;

    let response = server.get_auth("/api/v1/users", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_can_list_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server.get_auth("/api/v1/users", &token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!users.is_empty());
}

#[tokio::test]
async fn test_staff_cannot_create_accounts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = staff_token(&server).await;

    let request = CreateUserRequest::unique_with_role("admin");
    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_creates_admin_account() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let request = CreateUserRequest::unique_with_role("admin");
    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.role, "admin");

    // The new admin can log in and use admin endpoints
    let login = LoginRequest {
        username: request.username.clone(),
        password: request.password.clone(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/users", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_change_password_and_relogin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({
        "current_password": register_req.password,
        "new_password": "frontdesk2",
    });
    let response = server
        .put_auth("/api/v1/users/@me/password", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password no longer works
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // New password does
    let login_req = LoginRequest {
        username: register_req.username.clone(),
        password: "frontdesk2".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Location Tests
// ============================================================================

#[tokio::test]
async fn test_create_location() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let request = CreateLocationRequest::unique();
    let response = server
        .post_auth("/api/v1/locations", &token, &request)
        .await
        .unwrap();
    let location: LocationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(location.name, request.name);
    assert_eq!(location.code, request.code);
}

#[tokio::test]
async fn test_staff_cannot_create_location() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = staff_token(&server).await;

    let response = server
        .post_auth("/api/v1/locations", &token, &CreateLocationRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_location_code_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let request = CreateLocationRequest::unique();
    server
        .post_auth("/api/v1/locations", &token, &request)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/locations", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_deleted_location_disappears() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .post_auth("/api/v1/locations", &token, &CreateLocationRequest::unique())
        .await
        .unwrap();
    let location: LocationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/locations/{}", location.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/locations/{}", location.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Room Tests
// ============================================================================

#[tokio::test]
async fn test_create_room_in_location() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let (location, room) = create_room(&server, &token).await;

    assert_eq!(room.location_id, location.id);
    assert_eq!(room.availability, "available");
}

#[tokio::test]
async fn test_duplicate_room_number_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let (location, room) = create_room(&server, &token).await;

    let request = CreateRoomRequest {
        room_number: room.room_number,
        remark: None,
    };
    let response = server
        .post_auth(
            &format!("/api/v1/locations/{}/rooms", location.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_room_status_available() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let (_, room) = create_room(&server, &token).await;

    let response = server
        .get_auth(&format!("/api/v1/rooms/{}/status", room.id), &token)
        .await
        .unwrap();
    let status: RoomStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(status.room_number, room.room_number);
    assert_eq!(status.status, "available");
}

// ============================================================================
// Stay Tests
// ============================================================================

#[tokio::test]
async fn test_check_in() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let request = CheckInRequest::for_room(room.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(stay.guest_name, request.guest_name);
    assert_eq!(stay.room_number, room.room_number);
    assert_eq!(stay.status, "Checked In");
    assert!(stay.check_out_date.is_none());
    assert!(stay.duration_hours.is_none());

    // Room is now booked
    let response = server
        .get_auth(&format!("/api/v1/rooms/{}/status", room.id), &token)
        .await
        .unwrap();
    let status: RoomStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "booked");
}

#[tokio::test]
async fn test_check_in_occupied_room_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let request = CheckInRequest::for_room(room.room_number);
    server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();

    let second = CheckInRequest::for_room(room.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &second)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ROOM_OCCUPIED");
}

#[tokio::test]
async fn test_check_in_unknown_room() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let request = CheckInRequest::for_room(999_999_999);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_check_out() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let request = CheckInRequest::for_room(room.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/stays/{}/checkout", stay.id),
            &token,
            &CheckOutRequest::next_morning(),
        )
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stay.status, "Checked Out");
    assert_eq!(stay.duration_hours, Some(20));

    // Room is free again
    let response = server
        .get_auth(&format!("/api/v1/rooms/{}/status", room.id), &token)
        .await
        .unwrap();
    let status: RoomStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "available");
}

#[tokio::test]
async fn test_double_check_out_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let request = CheckInRequest::for_room(room.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let checkout = CheckOutRequest::next_morning();
    server
        .post_auth(&format!("/api/v1/stays/{}/checkout", stay.id), &token, &checkout)
        .await
        .unwrap();

    let response = server
        .post_auth(&format!("/api/v1/stays/{}/checkout", stay.id), &token, &checkout)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_CHECKED_OUT");
}

#[tokio::test]
async fn test_list_current_stays_filter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let request = CheckInRequest::for_room(room.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Current filter for this room includes the open stay
    let path = format!("/api/v1/stays?current=true&room={}", room.room_number);
    let response = server.get_auth(&path, &token).await.unwrap();
    let stays: Vec<StayResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stays.len(), 1);
    assert_eq!(stays[0].id, stay.id);

    // After checkout the current filter excludes it
    server
        .post_auth(
            &format!("/api/v1/stays/{}/checkout", stay.id),
            &token,
            &CheckOutRequest::next_morning(),
        )
        .await
        .unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    let stays: Vec<StayResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stays.is_empty());
}

#[tokio::test]
async fn test_update_stay_details() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let request = CheckInRequest::for_room(room.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({
        "guest_name": "Corrected Name",
        "mail_received": true,
    });
    let response = server
        .patch_auth(&format!("/api/v1/stays/{}", stay.id), &token, &body)
        .await
        .unwrap();
    let updated: StayResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.guest_name, "Corrected Name");
    assert!(updated.mail_received);
}

#[tokio::test]
async fn test_move_stay_to_another_room() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (location, first) = create_room(&server, &token).await;

    let response = server
        .post_auth(
            &format!("/api/v1/locations/{}/rooms", location.id),
            &token,
            &CreateRoomRequest::unique(),
        )
        .await
        .unwrap();
    let second: RoomResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CheckInRequest::for_room(first.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Front desk booked the wrong room; correct the record
    let body = serde_json::json!({ "room_number": second.room_number });
    let response = server
        .patch_auth(&format!("/api/v1/stays/{}", stay.id), &token, &body)
        .await
        .unwrap();
    let moved: StayResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(moved.room_number, second.room_number);

    // The old room is freed and the new one marked occupied
    let response = server
        .get_auth(&format!("/api/v1/rooms/{}/status", first.id), &token)
        .await
        .unwrap();
    let status: RoomStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "available");

    let response = server
        .get_auth(&format!("/api/v1/rooms/{}/status", second.id), &token)
        .await
        .unwrap();
    let status: RoomStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "booked");
}

#[tokio::test]
async fn test_move_stay_to_occupied_room_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (location, first) = create_room(&server, &token).await;

    let response = server
        .post_auth(
            &format!("/api/v1/locations/{}/rooms", location.id),
            &token,
            &CreateRoomRequest::unique(),
        )
        .await
        .unwrap();
    let second: RoomResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Both rooms hold a current stay
    let response = server
        .post_auth("/api/v1/stays", &token, &CheckInRequest::for_room(first.room_number))
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth("/api/v1/stays", &token, &CheckInRequest::for_room(second.room_number))
        .await
        .unwrap();
    assert_json::<StayResponse>(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({ "room_number": second.room_number });
    let response = server
        .patch_auth(&format!("/api/v1/stays/{}", stay.id), &token, &body)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ROOM_OCCUPIED");
}

#[tokio::test]
async fn test_move_stay_to_unknown_room() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let response = server
        .post_auth("/api/v1/stays", &token, &CheckInRequest::for_room(room.room_number))
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({ "room_number": 999_999 });
    let response = server
        .patch_auth(&format!("/api/v1/stays/{}", stay.id), &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_correct_check_in_date() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let response = server
        .post_auth("/api/v1/stays", &token, &CheckInRequest::for_room(room.room_number))
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The guest actually arrived a day earlier
    let body = serde_json::json!({ "check_in_date": "2026-07-31" });
    let response = server
        .patch_auth(&format!("/api/v1/stays/{}", stay.id), &token, &body)
        .await
        .unwrap();
    let corrected: StayResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(corrected.check_in_date, "2026-07-31");

    // Duration reflects the corrected arrival
    let response = server
        .post_auth(
            &format!("/api/v1/stays/{}/checkout", stay.id),
            &token,
            &CheckOutRequest::next_morning(),
        )
        .await
        .unwrap();
    let closed: StayResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(closed.duration_hours, Some(44));
}

#[tokio::test]
async fn test_delete_current_stay_frees_room() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    let request = CheckInRequest::for_room(room.room_number);
    let response = server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();
    let stay: StayResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/stays/{}", stay.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/rooms/{}/status", room.id), &token)
        .await
        .unwrap();
    let status: RoomStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "available");
}

// ============================================================================
// Availability Tests
// ============================================================================

#[tokio::test]
async fn test_available_rooms_excludes_occupied() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let (_, room) = create_room(&server, &token).await;

    // Visible while free
    let response = server.get_auth("/api/v1/rooms/available", &token).await.unwrap();
    let available: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(available.rooms.iter().any(|r| r.id == room.id));

    // Hidden while occupied
    let request = CheckInRequest::for_room(room.room_number);
    server
        .post_auth("/api/v1/stays", &token, &request)
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/rooms/available", &token).await.unwrap();
    let available: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!available.rooms.iter().any(|r| r.id == room.id));
}

#[tokio::test]
async fn test_reconcile_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = staff_token(&server).await;

    let response = server
        .post_auth_empty("/api/v1/rooms/reconcile", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_reconcile_reports_corrections() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .post_auth_empty("/api/v1/rooms/reconcile", &token)
        .await
        .unwrap();
    let _report: ReconcileResponse = assert_json(response, StatusCode::OK).await.unwrap();
}
