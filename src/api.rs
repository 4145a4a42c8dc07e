//! Client for the remote booking service. Every call is a single
//! request/response exchange; failures surface to the caller, which leaves
//! the screen editable for a manual retry.

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::{
    AuthCheckRequest, AuthCheckResponse, Booking, BookingsResponse, ConflictResponse,
    CreateBookingRequest, CreateUserRequest, DirectoryUser, ErrorResponse, Room, UsersResponse,
};

const DEFAULT_API_BASE_URL: &str = "https://coworkingserver-production.up.railway.app";

/// Base URL of the booking service, overridable at build time.
pub fn api_base_url() -> &'static str {
    option_env!("COWORKING_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url(), path)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The slot is already held by another user (HTTP 409).
    #[error("already booked by {booked_by}")]
    Conflict { booked_by: String },
    #[error("{message}")]
    Status { status: u16, message: String },
}

async fn error_for_status(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| format!("HTTP {status}"));
    ApiError::Status { status, message }
}

/// Ask the access-control directory whether `username` may use the app.
pub async fn check_access(username: &str) -> Result<AuthCheckResponse, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/auth/check"))
        .json(&AuthCheckRequest {
            username: username.to_string(),
        })
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }
    Ok(response.json().await?)
}

pub async fn fetch_rooms() -> Result<Vec<Room>, ApiError> {
    let response = reqwest::get(endpoint("/api/rooms")).await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }
    Ok(response.json().await?)
}

/// Submit a booking. The server is the authority on slot availability: an
/// otherwise-valid draft can still come back as [`ApiError::Conflict`].
pub async fn create_booking(request: &CreateBookingRequest) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/bookings"))
        .json(request)
        .send()
        .await?;
    if response.status() == StatusCode::CONFLICT {
        let body: ConflictResponse = response.json().await?;
        return Err(ApiError::Conflict {
            booked_by: body.booked_by,
        });
    }
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }
    Ok(())
}

pub async fn fetch_upcoming_bookings(user_name: &str) -> Result<Vec<Booking>, ApiError> {
    let response = reqwest::Client::new()
        .get(endpoint("/api/bookings/me/upcoming"))
        .query(&[("userName", user_name)])
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }
    let body: BookingsResponse = response.json().await?;
    Ok(body.bookings)
}

pub async fn fetch_users() -> Result<Vec<DirectoryUser>, ApiError> {
    let response = reqwest::get(endpoint("/api/auth/users")).await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }
    let body: UsersResponse = response.json().await?;
    Ok(body.users)
}

pub async fn add_user(username: &str, is_admin: bool) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/auth/users"))
        .json(&CreateUserRequest {
            username: username.to_string(),
            is_admin,
        })
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(error_for_status(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_base_url_and_path() {
        assert_eq!(
            endpoint("/api/rooms"),
            format!("{}/api/rooms", api_base_url())
        );
        assert!(endpoint("/api/auth/check").starts_with("http"));
    }
}
