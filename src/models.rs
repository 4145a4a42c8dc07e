//! Value types shared between the screens and the booking service wire
//! format. Field names on the wire are camelCase.

use serde::{Deserialize, Serialize};

/// The signed-in viewer, persisted across visits by [`crate::session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub telegram_username: String,
    pub is_admin: bool,
}

impl User {
    /// Name the booking service knows this user by.
    pub fn booking_name(&self) -> &str {
        if self.telegram_username.is_empty() {
            &self.name
        } else {
            &self.telegram_username
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBooking {
    pub user: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub image: String,
    pub capacity: u32,
    pub description: String,
    pub is_occupied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_booking: Option<CurrentBooking>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub room_name: String,
    pub user_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCheckRequest {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCheckResponse {
    pub allowed: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResponse {
    pub booked_by: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingsResponse {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// A user in the remote access-control directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub username: String,
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<DirectoryUser>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booking_request_serializes_to_wire_format() {
        let request = CreateBookingRequest {
            room_id: "3".to_string(),
            date: "2025-06-01".to_string(),
            start_time: "15:00".to_string(),
            end_time: "16:00".to_string(),
            user_name: "alice".to_string(),
        };
        let body = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            body,
            json!({
                "roomId": "3",
                "date": "2025-06-01",
                "startTime": "15:00",
                "endTime": "16:00",
                "userName": "alice",
            })
        );
    }

    #[test]
    fn conflict_body_deserializes() {
        let body: ConflictResponse =
            serde_json::from_value(json!({ "bookedBy": "bob" })).expect("deserializable");
        assert_eq!(body.booked_by, "bob");
    }

    #[test]
    fn room_accepts_missing_current_booking() {
        let room: Room = serde_json::from_value(json!({
            "id": "1",
            "name": "Blue room",
            "image": "https://example.com/blue.jpg",
            "capacity": 6,
            "description": "Quiet corner room",
            "isOccupied": false,
        }))
        .expect("deserializable");
        assert_eq!(room.current_booking, None);
    }

    #[test]
    fn booking_round_trips_camel_case() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "42",
            "roomId": "3",
            "roomName": "Blue room",
            "userId": "alice",
            "date": "2025-06-01",
            "startTime": "15:00",
            "endTime": "16:00",
            "status": "active",
        }))
        .expect("deserializable");
        assert_eq!(booking.status, BookingStatus::Active);
        assert_eq!(booking.start_time, "15:00");
    }

    #[test]
    fn booking_name_prefers_telegram_username() {
        let mut user = User {
            id: "alice".to_string(),
            name: "Alice".to_string(),
            surname: "Smith".to_string(),
            telegram_username: "alice_tg".to_string(),
            is_admin: false,
        };
        assert_eq!(user.booking_name(), "alice_tg");
        user.telegram_username.clear();
        assert_eq!(user.booking_name(), "Alice");
    }
}
