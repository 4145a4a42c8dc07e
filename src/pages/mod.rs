pub mod access_denied;
pub mod admin;
pub mod bookings;
pub mod bottom_nav;
pub mod home;
pub mod profile;
pub mod room_profile;
