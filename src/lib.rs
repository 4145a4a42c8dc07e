pub mod api;
pub mod app;
pub mod models;
pub mod pages;
pub mod session;
pub mod slots;
pub mod telegram;

pub use app::App;
