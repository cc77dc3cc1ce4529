pub mod app_config;
pub mod rest;

pub use app_config::{Config, RemoteConfig};
pub use rest::RestBookingApi;
