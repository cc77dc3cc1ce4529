pub mod service;
pub mod store;

pub use service::BookingService;
pub use store::{BookingStore, Slot};
