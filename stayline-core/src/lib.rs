pub mod booking;
pub mod remote;

pub use booking::{Booking, BookingDraft, BookingStatus};
pub use remote::RemoteBookingApi;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Booking not found: {0}")]
    NotFoundError(String),
    #[error("Remote API request failed: {0}")]
    TransportError(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
