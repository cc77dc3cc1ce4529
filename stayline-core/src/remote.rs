use async_trait::async_trait;

use crate::booking::{Booking, BookingDraft};
use crate::BookingResult;

/// Client-side contract for the remote booking API.
///
/// Every method issues at most one request and never retries. Mutating
/// calls return the canonical persisted representation so callers can see
/// server-assigned fields, but reconciling results into any cache is the
/// orchestration layer's job, not this trait's.
#[async_trait]
pub trait RemoteBookingApi: Send + Sync {
    async fn list_bookings(&self) -> BookingResult<Vec<Booking>>;

    async fn get_booking(&self, id: &str) -> BookingResult<Booking>;

    async fn create_booking(&self, draft: &BookingDraft) -> BookingResult<Booking>;

    async fn update_booking(&self, id: &str, draft: &BookingDraft) -> BookingResult<Booking>;

    async fn delete_booking(&self, id: &str) -> BookingResult<()>;
}
