use std::sync::Arc;

use stayline_core::{Booking, BookingDraft, BookingError, BookingResult, RemoteBookingApi};
use tracing::{debug, info, warn};

use crate::store::BookingStore;

/// Orchestrates remote calls and reconciles results into the shared store.
///
/// This is the single source of truth for booking data. Views read the
/// store; only this service writes it. Mutations follow a
/// re-fetch-after-write contract: `create_booking`, `update_booking` and
/// `delete_booking` never touch the cached collection themselves — a caller
/// that needs the list to reflect a mutation triggers a fresh
/// [`list_bookings`](Self::list_bookings) afterwards. Skipping the re-list
/// is legitimate; the consequence is a stale collection until the next
/// successful list.
///
/// Operations do not queue behind each other. Overlapping in-flight
/// requests carry no ordering guarantee: whichever response arrives last
/// determines the slot content. Callers that need strict ordering await one
/// operation's completion before issuing the next. There is no cancellation
/// and no automatic retry.
pub struct BookingService {
    remote: Arc<dyn RemoteBookingApi>,
    store: BookingStore,
}

impl BookingService {
    pub fn new(remote: Arc<dyn RemoteBookingApi>) -> Self {
        Self {
            remote,
            store: BookingStore::new(),
        }
    }

    /// The shared read surface for views.
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Fetch every booking and replace the collection slot with the
    /// response, exactly as returned (no merge, no re-sort). A failed fetch
    /// leaves the previous value in place.
    pub async fn list_bookings(&self) -> BookingResult<Vec<Booking>> {
        debug!("listing bookings");
        let bookings = match self.remote.list_bookings().await {
            Ok(bookings) => bookings,
            Err(err) => {
                warn!("booking list failed: {err}");
                return Err(err);
            }
        };
        self.store.write_bookings(bookings.clone());
        Ok(bookings)
    }

    /// Fetch one booking by id and place it in the selection slot. A failed
    /// fetch leaves whatever was selected before untouched.
    pub async fn get_booking(&self, id: &str) -> BookingResult<Booking> {
        let id = require_id(id)?;
        debug!(id, "fetching booking");
        let booking = self.remote.get_booking(id).await?;
        self.store.write_selection(Some(booking.clone()));
        Ok(booking)
    }

    /// Persist a new booking. The collection slot is deliberately not
    /// updated from the response; re-list to observe the new entry there.
    pub async fn create_booking(&self, draft: &BookingDraft) -> BookingResult<Booking> {
        debug!("creating booking");
        let booking = self.remote.create_booking(draft).await?;
        info!(id = booking.id.as_deref().unwrap_or(""), "booking created");
        Ok(booking)
    }

    /// Replace a persisted booking. The response is not merged back into
    /// either slot; re-list (or re-get) to observe it.
    pub async fn update_booking(&self, id: &str, draft: &BookingDraft) -> BookingResult<Booking> {
        let id = require_id(id)?;
        let booking = self.remote.update_booking(id, draft).await?;
        info!(id, "booking updated");
        Ok(booking)
    }

    /// Delete a persisted booking. The entry stays in the collection slot
    /// until the caller re-lists.
    ///
    /// Unlike get and update, the id is forwarded as-is: an empty id simply
    /// surfaces the remote's not-found answer.
    pub async fn delete_booking(&self, id: &str) -> BookingResult<()> {
        self.remote.delete_booking(id).await?;
        info!(id, "booking deleted");
        Ok(())
    }
}

// Caller errors are rejected before any network traffic.
fn require_id(id: &str) -> BookingResult<&str> {
    if id.trim().is_empty() {
        return Err(BookingError::ValidationError(
            "booking id must not be empty".to_string(),
        ));
    }
    Ok(id)
}
