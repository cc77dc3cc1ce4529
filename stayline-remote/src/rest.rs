use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use stayline_core::{Booking, BookingDraft, BookingError, BookingResult, RemoteBookingApi};
use tracing::{debug, warn};

use crate::app_config::RemoteConfig;

/// REST client for the remote booking API.
///
/// One request per call: no retry, no timeout, no cancellation. A request,
/// once issued, runs to completion or failure, and the caller decides what
/// to do with the outcome.
pub struct RestBookingApi {
    client: Client,
    base_url: String,
}

impl RestBookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn collection_url(&self) -> String {
        format!("{}/bookings", self.base_url)
    }

    fn booking_url(&self, id: &str) -> String {
        format!("{}/bookings/{}", self.base_url, id)
    }
}

#[async_trait]
impl RemoteBookingApi for RestBookingApi {
    async fn list_bookings(&self) -> BookingResult<Vec<Booking>> {
        debug!("GET {}", self.collection_url());
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "booking list rejected by remote");
            return Err(BookingError::TransportError(format!(
                "remote returned {status} for booking list"
            )));
        }
        resp.json().await.map_err(transport)
    }

    async fn get_booking(&self, id: &str) -> BookingResult<Booking> {
        debug!("GET {}", self.booking_url(id));
        let resp = self
            .client
            .get(self.booking_url(id))
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status, id));
        }
        resp.json().await.map_err(transport)
    }

    async fn create_booking(&self, draft: &BookingDraft) -> BookingResult<Booking> {
        debug!("POST {}", self.collection_url());
        let resp = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "booking create rejected by remote");
            return Err(BookingError::TransportError(format!(
                "remote returned {status} for booking create"
            )));
        }
        resp.json().await.map_err(transport)
    }

    async fn update_booking(&self, id: &str, draft: &BookingDraft) -> BookingResult<Booking> {
        debug!("PUT {}", self.booking_url(id));
        let resp = self
            .client
            .put(self.booking_url(id))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status, id));
        }
        resp.json().await.map_err(transport)
    }

    async fn delete_booking(&self, id: &str) -> BookingResult<()> {
        debug!("DELETE {}", self.booking_url(id));
        let resp = self
            .client
            .delete(self.booking_url(id))
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status, id));
        }
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> BookingError {
    BookingError::TransportError(err.to_string())
}

// 404 on an id-targeted request gets its own variant; everything else is a
// transport failure as far as callers are concerned.
fn status_error(status: StatusCode, id: &str) -> BookingError {
    if status == StatusCode::NOT_FOUND {
        BookingError::NotFoundError(id.to_string())
    } else {
        BookingError::TransportError(format!("remote returned {status} for booking {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let api = RestBookingApi::new("http://localhost:5200/");
        assert_eq!(api.collection_url(), "http://localhost:5200/bookings");
        assert_eq!(api.booking_url("b1"), "http://localhost:5200/bookings/b1");
    }

    #[test]
    fn test_not_found_maps_to_its_own_variant() {
        let err = status_error(StatusCode::NOT_FOUND, "missing");
        assert!(matches!(err, BookingError::NotFoundError(id) if id == "missing"));

        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "b1");
        assert!(matches!(err, BookingError::TransportError(_)));
    }
}
