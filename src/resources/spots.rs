use serde_json::{Value, json};

use super::segment;
use crate::envelope;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Spot, SpotPayload};

/// SpotsApi
///
/// Reservable spots and their bookings.
pub struct SpotsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> SpotsApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /spots
    ///
    /// The list may also come keyed as `{ "spots": [...] }`.
    pub async fn list(&self) -> Result<Vec<Spot>, ApiError> {
        let payload = envelope::unwrap_payload(self.api.get("/spots").await?);
        match payload.get("spots") {
            Some(spots) => Ok(envelope::unwrap_list(spots.clone())),
            None => Ok(envelope::unwrap_list(payload)),
        }
    }

    /// POST /spots
    pub async fn create(&self, payload: &SpotPayload) -> Result<Value, ApiError> {
        self.api.post("/spots", payload).await
    }

    /// PUT /spots/{id}
    pub async fn update(&self, id: &str, payload: &SpotPayload) -> Result<Value, ApiError> {
        self.api.put(&format!("/spots/{}", segment(id)), payload).await
    }

    /// DELETE /spots/{id}
    pub async fn remove(&self, id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("/spots/{}", segment(id))).await
    }

    /// POST /bookings
    pub async fn reserve(&self, spot_id: &str) -> Result<Value, ApiError> {
        self.api
            .post("/bookings", &json!({ "spotId": spot_id }))
            .await
    }

    /// DELETE /bookings/{id}
    pub async fn cancel(&self, booking_id: &str) -> Result<Value, ApiError> {
        self.api
            .delete(&format!("/bookings/{}", segment(booking_id)))
            .await
    }
}
