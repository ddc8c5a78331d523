use crate::envelope;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::SearchResults;

/// SearchApi
pub struct SearchApi<'a> {
    api: &'a ApiClient,
}

impl<'a> SearchApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /search?q=
    ///
    /// Searches courses, lessons, exams and events. A blank query is not sent.
    pub async fn search(&self, query: &str) -> Result<SearchResults, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults::default());
        }
        let raw = self
            .api
            .get_query("/search", &[("q", query.to_string())])
            .await?;
        let payload = envelope::unwrap_payload(raw);
        if !payload.is_object() {
            tracing::warn!("Search returned a non-object payload; treating as no results");
            return Ok(SearchResults::default());
        }
        Ok(serde_json::from_value(payload)?)
    }
}
