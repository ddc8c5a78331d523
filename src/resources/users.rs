use serde_json::Value;

use super::{query_pairs, segment};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{User, UserFilter, UserPayload};

/// UsersApi
///
/// User administration (admin only on the backend).
pub struct UsersApi<'a> {
    api: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /users?role&course
    pub async fn get_all(&self, filter: &UserFilter) -> Result<Vec<User>, ApiError> {
        let role = filter.role.map(|r| r.as_str());
        let query = query_pairs(&[("role", role), ("course", filter.course.as_deref())]);
        self.api.get_list_query("/users", &query).await
    }

    /// GET /users/{id}
    pub async fn get_by_id(&self, id: &str) -> Result<User, ApiError> {
        self.api.get_item(&format!("/users/{}", segment(id))).await
    }

    /// POST /users
    pub async fn create(&self, payload: &UserPayload) -> Result<Value, ApiError> {
        self.api.post("/users", payload).await
    }

    /// PUT /users/{id}
    pub async fn update(&self, id: &str, payload: &UserPayload) -> Result<Value, ApiError> {
        self.api.put(&format!("/users/{}", segment(id)), payload).await
    }

    /// DELETE /users/{id}
    pub async fn remove(&self, id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("/users/{}", segment(id))).await
    }
}
