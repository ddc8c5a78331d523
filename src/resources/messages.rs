use serde_json::Value;

use super::segment;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Message, NewMessage, User};

/// MessagesApi
pub struct MessagesApi<'a> {
    api: &'a ApiClient,
}

impl<'a> MessagesApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /messages/search-users?email=
    ///
    /// Recipient autocomplete. Matches on any part of the email.
    pub async fn search_users_by_email(&self, email: &str) -> Result<Vec<User>, ApiError> {
        self.api
            .get_list_query("/messages/search-users", &[("email", email.to_string())])
            .await
    }

    /// GET /messages/inbox
    pub async fn inbox(&self) -> Result<Vec<Message>, ApiError> {
        self.api.get_list("/messages/inbox").await
    }

    /// GET /messages/sent
    pub async fn sent(&self) -> Result<Vec<Message>, ApiError> {
        self.api.get_list("/messages/sent").await
    }

    /// GET /messages/{id}
    pub async fn get(&self, id: &str) -> Result<Message, ApiError> {
        self.api.get_item(&format!("/messages/{}", segment(id))).await
    }

    /// POST /messages
    pub async fn send(&self, message: &NewMessage) -> Result<Value, ApiError> {
        self.api.post("/messages", message).await
    }

    /// DELETE /messages/{id}
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("/messages/{}", segment(id))).await
    }
}
