use serde_json::Value;

use super::segment;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Lesson, LessonPayload};

/// LessonsApi
pub struct LessonsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> LessonsApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /lessons/course/{id}
    pub async fn list_by_course(&self, course_id: &str) -> Result<Vec<Lesson>, ApiError> {
        self.api
            .get_list(&format!("/lessons/course/{}", segment(course_id)))
            .await
    }

    /// POST /lessons
    pub async fn create(&self, payload: &LessonPayload) -> Result<Value, ApiError> {
        self.api.post("/lessons", payload).await
    }

    /// PUT /lessons/{id}
    pub async fn update(&self, id: &str, payload: &LessonPayload) -> Result<Value, ApiError> {
        self.api.put(&format!("/lessons/{}", segment(id)), payload).await
    }

    /// DELETE /lessons/{id}
    pub async fn remove(&self, id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("/lessons/{}", segment(id))).await
    }
}
