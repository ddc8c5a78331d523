use serde_json::Value;

use super::segment;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Exam, ExamPayload};

/// ExamsApi
///
/// Scheduled assessments of a course. `weight` is the share of the final grade.
pub struct ExamsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> ExamsApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /exams/course/{id}
    pub async fn list_by_course(&self, course_id: &str) -> Result<Vec<Exam>, ApiError> {
        self.api
            .get_list(&format!("/exams/course/{}", segment(course_id)))
            .await
    }

    /// POST /exams
    pub async fn create(&self, payload: &ExamPayload) -> Result<Value, ApiError> {
        self.api.post("/exams", payload).await
    }

    /// PUT /exams/{id}
    pub async fn update(&self, id: &str, payload: &ExamPayload) -> Result<Value, ApiError> {
        self.api.put(&format!("/exams/{}", segment(id)), payload).await
    }

    /// DELETE /exams/{id}
    pub async fn remove(&self, id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("/exams/{}", segment(id))).await
    }
}
