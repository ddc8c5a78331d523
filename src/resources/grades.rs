use serde_json::Value;

use super::segment;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Grade, GradePayload};

/// GradesApi
///
/// Students read their own grades; teachers and admins read any student's and
/// manage them.
pub struct GradesApi<'a> {
    api: &'a ApiClient,
}

impl<'a> GradesApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /grades/me
    pub async fn list_mine(&self) -> Result<Vec<Grade>, ApiError> {
        self.api.get_list("/grades/me").await
    }

    /// GET /grades (staff see all grades, students only theirs)
    pub async fn get_all(&self) -> Result<Vec<Grade>, ApiError> {
        self.api.get_list("/grades").await
    }

    /// GET /grades/student/{id}
    pub async fn list_by_student(&self, student_id: &str) -> Result<Vec<Grade>, ApiError> {
        self.api
            .get_list(&format!("/grades/student/{}", segment(student_id)))
            .await
    }

    /// POST /grades
    pub async fn create(&self, payload: &GradePayload) -> Result<Value, ApiError> {
        self.api.post("/grades", payload).await
    }

    /// PUT /grades/{id}
    pub async fn update(&self, id: &str, payload: &GradePayload) -> Result<Value, ApiError> {
        self.api.put(&format!("/grades/{}", segment(id)), payload).await
    }

    /// DELETE /grades/{id}
    pub async fn remove(&self, id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("/grades/{}", segment(id))).await
    }
}
