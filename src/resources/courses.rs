use serde_json::{Value, json};

use super::segment;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Course, CoursePayload};

/// CoursesApi
pub struct CoursesApi<'a> {
    api: &'a ApiClient,
}

impl<'a> CoursesApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /courses
    pub async fn get_all(&self) -> Result<Vec<Course>, ApiError> {
        self.api.get_list("/courses").await
    }

    /// GET /courses/my-courses
    ///
    /// Courses the authenticated user teaches or is enrolled in.
    pub async fn my_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.api.get_list("/courses/my-courses").await
    }

    /// GET /courses/{id}
    pub async fn get_by_id(&self, id: &str) -> Result<Course, ApiError> {
        self.api.get_item(&format!("/courses/{}", segment(id))).await
    }

    /// POST /courses
    pub async fn create(&self, payload: &CoursePayload) -> Result<Value, ApiError> {
        self.api.post("/courses", payload).await
    }

    /// PUT /courses/{id}
    pub async fn update(&self, id: &str, payload: &CoursePayload) -> Result<Value, ApiError> {
        self.api
            .put(&format!("/courses/{}", segment(id)), payload)
            .await
    }

    /// DELETE /courses/{id}
    pub async fn remove(&self, id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("/courses/{}", segment(id))).await
    }

    /// POST /courses/{id}/students
    pub async fn add_student(&self, course_id: &str, student_id: &str) -> Result<Value, ApiError> {
        self.api
            .post(
                &format!("/courses/{}/students", segment(course_id)),
                &json!({ "studentId": student_id }),
            )
            .await
    }

    /// DELETE /courses/{id}/students, with the student id in the body.
    pub async fn remove_student(
        &self,
        course_id: &str,
        student_id: &str,
    ) -> Result<Value, ApiError> {
        self.api
            .delete_with_body(
                &format!("/courses/{}/students", segment(course_id)),
                &json!({ "studentId": student_id }),
            )
            .await
    }
}
