use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::{query_pairs, segment};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Document, DocumentFilter, DocumentUpdate, DocumentUpload};

/// DocumentsApi
///
/// Personal documents of the authenticated user, plus the staff view over every
/// student's documents.
pub struct DocumentsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> DocumentsApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /documents/my-documents
    pub async fn my_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.api.get_list("/documents/my-documents").await
    }

    /// upload
    ///
    /// `POST /documents/upload` as `multipart/form-data`: the file under `file`, then
    /// `title`, `description`, `category` and (when set) `courseId`.
    pub async fn upload(&self, upload: DocumentUpload) -> Result<Value, ApiError> {
        let file = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)?;

        let mut form = Form::new()
            .part("file", file)
            .text("title", upload.title)
            .text("description", upload.description)
            .text("category", upload.category);
        if let Some(course_id) = upload.course_id {
            form = form.text("courseId", course_id);
        }

        self.api.post_multipart("/documents/upload", form).await
    }

    /// GET /documents/{id}
    pub async fn get(&self, id: &str) -> Result<Document, ApiError> {
        self.api
            .get_item(&format!("/documents/{}", segment(id)))
            .await
    }

    /// GET /documents/students/all?studentId&courseId&category
    pub async fn student_documents(&self, filter: &DocumentFilter) -> Result<Vec<Document>, ApiError> {
        let query = query_pairs(&[
            ("studentId", filter.student_id.as_deref()),
            ("courseId", filter.course_id.as_deref()),
            ("category", filter.category.as_deref()),
        ]);
        self.api
            .get_list_query("/documents/students/all", &query)
            .await
    }

    /// DELETE /documents/{id}
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.api
            .delete(&format!("/documents/{}", segment(id)))
            .await
    }

    /// PUT /documents/{id}
    pub async fn update(&self, id: &str, update: &DocumentUpdate) -> Result<Value, ApiError> {
        self.api
            .put(&format!("/documents/{}", segment(id)), update)
            .await
    }
}
