use serde_json::Value;

use super::segment;
use crate::envelope;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    Attendance, AttendanceBatch, AttendancePayload, AttendanceReport, AttendanceStats,
    BatchOutcome, CourseRoster, CourseSummary,
};

/// AttendanceApi
///
/// Students read their own record and statistics; teachers and admins list a
/// course's students and register attendance for a whole class at once.
pub struct AttendanceApi<'a> {
    api: &'a ApiClient,
}

impl<'a> AttendanceApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /attendance/my-attendances
    ///
    /// Records and the server-computed statistics. Missing statistics default to
    /// zero; malformed records are dropped like any other list element.
    pub async fn my_attendances(&self) -> Result<AttendanceReport, ApiError> {
        let payload = envelope::unwrap_payload(self.api.get("/attendance/my-attendances").await?);
        if payload.is_array() {
            return Ok(AttendanceReport {
                attendances: envelope::unwrap_list(payload),
                stats: AttendanceStats::default(),
            });
        }

        let attendances = envelope::unwrap_list(field(&payload, "attendances"));
        let stats = match payload.get("stats") {
            Some(stats) if stats.is_object() => serde_json::from_value(stats.clone())?,
            _ => AttendanceStats::default(),
        };
        Ok(AttendanceReport { attendances, stats })
    }

    /// GET /attendance/course/{id}
    pub async fn by_course(&self, course_id: &str) -> Result<Vec<Attendance>, ApiError> {
        self.api
            .get_list(&format!("/attendance/course/{}", segment(course_id)))
            .await
    }

    /// GET /attendance/course/{id}/students
    ///
    /// Accepts `{course, students}` in any envelope, or a bare student array.
    pub async fn course_students(&self, course_id: &str) -> Result<CourseRoster, ApiError> {
        let raw = self
            .api
            .get(&format!("/attendance/course/{}/students", segment(course_id)))
            .await?;
        let payload = envelope::unwrap_payload(raw);
        if payload.is_array() {
            return Ok(CourseRoster {
                course: None,
                students: envelope::unwrap_list(payload),
            });
        }

        let course = payload
            .get("course")
            .filter(|c| c.is_object())
            .and_then(|c| serde_json::from_value::<CourseSummary>(c.clone()).ok());
        Ok(CourseRoster {
            course,
            students: envelope::unwrap_list(field(&payload, "students")),
        })
    }

    /// POST /attendance
    pub async fn create(&self, payload: &AttendancePayload) -> Result<Value, ApiError> {
        self.api.post("/attendance", payload).await
    }

    /// POST /attendance/multiple
    ///
    /// Registers one class session. The count is the number of records the backend
    /// reports back, or the number submitted when it reports nothing.
    pub async fn create_multiple(&self, batch: &AttendanceBatch) -> Result<BatchOutcome, ApiError> {
        let body = self.api.post("/attendance/multiple", batch).await?;

        let count = body
            .get("data")
            .and_then(Value::as_array)
            .or_else(|| body.as_array())
            .map(Vec::len)
            .filter(|n| *n > 0)
            .unwrap_or(batch.attendances.len());
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| batch_message(count));
        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        tracing::info!(count, course_id = %batch.course_id, "Attendance batch saved");
        Ok(BatchOutcome {
            count,
            message,
            errors,
        })
    }
}

/// Default confirmation for a saved attendance batch.
pub fn batch_message(count: usize) -> String {
    format!("{} registro(s) de presença salvo(s) com sucesso!", count)
}

fn field(payload: &Value, key: &str) -> Value {
    payload.get(key).cloned().unwrap_or(Value::Null)
}
