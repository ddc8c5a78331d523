use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unknown server fields, kept so a record round-trips without loss.
pub type Extra = Map<String, Value>;

// --- Identity ---

/// Role
///
/// The RBAC field on every user. Anything the client does not recognise becomes
/// `Unknown`, which the router treats like an unprivileged user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    /// Teachers and admins manage courses, grades, lessons, exams and attendance.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Teacher | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User
///
/// The authenticated identity (`GET /auth/me`, login response) and the row type of
/// the user administration screens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    // Enrolled course: either an id or the populated course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseRef>,
    // Student registration number ("matrícula").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Session
///
/// The authenticated identity and its bearer credential. Always written and cleared
/// as one unit by the session service.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

// --- References ---

/// CourseSummary
///
/// The populated form of a course reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseSummary {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// CourseRef
///
/// The backend sends a course either as its id or populated. Both deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseRef {
    Id(String),
    Course(CourseSummary),
}

impl CourseRef {
    pub fn id(&self) -> &str {
        match self {
            CourseRef::Id(id) => id,
            CourseRef::Course(course) => &course.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CourseRef::Id(_) => None,
            CourseRef::Course(course) => Some(&course.name),
        }
    }
}

/// PersonSummary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonSummary {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// PersonRef
///
/// A student, professor, sender or receiver: an id/name string or a populated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonRef {
    Id(String),
    Person(PersonSummary),
}

impl PersonRef {
    pub fn id(&self) -> &str {
        match self {
            PersonRef::Id(id) => id,
            PersonRef::Person(person) => &person.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PersonRef::Id(_) => None,
            PersonRef::Person(person) => Some(&person.name),
        }
    }
}

// --- Academic Records ---

/// Course
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    // Professor name as typed in the course form, or a populated user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Lesson
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseRef>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    // ISO date ("2025-03-14") or timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    // "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub resources: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Exam
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseRef>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    // Share of the final grade, 0.0..=1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Grade
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    // The score itself. Older records call it "value".
    #[serde(default, alias = "value", skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    // "exam", "assignment", ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

// --- Attendance ---

/// AttendanceStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
    Excused,
    #[serde(other)]
    Unknown,
}

/// Attendance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<PersonRef>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// AttendanceStats
///
/// Server-computed counters for the authenticated student.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceStats {
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub excused: u32,
    // Percentage, 0.0..=100.0.
    pub attendance_rate: f64,
}

/// AttendanceReport
///
/// Response of `GET /attendance/my-attendances`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceReport {
    pub attendances: Vec<Attendance>,
    pub stats: AttendanceStats,
}

/// CourseRoster
///
/// Response of `GET /attendance/course/{id}/students`: the course and its students.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseRoster {
    pub course: Option<CourseSummary>,
    pub students: Vec<User>,
}

/// AttendanceEntry
///
/// One student's line in a batch registration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_id: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub justification: String,
}

/// AttendanceBatch
///
/// Input payload for `POST /attendance/multiple`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceBatch {
    pub course_id: String,
    // "yyyy-mm-dd"
    pub date: String,
    pub attendances: Vec<AttendanceEntry>,
}

/// AttendancePayload
///
/// Input payload for a single `POST /attendance`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePayload {
    pub student_id: String,
    pub course_id: String,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

/// BatchOutcome
///
/// What the caller reports after a batch registration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchOutcome {
    pub count: usize,
    pub message: String,
    // Per-record failures reported by the backend, passed through untouched.
    pub errors: Vec<Value>,
}

// --- Messaging ---

/// Message
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<PersonRef>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// NewMessage
///
/// Input payload for `POST /messages`. The receiver is addressed by email.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub receiver_email: String,
    pub subject: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Value>,
}

// --- Documents & Certificates ---

/// Document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    // "matricula", "historico", "outro", ...
    #[serde(default)]
    pub category: String,
    // Relative to the backend origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseRef>,
    // Owner of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// DocumentUpload
///
/// Input for the multipart `POST /documents/upload`. Not serialized as JSON; the
/// documents module turns it into form parts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub course_id: Option<String>,
}

/// DocumentUpdate
///
/// Partial update payload for `PUT /documents/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// DocumentFilter
///
/// Query parameters of `GET /documents/students/all`. Unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentFilter {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub category: Option<String>,
}

/// Certificate
///
/// Public verification result of `GET /certificates/verificar/{code}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    // "matricula", "conclusao", "historico", "declaracao", "outro"
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Certificate {
    /// Human-readable name of the certificate type.
    pub fn kind_label(&self) -> &str {
        match self.kind.as_str() {
            "matricula" => "Declaração de Matrícula",
            "conclusao" => "Certificado de Conclusão",
            "historico" => "Histórico Escolar",
            "declaracao" => "Declaração de Vínculo",
            "outro" => "Outro",
            other => other,
        }
    }
}

// --- Spots & Bookings ---

/// Spot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// SpotPayload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpotPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Booking
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    // The reserved spot, as an id or populated.
    #[serde(default, alias = "spotId", skip_serializing_if = "Option::is_none")]
    pub spot: Option<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// LoginResponse
///
/// `POST /auth/login` answers with the token and the user side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// RegisterRequest
///
/// Input payload for `POST /auth/register`. The password is forwarded as-is and
/// never stored or logged by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
}

/// CoursePayload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoursePayload {
    pub name: String,
    pub code: String,
    pub credits: u32,
    pub professor: String,
    pub schedule: String,
    pub room: String,
    pub description: String,
    pub semester: u32,
}

/// LessonPayload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LessonPayload {
    // Course id.
    pub course: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub resources: Vec<Value>,
}

/// ExamPayload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamPayload {
    pub course: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub max_grade: f64,
    pub weight: f64,
}

/// GradePayload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradePayload {
    pub student: String,
    pub course: String,
    pub course_name: String,
    pub grade: f64,
    pub max_grade: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub weight: f64,
    pub description: String,
}

/// UserFilter
///
/// Query parameters of `GET /users`. Unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub course: Option<String>,
}

/// UserPayload
///
/// Create/update payload of the user administration screen. An empty password on
/// update leaves the current one unchanged, so it is skipped when `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    pub role: Role,
}

// --- Dashboards & Search (Output) ---

/// Dashboard
///
/// Role dashboards differ per role and evolve with the backend; the client keeps
/// them as an open map and offers typed accessors for the lists every view reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(flatten)]
    pub fields: Extra,
}

impl Dashboard {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The array under `key`, or an empty slice.
    pub fn list(&self, key: &str) -> &[Value] {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The number under `key` (counters such as `totalStudents`).
    pub fn count(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }
}

/// SearchResults
///
/// `GET /search?q=` spans courses, lessons, exams and events.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub courses: Vec<Value>,
    pub lessons: Vec<Value>,
    pub exams: Vec<Value>,
    pub events: Vec<Value>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
            && self.lessons.is_empty()
            && self.exams.is_empty()
            && self.events.is_empty()
    }
}
