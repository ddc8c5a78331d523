use reqwest::{Client, Method, RequestBuilder, StatusCode, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::envelope;
use crate::error::ApiError;
use crate::resources::{
    attendance::AttendanceApi, auth::AuthApi, certificates::CertificatesApi,
    courses::CoursesApi, dashboard::DashboardApi, documents::DocumentsApi, exams::ExamsApi,
    grades::GradesApi, lessons::LessonsApi, messages::MessagesApi, search::SearchApi,
    spots::SpotsApi, users::UsersApi,
};
use crate::session::SessionState;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// What the response interceptor does with a 401/403.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interception {
    // Force a logout and redirect to the login route.
    Enforce,
    // Report the error only. Used by the sign-in, registration and boot-time
    // session calls, which run without a session to end.
    Silent,
}

/// ApiClient
///
/// The one HTTP client every resource call goes through. Cheap to clone; all clones
/// share the connection pool and the session.
///
/// Request side: joins the path onto the configured base URL, attaches the bearer
/// token held by the session and a fresh `x-request-id`.
///
/// Response side: a 401 or 403 forces a logout (once, however many requests fail
/// together) and is returned as `ApiError::Unauthorized`. A response to a request
/// that carried a token, arriving after that session ended, is returned as
/// `ApiError::SessionEnded` instead of its payload; a late 401 among those leaves
/// the current session alone. Everything else is classified by status and passed
/// through. Nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: AppConfig,
    session: SessionState,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: SessionState) -> Self {
        Self::with_client(Client::new(), config, session)
    }

    /// Builds the client around an existing `reqwest::Client` (custom TLS, proxies).
    pub fn with_client(client: Client, config: AppConfig, session: SessionState) -> Self {
        Self {
            client,
            config,
            session,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    // --- Verbs ---

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, Interception::Enforce, |r| r)
            .await
    }

    /// GET with query parameters. Parameters are url-encoded by reqwest.
    pub async fn get_query(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.send(Method::GET, path, Interception::Enforce, |r| r.query(query))
            .await
    }

    /// GET that reports a 401/403 without logging the session out.
    pub(crate) async fn get_silent(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, Interception::Silent, |r| r)
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(Method::POST, path, Interception::Enforce, |r| r.json(body))
            .await
    }

    /// POST that reports a 401/403 without logging the session out.
    pub(crate) async fn post_silent<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(Method::POST, path, Interception::Silent, |r| r.json(body))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(Method::PUT, path, Interception::Enforce, |r| r.json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, Interception::Enforce, |r| r)
            .await
    }

    /// DELETE carrying a JSON body (`DELETE /courses/{id}/students`).
    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, Interception::Enforce, |r| r.json(body))
            .await
    }

    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, ApiError> {
        self.send(Method::POST, path, Interception::Enforce, move |r| {
            r.multipart(form)
        })
        .await
    }

    // --- Typed helpers (envelope applied) ---

    /// GET a list through the envelope contract. Shape problems yield an empty list;
    /// HTTP failures still propagate.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        Ok(envelope::unwrap_list(self.get(path).await?))
    }

    pub async fn get_list_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        Ok(envelope::unwrap_list(self.get_query(path, query).await?))
    }

    pub async fn get_item<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        envelope::unwrap_item(self.get(path).await?)
    }

    /// Sends `body` with `method` and maps the unwrapped response onto `T`.
    pub async fn send_item<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self
            .send(method, path, Interception::Enforce, |r| r.json(body))
            .await?;
        envelope::unwrap_item(raw)
    }

    // --- Resource views ---

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn courses(&self) -> CoursesApi<'_> {
        CoursesApi::new(self)
    }

    pub fn lessons(&self) -> LessonsApi<'_> {
        LessonsApi::new(self)
    }

    pub fn exams(&self) -> ExamsApi<'_> {
        ExamsApi::new(self)
    }

    pub fn grades(&self) -> GradesApi<'_> {
        GradesApi::new(self)
    }

    pub fn attendance(&self) -> AttendanceApi<'_> {
        AttendanceApi::new(self)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(self)
    }

    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn spots(&self) -> SpotsApi<'_> {
        SpotsApi::new(self)
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    pub fn certificates(&self) -> CertificatesApi<'_> {
        CertificatesApi::new(self)
    }

    // --- Pipeline ---

    async fn send<F>(
        &self,
        method: Method,
        path: &str,
        interception: Interception,
        build: F,
    ) -> Result<Value, ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "api_request",
            method = %method,
            path = %path,
            req_id = %request_id,
        );

        async move {
            let (token, epoch) = self.session.credentials();

            let mut request = self
                .client
                .request(method, self.config.api_url(path))
                .header(REQUEST_ID_HEADER, request_id.to_string());
            if let Some(token) = &token {
                request = request.bearer_auth(token);
            }

            let response = build(request).send().await?;
            let status = response.status();
            let raw = response.text().await?;
            tracing::debug!(status = status.as_u16(), "Response received");

            // A late answer for an ended session, even a 401, must not touch the
            // session that replaced it.
            if token.is_some() && self.session.epoch() != epoch {
                tracing::warn!("Discarding response: the session ended while it was in flight");
                return Err(ApiError::SessionEnded);
            }

            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                if interception == Interception::Enforce {
                    self.session.force_logout();
                }
                return Err(ApiError::from_status(status, &raw));
            }

            if !status.is_success() {
                let error = ApiError::from_status(status, &raw);
                tracing::warn!("Request failed: {}", error);
                return Err(error);
            }

            if raw.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&raw).map_err(|e| {
                tracing::warn!("Response body is not JSON: {}", e);
                ApiError::Decode(e)
            })
        }
        .instrument(span)
        .await
    }
}
