// --- Module Structure ---

// Core client services and components.
pub mod config;
pub mod envelope;
pub mod error;
pub mod format;
pub mod generation;
pub mod http;
pub mod models;
pub mod navigation;
pub mod session;
pub mod storage;

// One borrowed view per backend resource (courses, grades, attendance, ...).
pub mod resources;

// Route access policy, split by tier (Public, Authenticated, Admin).
pub mod routes;

// --- Public Re-exports ---

pub use config::{AppConfig, Env};
pub use error::{ApiError, ErrorKind, StorageError};
pub use http::ApiClient;
pub use navigation::{HistoryNavigator, NavigationEvent, Navigator, NavigatorState};
pub use routes::{RouteDecision, RouteTable};
pub use session::{SessionService, SessionState};
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageState};

use models::User;

/// Portal
///
/// The application root. Owns the configuration, the shared session, the HTTP client
/// bound to that session and the route table, and wires them together exactly once.
/// Views receive it (or its parts) instead of reaching for globals.
#[derive(Clone)]
pub struct Portal {
    /// Configuration: the loaded, immutable client configuration.
    pub config: AppConfig,
    /// Session Layer: identity, token and the forced-logout latch.
    pub session: SessionState,
    /// HTTP Layer: every resource call, authenticated by `session`.
    pub api: ApiClient,
    /// Router: which views the session may open.
    pub routes: RouteTable,
}

impl Portal {
    /// new
    ///
    /// Assembles the client over a local store (`FileStorage` in the binary,
    /// `MemoryStorage` in tests) and a navigator. The session starts in the loading
    /// state until `boot` resolves it.
    pub fn new(config: AppConfig, storage: StorageState, navigator: NavigatorState) -> Self {
        let session = SessionService::shared(storage, navigator);
        let api = ApiClient::new(config.clone(), session.clone());
        Self {
            config,
            session,
            api,
            routes: RouteTable::new(),
        }
    }

    /// boot
    ///
    /// Resolves the persisted session against the backend. Runs once at startup.
    pub async fn boot(&self) -> Option<User> {
        self.session.check_auth(&self.api).await
    }

    /// sign_in
    ///
    /// Exchanges credentials for a session and navigates to the role's landing route,
    /// which is returned. On failure the session error holds the message to show on
    /// the login form.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<&'static str, ApiError> {
        self.session.clear_error();

        let result = match self.api.auth().login(email, password).await {
            Ok(response) => self
                .session
                .login(response.user, &response.token)
                .map_err(ApiError::from),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::warn!("Sign-in failed: {}", e);
            self.session
                .set_error(e.user_message(session::LOGIN_FAILED));
        }
        result
    }

    /// sign_out
    ///
    /// Ends the session and navigates to the login route.
    pub fn sign_out(&self) {
        self.session.logout();
    }

    /// Route decision for `path` under the current session.
    pub fn guard(&self, path: &str) -> RouteDecision {
        self.routes.guard(path, &self.session)
    }
}
