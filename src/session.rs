use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::envelope;
use crate::error::{ApiError, StorageError};
use crate::http::ApiClient;
use crate::models::{RegisterRequest, Session, User};
use crate::navigation::NavigatorState;
use crate::routes;
use crate::storage::{StorageState, TOKEN_KEY, USER_KEY};

/// Shown when registration fails without a backend message.
pub const REGISTER_FAILED: &str = "Erro ao registrar usuário";

/// Shown when sign-in fails without a backend message.
pub const LOGIN_FAILED: &str = "Erro ao fazer login. Verifique suas credenciais.";

/// Route the session service sends users to after logout.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Default)]
struct SessionData {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
    error: Option<String>,
}

/// SessionService
///
/// The single owner of the authenticated identity. Token and user live behind one
/// lock and in the local store under two keys; every mutation writes both so no
/// reader ever observes a token without its user (or the reverse).
///
/// The service is shared as `SessionState` (`Arc<SessionService>`) by the HTTP
/// client, the route guard and the `Portal` root. Tests build one over a
/// `MemoryStorage` and a `HistoryNavigator`.
pub struct SessionService {
    storage: StorageState,
    navigator: NavigatorState,
    state: RwLock<SessionData>,
    // Set by the first forced logout; later 401/403s see it and do nothing.
    logging_out: AtomicBool,
    // Bumped whenever the session identity changes.
    epoch: AtomicU64,
}

/// SessionState
pub type SessionState = Arc<SessionService>;

impl SessionService {
    /// Creates a service in the loading state. Call `check_auth` to resolve it.
    pub fn new(storage: StorageState, navigator: NavigatorState) -> Self {
        Self {
            storage,
            navigator,
            state: RwLock::new(SessionData {
                loading: true,
                ..SessionData::default()
            }),
            logging_out: AtomicBool::new(false),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn shared(storage: StorageState, navigator: NavigatorState) -> SessionState {
        Arc::new(Self::new(storage, navigator))
    }

    pub fn navigator(&self) -> &NavigatorState {
        &self.navigator
    }

    // --- Boot ---

    /// check_auth
    ///
    /// Resolves the persisted session once at startup.
    ///
    /// With a cached token the user is confirmed against `GET /auth/me`. This call
    /// bypasses the forced-logout redirect: an expired token at boot clears the store
    /// and leaves the user on whatever page the router decides. Without a token the
    /// session is unauthenticated, whatever user the store still holds is discarded.
    ///
    /// Returns the confirmed user, if any. Never fails; every failure ends as an
    /// unauthenticated session.
    pub async fn check_auth(&self, api: &ApiClient) -> Option<User> {
        let token = match self.stored_token() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Could not read the cached token: {}", e);
                None
            }
        };

        let Some(token) = token else {
            tracing::debug!("No cached token; starting unauthenticated");
            self.clear_all();
            self.finish_loading();
            return None;
        };

        let started = {
            let mut state = self.state.write();
            state.token = Some(token);
            self.epoch.load(Ordering::SeqCst)
        };

        let confirmed = match api.auth().me().await {
            Ok(body) => envelope::unwrap_user(body),
            Err(e) => {
                tracing::warn!("Cached session rejected: {}", e);
                None
            }
        };

        // A login or logout that happened while /auth/me was in flight wins.
        if self.epoch.load(Ordering::SeqCst) != started {
            self.finish_loading();
            return self.current_user();
        }

        match confirmed {
            Some(user) => {
                let persisted = serde_json::to_string(&user)
                    .map_err(StorageError::from)
                    .and_then(|raw| self.storage.set_item(USER_KEY, &raw));
                if let Err(e) = persisted {
                    tracing::warn!("Could not cache the confirmed user: {}", e);
                }
                tracing::info!(user_id = %user.id, role = %user.role, "Session restored");
                let mut state = self.state.write();
                state.user = Some(user.clone());
                state.loading = false;
                Some(user)
            }
            None => {
                self.clear_all();
                self.finish_loading();
                None
            }
        }
    }

    // --- Mutations ---

    /// login
    ///
    /// Stores the identity returned by the backend and navigates to the role's
    /// landing route, which is also returned. Both keys are written before memory is
    /// updated; if either write fails nothing is left behind.
    pub fn login(&self, user: User, token: &str) -> Result<&'static str, StorageError> {
        let landing = routes::landing_route(user.role).unwrap_or(routes::STUDENT_DASHBOARD);
        let raw_user = serde_json::to_string(&user)?;

        {
            let mut state = self.state.write();
            self.storage.set_item(TOKEN_KEY, token)?;
            if let Err(e) = self.storage.set_item(USER_KEY, &raw_user) {
                let _ = self.storage.remove_item(TOKEN_KEY);
                return Err(e);
            }
            tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
            state.user = Some(user);
            state.token = Some(token.to_string());
            state.loading = false;
            state.error = None;
            self.epoch.fetch_add(1, Ordering::SeqCst);
            self.logging_out.store(false, Ordering::SeqCst);
        }

        self.navigator.navigate(landing);
        Ok(landing)
    }

    /// register
    ///
    /// Forwards the payload to `POST /auth/register`. The session itself is never
    /// touched; on failure the backend's message (with details) is recorded as the
    /// session error.
    pub async fn register(
        &self,
        api: &ApiClient,
        payload: &RegisterRequest,
    ) -> Result<Value, ApiError> {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let result = api.auth().register(payload).await;

        let mut state = self.state.write();
        state.loading = false;
        if let Err(e) = &result {
            let message = match e.body() {
                Some(body) => body.describe(REGISTER_FAILED),
                None => REGISTER_FAILED.to_string(),
            };
            tracing::warn!("Registration failed: {}", message);
            state.error = Some(message);
        }
        result
    }

    /// logout
    ///
    /// Clears the store and memory, then navigates to the login route. Calling it on
    /// an already-empty session is harmless.
    pub fn logout(&self) {
        self.clear_all();
        tracing::info!("Signed out");
        self.navigator.navigate(LOGIN_ROUTE);
    }

    /// force_logout
    ///
    /// The interceptor's reaction to a 401/403. Only the first caller since the last
    /// login clears the session and hard-redirects to
    /// `/login?from=<current location>`; concurrent callers return `false` and do
    /// nothing.
    pub fn force_logout(&self) -> bool {
        if self
            .logging_out
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        self.clear_all();
        let current = self.navigator.current_location();
        let target = format!("{}?from={}", LOGIN_ROUTE, urlencoding::encode(&current));
        tracing::warn!(from = %current, "Session rejected by the backend; forcing logout");
        self.navigator.replace(&target);
        true
    }

    fn clear_all(&self) {
        let mut state = self.state.write();
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                tracing::warn!("Could not remove {} from local storage: {}", key, e);
            }
        }
        state.user = None;
        state.token = None;
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn finish_loading(&self) {
        self.state.write().loading = false;
    }

    // --- Reads ---

    /// The current `{user, token}` pair, or `None` when unauthenticated.
    pub fn snapshot(&self) -> Option<Session> {
        let state = self.state.read();
        match (&state.user, &state.token) {
            (Some(user), Some(token)) => Some(Session {
                user: user.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Bearer token attached to outgoing requests.
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Bearer token paired with the epoch it belongs to. Both are read under the
    /// state lock, which every epoch bump also holds.
    pub fn credentials(&self) -> (Option<String>, u64) {
        let state = self.state.read();
        (state.token.clone(), self.epoch.load(Ordering::SeqCst))
    }

    /// Token as persisted in the local store.
    pub fn stored_token(&self) -> Result<Option<String>, StorageError> {
        self.storage.get_item(TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read();
        state.user.is_some() && state.token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.state.write().error = Some(message.into());
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Identity generation. Changes on every login, logout and forced logout.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }
}
