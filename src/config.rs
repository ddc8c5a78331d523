use std::env;
use std::path::PathBuf;

/// Base URL used when running against a backend on the developer machine.
pub const LOCAL_API_URL: &str = "http://localhost:3100/api";

/// Base URL of the hosted backend, used in production when no override is set.
pub const PRODUCTION_API_URL: &str = "https://portal-aluno-backend.vercel.app/api";

/// AppConfig
///
/// Holds the client's entire configuration. Loaded once at startup and never mutated
/// afterwards; it is cloned into the `Portal` root and the `ApiClient`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Backend base URL, without a trailing slash (e.g. "http://localhost:3100/api").
    pub api_base_url: String,
    // Runtime environment marker. Selects the API fallback and the log format.
    pub env: Env,
    // Where the file-backed local store keeps the token and cached user.
    pub session_file: PathBuf,
}

/// Env
///
/// The runtime context. `Local` targets a backend on localhost and logs in a
/// human-readable format; `Production` targets the hosted backend and logs JSON.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Non-panicking configuration for tests and embedding. Points at the local
    /// development backend and a session file in the working directory.
    fn default() -> Self {
        Self {
            api_base_url: LOCAL_API_URL.to_string(),
            env: Env::Local,
            session_file: PathBuf::from(".portal-aluno").join("session.json"),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables:
    ///
    /// * `APP_ENV` - `production` selects `Env::Production`, anything else `Env::Local`.
    /// * `PORTAL_API_URL` - backend base URL; falls back per environment.
    /// * `PORTAL_SESSION_FILE` - path of the persisted session store.
    ///
    /// Every variable has a fallback, so loading never fails.
    pub fn load() -> Self {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let fallback_url = match env {
            Env::Local => LOCAL_API_URL,
            Env::Production => PRODUCTION_API_URL,
        };

        let api_base_url = env::var("PORTAL_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| fallback_url.to_string());

        let session_file = env::var("PORTAL_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        Self {
            api_base_url: normalize_base_url(&api_base_url),
            env,
            session_file,
        }
    }

    /// Builds a config pointing at an explicit backend, keeping the other defaults.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    /// Joins an API path (e.g. "/courses") onto the configured base URL.
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn default_session_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("portal-aluno"))
        .unwrap_or_else(|| PathBuf::from(".portal-aluno"))
        .join("session.json")
}
