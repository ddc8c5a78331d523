use portal_aluno::{
    AppConfig,
    config::{Env, LOCAL_API_URL, PRODUCTION_API_URL},
};
use serial_test::serial;
use std::path::PathBuf;
use std::{env, panic};

// --- Setup/Teardown Utilities ---

/// Runs `test` with the given variables set (or removed) and restores them afterwards.
fn run_with_env<T, R>(vars: &[(&'static str, Option<&str>)], test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&'static str, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (*key, env::var(key).ok()))
        .collect();

    for (key, value) in vars {
        unsafe {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    let result = panic::catch_unwind(test);

    for (key, original) in originals.into_iter().rev() {
        unsafe {
            match original {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

#[test]
#[serial]
fn test_local_defaults() {
    let config = run_with_env(
        &[
            ("APP_ENV", None),
            ("PORTAL_API_URL", None),
            ("PORTAL_SESSION_FILE", Some("/tmp/portal/session.json")),
        ],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.api_base_url, LOCAL_API_URL);
    assert_eq!(config.session_file, PathBuf::from("/tmp/portal/session.json"));
}

#[test]
#[serial]
fn test_production_falls_back_to_hosted_backend() {
    let config = run_with_env(
        &[("APP_ENV", Some("production")), ("PORTAL_API_URL", Some("  "))],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.api_base_url, PRODUCTION_API_URL);
}

#[test]
#[serial]
fn test_explicit_url_is_trimmed() {
    let config = run_with_env(
        &[("APP_ENV", Some("staging")), ("PORTAL_API_URL", Some("https://api.escola.test/api/"))],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.api_base_url, "https://api.escola.test/api");
}

#[test]
#[serial]
fn test_default_session_file_is_named_session_json() {
    let config = run_with_env(&[("PORTAL_SESSION_FILE", None)], AppConfig::load);
    assert!(config.session_file.ends_with("portal-aluno/session.json")
        || config.session_file.ends_with(".portal-aluno/session.json"));
}

#[test]
fn test_api_url_joins_paths() {
    let config = AppConfig::with_base_url("http://localhost:3100/api/");
    assert_eq!(config.api_url("/courses"), "http://localhost:3100/api/courses");
    assert_eq!(config.api_url("courses"), "http://localhost:3100/api/courses");
}
