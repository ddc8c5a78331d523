use portal_aluno::{
    Portal,
    config::{AppConfig, Env},
    navigation::{HistoryNavigator, Navigator, NavigatorState},
    storage::{FileStorage, StorageState},
};
use std::{env, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point. Initializes configuration, logging and the local
/// session store, resolves the persisted session and reports where the user lands.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // RUST_LOG wins; otherwise debug for this crate and info for the HTTP stack.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "portal_aluno=debug,reqwest=info".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Client starting in {:?} mode", config.env);
    tracing::info!("Backend: {}", config.api_base_url);

    // 4. Local Session Store
    tracing::debug!("Session file: {}", config.session_file.display());
    let storage = Arc::new(FileStorage::new(config.session_file.clone())) as StorageState;
    let history = Arc::new(HistoryNavigator::default());
    let navigator = history.clone() as NavigatorState;

    // 5. Application Root & Session Resolution
    let portal = Portal::new(config, storage, navigator);
    let restored = portal.boot().await;

    if restored.is_none() {
        if let (Ok(email), Ok(password)) = (env::var("PORTAL_EMAIL"), env::var("PORTAL_PASSWORD")) {
            match portal.sign_in(&email, &password).await {
                Ok(landing) => tracing::info!("Signed in, landing on {}", landing),
                Err(e) => {
                    tracing::error!(
                        "{}",
                        portal.session.error().unwrap_or_else(|| e.to_string())
                    );
                }
            }
        }
    }

    // 6. Report
    let Some(user) = portal.session.current_user() else {
        tracing::info!("No active session; {:?}", portal.guard(&history.current_location()));
        return;
    };

    tracing::info!(
        user_id = %user.id,
        role = %user.role,
        "Authenticated as {} <{}>",
        user.name,
        user.email
    );
    tracing::info!("Route decision for /: {:?}", portal.guard("/"));

    match portal.api.dashboard().for_role(user.role).await {
        Ok(dashboard) => {
            let keys: Vec<&str> = dashboard.fields.keys().map(String::as_str).collect();
            tracing::info!("Dashboard loaded: {}", keys.join(", "));
        }
        Err(e) => tracing::warn!("Dashboard unavailable: {}", e),
    }
}
