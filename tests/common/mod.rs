#![allow(dead_code)]

use axum::Router;
use parking_lot::Mutex;
use portal_aluno::{
    AppConfig, HistoryNavigator, LocalStorage, MemoryStorage, NavigatorState, Portal,
    StorageError, StorageState,
    models::{Role, User},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

// --- Fake Backend ---

/// Serves `router` under `/api` on an ephemeral port and returns the API base URL.
pub async fn spawn_backend(router: Router) -> String {
    let app = Router::new().nest("/api", router);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}/api", port)
}

// --- Counting Storage ---

/// `MemoryStorage` that counts removals per key.
#[derive(Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
    removals: Mutex<HashMap<String, usize>>,
}

impl CountingStorage {
    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        Self {
            inner: MemoryStorage::with_entries(entries.iter().copied()),
            removals: Mutex::new(HashMap::new()),
        }
    }

    pub fn removals(&self, key: &str) -> usize {
        self.removals.lock().get(key).copied().unwrap_or(0)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).unwrap()
    }
}

impl LocalStorage for CountingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        *self.removals.lock().entry(key.to_string()).or_insert(0) += 1;
        self.inner.remove_item(key)
    }
}

// --- Test Portal ---

pub struct TestPortal {
    pub portal: Portal,
    pub storage: Arc<CountingStorage>,
    pub history: Arc<HistoryNavigator>,
}

pub fn portal_at(base_url: &str, storage: CountingStorage) -> TestPortal {
    let storage = Arc::new(storage);
    let history = Arc::new(HistoryNavigator::default());
    let portal = Portal::new(
        AppConfig::with_base_url(base_url),
        storage.clone() as StorageState,
        history.clone() as NavigatorState,
    );
    TestPortal {
        portal,
        storage,
        history,
    }
}

pub async fn spawn_portal(router: Router) -> TestPortal {
    let base_url = spawn_backend(router).await;
    portal_at(&base_url, CountingStorage::default())
}

pub fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@portal.test", id),
        role,
        ..User::default()
    }
}
