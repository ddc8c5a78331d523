use parking_lot::Mutex;
use std::sync::Arc;

/// Navigator
///
/// The seam between the session layer and whatever renders views. The session
/// service navigates after login and logout; the HTTP interceptor hard-redirects to
/// the login route on a forced logout and needs the current location to build the
/// return-to parameter.
pub trait Navigator: Send + Sync {
    /// Path plus query string of the view currently shown (e.g. "/grades?tab=2").
    fn current_location(&self) -> String;

    /// In-app navigation that pushes a history entry.
    fn navigate(&self, to: &str);

    /// Hard redirect that replaces the current entry.
    fn replace(&self, to: &str);
}

/// NavigationEvent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(String),
    Replace(String),
}

impl NavigationEvent {
    pub fn target(&self) -> &str {
        match self {
            NavigationEvent::Push(to) | NavigationEvent::Replace(to) => to,
        }
    }
}

/// HistoryNavigator
///
/// An in-memory history stack. Keeps the current location and a log of every
/// navigation, which the binary reports and the tests assert on.
pub struct HistoryNavigator {
    inner: Mutex<History>,
}

struct History {
    stack: Vec<String>,
    events: Vec<NavigationEvent>,
}

impl HistoryNavigator {
    /// Starts the history at `initial` (e.g. the path the app was opened on).
    pub fn new(initial: &str) -> Self {
        Self {
            inner: Mutex::new(History {
                stack: vec![initial.to_string()],
                events: Vec::new(),
            }),
        }
    }

    /// Every navigation performed so far, oldest first.
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.inner.lock().events.clone()
    }

    /// Only the hard redirects.
    pub fn replacements(&self) -> Vec<String> {
        self.inner
            .lock()
            .events
            .iter()
            .filter_map(|event| match event {
                NavigationEvent::Replace(to) => Some(to.clone()),
                NavigationEvent::Push(_) => None,
            })
            .collect()
    }

    /// Moves to `path` without recording an event, as a user clicking a link would
    /// before the next request fires.
    pub fn visit(&self, path: &str) {
        self.inner.lock().stack.push(path.to_string());
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for HistoryNavigator {
    fn current_location(&self) -> String {
        self.inner
            .lock()
            .stack
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, to: &str) {
        let mut history = self.inner.lock();
        history.stack.push(to.to_string());
        history.events.push(NavigationEvent::Push(to.to_string()));
    }

    fn replace(&self, to: &str) {
        let mut history = self.inner.lock();
        history.stack.pop();
        history.stack.push(to.to_string());
        history.events.push(NavigationEvent::Replace(to.to_string()));
    }
}

/// NavigatorState
pub type NavigatorState = Arc<dyn Navigator>;
