use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket
///
/// Identifies one request issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// RequestGeneration
///
/// Last-request-wins guard for a view that refetches on every filter change.
/// Each request takes a ticket; a response is applied only if its ticket is still
/// the newest and the view has not been torn down since.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket, retiring every earlier one.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Retires all outstanding tickets (the view went away).
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    /// run
    ///
    /// Awaits `request` under a fresh ticket. `None` means a newer request began or
    /// the generation was invalidated while it was pending; the result is stale and
    /// must not be applied.
    pub async fn run<F: Future>(&self, request: F) -> Option<F::Output> {
        let ticket = self.begin();
        let output = request.await;
        if self.is_current(ticket) {
            Some(output)
        } else {
            tracing::debug!("Discarding stale response");
            None
        }
    }
}
