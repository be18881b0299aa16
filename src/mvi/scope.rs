//! Lifetime scope for effects launched by a store.
//!
//! Every store owns one scope. Closing the scope cancels all effects that
//! are still in flight; there is no per-effect cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct EffectScope {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl EffectScope {
    pub fn new() -> Self {
        Self {
            closed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel every effect bound to this scope.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!("Effect scope closed");
            self.notify.notify_waiters();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing with spawned effects
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            closed: Arc::clone(&self.closed),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for EffectScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for observing scope closure
#[derive(Clone)]
pub struct ScopeHandle {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Resolves once the owning scope is closed.
    pub async fn closed(&self) {
        // Register interest before checking the flag, otherwise a close()
        // between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_closed() {
            return;
        }
        notified.await;
    }
}
