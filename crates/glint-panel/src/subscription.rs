//! Scoped event subscriptions.
//!
//! The panel's hide→reset binding is held as a [`Subscription`] guard for
//! the panel's whole lifetime and released when the panel is dropped.
//! [`HookSet`] is the registration side: window implementations keep one
//! per event and fire it when the event occurs.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Handler invoked when the subscribed event fires.
pub type EventHandler = Box<dyn Fn() + Send + Sync>;

/// Global counter for generating unique subscription ids.
static SUBSCRIPTION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn generate_subscription_id() -> u64 {
    SUBSCRIPTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

// =============================================================================
// Subscription Guard
// =============================================================================

/// Guard for a registered event handler.
///
/// Dropping the guard unregisters the handler. [`Subscription::detach`]
/// gives it up instead, leaving the handler registered for as long as the
/// event source lives.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Build a guard around a release action.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn vacant() -> Self {
        Self { release: None }
    }

    /// Keep the handler registered permanently.
    pub fn detach(mut self) {
        self.release = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.release.is_some())
            .finish()
    }
}

// =============================================================================
// Hook Set
// =============================================================================

/// A set of handlers listening to one event.
///
/// Cloned handles address the same set. Firing invokes every handler that
/// is still registered; handlers run outside the set's lock, so a handler
/// may register or drop subscriptions itself.
#[derive(Clone, Default)]
pub struct HookSet {
    handlers: Arc<RwLock<HashMap<u64, Arc<dyn Fn() + Send + Sync>>>>,
}

impl HookSet {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler.
    ///
    /// The returned guard unregisters it when dropped.
    pub fn add(&self, handler: EventHandler) -> Subscription {
        let id = generate_subscription_id();
        self.handlers.write().insert(id, Arc::from(handler));
        tracing::debug!("Registered event handler (id: {})", id);

        let handlers = Arc::downgrade(&self.handlers);
        Subscription::new(move || {
            if let Some(handlers) = handlers.upgrade() {
                handlers.write().remove(&id);
                tracing::debug!("Released event handler (id: {})", id);
            }
        })
    }

    /// Invoke every registered handler.
    pub fn emit(&self) {
        let snapshot: Vec<_> = self.handlers.read().values().cloned().collect();
        for handler in snapshot {
            handler();
        }
    }

    /// Number of live handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    /// Whether the set has no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn handler_fires_while_guard_lives() {
        let hooks = HookSet::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        let _guard = hooks.add(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        hooks.emit();
        hooks.emit();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_the_guard_unregisters() {
        let hooks = HookSet::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        let guard = hooks.add(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        drop(guard);

        hooks.emit();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(hooks.is_empty());
    }

    #[test]
    fn detached_handlers_outlive_the_guard() {
        let hooks = HookSet::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        hooks.add(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .detach();

        hooks.emit();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn all_live_handlers_fire() {
        let hooks = HookSet::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let a = fired.clone();
        let _first = hooks.add(Box::new(move || {
            a.fetch_add(1, Ordering::SeqCst);
        }));
        let b = fired.clone();
        let _second = hooks.add(Box::new(move || {
            b.fetch_add(1, Ordering::SeqCst);
        }));

        hooks.emit();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
        assert_eq!(hooks.len(), 2);
    }
}
