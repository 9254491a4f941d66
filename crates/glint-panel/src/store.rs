//! Search state store.
//!
//! [`SearchIntents`] is the narrow mutation interface the panel dispatches
//! through; it never touches state directly. [`SearchStore`] is the
//! in-memory implementation used by the demo binary and the tests.
//!
//! The store follows a mutation = notification discipline: every intent
//! that changes state also broadcasts the new snapshot, so subscribers
//! cannot observe a stale state after a dispatch.

use glint_core::{ResultEntry, SearchSnapshot};
use parking_lot::RwLock;
use tokio::sync::watch;

// =============================================================================
// Intents
// =============================================================================

/// The four state mutations the panel may request.
///
/// The panel has no visibility into their effects beyond the next snapshot
/// it is handed.
pub trait SearchIntents: Send + Sync {
    /// Clear the search, remembering the current term as `prev_term`.
    fn reset(&self);

    /// Move the cursor by a signed offset.
    fn move_cursor(&self, delta: i32);

    /// Replace the term and recompute results.
    fn update_term(&self, term: &str);

    /// Put the cursor on a specific row.
    fn select_element(&self, index: usize);
}

// =============================================================================
// SearchStore
// =============================================================================

/// Produces the result list for a term, ordered by relevance.
pub type ResultSource = Box<dyn Fn(&str) -> Vec<ResultEntry> + Send + Sync>;

/// In-memory search state with automatic change notifications.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the state (never poisons) and
/// `tokio::sync::watch` for broadcasts. Send and borrow are synchronous, so
/// no async runtime is required to drive the store.
pub struct SearchStore {
    inner: RwLock<SearchSnapshot>,
    source: ResultSource,
    tx: watch::Sender<SearchSnapshot>,
    rx: watch::Receiver<SearchSnapshot>,
}

impl SearchStore {
    /// Create a store backed by a result source.
    pub fn new(source: ResultSource) -> Self {
        let (tx, rx) = watch::channel(SearchSnapshot::default());
        Self {
            inner: RwLock::new(SearchSnapshot::default()),
            source,
            tx,
            rx,
        }
    }

    /// A store whose source never returns results.
    pub fn empty() -> Self {
        Self::new(Box::new(|_| Vec::new()))
    }

    /// Subscribe to snapshot changes.
    ///
    /// The receiver holds the current snapshot immediately and every
    /// broadcast after. Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.rx.clone()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.inner.read().clone()
    }

    fn broadcast(&self, snapshot: SearchSnapshot) {
        let _ = self.tx.send(snapshot);
    }
}

impl SearchIntents for SearchStore {
    fn reset(&self) {
        let snapshot = {
            let mut inner = self.inner.write();
            inner.prev_term = std::mem::take(&mut inner.term);
            inner.results.clear();
            inner.selected = None;
            tracing::debug!("Search reset (prev_term: {:?})", inner.prev_term);
            inner.clone()
        };
        self.broadcast(snapshot);
    }

    fn move_cursor(&self, delta: i32) {
        let snapshot = {
            let mut inner = self.inner.write();
            let len = inner.results.len();
            if len == 0 {
                return;
            }
            let current = inner.selected.unwrap_or(0) as i32;
            let next = (current + delta).rem_euclid(len as i32) as usize;
            inner.selected = Some(next);
            inner.clone()
        };
        self.broadcast(snapshot);
    }

    fn update_term(&self, term: &str) {
        let snapshot = {
            let mut inner = self.inner.write();
            inner.term = term.to_string();
            inner.results = (self.source)(term);
            inner.selected = if inner.results.is_empty() {
                None
            } else {
                Some(0)
            };
            tracing::debug!("Term updated: {:?} ({} results)", term, inner.results.len());
            inner.clone()
        };
        self.broadcast(snapshot);
    }

    fn select_element(&self, index: usize) {
        let snapshot = {
            let mut inner = self.inner.write();
            // Out-of-range requests are dropped so `selected` stays a valid
            // index whenever it is present.
            if index >= inner.results.len() {
                return;
            }
            inner.selected = Some(index);
            inner.clone()
        };
        self.broadcast(snapshot);
    }
}

// =============================================================================
// Recording Intents for Testing
// =============================================================================


// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::SelectHandler;

    fn letter_source() -> ResultSource {
        Box::new(|term| {
            if term.is_empty() {
                return Vec::new();
            }
            ["alpha", "beta", "gamma"]
                .iter()
                .filter(|name| name.starts_with(&term.to_ascii_lowercase()))
                .map(|name| ResultEntry::new(*name, SelectHandler::noop()).with_term(*name))
                .collect()
        })
    }

    #[test]
    fn update_term_recomputes_results_and_cursor() {
        let store = SearchStore::new(letter_source());

        store.update_term("a");
        let snapshot = store.snapshot();
        assert_eq!(snapshot.term, "a");
        assert_eq!(snapshot.result_count(), 1);
        assert_eq!(snapshot.selected, Some(0));

        store.update_term("zzz");
        let snapshot = store.snapshot();
        assert_eq!(snapshot.result_count(), 0);
        assert_eq!(snapshot.selected, None);
    }

    #[test]
    fn reset_remembers_the_term() {
        let store = SearchStore::new(letter_source());
        store.update_term("gam");
        store.reset();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.term, "");
        assert_eq!(snapshot.prev_term, "gam");
        assert_eq!(snapshot.result_count(), 0);
        assert_eq!(snapshot.selected, None);
    }

    #[test]
    fn move_cursor_wraps_in_both_directions() {
        let store = SearchStore::new(Box::new(|_| {
            (0..3)
                .map(|i| ResultEntry::new(format!("r{i}"), SelectHandler::noop()))
                .collect()
        }));
        store.update_term("x");
        assert_eq!(store.snapshot().selected, Some(0));

        store.move_cursor(-1);
        assert_eq!(store.snapshot().selected, Some(2));

        store.move_cursor(1);
        assert_eq!(store.snapshot().selected, Some(0));
    }

    #[test]
    fn move_cursor_on_empty_list_does_nothing() {
        let store = SearchStore::empty();
        let rx = store.subscribe();

        store.move_cursor(1);
        assert_eq!(store.snapshot().selected, None);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn select_element_ignores_out_of_range() {
        let store = SearchStore::new(letter_source());
        store.update_term("g");

        store.select_element(5);
        assert_eq!(store.snapshot().selected, Some(0));

        store.select_element(0);
        assert_eq!(store.snapshot().selected, Some(0));
    }

    #[test]
    fn every_mutation_broadcasts() {
        let store = SearchStore::new(letter_source());
        let rx = store.subscribe();

        store.update_term("be");
        assert_eq!(rx.borrow().term, "be");

        store.reset();
        assert_eq!(rx.borrow().prev_term, "be");
    }

    #[tokio::test]
    async fn subscribers_are_woken_on_change() {
        let store = SearchStore::new(letter_source());
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.update_term("al");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().term, "al");
    }
}
