//! Search state snapshot read by the panel.

use crate::result::ResultEntry;

/// Immutable view of the search state at one instant.
///
/// Owned by the external store; the panel receives a snapshot per call and
/// writes back only through intent dispatch, never directly.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    /// Current text in the search input.
    pub term: String,

    /// The term as it was before the last reset.
    pub prev_term: String,

    /// Index of the highlighted result, if any.
    pub selected: Option<usize>,

    /// Results ordered by externally computed relevance.
    pub results: Vec<ResultEntry>,
}

impl SearchSnapshot {
    /// The entry at the `selected` index.
    ///
    /// An absent or out-of-range index yields `None`, so a malformed
    /// snapshot behaves like one with no highlight.
    pub fn highlighted(&self) -> Option<&ResultEntry> {
        self.selected.and_then(|i| self.results.get(i))
    }

    /// Number of results in this snapshot.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ResultEntry, SelectHandler};

    fn entry(id: &str) -> ResultEntry {
        ResultEntry::new(id, SelectHandler::noop())
    }

    #[test]
    fn highlighted_returns_selected_entry() {
        let snapshot = SearchSnapshot {
            selected: Some(1),
            results: vec![entry("a"), entry("b")],
            ..Default::default()
        };
        assert_eq!(snapshot.highlighted().unwrap().id, "b".into());
    }

    #[test]
    fn highlighted_is_none_without_selection() {
        let snapshot = SearchSnapshot {
            results: vec![entry("a")],
            ..Default::default()
        };
        assert!(snapshot.highlighted().is_none());
    }

    #[test]
    fn out_of_range_selection_behaves_like_no_highlight() {
        let snapshot = SearchSnapshot {
            selected: Some(5),
            results: vec![entry("a")],
            ..Default::default()
        };
        assert!(snapshot.highlighted().is_none());
    }
}
