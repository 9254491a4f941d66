//! Render-ready frame description.
//!
//! A [`PanelFrame`] is everything a renderer needs to draw the panel once:
//! the input line with its suggestion, and one [`ResultRow`] per result
//! with selection and hotkey hints resolved. The `Display` impl is the
//! plain-text layout the demo binary prints.

use glint_core::{ResultId, SearchSnapshot};
use std::fmt;

use crate::keymap::hotkey_hint;

// =============================================================================
// Autocomplete Suggestion
// =============================================================================

/// Compute the suggestion shown behind the input.
///
/// Matches `candidate` against `term` as a case-insensitive prefix. On a
/// match the suggestion keeps the user's typed casing for the prefix and
/// takes the remainder from the candidate: term "he" with candidate
/// "Hello" suggests "hello", term "HE" suggests "HEllo". No match, no
/// suggestion. An empty term matches trivially, suggesting the whole
/// candidate.
pub fn completion_hint(term: &str, candidate: &str) -> Option<String> {
    let mut matched_bytes = 0;
    let mut candidate_chars = candidate.chars();

    for term_char in term.chars() {
        let candidate_char = candidate_chars.next()?;
        if !chars_eq_ignore_case(term_char, candidate_char) {
            return None;
        }
        matched_bytes += candidate_char.len_utf8();
    }

    Some(format!("{term}{}", &candidate[matched_bytes..]))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

// =============================================================================
// Frame
// =============================================================================

/// One row of the rendered result list.
#[derive(Debug, Clone)]
pub struct ResultRow {
    /// Identifier of the underlying entry.
    pub id: ResultId,

    /// The entry's completion term, when it has one.
    pub term: Option<String>,

    /// Renderer-specific data carried through from the entry.
    pub display: Option<serde_json::Value>,

    /// Whether this row is the highlighted one.
    pub selected: bool,

    /// 1-based hotkey hint for the first nine rows.
    pub hotkey: Option<u8>,
}

impl ResultRow {
    /// Text a renderer shows for the row.
    ///
    /// Prefers a `title` in the display data, then the completion term,
    /// then the id.
    pub fn label(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.get("title"))
            .and_then(|t| t.as_str())
            .or(self.term.as_deref())
            .unwrap_or_else(|| self.id.as_ref())
    }
}

/// Everything a renderer needs to draw the panel once.
#[derive(Debug, Clone)]
pub struct PanelFrame {
    /// Current input text.
    pub term: String,

    /// Placeholder shown while the term is empty.
    pub placeholder: String,

    /// Autocomplete suggestion from the highlighted result, if any.
    pub suggestion: Option<String>,

    /// First visible row index.
    pub scroll_top: usize,

    /// Rows visible at once.
    pub visible_rows: usize,

    /// All rows, selection and hotkeys resolved.
    pub rows: Vec<ResultRow>,
}

impl PanelFrame {
    /// Build a frame from a snapshot.
    pub fn build(
        snapshot: &SearchSnapshot,
        placeholder: &str,
        scroll_top: usize,
        visible_rows: usize,
    ) -> Self {
        let suggestion = snapshot
            .highlighted()
            .and_then(|entry| entry.term.as_deref())
            .and_then(|candidate| completion_hint(&snapshot.term, candidate));

        let rows = snapshot
            .results
            .iter()
            .enumerate()
            .map(|(index, entry)| ResultRow {
                id: entry.id.clone(),
                term: entry.term.clone(),
                display: entry.display.clone(),
                selected: Some(index) == snapshot.selected,
                hotkey: hotkey_hint(index),
            })
            .collect();

        Self {
            term: snapshot.term.clone(),
            placeholder: placeholder.to_string(),
            suggestion,
            scroll_top,
            visible_rows,
            rows,
        }
    }
}

impl fmt::Display for PanelFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.term.is_empty() {
            writeln!(f, "[{}]", self.placeholder)?;
        } else {
            match &self.suggestion {
                Some(suggestion) => writeln!(f, "[{}] ~ {}", self.term, suggestion)?,
                None => writeln!(f, "[{}]", self.term)?,
            }
        }

        let end = (self.scroll_top + self.visible_rows).min(self.rows.len());
        for row in &self.rows[self.scroll_top.min(end)..end] {
            let marker = if row.selected { '>' } else { ' ' };
            match row.hotkey {
                Some(n) => writeln!(f, "{} {} {}", marker, n, row.label())?,
                None => writeln!(f, "{}   {}", marker, row.label())?,
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
