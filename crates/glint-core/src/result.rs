//! Result entry types for the search panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stable result identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub String);

impl From<String> for ResultId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResultId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ResultId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shared handle to a result's select action.
///
/// Fires when the user activates the entry (Enter, click, or numeric
/// hotkey). The panel invokes it after dispatching a state reset.
#[derive(Clone)]
pub struct SelectHandler(Arc<dyn Fn() + Send + Sync>);

impl SelectHandler {
    /// Wrap a closure as a select action.
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    /// A handler that does nothing when invoked.
    pub fn noop() -> Self {
        Self(Arc::new(|| {}))
    }

    /// Run the select action.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for SelectHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectHandler(..)")
    }
}

/// One entry in the result list.
///
/// Entries are produced by the external state layer per term change and are
/// read-only from the panel's perspective. Renderer-specific fields (title,
/// icon, subtitle) travel in `display` so the record itself stays fixed.
#[derive(Debug, Clone)]
pub struct ResultEntry {
    /// Unique identifier within the current result set.
    pub id: ResultId,

    /// Completion text offered for Tab-autocomplete and the suggestion
    /// overlay.
    pub term: Option<String>,

    /// Payload written to the system clipboard on Meta+C.
    pub clipboard: Option<String>,

    /// Action fired when the entry is selected.
    pub on_select: SelectHandler,

    /// Arbitrary data for the row renderer to consume.
    pub display: Option<serde_json::Value>,
}

impl ResultEntry {
    /// Create a new entry with required fields.
    pub fn new(id: impl Into<ResultId>, on_select: SelectHandler) -> Self {
        Self {
            id: id.into(),
            term: None,
            clipboard: None,
            on_select,
            display: None,
        }
    }

    /// Set the completion term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Set the clipboard payload.
    pub fn with_clipboard(mut self, text: impl Into<String>) -> Self {
        self.clipboard = Some(text.into());
        self
    }

    /// Attach renderer data.
    pub fn with_display(mut self, display: serde_json::Value) -> Self {
        self.display = Some(display);
        self
    }
}
