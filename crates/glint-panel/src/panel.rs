//! The search panel.
//!
//! `SearchPanel` translates keyboard input and row hover into intents,
//! manages window sizing as a side effect of result-count changes, and
//! keeps the highlighted row scrolled into view. It owns no search state:
//! snapshots come in per call, mutations go out through [`SearchIntents`],
//! and side effects go out through the [`Shell`] capabilities. Shell
//! failures are logged and swallowed; they never interrupt dispatch.

use std::sync::Arc;

use glint_core::{PanelConfig, ResultEntry, SearchSnapshot, WindowMetrics};

use crate::command::{KeyOutcome, PanelCommand};
use crate::keymap;
use crate::keys::KeyEvent;
use crate::model::PanelFrame;
use crate::shell::Shell;
use crate::store::SearchIntents;
use crate::subscription::Subscription;

// =============================================================================
// SearchPanel
// =============================================================================

pub struct SearchPanel {
    shell: Shell,
    intents: Arc<dyn SearchIntents>,
    metrics: WindowMetrics,
    placeholder: String,

    /// Result count at the last sync; sizing reapplies only when it moves.
    last_result_count: usize,
    /// Highlight at the last sync; scrolling adjusts only when it moves.
    last_selected: Option<usize>,
    /// First visible row.
    scroll_top: usize,

    /// Hide → reset binding, released when the panel is dropped.
    _hide_subscription: Subscription,
}

impl SearchPanel {
    /// Build the panel and bind the window's hide event to a state reset.
    ///
    /// The initial snapshot seeds change detection; no window size is
    /// applied until the result count first changes in [`Self::sync`].
    pub fn new(
        shell: Shell,
        intents: Arc<dyn SearchIntents>,
        config: &PanelConfig,
        initial: &SearchSnapshot,
    ) -> Self {
        let hide_intents = intents.clone();
        let hide_subscription = shell.window.on_hidden(Box::new(move || {
            tracing::debug!("Window hidden, resetting search");
            hide_intents.reset();
        }));

        Self {
            shell,
            intents,
            metrics: config.window,
            placeholder: config.placeholder.clone(),
            last_result_count: initial.result_count(),
            last_selected: initial.selected,
            scroll_top: 0,
            _hide_subscription: hide_subscription,
        }
    }

    // =========================================================================
    // State Observation
    // =========================================================================

    /// Observe a new snapshot.
    ///
    /// Applies the window size when the result count changed since the last
    /// sync, and keeps the highlighted row inside the visible window when
    /// the highlight moved.
    pub fn sync(&mut self, snapshot: &SearchSnapshot) {
        let count = snapshot.result_count();
        if count != self.last_result_count {
            self.last_result_count = count;
            let size = self.metrics.window_size(count);
            tracing::debug!("Result count now {}, window height {}", count, size.height);
            if let Err(e) = self.shell.window.set_size(size) {
                tracing::warn!("Window resize failed: {}", e);
            }
        }

        self.clamp_scroll(count);
        if snapshot.selected != self.last_selected {
            self.last_selected = snapshot.selected;
            self.scroll_to_selected(snapshot.selected);
        }
    }

    fn clamp_scroll(&mut self, result_count: usize) {
        let max_top = result_count.saturating_sub(self.metrics.max_visible_rows);
        if self.scroll_top > max_top {
            self.scroll_top = max_top;
        }
    }

    fn scroll_to_selected(&mut self, selected: Option<usize>) {
        let Some(index) = selected else {
            return;
        };
        let visible = self.metrics.max_visible_rows;
        if index < self.scroll_top {
            self.scroll_top = index;
        } else if index >= self.scroll_top + visible {
            self.scroll_top = index + 1 - visible;
        }
    }

    /// First visible row index.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    // =========================================================================
    // Input Events
    // =========================================================================

    /// Feed one key-down event.
    ///
    /// The returned outcome tells the host whether to suppress its default
    /// processing of the key.
    pub fn handle_key(&self, event: &KeyEvent, snapshot: &SearchSnapshot) -> KeyOutcome {
        let dispatch = keymap::resolve(event, snapshot);
        if let Some(command) = dispatch.command {
            tracing::debug!("Key {:?} resolved to {:?}", event, command);
            self.run(command, snapshot);
        }
        dispatch.outcome()
    }

    /// Text typed into the input.
    pub fn on_input_changed(&self, text: &str) {
        self.intents.update_term(text);
    }

    /// Pointer moved over a row.
    pub fn on_row_hovered(&self, index: usize) {
        self.intents.select_element(index);
    }

    /// A row was clicked.
    ///
    /// Selects that row's entry, regardless of where the highlight sits.
    pub fn on_row_clicked(&self, index: usize, snapshot: &SearchSnapshot) {
        if let Some(entry) = snapshot.results.get(index) {
            self.select_entry(entry);
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the render frame for a snapshot.
    pub fn frame(&self, snapshot: &SearchSnapshot) -> PanelFrame {
        PanelFrame::build(
            snapshot,
            &self.placeholder,
            self.scroll_top,
            self.metrics.max_visible_rows,
        )
    }

    // =========================================================================
    // Command Execution
    // =========================================================================

    fn run(&self, command: PanelCommand, snapshot: &SearchSnapshot) {
        match command {
            PanelCommand::DefineTerm => {
                if let Err(e) = self.shell.lookup.define(&snapshot.term) {
                    tracing::warn!("Definition lookup failed: {}", e);
                }
            }
            PanelCommand::CopyHighlighted => self.copy_highlighted(snapshot),
            PanelCommand::ActivateSlot(slot) => {
                if let Some(entry) = snapshot.results.get(slot) {
                    self.select_entry(entry);
                }
            }
            PanelCommand::Complete => self.autocomplete(snapshot),
            PanelCommand::CursorDown => self.intents.move_cursor(1),
            PanelCommand::CursorUp => self.intents.move_cursor(-1),
            PanelCommand::RecallTerm => self.intents.update_term(&snapshot.prev_term),
            PanelCommand::Submit => {
                // No highlight, no dispatch: the reset is skipped too.
                if let Some(entry) = snapshot.highlighted() {
                    self.select_entry(entry);
                }
            }
            PanelCommand::Dismiss => {
                if let Err(e) = self.shell.window.blur() {
                    tracing::warn!("Window blur failed: {}", e);
                }
            }
        }
    }

    /// Select an entry: reset first, then the entry's own action.
    fn select_entry(&self, entry: &ResultEntry) {
        self.intents.reset();
        entry.on_select.invoke();
    }

    fn copy_highlighted(&self, snapshot: &SearchSnapshot) {
        let Some(text) = snapshot.highlighted().and_then(|e| e.clipboard.as_deref()) else {
            return;
        };
        match self.shell.clipboard.set_text(text) {
            Ok(()) => self.intents.reset(),
            // The copy did not happen, so the state stays for a retry.
            Err(e) => tracing::warn!("Clipboard write failed: {}", e),
        }
    }

    fn autocomplete(&self, snapshot: &SearchSnapshot) {
        if let Some(term) = snapshot.highlighted().and_then(|e| e.term.as_deref()) {
            if !term.is_empty() {
                self.intents.update_term(term);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
