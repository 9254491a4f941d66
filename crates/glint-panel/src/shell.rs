//! Desktop-shell seams for the search panel.
//!
//! The panel talks to its host through three narrow capability traits:
//! window control, clipboard, and word lookup. The traits are toolkit
//! independent and mockable, so the panel can be driven entirely headless.
//!
//! Real desktop integrations live with the embedding application; this
//! crate ships headless implementations that record what the panel asked
//! for, used by the demo binary and the tests.

use glint_core::{ShellError, WindowSize};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::subscription::{EventHandler, HookSet, Subscription};

// =============================================================================
// Capability Traits
// =============================================================================

/// Control over the OS window hosting the panel.
#[cfg_attr(test, automock)]
pub trait HostWindow: Send + Sync {
    /// Apply a new window size.
    fn set_size(&self, size: WindowSize) -> Result<(), ShellError>;

    /// Drop keyboard focus from the window.
    fn blur(&self) -> Result<(), ShellError>;

    /// Subscribe to the window's hide event.
    ///
    /// The handler fires whenever the window loses visibility. Dropping the
    /// returned guard unregisters it.
    fn on_hidden(&self, handler: EventHandler) -> Subscription;
}

/// System clipboard access.
#[cfg_attr(test, automock)]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with the given text.
    fn set_text(&self, text: &str) -> Result<(), ShellError>;
}

/// Word-definition lookup service.
#[cfg_attr(test, automock)]
pub trait WordLookup: Send + Sync {
    /// Open a definition for the given term.
    fn define(&self, term: &str) -> Result<(), ShellError>;
}

/// Bundle of shell capabilities injected into the panel.
#[derive(Clone)]
pub struct Shell {
    pub window: Arc<dyn HostWindow>,
    pub clipboard: Arc<dyn Clipboard>,
    pub lookup: Arc<dyn WordLookup>,
}

impl Shell {
    pub fn new(
        window: Arc<dyn HostWindow>,
        clipboard: Arc<dyn Clipboard>,
        lookup: Arc<dyn WordLookup>,
    ) -> Self {
        Self {
            window,
            clipboard,
            lookup,
        }
    }
}

// =============================================================================
// Headless Shell
// =============================================================================

/// Window with no OS surface.
///
/// Records applied sizes and blur calls. `emit_hidden` plays the role of
/// the OS notifying that the window disappeared.
#[derive(Default)]
pub struct HeadlessWindow {
    size: Mutex<Option<WindowSize>>,
    resize_count: AtomicUsize,
    blur_count: AtomicUsize,
    hidden: HookSet,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The size most recently applied, if any.
    pub fn last_size(&self) -> Option<WindowSize> {
        *self.size.lock()
    }

    /// How many times a size was applied.
    pub fn resize_count(&self) -> usize {
        self.resize_count.load(Ordering::SeqCst)
    }

    /// How many times the window was blurred.
    pub fn blur_count(&self) -> usize {
        self.blur_count.load(Ordering::SeqCst)
    }

    /// Fire the hide event.
    pub fn emit_hidden(&self) {
        self.hidden.emit();
    }

    /// Number of live hide-event handlers.
    pub fn hide_handler_count(&self) -> usize {
        self.hidden.len()
    }
}

impl HostWindow for HeadlessWindow {
    fn set_size(&self, size: WindowSize) -> Result<(), ShellError> {
        tracing::debug!("Window resized to {}x{}", size.width, size.height);
        *self.size.lock() = Some(size);
        self.resize_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn blur(&self) -> Result<(), ShellError> {
        tracing::debug!("Window blurred");
        self.blur_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn on_hidden(&self, handler: EventHandler) -> Subscription {
        self.hidden.add(handler)
    }
}

/// Clipboard that stores writes in memory.
#[derive(Default)]
pub struct HeadlessClipboard {
    text: Mutex<Option<String>>,
}

impl HeadlessClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text most recently written, if any.
    pub fn last_text(&self) -> Option<String> {
        self.text.lock().clone()
    }
}

impl Clipboard for HeadlessClipboard {
    fn set_text(&self, text: &str) -> Result<(), ShellError> {
        tracing::debug!("Clipboard write ({} bytes)", text.len());
        *self.text.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Lookup that records the words it was asked to define.
#[derive(Default)]
pub struct HeadlessLookup {
    words: Mutex<Vec<String>>,
}

impl HeadlessLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every word defined so far, in order.
    pub fn defined_words(&self) -> Vec<String> {
        self.words.lock().clone()
    }
}

impl WordLookup for HeadlessLookup {
    fn define(&self, term: &str) -> Result<(), ShellError> {
        tracing::debug!("Define: {}", term);
        self.words.lock().push(term.to_string());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
