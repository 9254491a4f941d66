//! Headless frontend for the Glint search panel.
//!
//! This crate provides the interaction layer over `glint-core`:
//! - SearchStore holding the observable search state
//! - SearchPanel translating keys and pointer events into intents
//! - Keymap with the launcher's keyboard contract
//! - Shell capability traits with headless implementations

pub mod command;
pub mod keymap;
pub mod keys;
pub mod model;
pub mod panel;
pub mod shell;
pub mod store;
pub mod subscription;

// Re-export commonly used types
pub use command::{Dispatch, KeyOutcome, PanelCommand};
pub use keys::{parse_key, KeyCode, KeyEvent, Modifiers};
pub use model::{completion_hint, PanelFrame, ResultRow};
pub use panel::SearchPanel;
pub use shell::{
    Clipboard, HeadlessClipboard, HeadlessLookup, HeadlessWindow, HostWindow, Shell, WordLookup,
};
pub use store::{ResultSource, SearchIntents, SearchStore};
pub use subscription::{EventHandler, HookSet, Subscription};
