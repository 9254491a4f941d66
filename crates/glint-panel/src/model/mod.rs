//! View-model for the search panel.
//!
//! This module contains the render-ready frame description the panel hands
//! to whatever draws it. All types are toolkit-independent for testability.

mod frame;

pub use frame::{completion_hint, PanelFrame, ResultRow};
