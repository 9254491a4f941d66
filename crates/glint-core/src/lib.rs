//! Core types for the Glint search panel.
//!
//! This crate contains shared data structures used across the Glint crates:
//! - Result entry types
//! - The search state snapshot
//! - Window sizing metrics
//! - Configuration types
//! - Error types

mod config;
mod error;
mod metrics;
mod result;
mod state;

pub use config::{config_dir, config_path, ensure_config_dir, PanelConfig};
pub use error::{ConfigError, ShellError};
pub use metrics::{WindowMetrics, WindowSize};
pub use result::{ResultEntry, ResultId, SelectHandler};
pub use state::SearchSnapshot;
