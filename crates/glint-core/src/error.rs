//! Error types for the Glint search panel.

use thiserror::Error;

/// Desktop-shell errors - logged at the panel boundary, never propagated
/// into the dispatch flow.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Window operation (resize, blur) failed.
    #[error("Window error: {0}")]
    Window(String),

    /// Word-definition lookup failed.
    #[error("Lookup error: {0}")]
    Lookup(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
