//! Glint - demo entry point.
//!
//! Drives the search panel headlessly against a small built-in catalog.
//! Each stdin line is either typed search text or a `:command`; after
//! every step the rendered frame is printed.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use glint_core::{PanelConfig, ResultEntry, SelectHandler, ShellError};
use glint_panel::shell::{Clipboard, HeadlessWindow, Shell, WordLookup};
use glint_panel::store::{ResultSource, SearchStore};
use glint_panel::{parse_key, KeyEvent, SearchPanel};
use serde_json::json;

// =============================================================================
// Demo Catalog
// =============================================================================

/// A result source over a fixed application list.
///
/// Matches case-insensitively on a substring of the title; the empty term
/// matches nothing, so the panel opens collapsed.
fn catalog() -> ResultSource {
    const APPS: &[(&str, &str)] = &[
        ("Calculator", "/Applications/Calculator.app"),
        ("Calendar", "/Applications/Calendar.app"),
        ("Files", "/Applications/Files.app"),
        ("Firefox", "/Applications/Firefox.app"),
        ("Mail", "/Applications/Mail.app"),
        ("Maps", "/Applications/Maps.app"),
        ("Music", "/Applications/Music.app"),
        ("Notes", "/Applications/Notes.app"),
        ("Photos", "/Applications/Photos.app"),
        ("Safari", "/Applications/Safari.app"),
        ("Terminal", "/Applications/Utilities/Terminal.app"),
    ];

    Box::new(|term| {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        APPS.iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, path)| {
                let launched = name.to_string();
                ResultEntry::new(
                    *name,
                    SelectHandler::new(move || println!("(launch) {launched}")),
                )
                .with_term(*name)
                .with_clipboard(*path)
                .with_display(json!({ "title": *name, "subtitle": *path }))
            })
            .collect()
    })
}

// =============================================================================
// Shell Adapters
// =============================================================================

/// Clipboard that prints instead of touching the system pasteboard.
struct EchoClipboard;

impl Clipboard for EchoClipboard {
    fn set_text(&self, text: &str) -> Result<(), ShellError> {
        println!("(clipboard) {text}");
        Ok(())
    }
}

/// Word lookup that prints instead of opening a dictionary.
struct EchoLookup;

impl WordLookup for EchoLookup {
    fn define(&self, term: &str) -> Result<(), ShellError> {
        println!("(define) {term}");
        Ok(())
    }
}

// =============================================================================
// Input Protocol
// =============================================================================

const HELP: &str =
    "type to search  |  :up :down :tab :enter :esc :m1-:m9 :mc :md :hide :quit";

/// Map a `:command` token to the key event it stands for.
fn key_event(token: &str) -> Option<KeyEvent> {
    let keystroke = match token {
        "up" | "down" | "tab" | "enter" | "esc" => token.to_string(),
        "mc" => "meta+c".to_string(),
        "md" => "meta+d".to_string(),
        _ => format!("meta+{}", token.strip_prefix('m')?),
    };
    parse_key(&keystroke)
}

/// Apply one input line to the panel, then sync and reprint the frame.
fn step(panel: &mut SearchPanel, store: &SearchStore, window: &HeadlessWindow, input: &str) {
    match input.strip_prefix(':') {
        Some("hide") => window.emit_hidden(),
        Some(token) => match key_event(token) {
            Some(event) => {
                let outcome = panel.handle_key(&event, &store.snapshot());
                tracing::debug!("Command :{} -> {:?}", token, outcome);
            }
            None => {
                eprintln!("Unknown command :{token}");
                eprintln!("{HELP}");
                return;
            }
        },
        None => panel.on_input_changed(input),
    }

    panel.sync(&store.snapshot());
    print_frame(panel, store);
}

fn print_frame(panel: &SearchPanel, store: &SearchStore) {
    print!("{}", panel.frame(&store.snapshot()));
    let _ = io::stdout().flush();
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Glint demo starting...");

    let config = match PanelConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed: {} - using defaults", e);
            PanelConfig::default()
        }
    };

    let store = Arc::new(SearchStore::new(catalog()));

    let window = Arc::new(HeadlessWindow::new());
    let shell = Shell::new(window.clone(), Arc::new(EchoClipboard), Arc::new(EchoLookup));

    let mut panel = SearchPanel::new(shell, store.clone(), &config, &store.snapshot());

    println!("{HELP}");
    print_frame(&panel, &store);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("stdin read failed: {}", e);
                break;
            }
        };
        let input = line.trim();
        if input == ":quit" {
            break;
        }
        step(&mut panel, &store, &window, input);
    }

    tracing::info!("Glint demo exiting");
}
