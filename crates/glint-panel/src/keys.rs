//! Keyboard event model.
//!
//! Hosts translate their native key events into [`KeyEvent`] before handing
//! them to the panel. Only the meta modifier participates in dispatch; other
//! modifiers are ignored rather than rejected so combinations like
//! shift+Tab still autocomplete.

// =============================================================================
// Events
// =============================================================================

/// Modifier state for a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Meta (command/super) held.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { meta: false };
    pub const META: Modifiers = Modifiers { meta: true };
}

/// A key identified at the level the panel cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Tab,
    Enter,
    Escape,
    Up,
    Down,
    /// A printable key, identified by its character.
    Char(char),
}

/// One key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// An event with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// An event with meta held.
    pub fn meta(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::META,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a user-facing key description.
///
/// Accepts forms like "up", "tab", "meta+c" or "meta+3". Modifiers are
/// joined with '+', as in "meta+enter".
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let mut meta = false;
    let mut code = None;

    for part in s.split('+') {
        let part = part.trim().to_ascii_lowercase();
        match part.as_str() {
            "meta" | "cmd" | "super" => meta = true,
            "tab" => code = Some(KeyCode::Tab),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Escape),
            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            _ => {
                let mut chars = part.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => code = Some(KeyCode::Char(ch)),
                    _ => return None,
                }
            }
        }
    }

    code.map(|code| KeyEvent {
        code,
        modifiers: Modifiers { meta },
    })
}
