//! Commands the panel executes in response to key events.

/// What a key event asks the panel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Look up the current term in the word-definition service.
    DefineTerm,
    /// Copy the highlighted result's clipboard payload, then reset.
    CopyHighlighted,
    /// Select the result sitting in a numeric-hotkey slot.
    ActivateSlot(usize),
    /// Complete the term from the highlighted result.
    Complete,
    /// Move the cursor down one row.
    CursorDown,
    /// Move the cursor up one row.
    CursorUp,
    /// Bring back the term cleared by the last reset.
    RecallTerm,
    /// Select the highlighted result.
    Submit,
    /// Defocus the host window.
    Dismiss,
}

/// How the panel disposed of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the host must suppress its default processing.
    Consumed,
    /// Acted on; default processing may still run.
    Handled,
    /// Untouched; the event propagates normally.
    Ignored,
}

/// Resolution of one key event against a state snapshot.
///
/// `prevent_default` is tracked separately from the command because some
/// keys suppress default processing without dispatching anything (Up with
/// nothing to do) and some dispatch without suppressing (Enter, Escape).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub command: Option<PanelCommand>,
    pub prevent_default: bool,
}

impl Dispatch {
    pub const IGNORED: Dispatch = Dispatch {
        command: None,
        prevent_default: false,
    };

    /// A command whose key must be swallowed by the host.
    pub fn consumed(command: PanelCommand) -> Self {
        Self {
            command: Some(command),
            prevent_default: true,
        }
    }

    /// A command that leaves default key processing alone.
    pub fn handled(command: PanelCommand) -> Self {
        Self {
            command: Some(command),
            prevent_default: false,
        }
    }

    /// Collapse to the outcome reported to the host.
    pub fn outcome(&self) -> KeyOutcome {
        match (self.prevent_default, self.command) {
            (true, _) => KeyOutcome::Consumed,
            (false, Some(_)) => KeyOutcome::Handled,
            (false, None) => KeyOutcome::Ignored,
        }
    }
}
