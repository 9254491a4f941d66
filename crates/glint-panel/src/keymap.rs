//! Key-event resolution.
//!
//! This module turns a raw [`KeyEvent`] plus the current state snapshot into
//! a [`Dispatch`]: which command to run and whether the host must swallow
//! the key.
//!
//! ## Resolution order
//!
//! Meta combinations are checked first (define, copy, numeric slots) and
//! fall through to the base table when they do not resolve, so meta+Tab
//! autocompletes and meta+Down moves the cursor just like their plain
//! counterparts. A numeric slot with no result resolves to nothing at all.

use glint_core::SearchSnapshot;

use crate::command::{Dispatch, PanelCommand};
use crate::keys::{KeyCode, KeyEvent};

// =============================================================================
// Numeric Hotkey Slots
// =============================================================================

/// Map a digit key to its hotkey slot.
///
/// Slots are derived from the key's legacy keycode (the ASCII value of the
/// digit): `abs(49 - keycode)`, accepted for keycodes 49..=57 only. That
/// puts "1" (49) at slot 0 and "2" (50) at slot 1. "0" (48) would land on
/// slot 1 as well, but its keycode is outside the accepted range, so it
/// never resolves.
pub fn hotkey_slot(ch: char) -> Option<usize> {
    let keycode = ch as i32;
    if (49..=57).contains(&keycode) {
        Some((49 - keycode).unsigned_abs() as usize)
    } else {
        None
    }
}

/// The 1-based hotkey hint shown on a row, if the row has one.
///
/// Only the first nine rows carry a hint.
pub fn hotkey_hint(index: usize) -> Option<u8> {
    if index <= 8 {
        Some(index as u8 + 1)
    } else {
        None
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a key event against the current snapshot.
pub fn resolve(event: &KeyEvent, snapshot: &SearchSnapshot) -> Dispatch {
    if event.modifiers.meta {
        if let KeyCode::Char(ch) = event.code {
            if ch.eq_ignore_ascii_case(&'d') {
                return Dispatch::consumed(PanelCommand::DefineTerm);
            }
            if ch.eq_ignore_ascii_case(&'c') {
                // Swallowed even when the highlighted result carries no
                // payload; execution turns into a no-op in that case.
                return Dispatch::consumed(PanelCommand::CopyHighlighted);
            }
            if let Some(slot) = hotkey_slot(ch) {
                if snapshot.results.get(slot).is_some() {
                    return Dispatch::handled(PanelCommand::ActivateSlot(slot));
                }
                // Empty slot: fall through. Digits have no base-table entry,
                // so the event ends up ignored.
            }
        }
    }

    match event.code {
        KeyCode::Tab => Dispatch::consumed(PanelCommand::Complete),
        KeyCode::Down => Dispatch::consumed(PanelCommand::CursorDown),
        KeyCode::Up => {
            // Swallowed unconditionally; what it dispatches depends on
            // whether there is a list to move in or a term to recall.
            if !snapshot.results.is_empty() {
                Dispatch::consumed(PanelCommand::CursorUp)
            } else if !snapshot.prev_term.is_empty() {
                Dispatch::consumed(PanelCommand::RecallTerm)
            } else {
                Dispatch {
                    command: None,
                    prevent_default: true,
                }
            }
        }
        KeyCode::Enter => Dispatch::handled(PanelCommand::Submit),
        KeyCode::Escape => Dispatch::handled(PanelCommand::Dismiss),
        _ => Dispatch::IGNORED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::KeyOutcome;
    use glint_core::{ResultEntry, SelectHandler};

    fn snapshot_with(count: usize) -> SearchSnapshot {
        SearchSnapshot {
            results: (0..count)
                .map(|i| ResultEntry::new(format!("r{i}"), SelectHandler::noop()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_hotkey_slot_mapping() {
        assert_eq!(hotkey_slot('1'), Some(0));
        assert_eq!(hotkey_slot('2'), Some(1));
        assert_eq!(hotkey_slot('9'), Some(8));
        // '0' sits below the accepted keycode range.
        assert_eq!(hotkey_slot('0'), None);
        assert_eq!(hotkey_slot('a'), None);
    }

    #[test]
    fn test_hotkey_hint_covers_first_nine_rows() {
        assert_eq!(hotkey_hint(0), Some(1));
        assert_eq!(hotkey_hint(8), Some(9));
        assert_eq!(hotkey_hint(9), None);
    }

    #[test]
    fn test_meta_d_defines() {
        let dispatch = resolve(&KeyEvent::meta(KeyCode::Char('d')), &snapshot_with(0));
        assert_eq!(dispatch, Dispatch::consumed(PanelCommand::DefineTerm));
    }

    #[test]
    fn test_meta_c_is_consumed_even_with_no_results() {
        let dispatch = resolve(&KeyEvent::meta(KeyCode::Char('c')), &snapshot_with(0));
        assert_eq!(dispatch, Dispatch::consumed(PanelCommand::CopyHighlighted));
    }

    #[test]
    fn test_meta_digit_activates_occupied_slot() {
        // "3" has keycode 51, abs(49 - 51) = slot 2.
        let dispatch = resolve(&KeyEvent::meta(KeyCode::Char('3')), &snapshot_with(3));
        assert_eq!(dispatch, Dispatch::handled(PanelCommand::ActivateSlot(2)));
        assert_eq!(dispatch.outcome(), KeyOutcome::Handled);
    }

    #[test]
    fn test_meta_digit_on_empty_slot_is_ignored() {
        let dispatch = resolve(&KeyEvent::meta(KeyCode::Char('5')), &snapshot_with(2));
        assert_eq!(dispatch, Dispatch::IGNORED);
    }

    #[test]
    fn test_plain_digit_is_ignored() {
        let dispatch = resolve(&KeyEvent::plain(KeyCode::Char('3')), &snapshot_with(5));
        assert_eq!(dispatch, Dispatch::IGNORED);
    }

    #[test]
    fn test_tab_completes_with_or_without_meta() {
        let snapshot = snapshot_with(1);
        assert_eq!(
            resolve(&KeyEvent::plain(KeyCode::Tab), &snapshot),
            Dispatch::consumed(PanelCommand::Complete)
        );
        assert_eq!(
            resolve(&KeyEvent::meta(KeyCode::Tab), &snapshot),
            Dispatch::consumed(PanelCommand::Complete)
        );
    }

    #[test]
    fn test_meta_down_falls_through_to_cursor_move() {
        let dispatch = resolve(&KeyEvent::meta(KeyCode::Down), &snapshot_with(2));
        assert_eq!(dispatch, Dispatch::consumed(PanelCommand::CursorDown));
    }

    #[test]
    fn test_up_moves_cursor_when_results_exist() {
        let dispatch = resolve(&KeyEvent::plain(KeyCode::Up), &snapshot_with(2));
        assert_eq!(dispatch, Dispatch::consumed(PanelCommand::CursorUp));
    }

    #[test]
    fn test_up_recalls_prev_term_when_list_is_empty() {
        let snapshot = SearchSnapshot {
            prev_term: "foo".to_string(),
            ..Default::default()
        };
        let dispatch = resolve(&KeyEvent::plain(KeyCode::Up), &snapshot);
        assert_eq!(dispatch, Dispatch::consumed(PanelCommand::RecallTerm));
    }

    #[test]
    fn test_up_with_nothing_to_do_is_still_consumed() {
        let dispatch = resolve(&KeyEvent::plain(KeyCode::Up), &snapshot_with(0));
        assert_eq!(dispatch.command, None);
        assert_eq!(dispatch.outcome(), KeyOutcome::Consumed);
    }

    #[test]
    fn test_enter_and_escape_do_not_swallow_the_key() {
        let snapshot = snapshot_with(1);
        let enter = resolve(&KeyEvent::plain(KeyCode::Enter), &snapshot);
        assert_eq!(enter, Dispatch::handled(PanelCommand::Submit));
        let escape = resolve(&KeyEvent::plain(KeyCode::Escape), &snapshot);
        assert_eq!(escape, Dispatch::handled(PanelCommand::Dismiss));
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let dispatch = resolve(&KeyEvent::plain(KeyCode::Char('x')), &snapshot_with(3));
        assert_eq!(dispatch, Dispatch::IGNORED);
    }
}
