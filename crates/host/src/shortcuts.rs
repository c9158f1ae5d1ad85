//! Keyboard shortcut table.
//!
//! Resolution is pure: a key event maps to at most one action, and the
//! controller decides whether the event is eligible at all (focus
//! inside the widget, or the widget still listening). More specific
//! chords are checked before their prefixes, so Ctrl+Alt+Shift+'='
//! resolves to the column insert rather than the row insert.

use crate::keyboard::{Key, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    SelectAll,
    GroupRows,
    UngroupRows,
    CollapseGroup,
    ExpandGroup,
    InsertRowBelow,
    RemoveRows,
    InsertColAfter,
    RemoveCols,
}

/// Map a key event to its action, if any.
pub fn resolve(event: &KeyEvent) -> Option<ShortcutAction> {
    let primary = event.primary_mod();

    match event.key {
        Key::Char(c) => {
            let c = c.to_ascii_lowercase();
            match c {
                'z' if primary && !event.shift => Some(ShortcutAction::Undo),
                'z' if primary && event.shift => Some(ShortcutAction::Redo),
                'y' if primary => Some(ShortcutAction::Redo),
                'a' if primary => Some(ShortcutAction::SelectAll),
                '=' | '+' if primary && event.alt && event.shift => {
                    Some(ShortcutAction::InsertColAfter)
                }
                '=' if primary && event.alt => Some(ShortcutAction::InsertRowBelow),
                '-' | '_' if primary && event.alt && event.shift => {
                    Some(ShortcutAction::RemoveCols)
                }
                '-' if primary && event.alt => Some(ShortcutAction::RemoveRows),
                _ => None,
            }
        }
        Key::ArrowRight if event.alt && event.shift => Some(ShortcutAction::GroupRows),
        Key::ArrowLeft if event.alt && event.shift => Some(ShortcutAction::UngroupRows),
        Key::ArrowDown if event.alt && event.shift => Some(ShortcutAction::CollapseGroup),
        Key::ArrowUp if event.alt && event.shift => Some(ShortcutAction::ExpandGroup),
        _ => None,
    }
}
