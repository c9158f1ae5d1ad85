//! Key events and modifier tracking.
//!
//! The host forwards window-level key events here in arrival order.
//! `ModifierTracker` mirrors Shift from that stream so hooks fired by
//! the widget (autofill, sort clicks) can ask "is Shift held right
//! now" without receiving the event themselves. A window blur resets
//! the tracker; a keyup swallowed by another surface would otherwise
//! leave it stuck.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Shift,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Whether the event target sits inside the widget's DOM subtree.
    pub in_widget: bool,
}

impl KeyEvent {
    /// Platform primary modifier: Ctrl, or Cmd on macOS.
    pub fn primary_mod(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Tracks whether Shift is held, from the window key stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierTracker {
    shift_held: bool,
}

impl ModifierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, event: &KeyEvent) {
        if event.key == Key::Shift || event.shift {
            self.shift_held = true;
        }
    }

    pub fn key_up(&mut self, event: &KeyEvent) {
        // Releasing any key with Shift no longer reported also clears
        // the flag; Shift's own keyup arrives with shift still set on
        // some platforms.
        if event.key == Key::Shift || !event.shift {
            self.shift_held = false;
        }
    }

    pub fn window_blur(&mut self) {
        self.shift_held = false;
    }

    pub fn is_shift_held(&self) -> bool {
        self.shift_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(key: Key, shift: bool) -> KeyEvent {
        KeyEvent {
            key,
            ctrl: false,
            alt: false,
            shift,
            meta: false,
            in_widget: false,
        }
    }

    #[test]
    fn test_shift_key_down_sets_flag() {
        let mut tracker = ModifierTracker::new();
        tracker.key_down(&event(Key::Shift, true));
        assert!(tracker.is_shift_held());
    }

    #[test]
    fn test_shifted_character_sets_flag() {
        let mut tracker = ModifierTracker::new();
        tracker.key_down(&event(Key::Char('A'), true));
        assert!(tracker.is_shift_held());
    }

    #[test]
    fn test_shift_key_up_clears_flag() {
        let mut tracker = ModifierTracker::new();
        tracker.key_down(&event(Key::Shift, true));
        tracker.key_up(&event(Key::Shift, true));
        assert!(!tracker.is_shift_held());
    }

    #[test]
    fn test_unshifted_key_up_clears_flag() {
        let mut tracker = ModifierTracker::new();
        tracker.key_down(&event(Key::Shift, true));
        tracker.key_up(&event(Key::Char('a'), false));
        assert!(!tracker.is_shift_held());
    }

    #[test]
    fn test_key_up_with_shift_still_held_keeps_flag() {
        let mut tracker = ModifierTracker::new();
        tracker.key_down(&event(Key::Shift, true));
        tracker.key_up(&event(Key::Char('A'), true));
        assert!(tracker.is_shift_held());
    }

    #[test]
    fn test_window_blur_resets() {
        let mut tracker = ModifierTracker::new();
        tracker.key_down(&event(Key::Shift, true));
        tracker.window_blur();
        assert!(!tracker.is_shift_held());
    }

    #[test]
    fn test_primary_mod_accepts_ctrl_or_meta() {
        let mut e = event(Key::Char('z'), false);
        assert!(!e.primary_mod());
        e.ctrl = true;
        assert!(e.primary_mod());
        e.ctrl = false;
        e.meta = true;
        assert!(e.primary_mod());
    }
}
