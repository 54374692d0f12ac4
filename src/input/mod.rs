//! Key input - event conversion and blocking reads.
//!
//! Bridges crossterm's event system with the form driver. Crossterm
//! events are converted to the crate's [`Key`] type; repeat and release
//! events, mouse events, and resizes are filtered out so the caller sees
//! a plain stream of key presses, one at a time.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to a [`Key`]
//! - `read_key` - Blocking read of the next key press
//! - `poll_key` - Non-blocking check with timeout
//! - [`Keymap`] - key-to-binding lookup table

mod keymap;

pub use keymap::{Action, Binding, Keymap};

use std::io;
use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    poll, read,
};

// =============================================================================
// KEY TYPE
// =============================================================================

/// A key press, reduced to what the form layer distinguishes.
///
/// Modifier-only information is folded in where the form cares
/// (Shift+Tab becomes [`Key::BackTab`]); otherwise modifiers are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    F(u8),
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to a [`Key`].
///
/// Returns None for repeat/release events and key codes the form layer
/// has no use for. The DEL character (0x7f) is folded into Backspace,
/// matching terminals that send it for the backspace key.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Char('\u{7f}') => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };

    // Some terminals report Shift+Tab as Tab with the SHIFT modifier
    // instead of BackTab.
    if key == Key::Tab && event.modifiers.contains(KeyModifiers::SHIFT) {
        return Some(Key::BackTab);
    }

    Some(key)
}

// =============================================================================
// EVENT READING
// =============================================================================

/// Read the next key press (blocking). Non-key events are skipped.
pub fn read_key() -> io::Result<Key> {
    loop {
        if let CrosstermEvent::Key(event) = read()? {
            if let Some(key) = convert_key_event(event) {
                return Ok(key);
            }
        }
    }
}

/// Poll for a key press with a timeout.
/// Returns None if no key press arrived within the timeout.
pub fn poll_key(timeout: Duration) -> io::Result<Option<Key>> {
    if poll(timeout)? {
        if let CrosstermEvent::Key(event) = read()? {
            return Ok(convert_key_event(event));
        }
    }
    Ok(None)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_char() {
        assert_eq!(convert_key_event(press(KeyCode::Char('a'))), Some(Key::Char('a')));
    }

    #[test]
    fn test_convert_navigation_keys() {
        let cases = [
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Tab, Key::Tab),
            (KeyCode::BackTab, Key::BackTab),
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Delete, Key::Delete),
            (KeyCode::Esc, Key::Escape),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
            (KeyCode::Home, Key::Home),
            (KeyCode::End, Key::End),
        ];
        for (code, expected) in cases {
            assert_eq!(convert_key_event(press(code)), Some(expected));
        }
    }

    #[test]
    fn test_convert_function_keys() {
        for n in 1..=12 {
            assert_eq!(convert_key_event(press(KeyCode::F(n))), Some(Key::F(n)));
        }
    }

    #[test]
    fn test_del_char_is_backspace() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('\u{7f}'))),
            Some(Key::Backspace)
        );
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        let event = CrosstermKeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), Some(Key::BackTab));
    }

    #[test]
    fn test_release_and_repeat_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = CrosstermKeyEvent {
                code: KeyCode::Char('a'),
                modifiers: KeyModifiers::empty(),
                kind,
                state: KeyEventState::NONE,
            };
            assert_eq!(convert_key_event(event), None);
        }
    }

    #[test]
    fn test_unhandled_codes_ignored() {
        assert_eq!(convert_key_event(press(KeyCode::PageUp)), None);
        assert_eq!(convert_key_event(press(KeyCode::Insert)), None);
        assert_eq!(convert_key_event(press(KeyCode::Null)), None);
    }
}
