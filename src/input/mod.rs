//! Input decoding: raw crossterm key events to symbolic keys.
//!
//! The core only ever sees the fixed symbolic key set; everything else is
//! dropped here. Ctrl+C bypasses the game entirely and terminates the host.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Key;

/// Decode a crossterm key code into the symbolic key set.
///
/// Unrecognized keys map to `None` and are silently ignored upstream.
pub fn decode(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Enter => Some(Key::Return),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::A),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::D),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Q),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Hard process quit, independent of game phase.
pub fn should_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_symbolic_keys() {
        assert_eq!(decode(KeyCode::Up), Some(Key::Up));
        assert_eq!(decode(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(decode(KeyCode::Enter), Some(Key::Return));
        assert_eq!(decode(KeyCode::Char('W')), Some(Key::W));
        assert_eq!(decode(KeyCode::Esc), Some(Key::Escape));
    }

    #[test]
    fn test_unrecognized_keys_are_dropped() {
        assert_eq!(decode(KeyCode::Char('x')), None);
        assert_eq!(decode(KeyCode::Tab), None);
        assert_eq!(decode(KeyCode::F(1)), None);
    }
}
