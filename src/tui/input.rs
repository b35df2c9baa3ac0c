//! Translate terminal key presses into DOM-style key events

use crate::hotkey::{EventTarget, KeyEvent};
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

/// Build the event the hotkey dispatcher sees for a terminal key press
pub fn to_key_event(key: &crossterm::event::KeyEvent, target: EventTarget) -> KeyEvent {
    let mut event = KeyEvent::new(key_code(key.code)).with_target(target);
    event.ctrl_key = key.modifiers.contains(KeyModifiers::CONTROL);
    event.meta_key = key
        .modifiers
        .intersects(KeyModifiers::SUPER | KeyModifiers::META);
    // Some terminals report Shift only through the uppercase character
    event.shift_key = key.modifiers.contains(KeyModifiers::SHIFT)
        || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase());
    event.alt_key = key.modifiers.contains(KeyModifiers::ALT);
    event.repeat = key.kind == KeyEventKind::Repeat;
    event
}

/// Physical key code, independent of Shift
fn key_code(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => format!("Key{}", c.to_ascii_uppercase()),
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Digit{}", c),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "Unidentified".to_string(),
    }
}
