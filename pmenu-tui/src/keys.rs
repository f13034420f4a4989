use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pmenu_core::MenuKey;

/// Blocking source of key presses for the menu loop.
pub trait KeySource {
    /// Wait for the next input. Events that are not key presses come back
    /// as [`MenuKey::Other`] so the caller redraws (e.g. after a resize).
    fn next_key(&mut self) -> Result<MenuKey>;
}

/// Reads keys from the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<MenuKey> {
        Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key_event(key),
            _ => MenuKey::Other,
        })
    }
}

pub fn map_key_event(key: KeyEvent) -> MenuKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => MenuKey::Interrupt,
        KeyCode::Char(_) if ctrl || alt => MenuKey::Other,
        KeyCode::Char(c) => MenuKey::Char(c),
        KeyCode::Enter => MenuKey::Confirm,
        KeyCode::Up => MenuKey::Up,
        KeyCode::Down => MenuKey::Down,
        KeyCode::Backspace => MenuKey::Backspace,
        KeyCode::Esc => MenuKey::Abort,
        _ => MenuKey::Other,
    }
}
