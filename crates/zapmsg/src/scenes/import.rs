use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::commands::Command;
use crate::state::ImportState;

pub fn handle_key(import: &mut ImportState, key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('s') if ctrl => return Some(Command::ProcessContacts),
        KeyCode::Char('e') if ctrl => return Some(Command::LoadExample),
        KeyCode::Char('l') if ctrl => import.input.clear(),
        KeyCode::Char(c) if !ctrl => import.input.push(c),
        KeyCode::Enter => import.input.push('\n'),
        KeyCode::Backspace => import.input.backspace(),
        _ => {}
    }

    None
}
