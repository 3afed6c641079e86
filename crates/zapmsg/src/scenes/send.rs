use crossterm::event::{KeyCode, KeyEvent};
use zapmsg_core::Resolution;

use crate::commands::Command;
use crate::state::AppState;

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_cursor(-1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_cursor(1);
            None
        }
        KeyCode::Enter => Some(Command::SendNext),
        KeyCode::Char('s') => Some(Command::ResolveNext(Resolution::Skipped)),
        KeyCode::Char('m') => Some(Command::ResolveNext(Resolution::Sent)),
        KeyCode::Char('e') => Some(Command::ResolveSelected(Resolution::Sent)),
        KeyCode::Char('p') => Some(Command::ResolveSelected(Resolution::Skipped)),
        KeyCode::Char('w') => Some(Command::ToggleLinkMode),
        KeyCode::Char('r') | KeyCode::Char('n') => Some(Command::RequestReset),
        KeyCode::Esc | KeyCode::Char('b') => Some(Command::BackToCompose),
        _ => None,
    }
}
