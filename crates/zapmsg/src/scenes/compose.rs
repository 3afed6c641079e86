use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zapmsg_core::{GREETING_PLACEHOLDER, NAME_PLACEHOLDER};

use crate::commands::Command;
use crate::state::ComposeState;

pub fn handle_key(compose: &mut ComposeState, key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('a') {
        compose.ai.open = !compose.ai.open;
        return None;
    }

    if compose.ai.open {
        let ai = &mut compose.ai;
        match key.code {
            KeyCode::Enter => return Some(Command::GenerateTemplate),
            KeyCode::Esc => ai.open = false,
            KeyCode::Tab => ai.tone = ai.tone.next(),
            KeyCode::Char('e') if ctrl => ai.include_emoji = !ai.include_emoji,
            KeyCode::Char(c) if !ctrl => ai.topic.push(c),
            KeyCode::Backspace => ai.topic.backspace(),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('s') if ctrl => return Some(Command::ConfirmTemplate),
        KeyCode::Esc => return Some(Command::BackToImport),
        KeyCode::Char('n') if ctrl => insert_variable(compose, NAME_PLACEHOLDER),
        KeyCode::Char('g') if ctrl => insert_variable(compose, GREETING_PLACEHOLDER),
        KeyCode::Char(c) if !ctrl => compose.message.push(c),
        KeyCode::Enter => compose.message.push('\n'),
        KeyCode::Backspace => compose.message.backspace(),
        _ => {}
    }

    None
}

fn insert_variable(compose: &mut ComposeState, variable: &str) {
    compose.message.push(' ');
    compose.message.push_str(variable);
}
