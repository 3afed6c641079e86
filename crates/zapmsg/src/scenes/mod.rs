mod compose;
mod import;
mod send;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::commands::Command;
use crate::state::{AppState, Scene};

/// Maps a key press to edits on the current scene or to a command for the event loop.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return Some(Command::Quit);
    }

    if state.confirm_reset {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('y') | KeyCode::Enter => Some(Command::ConfirmReset),
            KeyCode::Char('n') | KeyCode::Esc => Some(Command::CancelReset),
            _ => None,
        };
    }

    match state.scene {
        Scene::Import => import::handle_key(&mut state.import, key),
        Scene::Compose => compose::handle_key(&mut state.compose, key),
        Scene::Send => send::handle_key(state, key),
    }
}

pub fn handle_paste(state: &mut AppState, text: &str) {
    match state.scene {
        Scene::Import => state.import.input.push_str(text),
        Scene::Compose if state.compose.ai.open => {
            state.compose.ai.topic.push_str(&text.replace('\n', " "))
        }
        Scene::Compose => state.compose.message.push_str(text),
        Scene::Send => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zapmsg_core::{LinkMode, Resolution};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_and_submitting_contacts() {
        let mut state = AppState::default();
        for c in "Ana, 5511999991111".chars() {
            assert!(handle_key(&mut state, press(KeyCode::Char(c))).is_none());
        }
        assert_eq!(state.import.input.as_str(), "Ana, 5511999991111");
        assert!(matches!(
            handle_key(&mut state, ctrl('s')),
            Some(Command::ProcessContacts)
        ));
    }

    #[test]
    fn test_placeholder_shortcuts() {
        let mut state = AppState::new("", "Olá", LinkMode::Direct);
        state.scene = Scene::Compose;

        handle_key(&mut state, ctrl('n'));
        handle_key(&mut state, ctrl('g'));
        assert_eq!(state.compose.message.as_str(), "Olá {nome} {saudacao}");
    }

    #[test]
    fn test_ai_panel_captures_typing() {
        let mut state = AppState::new("", "Olá", LinkMode::Direct);
        state.scene = Scene::Compose;

        handle_key(&mut state, ctrl('a'));
        assert!(state.compose.ai.open);
        handle_key(&mut state, press(KeyCode::Char('P')));
        handle_key(&mut state, press(KeyCode::Tab));

        assert_eq!(state.compose.ai.topic.as_str(), "P");
        assert_eq!(state.compose.message.as_str(), "Olá");
        assert_eq!(state.compose.ai.tone, zapmsg_ai::Tone::Professional);
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Enter)),
            Some(Command::GenerateTemplate)
        ));
    }

    #[test]
    fn test_send_keys() {
        let mut state = AppState::default();
        state.scene = Scene::Send;

        assert!(matches!(handle_key(&mut state, press(KeyCode::Enter)), Some(Command::SendNext)));
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Char('s'))),
            Some(Command::ResolveNext(Resolution::Skipped))
        ));
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Char('p'))),
            Some(Command::ResolveSelected(Resolution::Skipped))
        ));
    }

    #[test]
    fn test_reset_dialog_takes_over_keys() {
        let mut state = AppState::default();
        state.scene = Scene::Send;
        state.confirm_reset = true;

        assert!(handle_key(&mut state, press(KeyCode::Enter)).is_some_and(|c| matches!(c, Command::ConfirmReset)));
        assert!(matches!(handle_key(&mut state, press(KeyCode::Esc)), Some(Command::CancelReset)));
        assert!(handle_key(&mut state, press(KeyCode::Char('w'))).is_none());
    }

    #[test]
    fn test_paste_goes_to_active_buffer() {
        let mut state = AppState::default();
        handle_paste(&mut state, "Ana, 5511999991111\nBia, 5511999992222");
        assert_eq!(state.import.input.as_str().lines().count(), 2);

        state.scene = Scene::Compose;
        state.compose.ai.open = true;
        handle_paste(&mut state, "pizza\n2x1");
        assert_eq!(state.compose.ai.topic.as_str(), "pizza 2x1");
    }
}
