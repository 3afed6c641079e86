use zapmsg_ai::Tone;
use zapmsg_core::{Contact, LinkMode, SendSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Import,
    Compose,
    Send,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Import, Scene::Compose, Scene::Send];

    pub fn label(self) -> &'static str {
        match self {
            Scene::Import => "Contatos",
            Scene::Compose => "Mensagem",
            Scene::Send => "Enviar",
        }
    }
}

/// Append-only text editor: typing, paste, newline and backspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut buffer = Self::default();
        buffer.push_str(&text.into());
        buffer
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Inserts pasted text, normalizing line endings.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(&s.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text.clear();
        self.push_str(&text.into());
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[derive(Debug, Default)]
pub struct ImportState {
    pub input: TextBuffer,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct AiPanel {
    pub open: bool,
    pub topic: TextBuffer,
    pub tone: Tone,
    pub include_emoji: bool,
    pub generating: bool,
}

#[derive(Debug, Default)]
pub struct ComposeState {
    pub message: TextBuffer,
    pub ai: AiPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Default)]
pub struct AppState {
    pub scene: Scene,
    pub import: ImportState,
    pub compose: ComposeState,
    /// Imported contacts. While sending, the session works on its own copy.
    pub contacts: Vec<Contact>,
    pub session: Option<SendSession>,
    pub link_mode: LinkMode,
    pub cursor: usize,
    pub confirm_reset: bool,
    pub auto_confirm: bool,
    pub status: Option<StatusLine>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(contacts_text: &str, template_text: &str, link_mode: LinkMode) -> Self {
        let mut state = Self {
            link_mode,
            ..Default::default()
        };
        state.import.input = TextBuffer::from_text(contacts_text);
        state.compose.message = TextBuffer::from_text(template_text);
        state.compose.ai.include_emoji = true;
        state
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Error, text);
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind,
            text: text.into(),
        });
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.session.as_ref().map_or(0, |s| s.contacts().len());
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Drops everything from the current campaign and goes back to importing.
    pub fn clear_campaign(&mut self) {
        self.session = None;
        self.contacts.clear();
        self.import = ImportState::default();
        self.compose.message.clear();
        self.compose.ai.open = false;
        self.compose.ai.topic.clear();
        self.cursor = 0;
        self.confirm_reset = false;
        self.scene = Scene::Import;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut buffer = TextBuffer::default();
        buffer.push_str("Ana, 5511999991111\r\nBia, 5511999992222\r");
        assert_eq!(buffer.as_str(), "Ana, 5511999991111\nBia, 5511999992222\n");
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut buffer = TextBuffer::from_text("Olá");
        buffer.backspace();
        assert_eq!(buffer.as_str(), "Ol");
    }

    #[test]
    fn test_clear_campaign_returns_to_import() {
        let mut state = AppState::new("Ana, 5511999991111", "Oi {nome}", LinkMode::Web);
        state.scene = Scene::Send;
        state.confirm_reset = true;

        state.clear_campaign();

        assert_eq!(state.scene, Scene::Import);
        assert!(state.import.input.is_blank());
        assert!(state.compose.message.is_blank());
        assert!(!state.confirm_reset);
        assert_eq!(state.link_mode, LinkMode::Web);
    }
}
