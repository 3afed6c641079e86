use std::io;

use crossterm::event::{DisableFocusChange, EnableFocusChange, Event};
use crossterm::execute;
use zapmsg_core::{ForegroundSignal, Visibility};

/// Terminal focus reporting (`CSI ? 1004 h`), the terminal's equivalent of
/// page visibility. Terminals without support simply never report focus.
#[derive(Debug, Default)]
pub struct FocusReporting {
    enabled: bool,
}

impl FocusReporting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl ForegroundSignal for FocusReporting {
    fn enable(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnableFocusChange)?;
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.enabled = false;
        execute!(io::stdout(), DisableFocusChange)
    }
}

impl Drop for FocusReporting {
    fn drop(&mut self) {
        let _ = self.disable();
    }
}

pub fn visibility_from_event(event: &Event) -> Option<Visibility> {
    match event {
        Event::FocusGained => Some(Visibility::Foreground),
        Event::FocusLost => Some(Visibility::Background),
        _ => None,
    }
}
