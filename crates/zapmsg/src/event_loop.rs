use color_eyre::eyre::{Context, Result};
use crossterm::event::EventStream;
use futures::StreamExt;
use tracing::info;

use crate::app::App;
use crate::commands::CommandReceiver;
use crate::terminal::Tui;
use crate::ui;

/// Serializes terminal input, focus changes and background results into one
/// stream of updates on [`App`].
pub struct EventLoop {
    app: App,
    command_rx: CommandReceiver,
}

impl EventLoop {
    pub fn new(app: App, command_rx: CommandReceiver) -> Self {
        Self { app, command_rx }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        info!("Starting event loop");
        let mut events = EventStream::new();

        loop {
            terminal
                .draw(|frame| ui::draw(frame, &self.app.state))
                .wrap_err("Failed to draw frame")?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.app.on_terminal_event(event),
                    Some(Err(e)) => {
                        self.app.shutdown();
                        return Err(e).wrap_err("Failed to read terminal event");
                    }
                    None => break,
                },
                Some(command) = self.command_rx.recv() => self.app.update(command),
            }

            if self.app.state.should_quit {
                break;
            }
        }

        self.app.shutdown();
        info!("Event loop finished");
        Ok(())
    }
}
