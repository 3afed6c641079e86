mod app;
mod commands;
mod config;
mod event_loop;
mod logging;
mod scenes;
mod state;
mod terminal;
mod ui;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing::info;

use crate::app::{App, Collaborators};
use crate::commands::create_command_channel;
use crate::config::{Cli, Config};
use crate::event_loop::EventLoop;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::from_cli(Cli::parse())?;
    let _log_guard = logging::init(&config.log_dir)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        link_mode = ?config.link_mode,
        opener = config.opener.program(),
        "Starting zapmsg"
    );

    let (command_tx, command_rx) = create_command_channel();
    let state = AppState::new(&config.contacts_text, &config.template_text, config.link_mode);
    let app = App::new(state, Collaborators::from_config(&config), command_tx);

    terminal::install_panic_hook();
    let mut tui = terminal::setup_terminal().wrap_err("Failed to set up terminal")?;
    let result = EventLoop::new(app, command_rx).run(&mut tui).await;
    terminal::restore_terminal().wrap_err("Failed to restore terminal")?;

    info!("zapmsg shutting down");
    result
}
