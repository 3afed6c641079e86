use std::sync::Arc;

use crossterm::event::{Event, KeyEventKind};
use tracing::{debug, info, warn};
use zapmsg_ai::{GeminiClient, fallback_message};
use zapmsg_core::{
    Beeper, Campaign, Clock, ContactId, EXAMPLE_CONTACTS, ForegroundSignal, LinkOpener,
    Resolution, SendSession, SilentBeeper, SystemClock, Visibility, VisibilityWatcher,
    parse_contacts,
};
use zapmsg_host::{FocusReporting, TerminalBell, visibility_from_event};

use crate::commands::{Command, CommandSender};
use crate::config::Config;
use crate::scenes;
use crate::state::{AppState, Scene};

/// Host capabilities the application runs against.
pub struct Collaborators {
    pub clock: Arc<dyn Clock>,
    pub beeper: Arc<dyn Beeper + Sync>,
    pub opener: Arc<dyn LinkOpener + Sync>,
    pub signal: Box<dyn ForegroundSignal>,
    pub ai: GeminiClient,
}

impl Collaborators {
    pub fn from_config(config: &Config) -> Self {
        let beeper: Arc<dyn Beeper + Sync> = if config.bell {
            Arc::new(TerminalBell)
        } else {
            Arc::new(SilentBeeper)
        };

        Self {
            clock: Arc::new(SystemClock),
            beeper,
            opener: Arc::new(config.opener.clone()),
            signal: Box::new(FocusReporting::new()),
            ai: GeminiClient::from_env(),
        }
    }
}

pub struct App {
    pub state: AppState,
    watcher: VisibilityWatcher,
    collaborators: Collaborators,
    command_tx: CommandSender,
}

impl App {
    pub fn new(state: AppState, collaborators: Collaborators, command_tx: CommandSender) -> Self {
        if !collaborators.ai.has_api_key() {
            warn!("No Gemini API key configured, AI generation will return a fallback message");
        }

        Self {
            state,
            watcher: VisibilityWatcher::new(),
            collaborators,
            command_tx,
        }
    }

    pub fn on_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = scenes::handle_key(&mut self.state, key) {
                    self.update(command);
                }
            }
            Event::Paste(text) => scenes::handle_paste(&mut self.state, &text),
            other => {
                if let Some(visibility) = visibility_from_event(&other) {
                    self.on_visibility(visibility);
                }
            }
        }
    }

    pub fn on_visibility(&mut self, visibility: Visibility) {
        if !self.watcher.observe(visibility) {
            return;
        }

        let confirmed = self.state.session.as_mut().and_then(|session| {
            let id = session.confirm_return()?;
            session.contact(id).map(|c| c.name().to_string())
        });

        if let Some(name) = confirmed {
            self.state.success(format!("✅ {} marcado como enviado", name));
        }
    }

    pub fn update(&mut self, command: Command) {
        debug!(?command, "Handling command");

        match command {
            Command::ProcessContacts => self.process_contacts(),
            Command::LoadExample => {
                self.state.import.input.set(EXAMPLE_CONTACTS);
                self.state.import.error = None;
            }
            Command::ConfirmTemplate => self.start_sending(),
            Command::GenerateTemplate => self.generate_template(),
            Command::TemplateGenerated(result) => self.template_generated(result),
            Command::BackToImport => self.state.scene = Scene::Import,
            Command::BackToCompose => self.leave_dashboard(),
            Command::SendNext => self.send_next(),
            Command::ResolveNext(resolution) => {
                let next = self
                    .state
                    .session
                    .as_ref()
                    .and_then(|s| s.next_pending())
                    .map(|c| c.id());
                if let Some(id) = next {
                    self.resolve(id, resolution);
                }
            }
            Command::ResolveSelected(resolution) => {
                let selected = self
                    .state
                    .session
                    .as_ref()
                    .and_then(|s| s.contacts().get(self.state.cursor))
                    .map(|c| (c.id(), c.is_pending()));
                match selected {
                    Some((id, true)) => self.resolve(id, resolution),
                    Some((_, false)) => self.state.info("Este contato já foi finalizado."),
                    None => {}
                }
            }
            Command::ToggleLinkMode => {
                self.state.link_mode = self.state.link_mode.toggled();
                if let Some(session) = self.state.session.as_mut() {
                    session.set_mode(self.state.link_mode);
                }
                let label = self.state.link_mode.label();
                self.state.info(format!("Links abertos no {}", label));
            }
            Command::RequestReset => self.state.confirm_reset = true,
            Command::CancelReset => self.state.confirm_reset = false,
            Command::ConfirmReset => self.reset(),
            Command::Quit => {
                self.shutdown();
                self.state.should_quit = true;
            }
        }
    }

    /// Releases the visibility watcher. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.watcher.unregister(self.collaborators.signal.as_mut());
    }

    fn process_contacts(&mut self) {
        match parse_contacts(self.state.import.input.as_str()) {
            Ok(contacts) => {
                info!(count = contacts.len(), "Contacts imported");
                self.state.import.error = None;
                self.state.success(format!("📇 {} contatos importados", contacts.len()));
                self.state.contacts = contacts;
                self.state.scene = Scene::Compose;
            }
            Err(e) => {
                warn!(error = %e, "Contact import rejected");
                self.state.import.error = Some(e.to_string());
            }
        }
    }

    fn start_sending(&mut self) {
        let campaign = match Campaign::new(
            self.state.contacts.clone(),
            self.state.compose.message.as_str(),
        ) {
            Ok(campaign) => campaign,
            Err(e) => {
                self.state.error(e.to_string());
                return;
            }
        };

        let session = SendSession::new(
            campaign,
            self.collaborators.clock.clone(),
            Box::new(self.collaborators.beeper.clone()),
            Box::new(self.collaborators.opener.clone()),
        )
        .with_mode(self.state.link_mode);

        info!(total = session.contacts().len(), "Entering send dashboard");

        self.state.cursor = session
            .contacts()
            .iter()
            .position(|c| c.is_pending())
            .unwrap_or(0);
        self.state.session = Some(session);
        self.state.scene = Scene::Send;

        self.state.auto_confirm = self.watcher.register(self.collaborators.signal.as_mut());
        if self.state.auto_confirm {
            self.state.info("Dica: ao voltar do WhatsApp, o contato será marcado como enviado automaticamente.");
        } else {
            self.state.error("Detecção automática indisponível: use [m] para marcar como enviado.");
        }
    }

    fn leave_dashboard(&mut self) {
        self.watcher.unregister(self.collaborators.signal.as_mut());

        if let Some(session) = self.state.session.take() {
            self.state.link_mode = session.mode();
            self.state.contacts = session.into_campaign().contacts;
        }
        self.state.scene = Scene::Compose;
    }

    fn send_next(&mut self) {
        let Some(session) = self.state.session.as_mut() else {
            return;
        };

        let Some((id, name)) = session.next_pending().map(|c| (c.id(), c.name().to_string())) else {
            self.state.info("Todos os contatos foram processados.");
            return;
        };

        let outcome = session.initiate_send(id);
        if let Some(position) = session.contacts().iter().position(|c| c.id() == id) {
            self.state.cursor = position;
        }

        match outcome {
            Ok(_) => self.state.info(format!("📤 Abrindo conversa com {}...", name)),
            Err(e) => self.state.error(e.to_string()),
        }
    }

    fn resolve(&mut self, id: ContactId, resolution: Resolution) {
        let Some(session) = self.state.session.as_mut() else {
            return;
        };

        let outcome = session
            .set_status_manually(id, resolution)
            .map(|()| session.contact(id).map(|c| c.name().to_string()).unwrap_or_default());

        match outcome {
            Ok(name) => {
                let label = match resolution {
                    Resolution::Sent => "enviado",
                    Resolution::Skipped => "pulado",
                };
                self.state.success(format!("{} marcado como {}", name, label));
            }
            Err(e) => self.state.error(e.to_string()),
        }
    }

    fn generate_template(&mut self) {
        let ai = &mut self.state.compose.ai;
        if ai.generating || ai.topic.is_blank() {
            return;
        }

        ai.generating = true;
        let topic = ai.topic.as_str().trim().to_string();
        let tone = ai.tone;
        let include_emoji = ai.include_emoji;
        let client = self.collaborators.ai.clone();
        let tx = self.command_tx.clone();

        tokio::spawn(async move {
            let result = client
                .try_generate(&topic, tone, include_emoji)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Failed to generate message");
                    fallback_message(&e).to_string()
                });
            let _ = tx.send(Command::TemplateGenerated(result)).await;
        });

        self.state.info("✨ Gerando mensagem...");
    }

    fn template_generated(&mut self, result: Result<String, String>) {
        self.state.compose.ai.generating = false;

        match result {
            Ok(text) => {
                self.state.compose.message.set(text);
                self.state.compose.ai.open = false;
                self.state.success("Mensagem gerada. Revise antes de enviar.");
            }
            // The template being edited is left untouched
            Err(fallback) => self.state.error(fallback),
        }
    }

    fn reset(&mut self) {
        self.watcher.unregister(self.collaborators.signal.as_mut());

        if let Some(session) = self.state.session.as_mut() {
            session.reset();
        }
        self.state.clear_campaign();
        self.state.info("Nova campanha iniciada.");
    }
}
