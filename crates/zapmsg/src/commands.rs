use tokio::sync::mpsc;
use zapmsg_core::Resolution;

#[derive(Debug, Clone)]
pub enum Command {
    ProcessContacts,
    LoadExample,
    ConfirmTemplate,
    GenerateTemplate,
    TemplateGenerated(Result<String, String>),
    BackToImport,
    BackToCompose,
    SendNext,
    ResolveNext(Resolution),
    ResolveSelected(Resolution),
    ToggleLinkMode,
    RequestReset,
    ConfirmReset,
    CancelReset,
    Quit,
}

pub type CommandSender = mpsc::Sender<Command>;
pub type CommandReceiver = mpsc::Receiver<Command>;

pub fn create_command_channel() -> (CommandSender, CommandReceiver) {
    mpsc::channel(256)
}
