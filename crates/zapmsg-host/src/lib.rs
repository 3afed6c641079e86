mod bell;
mod error;
mod focus;
mod opener;
mod process;

pub use bell::TerminalBell;
pub use error::HostError;
pub use focus::{FocusReporting, visibility_from_event};
pub use opener::SystemOpener;
