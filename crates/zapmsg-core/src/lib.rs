mod campaign;
mod clock;
mod contact;
mod cue;
mod error;
mod import;
mod link;
mod render;
mod session;
mod stats;
mod visibility;

pub use campaign::*;
pub use clock::*;
pub use contact::*;
pub use cue::*;
pub use error::{CoreError, Result};
pub use import::*;
pub use link::*;
pub use render::*;
pub use session::*;
pub use stats::*;
pub use visibility::*;
