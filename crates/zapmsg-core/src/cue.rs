use std::io;
use std::sync::Arc;

/// Short audible cue played when a send is initiated.
pub trait Beeper: Send {
    fn beep(&self) -> io::Result<()>;
}

/// Hands a URL to whatever the host uses to open links.
///
/// Opening is fire-and-forget: implementations report failures through logs
/// only, since the session has no way to observe the external app.
pub trait LinkOpener: Send {
    fn open(&self, url: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBeeper;

impl Beeper for SilentBeeper {
    fn beep(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Beeper + Sync + ?Sized> Beeper for Arc<T> {
    fn beep(&self) -> io::Result<()> {
        (**self).beep()
    }
}

impl<T: LinkOpener + Sync + ?Sized> LinkOpener for Arc<T> {
    fn open(&self, url: &str) {
        (**self).open(url)
    }
}
