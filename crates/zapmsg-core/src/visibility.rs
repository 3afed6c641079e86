use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Foreground,
    Background,
}

/// Host capability that reports foreground/background transitions.
pub trait ForegroundSignal {
    fn enable(&mut self) -> io::Result<()>;
    fn disable(&mut self) -> io::Result<()>;
}

/// Turns raw visibility signals into "operator came back" events.
///
/// A return is reported once per background to foreground transition and
/// only while the watcher is registered. Repeated signals in the same
/// direction are collapsed.
#[derive(Debug, Default)]
pub struct VisibilityWatcher {
    registered: bool,
    last: Visibility,
}

impl VisibilityWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts listening. Returns `false` when the host cannot deliver the
    /// signal, in which case automatic confirmation never fires.
    pub fn register(&mut self, signal: &mut dyn ForegroundSignal) -> bool {
        if self.registered {
            return true;
        }

        match signal.enable() {
            Ok(()) => {
                self.registered = true;
                self.last = Visibility::Foreground;
                tracing::debug!("Visibility watcher registered");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Foreground signal unavailable, automatic confirmation disabled");
                false
            }
        }
    }

    pub fn unregister(&mut self, signal: &mut dyn ForegroundSignal) {
        if !self.registered {
            return;
        }

        self.registered = false;
        if let Err(e) = signal.disable() {
            tracing::debug!(error = %e, "Failed to disable foreground signal");
        }
        tracing::debug!("Visibility watcher unregistered");
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Feeds one signal; returns `true` when it completes a return to the foreground.
    pub fn observe(&mut self, visibility: Visibility) -> bool {
        if !self.registered {
            return false;
        }

        let returned =
            self.last == Visibility::Background && visibility == Visibility::Foreground;
        self.last = visibility;
        returned
    }
}
