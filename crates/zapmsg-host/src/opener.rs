use zapmsg_core::LinkOpener;

use crate::process::spawn_supervised;

/// Opens links with the platform's default handler (`xdg-open`, `open`, `start`).
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_program("open", &[])
        } else if cfg!(target_os = "windows") {
            Self::with_program("cmd", &["/C", "start", ""])
        } else {
            Self::with_program("xdg-open", &[])
        }
    }

    /// Uses `program`, called as `program <args..> <url>`.
    pub fn with_program(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::detect()
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) {
        let mut args = self.args.clone();
        args.push(url.to_string());

        if let Err(e) = spawn_supervised(&self.program, &args) {
            tracing::warn!(program = %self.program, error = %e, "Failed to open link");
        }
    }
}
