use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use directories::ProjectDirs;
use zapmsg_core::LinkMode;
use zapmsg_host::SystemOpener;

#[derive(Parser, Debug)]
#[command(
    name = "zapmsg",
    version,
    about = "Envie mensagens personalizadas pelo WhatsApp, um contato por vez"
)]
pub struct Cli {
    /// Open links in WhatsApp Web instead of wa.me.
    #[arg(long, env = "ZAPMSG_WEB")]
    pub web: bool,

    /// Prefill the import screen with a contact list file.
    #[arg(long, value_name = "FILE")]
    pub contacts: Option<PathBuf>,

    /// Prefill the composer with a message template file.
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Do not ring the terminal bell when a link is opened.
    #[arg(long, env = "ZAPMSG_QUIET")]
    pub quiet: bool,

    /// Program used to open links, called as `<program> <url>`.
    #[arg(long, env = "ZAPMSG_OPENER", value_name = "PROGRAM")]
    pub opener: Option<String>,

    /// Directory for log files.
    #[arg(long, env = "ZAPMSG_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub link_mode: LinkMode,
    pub contacts_text: String,
    pub template_text: String,
    pub bell: bool,
    pub opener: SystemOpener,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let contacts_text = match &cli.contacts {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read contacts from {}", path.display()))?,
            None => String::new(),
        };

        let template_text = match &cli.template {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read template from {}", path.display()))?,
            None => String::new(),
        };

        let opener = match cli.opener.as_deref().map(str::trim) {
            Some(program) if !program.is_empty() => SystemOpener::with_program(program, &[]),
            _ => SystemOpener::detect(),
        };

        Ok(Self {
            link_mode: if cli.web { LinkMode::Web } else { LinkMode::Direct },
            contacts_text,
            template_text: template_text.trim_end().to_string(),
            bell: !cli.quiet,
            opener,
            log_dir: cli.log_dir.unwrap_or_else(default_log_dir),
        })
    }
}

fn default_log_dir() -> PathBuf {
    ProjectDirs::from("br", "zapmsg", "zapmsg")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("zapmsg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["zapmsg", "--log-dir", "/tmp/zapmsg-test"]).unwrap();
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.link_mode, LinkMode::Direct);
        assert!(config.bell);
        assert!(config.contacts_text.is_empty());
        assert_eq!(config.log_dir, PathBuf::from("/tmp/zapmsg-test"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["zapmsg", "--web", "--quiet", "--opener", "firefox"]).unwrap();
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.link_mode, LinkMode::Web);
        assert!(!config.bell);
        assert_eq!(config.opener.program(), "firefox");
    }

    #[test]
    fn test_missing_contacts_file_is_an_error() {
        let cli = Cli::try_parse_from(["zapmsg", "--contacts", "/nonexistent/zapmsg.txt"]).unwrap();
        assert!(Config::from_cli(cli).is_err());
    }
}
