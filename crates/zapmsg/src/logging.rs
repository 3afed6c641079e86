use std::path::Path;

use color_eyre::eyre::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Logs go to a daily file since the terminal belongs to the UI.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .wrap_err_with(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, "zapmsg.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::builder()
                .from_env_lossy()
                .add_directive("zapmsg=info".parse()?)
                .add_directive("zapmsg_core=info".parse()?)
                .add_directive("zapmsg_host=info".parse()?)
                .add_directive("zapmsg_ai=info".parse()?),
        )
        .init();

    Ok(guard)
}
