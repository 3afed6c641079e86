use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::runtime::Handle;

use crate::error::{HostError, Result};

/// Spawns `command` detached from the terminal and supervises it in the
/// background. Output never reaches the screen: stdout is discarded and
/// stderr lines are forwarded to the log.
pub fn spawn_supervised(command: &str, args: &[String]) -> Result<()> {
    let runtime = Handle::try_current().map_err(|_| HostError::NoRuntime)?;
    let _guard = runtime.enter();

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| HostError::SpawnFailed(format!("{}: {}", command, e)))?;

    let stderr = child.stderr.take();
    let name = command.to_string();

    runtime.spawn(async move {
        if let Some(stderr) = stderr {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                tracing::warn!("{} stderr: {}", name, line);
            }
        }

        match child.wait().await {
            Ok(status) if status.success() => {
                tracing::debug!(command = %name, "Child process finished");
            }
            Ok(status) => {
                tracing::warn!(command = %name, %status, "Child process exited with failure");
            }
            Err(e) => {
                tracing::warn!(command = %name, error = %e, "Failed to wait for child process");
            }
        }
    });

    Ok(())
}
