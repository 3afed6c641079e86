use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to spawn process: {0}")]
    SpawnFailed(String),

    #[error("No tokio runtime available to supervise child process")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, HostError>;
