use thiserror::Error;

#[derive(Error, Debug)]
pub enum GgeError {
    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Failed to execute command [{command}]: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command [{command}] failed: {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("Failed to decode dependencies after byte {offset}: {source}")]
    Decode {
        offset: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GgeError>;
