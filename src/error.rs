use thiserror::Error;

/// Unified error type for the nmcli/iwgetid wrappers
#[derive(Error, Debug)]
pub enum NexusError {
    #[error("{0}: executable file not found in $PATH")]
    ToolNotFound(String),

    /// The tool could not be started or exited non-zero. For mutating nmcli
    /// commands `detail` holds the tool's own stderr text.
    #[error("{program} failed: {detail}")]
    Execution { program: String, detail: String },

    #[error("no active connection")]
    NoActiveConnection,

    #[error("Config error: {0}")]
    Config(String),
}

impl NexusError {
    pub fn execution(program: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Execution {
            program: program.into(),
            detail: detail.into(),
        }
    }
}

pub type NexusResult<T> = Result<T, NexusError>;
