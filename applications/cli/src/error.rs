/// CLI error types
use setlist_client::ClientError;
use setlist_editor::EditError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid edit operation '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CliError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
