//! Error types for the critters kernel.

use critters_data::CommandError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Rejected configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// No registered brain answers to this code
    #[error("Unknown brain code: {0}")]
    UnknownBrain(String),

    /// A brain code was registered twice
    #[error("Brain code already registered: {0}")]
    DuplicateBrain(String),

    /// Textual command did not parse
    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Result type alias for kernel operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<anyhow::Error> for SimError {
    fn from(err: anyhow::Error) -> Self {
        Self::Config(err.to_string())
    }
}
