//! High-level error types

use padctl_core::constants::EXIT_FAILURE;
use padctl_types::Action;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("touchpad not found: {name:?}")]
    NotFound {
        name: String,
    },
    
    #[error("Failed to run xinput: {0}")]
    CommandFailed(#[from] padctl_exec::Error),
    
    #[error("Unexpected xinput output: {0}")]
    ParseFailed(#[from] padctl_core::Error),
    
    #[error("Unsupported action: {0}")]
    UnsupportedAction(Action),
}

impl Error {
    /// Process exit status to report for this error
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}
