//! Runtime configuration

use padctl_core::constants::{DEFAULT_DEVICE_NAME, DEFAULT_XINPUT};

/// Settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Substring matched against `xinput --list` (default: `Sentelic`)
    pub device_name: String,
    
    /// Device-management binary (default: `xinput`)
    pub xinput: String,
    
    /// Log the set command instead of running it
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            xinput: DEFAULT_XINPUT.to_string(),
            dry_run: false,
        }
    }
}
