//! Process layer for padctl
//!
//! Runs the device-management binary and hands back its decoded output.

pub mod error;
pub mod system;

pub use error::{Error, Result};
pub use system::SystemRunner;

/// Runner trait for invoking the device-management binary
///
/// Implementations block until the process exits. There is no timeout; a
/// hung child blocks the caller.
pub trait Runner {
    /// Run the binary with `args` and return its stdout
    fn run(&self, args: &[String]) -> Result<String>;
    
    /// Get the program being run (for logging)
    fn program(&self) -> String;
}
