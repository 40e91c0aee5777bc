//! # padctl
//!
//! Enable, disable or toggle a touchpad through `xinput`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use padctl::{Action, Config, SystemRunner};
//!
//! fn main() -> padctl::Result<()> {
//!     let config = Config::default();
//!     let runner = SystemRunner::new(config.xinput.clone());
//!     
//!     padctl::run(&config, Action::Off, runner)?;
//!     
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod touchpad;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use touchpad::Touchpad;

pub use padctl_exec::{Runner, SystemRunner};
pub use padctl_types::{Action, DeviceId, EnabledProperty, PropertyId};

/// Apply `action` to the device named in `config`
///
/// Returns the state that was written.
pub fn run<R: padctl_exec::Runner>(config: &Config, action: Action, runner: R) -> Result<bool> {
    Touchpad::new(runner)
        .with_dry_run(config.dry_run)
        .apply(&config.device_name, action)
}
