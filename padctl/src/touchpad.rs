//! High-level touchpad interface

use tracing::{debug, info, warn};

use padctl_core::{find_device_id, find_enabled_property, XinputCommand};
use padctl_exec::Runner;
use padctl_types::{Action, DeviceId, EnabledProperty, PropertyId};

use crate::error::{Error, Result};

/// Touchpad controller
///
/// Resolves a device by name, reads its "Device Enabled" property and writes
/// a new value, all through `xinput`. Nothing is cached between calls; each
/// method runs a fresh command.
///
/// The read-then-write sequence of [`Touchpad::apply`] is not atomic. Another
/// tool changing the property in between can make `toggle` write a stale value.
///
/// # Examples
///
/// ```no_run
/// use padctl::{Action, SystemRunner, Touchpad};
///
/// fn main() -> padctl::Result<()> {
///     let touchpad = Touchpad::new(SystemRunner::new("xinput"));
///     
///     let enabled = touchpad.apply("Sentelic", Action::Toggle)?;
///     println!("enabled: {}", enabled);
///     
///     Ok(())
/// }
/// ```
pub struct Touchpad<R> {
    runner: R,
    dry_run: bool,
}

impl<R: Runner> Touchpad<R> {
    /// Create a new touchpad controller
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            dry_run: false,
        }
    }
    
    /// Skip the set command and only log it
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
    
    /// Find the id of the first device whose listing line contains `name`
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `xinput --list` cannot be run
    /// - No line contains `name` ([`Error::NotFound`])
    /// - The matching line has no `id=<N>` token
    pub fn resolve(&self, name: &str) -> Result<DeviceId> {
        let listing = self.execute(&XinputCommand::List)?;
        
        find_device_id(&listing, name)?.ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })
    }
    
    /// Read the "Device Enabled" property of `device`
    pub fn enabled_property(&self, device: &DeviceId) -> Result<EnabledProperty> {
        let listing = self.execute(&XinputCommand::ListProps {
            device: device.clone(),
        })?;
        
        Ok(find_enabled_property(&listing, device)?)
    }
    
    /// Write the "Device Enabled" property
    pub fn set_enabled(&self, device: &DeviceId, property: &PropertyId, enabled: bool) -> Result<()> {
        let command = XinputCommand::SetProp {
            device: device.clone(),
            property: property.clone(),
            value: enabled,
        };
        
        self.execute(&command)?;
        Ok(())
    }
    
    /// Resolve `name`, inspect it, and apply `action`
    ///
    /// Returns the state that was written. In dry-run mode nothing is written
    /// and the returned value is the state that would have been.
    pub fn apply(&self, name: &str, action: Action) -> Result<bool> {
        let device = self.resolve(name)?;
        let property = self.enabled_property(&device)?;
        
        let enabled = target_state(action, property.enabled)?;
        self.set_enabled(&device, &property.id, enabled)?;
        
        if self.dry_run {
            info!(
                "{} (device {}): is {}, would set {}",
                name,
                device,
                on_off(property.enabled),
                on_off(enabled)
            );
        } else {
            info!(
                "{} (device {}): {} -> {}",
                name,
                device,
                on_off(property.enabled),
                on_off(enabled)
            );
        }
        
        Ok(enabled)
    }
    
    fn execute(&self, command: &XinputCommand) -> Result<String> {
        if self.dry_run && command.is_mutating() {
            warn!("Dry run, not running: {} {}", self.runner.program(), command);
            return Ok(String::new());
        }
        
        debug!("Executing: {} {}", self.runner.program(), command);
        
        Ok(self.runner.run(&command.args())?)
    }
}

/// Work out the value to write for `action` given the current state
pub fn target_state(action: Action, current: bool) -> Result<bool> {
    match action {
        Action::On => Ok(true),
        Action::Off => Ok(false),
        Action::Toggle => Ok(!current),
        other => Err(Error::UnsupportedAction(other)),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
