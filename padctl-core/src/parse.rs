//! Parsers for `xinput` text output
//!
//! `xinput` has no machine-readable mode, so padctl scrapes two formats:
//!
//! ```text
//! xinput --list
//! ⎜   ↳ Sentelic Touchpad                       	id=11	[slave  pointer  (2)]
//!
//! xinput --list-props 11
//! 	Device Enabled (138):	1
//! ```
//!
//! The line parsers are pure and take a single line; the `find_*` functions
//! scan a whole listing.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use padctl_types::{DeviceId, EnabledProperty, PropertyId};

use crate::constants::ENABLED_LABEL;
use crate::error::{Error, Result};

lazy_static! {
    static ref DEVICE_ID_RE: Regex = Regex::new(r"id=([0-9]+)").unwrap();
    static ref ENABLED_RE: Regex = Regex::new(r"\(([0-9]+)\):\s([01])").unwrap();
}

/// Extract the device id from one `xinput --list` line
///
/// # Examples
///
/// ```
/// use padctl_core::parse_device_id;
///
/// let id = parse_device_id("Sentelic Touchpad  id=11  [slave pointer]").unwrap();
/// assert_eq!(id.as_str(), "11");
/// ```
pub fn parse_device_id(line: &str) -> Result<DeviceId> {
    let caps = DEVICE_ID_RE
        .captures(line)
        .ok_or_else(|| Error::MissingDeviceId { line: line.to_string() })?;
    
    Ok(DeviceId::new(&caps[1])?)
}

/// Extract the property id and value from one "Device Enabled" line
///
/// # Examples
///
/// ```
/// use padctl_core::parse_enabled_property;
///
/// let prop = parse_enabled_property("Device Enabled (138):\t1").unwrap();
/// assert_eq!(prop.id.as_str(), "138");
/// assert!(prop.enabled);
/// ```
pub fn parse_enabled_property(line: &str) -> Result<EnabledProperty> {
    let line = line.trim();
    let caps = ENABLED_RE
        .captures(line)
        .ok_or_else(|| Error::MalformedProperty { line: line.to_string() })?;
    
    let id = PropertyId::new(&caps[1])?;
    Ok(EnabledProperty::new(id, &caps[2] == "1"))
}

/// Find the id of the first device whose listing line contains `name`
///
/// Matching is a case-sensitive substring test. Returns `Ok(None)` when no
/// line contains the name; a matching line without an id is an error.
pub fn find_device_id(listing: &str, name: &str) -> Result<Option<DeviceId>> {
    trace!("Scanning {} bytes of listing for {:?}", listing.len(), name);
    
    match listing.lines().find(|line| line.contains(name)) {
        Some(line) => {
            let id = parse_device_id(line)?;
            debug!("Matched {:?} to device {}", name, id);
            Ok(Some(id))
        }
        None => Ok(None),
    }
}

/// Find the "Device Enabled" property in a `--list-props` listing
pub fn find_enabled_property(listing: &str, device_id: &DeviceId) -> Result<EnabledProperty> {
    let line = listing
        .lines()
        .find(|line| line.contains(ENABLED_LABEL))
        .ok_or_else(|| Error::MissingEnabledProperty {
            device_id: device_id.to_string(),
        })?;
    
    let prop = parse_enabled_property(line)?;
    debug!("Device {}: {}", device_id, prop);
    
    Ok(prop)
}
