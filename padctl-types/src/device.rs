//! Device and property identifiers
//!
//! Both identifiers are opaque decimal tokens handed out by the X input
//! subsystem. They are only meaningful within one listing snapshot and are
//! kept as strings so they reach the set command exactly as they were read.

use std::fmt;

use crate::error::{Error, Result};

/// Input device identifier (`id=<N>` in `xinput --list`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

/// Property identifier (`(<N>)` in `xinput --list-props`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId(String);

fn validate(raw: String) -> Result<String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidId(raw));
    }
    Ok(raw)
}

impl DeviceId {
    /// Create a device id, rejecting anything that is not decimal digits
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        validate(raw.into()).map(Self)
    }
    
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PropertyId {
    /// Create a property id, rejecting anything that is not decimal digits
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        validate(raw.into()).map(Self)
    }
    
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The "Device Enabled" property of one device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnabledProperty {
    /// Property identifier
    pub id: PropertyId,
    
    /// Current value (`1` in the listing means enabled)
    pub enabled: bool,
}

impl EnabledProperty {
    pub fn new(id: PropertyId, enabled: bool) -> Self {
        Self { id, enabled }
    }
}

impl fmt::Display for EnabledProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device Enabled ({}): {}",
            self.id,
            if self.enabled { 1 } else { 0 }
        )
    }
}
