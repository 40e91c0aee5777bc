//! `xinput` command definitions

use std::fmt;

use padctl_types::{DeviceId, PropertyId};

/// The three ways padctl invokes `xinput`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XinputCommand {
    /// `xinput --list`
    List,
    
    /// `xinput --list-props <device>`
    ListProps {
        device: DeviceId,
    },
    
    /// `xinput --set-prop <device> <property> <0|1>`
    SetProp {
        device: DeviceId,
        property: PropertyId,
        value: bool,
    },
}

/// Encode a boolean the way `xinput --set-prop` expects it
pub fn encode_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

impl XinputCommand {
    /// Get the option name
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "--list",
            Self::ListProps { .. } => "--list-props",
            Self::SetProp { .. } => "--set-prop",
        }
    }
    
    /// Check if running this command changes device state
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::SetProp { .. })
    }
    
    /// Build the argument vector (without the program name)
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.name().to_string()];
        
        match self {
            Self::List => {}
            Self::ListProps { device } => {
                args.push(device.to_string());
            }
            Self::SetProp { device, property, value } => {
                args.push(device.to_string());
                args.push(property.to_string());
                args.push(encode_bool(*value).to_string());
            }
        }
        
        args
    }
}

impl fmt::Display for XinputCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}
