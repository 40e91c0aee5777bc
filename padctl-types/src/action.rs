//! Requested actions

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// What to do with the enabled state
///
/// Marked non-exhaustive so dispatchers outside this crate keep a fallback
/// arm for actions added later.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Action {
    /// Enable the device
    On,
    
    /// Disable the device
    Off,
    
    /// Flip the current state
    Toggle,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Toggle => "toggle",
        }
    }
}

impl FromStr for Action {
    type Err = Error;
    
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "toggle" => Ok(Self::Toggle),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_action_parse() {
        assert_eq!("on".parse::<Action>().unwrap(), Action::On);
        assert_eq!("off".parse::<Action>().unwrap(), Action::Off);
        assert_eq!("toggle".parse::<Action>().unwrap(), Action::Toggle);
    }
    
    #[test]
    fn test_action_parse_is_case_sensitive() {
        assert!("ON".parse::<Action>().is_err());
        assert!("flip".parse::<Action>().is_err());
    }
    
    #[test]
    fn test_action_name_round_trips() {
        for action in [Action::On, Action::Off, Action::Toggle] {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
    }
}
