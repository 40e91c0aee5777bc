//! Type definitions for padctl

pub mod action;
pub mod device;
pub mod error;

pub use action::Action;
pub use device::{DeviceId, EnabledProperty, PropertyId};
pub use error::{Error, Result};
