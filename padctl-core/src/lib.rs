//! # padctl-core
//!
//! Pure building blocks for talking to `xinput`.
//!
//! This crate never spawns a process. It provides:
//! - The command vocabulary (`--list`, `--list-props`, `--set-prop`) as argv
//! - Parsers for the text `xinput` prints
//! - Shared constants

pub mod command;
pub mod constants;
pub mod error;
pub mod parse;

pub use command::XinputCommand;
pub use error::{Error, Result};
pub use parse::{find_device_id, find_enabled_property, parse_device_id, parse_enabled_property};
