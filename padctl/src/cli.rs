//! Command line surface

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;

use padctl_core::constants::{env, DEFAULT_DEVICE_NAME, DEFAULT_XINPUT};
use padctl_types::Action;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "padctl")]
#[command(about = "enable/disable/toggle touchpad", long_about = None)]
pub struct Cli {
    /// What action to take
    #[arg(value_parser = action_parser())]
    pub action: Action,
    
    /// The name of the touchpad device
    #[arg(short = 'n', long = "name", env = env::DEVICE, default_value = DEFAULT_DEVICE_NAME)]
    pub name: String,
    
    /// The xinput binary to run
    #[arg(long, value_name = "PATH", env = env::XINPUT, default_value = DEFAULT_XINPUT)]
    pub xinput: String,
    
    /// Resolve and inspect the device without changing it
    #[arg(long)]
    pub dry_run: bool,
}

fn action_parser() -> impl TypedValueParser<Value = Action> {
    PossibleValuesParser::new([Action::On, Action::Off, Action::Toggle].map(Action::name))
        .try_map(|s| s.parse::<Action>())
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            device_name: self.name.clone(),
            xinput: self.xinput.clone(),
            dry_run: self.dry_run,
        }
    }
}
