use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use padctl::{cli::Cli, SystemRunner};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    
    let cli = Cli::parse();
    let config = cli.config();
    let runner = SystemRunner::new(config.xinput.clone());
    
    match padctl::run(&config, cli.action, runner) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("padctl: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
