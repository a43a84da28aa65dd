mod handlers;
pub mod parse;

use std::io;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::GraphError;

pub use handlers::{config, plot};

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    init_logging(cli.verbose);
    handlers::run(cli)
}

/// Diagnostics go to stderr so stdout stays clean for SIXEL data.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
