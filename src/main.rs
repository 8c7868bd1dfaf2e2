//! py3ready CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use py3ready::cli::{check, Cli};
use py3ready::Py3ReadyError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. `--verbose` raises the default from WARN to INFO
fn init_tracing(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("py3ready=debug")
    } else {
        let fallback = if verbose { "py3ready=info" } else { "py3ready=warn" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    tracing::debug!("py3ready starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    match check::run(&cli) {
        Ok(exit_code) => ExitCode::from(exit_code as u8),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            match e {
                Py3ReadyError::NoProjects => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}
