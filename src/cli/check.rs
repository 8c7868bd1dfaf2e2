//! The compatibility check command.
//!
//! Wires the seed sources, the index-backed oracle, the resolver, and the
//! report renderer together, and owns everything the core does not: the
//! progress spinner, printing, and the exit code.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::oracle::{CachedOracle, CompatReport, Oracle, PyPiOracle};
use crate::project::ProjectName;
use crate::report;
use crate::resolver::Resolver;

use super::args::Cli;
use super::seeds;

/// Run the full check: gather seeds, resolve, print the report.
///
/// Returns the process exit code: 0 when every seed is transitively ready,
/// 1 when blockers were found.
pub fn run(cli: &Cli) -> Result<i32> {
    let seeds = seeds::gather(cli)?;

    let oracle = CachedOracle::new(PyPiOracle::with_base_url(&cli.index_url));
    let spinner = query_spinner(cli.quiet);
    let watched = SpinnerOracle {
        inner: &oracle,
        spinner: &spinner,
    };

    let resolved = Resolver::new(&watched).resolve(&seeds);
    spinner.finish_and_clear();
    let blockers = resolved?;

    for message in format_report(&report::render(&blockers)) {
        println!("{message}");
    }

    Ok(if blockers.is_empty() { 0 } else { 1 })
}

/// Spinner shown while the index is being queried.
///
/// Hidden under `--quiet`; indicatif already suppresses drawing when stderr
/// is not a terminal.
fn query_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("valid template"));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Oracle wrapper that surfaces query progress on the spinner.
struct SpinnerOracle<'a> {
    inner: &'a dyn Oracle,
    spinner: &'a ProgressBar,
}

impl Oracle for SpinnerOracle<'_> {
    fn query(&self, project: &ProjectName) -> Result<CompatReport> {
        self.spinner.set_message(format!("checking {project}"));
        self.inner.query(project)
    }
}

/// Style the rendered messages for the terminal.
///
/// The headline is bolded and the chain lines are indented; the message text
/// itself is exactly what the renderer produced.
fn format_report(messages: &[String]) -> Vec<String> {
    let mut formatted = Vec::with_capacity(messages.len());
    for (i, message) in messages.iter().enumerate() {
        formatted.push(match i {
            0 => style(message).bold().to_string(),
            1 => message.clone(),
            _ => format!("  {message}"),
        });
    }
    formatted
}
