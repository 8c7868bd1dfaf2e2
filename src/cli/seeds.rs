//! Seed collection from CLI inputs.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::{Py3ReadyError, Result};
use crate::extract::{extract, SourceKind};
use crate::project::ProjectName;

use super::args::Cli;

/// Gather the seed set from every source the CLI offers.
///
/// The result is the union of names extracted from requirement files,
/// metadata files, and the explicit project list. An empty union is a usage
/// error; resolution never starts.
pub fn gather(cli: &Cli) -> Result<BTreeSet<ProjectName>> {
    let mut seeds = BTreeSet::new();

    let requirements = read_all(&cli.requirements)?;
    seeds.extend(extract(
        requirements.iter().map(String::as_str),
        SourceKind::Requirements,
    ));

    let metadata = read_all(&cli.metadata)?;
    seeds.extend(extract(
        metadata.iter().map(String::as_str),
        SourceKind::Metadata,
    ));

    seeds.extend(
        cli.projects
            .iter()
            .map(|name| ProjectName::new(name))
            .filter(|name| !name.is_empty()),
    );

    if seeds.is_empty() {
        return Err(Py3ReadyError::NoProjects);
    }

    info!("checking {} project(s)", seeds.len());
    Ok(seeds)
}

fn read_all(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| {
            fs::read_to_string(path).map_err(|source| Py3ReadyError::SeedFileUnreadable {
                path: path.clone(),
                source,
            })
        })
        .collect()
}
