//! Project name extraction from requirement and metadata text.
//!
//! Turns already-loaded text into bare project names, stripping version
//! constraints, extras, environment markers, comments, and editable/URL
//! decoration. No I/O happens here; callers hand in file contents.
//!
//! - [`requirements`] - pip requirement-specifier lines
//! - [`metadata`] - RFC-822-style distribution metadata (`PKG-INFO`/`METADATA`)

pub mod metadata;
pub mod requirements;

use std::collections::BTreeSet;

use crate::project::ProjectName;

/// The grammar of a seed text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// pip requirement-specifier lines.
    Requirements,
    /// RFC-822-style distribution metadata.
    Metadata,
}

/// Extract the set of project names from text sources.
///
/// The result is the union across all sources. Lines that yield no name are
/// skipped, never errors.
pub fn extract<'a, I>(sources: I, kind: SourceKind) -> BTreeSet<ProjectName>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = BTreeSet::new();
    for source in sources {
        names.extend(match kind {
            SourceKind::Requirements => requirements::project_names(source),
            SourceKind::Metadata => metadata::project_names(source),
        });
    }
    names
}
