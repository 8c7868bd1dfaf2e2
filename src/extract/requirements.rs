//! Requirement-specifier parsing.
//!
//! Understands just enough of the pip requirements format to pull out bare
//! project names: plain specifiers, editable/URL lines with an `#egg=`
//! fragment, and local `file:` paths. This is deliberately not a full PEP 508
//! parser; environment markers are never evaluated.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::warn;

use crate::project::ProjectName;

/// Characters that end a name and introduce a version specifier, extras
/// list, or environment marker.
const SPECIFIER_CHARS: &[char] = &['<', '>', '=', '!', '~', '[', ';'];

/// Extract project names from requirement-specifier lines.
///
/// Blank lines and `#` comments are ignored; lines that yield no name are
/// skipped with a warning.
pub fn project_names(text: &str) -> BTreeSet<ProjectName> {
    let mut names = BTreeSet::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match requirement_name(line) {
            Some(name) => {
                names.insert(name);
            }
            None => warn!("skipping unparseable requirement: {line}"),
        }
    }
    names
}

/// Extract the project name from a single requirement line, if it has one.
pub fn requirement_name(line: &str) -> Option<ProjectName> {
    if line.contains("egg=") {
        return egg_fragment(line);
    }
    if line.starts_with('-') {
        // pip options (-r, --index-url, a bare -e without an egg fragment)
        // carry no project name.
        return None;
    }
    if let Some(path) = line.strip_prefix("file:") {
        return path_stem(path);
    }
    non_empty(name_token(line))
}

/// Take the leading name token: everything up to the first whitespace or
/// specifier-introducing character.
pub(crate) fn name_token(text: &str) -> &str {
    text.split(|c: char| c.is_whitespace() || SPECIFIER_CHARS.contains(&c))
        .next()
        .unwrap_or("")
}

/// Pull the name out of an `#egg=` fragment.
fn egg_fragment(line: &str) -> Option<ProjectName> {
    let (_, fragment) = line.split_once("egg=")?;
    non_empty(fragment.split('&').next().unwrap_or(""))
}

/// Fall back to the filename/directory stem for `file:` paths with no egg.
fn path_stem(path: &str) -> Option<ProjectName> {
    let stem = Path::new(path.trim_end_matches('/')).file_stem()?;
    non_empty(stem.to_str()?)
}

fn non_empty(raw: &str) -> Option<ProjectName> {
    let name = ProjectName::new(raw);
    (!name.is_empty()).then_some(name)
}
