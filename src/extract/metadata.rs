//! Distribution metadata parsing.
//!
//! Scans `PKG-INFO`/`METADATA` text for `Requires-Dist:` fields. Only the
//! dependency name is taken; a trailing environment marker clause never
//! affects extraction (markers are not evaluated).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::project::ProjectName;

use super::requirements::name_token;

/// Matches a `Requires-Dist:` field and captures the dependency specifier.
static REQUIRES_DIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Requires-Dist:\s*(.+)$").expect("REQUIRES_DIST must compile")
});

/// Extract the dependency names declared in metadata text.
pub fn project_names(text: &str) -> BTreeSet<ProjectName> {
    text.lines()
        .filter_map(|line| REQUIRES_DIST.captures(line.trim_end()))
        .filter_map(|caps| dependency_name(&caps[1]))
        .collect()
}

/// Extract the leading name from a single dependency specifier, as written
/// after `Requires-Dist:` or in the index's `requires_dist` data.
pub fn dependency_name(spec: &str) -> Option<ProjectName> {
    let name = ProjectName::new(name_token(spec.trim_start()));
    (!name.is_empty()).then_some(name)
}
