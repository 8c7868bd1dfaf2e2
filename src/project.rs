//! Normalized project names.

use std::fmt;

/// A package name as known to the package index.
///
/// Names are trimmed and lowercased on construction, since the index treats
/// them case-insensitively. After that, comparison and ordering are plain
/// string operations; runs of `-`, `_`, and `.` are not folded together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Normalize a raw name.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the normalized name is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_lowercases() {
        assert_eq!(ProjectName::new("Django").as_str(), "django");
        assert_eq!(ProjectName::new("PyYAML").as_str(), "pyyaml");
    }

    #[test]
    fn construction_trims_whitespace() {
        assert_eq!(ProjectName::new("  requests \t").as_str(), "requests");
    }

    #[test]
    fn separators_are_not_folded() {
        assert_ne!(ProjectName::new("zope.interface"), ProjectName::new("zope-interface"));
    }

    #[test]
    fn display_matches_normalized_form() {
        assert_eq!(ProjectName::new("Flask").to_string(), "flask");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut names = vec![ProjectName::new("zodb"), ProjectName::new("abc")];
        names.sort();
        assert_eq!(names[0].as_str(), "abc");
    }

    #[test]
    fn empty_after_trim_is_detectable() {
        assert!(ProjectName::new("   ").is_empty());
        assert!(!ProjectName::new("a").is_empty());
    }
}
