//! Package index client.
//!
//! Queries a PyPI-style JSON API (`GET {base}/{name}/json`) for a project's
//! trove classifiers and dependency list. A project counts as compatible
//! when any classifier places it on Python 3.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Py3ReadyError, Result};
use crate::extract::metadata::dependency_name;
use crate::project::ProjectName;

use super::{CompatReport, Oracle};

/// JSON API base of the public index.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

/// Classifier prefix that marks a release as running on Python 3.
const PY3_CLASSIFIER: &str = "Programming Language :: Python :: 3";

/// Compatibility oracle backed by a PyPI-style JSON API.
pub struct PyPiOracle {
    client: reqwest::blocking::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ProjectDocument {
    info: ProjectInfo,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectInfo {
    #[serde(default)]
    classifiers: Vec<String>,
    #[serde(default)]
    requires_dist: Option<Vec<String>>,
}

impl PyPiOracle {
    /// Create an oracle against the public index.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_INDEX_URL)
    }

    /// Create an oracle against an alternate index JSON API.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("py3ready/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the configured index base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for PyPiOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl Oracle for PyPiOracle {
    fn query(&self, project: &ProjectName) -> Result<CompatReport> {
        let url = format!("{}/{}/json", self.base_url, project);
        debug!("querying {url}");

        let lookup_failed = |message: String| Py3ReadyError::LookupFailed {
            project: project.to_string(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| lookup_failed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            // The index has never heard of it. Assume it holds nobody back
            // rather than failing the whole report over a typo.
            warn!("'{project}' is unknown to the index; treating as compatible");
            return Ok(CompatReport::compatible_leaf());
        }
        if !response.status().is_success() {
            return Err(lookup_failed(format!("HTTP {}", response.status())));
        }

        let document: ProjectDocument =
            response.json().map_err(|e| lookup_failed(e.to_string()))?;
        Ok(report_from(document.info))
    }
}

/// Derive compatibility and direct dependencies from the index payload.
fn report_from(info: ProjectInfo) -> CompatReport {
    let compatible = info
        .classifiers
        .iter()
        .any(|c| c.starts_with(PY3_CLASSIFIER));

    let mut dependencies = Vec::new();
    for spec in info.requires_dist.unwrap_or_default() {
        if is_extra_requirement(&spec) {
            continue;
        }
        if let Some(name) = dependency_name(&spec) {
            if !dependencies.contains(&name) {
                dependencies.push(name);
            }
        }
    }

    CompatReport {
        compatible,
        dependencies,
    }
}

/// Whether a dependency specifier is gated behind an extras marker. Such
/// dependencies are opt-in and are not followed.
fn is_extra_requirement(spec: &str) -> bool {
    spec.split_once(';')
        .map(|(_, marker)| marker.replace(' ', "").contains("extra=="))
        .unwrap_or(false)
}
