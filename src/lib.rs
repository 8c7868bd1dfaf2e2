//! py3ready - Find the projects blocking your transition to Python 3.
//!
//! Given a set of project names (from requirement files, distribution
//! metadata, or the command line), py3ready walks each project's dependency
//! chain through the package index and reports the shortest path to every
//! dependency that does not yet support Python 3.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and seed gathering
//! - [`error`] - Error types and result alias
//! - [`extract`] - Project name extraction from requirement/metadata text
//! - [`oracle`] - Compatibility oracle: the package index client and cache
//! - [`project`] - Normalized project names
//! - [`report`] - Chain merging and message rendering
//! - [`resolver`] - Breadth-first blocker chain resolution
//!
//! # Example
//!
//! ```
//! use py3ready::project::ProjectName;
//! use py3ready::report::render;
//! use py3ready::resolver::Chain;
//!
//! let chain = Chain::new(vec![ProjectName::new("mylib"), ProjectName::new("oldlib")]);
//! let messages = render(&[chain]);
//! assert_eq!(messages[0], "You need 1 project to transition to Python 3.");
//! assert_eq!(messages[2], "oldlib (which is blocking mylib)");
//! ```
//!
//! For end-to-end runs against a package index, see the integration tests.

pub mod cli;
pub mod error;
pub mod extract;
pub mod oracle;
pub mod project;
pub mod report;
pub mod resolver;

pub use error::{Py3ReadyError, Result};
