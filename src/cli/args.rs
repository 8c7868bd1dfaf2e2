//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::oracle::pypi::DEFAULT_INDEX_URL;

/// py3ready - Find the projects blocking your transition to Python 3.
#[derive(Debug, Parser)]
#[command(name = "py3ready")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Requirement-specifier files to pull project names from
    #[arg(short, long, value_name = "FILE")]
    pub requirements: Vec<PathBuf>,

    /// Distribution metadata files (PKG-INFO / METADATA) to pull names from
    #[arg(short, long, value_name = "FILE")]
    pub metadata: Vec<PathBuf>,

    /// Project names to check directly (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "NAME")]
    pub projects: Vec<String>,

    /// Package index JSON API base URL
    #[arg(
        long,
        env = "PY3READY_INDEX_URL",
        default_value = DEFAULT_INDEX_URL,
        value_name = "URL"
    )]
    pub index_url: String,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output (no progress spinner)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
