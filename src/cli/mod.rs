//! Command-line interface.
//!
//! - [`args`] - clap argument definitions
//! - [`check`] - the check command itself
//! - [`seeds`] - seed collection from files and flags

pub mod args;
pub mod check;
pub mod seeds;

pub use args::Cli;
