//! # Stagecheck - Pre-commit checks for staged files
//!
//! Stagecheck is a pre-commit hook dispatcher: it classifies the files
//! staged for a commit into buckets by extension glob, assembles an ordered
//! plan of validation commands (formatters, compilers, linters) for the
//! non-empty buckets, and runs them sequentially, aborting the commit on
//! the first failure.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install the pre-commit hook into the current repository
//! stagecheck install
//!
//! # Preview what would run for the current staging area
//! stagecheck plan
//!
//! # Run the pre-commit checks manually
//! stagecheck run pre-commit
//! ```
//!
//! ## Configuration
//!
//! Bucket globs and tool commands are configuration with sensible defaults.
//! Override them with a `stagecheck.toml` (or `.json`/`.yaml`) in the
//! repository root, a user config under `~/.config/stagecheck/`, or
//! `STAGECHECK_*` environment variables:
//!
//! ```toml
//! [buckets]
//! typescript = ["*.ts", "*.tsx"]
//!
//! [tools]
//! formatter = "npx prettier --write"
//! lint = "npx eslint"
//! ```

pub mod cli;
pub mod config;
pub mod external;
pub mod git;
pub mod hooks;
pub mod planner;

pub use cli::{Cli, Output};
pub use config::StagecheckConfig;

/// Result type alias for stagecheck operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
