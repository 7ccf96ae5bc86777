//! Command implementations for the stagecheck CLI
//!
//! Each command is organized into its own module for better
//! maintainability.

pub mod config;
pub mod install;
pub mod plan;
pub mod run;
pub mod status;
pub mod uninstall;
pub mod version;
