//! Staged-file command planner
//!
//! The core of stagecheck: partition a staged-file list into buckets by
//! extension glob and assemble the ordered list of validation commands to
//! run against the non-empty buckets. Planning is pure; execution lives in
//! [`crate::external`].

pub mod classify;
pub mod command;
pub mod plan;

pub use classify::classify;
pub use command::PlannedCommand;
pub use plan::Planner;
