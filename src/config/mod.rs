pub mod buckets;
pub mod core;

// Re-export main types for easier access
pub use buckets::{BucketPatterns, PlanSettings, ToolCommands};
pub use core::StagecheckConfig;
