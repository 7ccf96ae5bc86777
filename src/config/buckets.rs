//! Bucket and tool configuration
//!
//! Defines the typed shape of the planner's configuration: the glob groups
//! that partition staged files into buckets, and the external tool commands
//! attached to each bucket. Defaults match a Rust + TypeScript project
//! (cargo, prettier, tsc, eslint).

use serde::{Deserialize, Serialize};

/// Typed planner settings extracted from the merged configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanSettings {
    #[serde(default)]
    pub buckets: BucketPatterns,
    #[serde(default)]
    pub tools: ToolCommands,
}

/// Glob pattern groups, one per bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketPatterns {
    #[serde(default = "default_data_patterns")]
    pub data: Vec<String>,
    #[serde(default = "default_markup_patterns")]
    pub markup: Vec<String>,
    #[serde(default = "default_rust_patterns")]
    pub rust: Vec<String>,
    #[serde(default = "default_typescript_patterns")]
    pub typescript: Vec<String>,
    #[serde(default = "default_script_patterns")]
    pub script: Vec<String>,
}

/// External tool command lines, one per planned step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCommands {
    /// Rust formatter; runs without file arguments
    #[serde(default = "default_rust_format")]
    pub rust_format: String,
    /// Rust compile check; runs without file arguments
    #[serde(default = "default_rust_check")]
    pub rust_check: String,
    /// General-purpose formatter; receives matched paths as arguments
    #[serde(default = "default_formatter")]
    pub formatter: String,
    /// Type checker; checks the whole project via its own config
    #[serde(default = "default_type_check")]
    pub type_check: String,
    /// Linter; receives matched paths as arguments
    #[serde(default = "default_lint")]
    pub lint: String,
}

impl Default for BucketPatterns {
    fn default() -> Self {
        Self {
            data: default_data_patterns(),
            markup: default_markup_patterns(),
            rust: default_rust_patterns(),
            typescript: default_typescript_patterns(),
            script: default_script_patterns(),
        }
    }
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            rust_format: default_rust_format(),
            rust_check: default_rust_check(),
            formatter: default_formatter(),
            type_check: default_type_check(),
            lint: default_lint(),
        }
    }
}

fn default_data_patterns() -> Vec<String> {
    vec!["*.json".to_string(), "*.yaml".to_string()]
}

fn default_markup_patterns() -> Vec<String> {
    vec!["*.html".to_string()]
}

fn default_rust_patterns() -> Vec<String> {
    vec!["*.rs".to_string()]
}

fn default_typescript_patterns() -> Vec<String> {
    vec!["*.ts".to_string(), "*.tsx".to_string()]
}

fn default_script_patterns() -> Vec<String> {
    vec!["*.js".to_string(), "*.cjs".to_string(), "*.mjs".to_string()]
}

fn default_rust_format() -> String {
    "cargo fmt".to_string()
}

fn default_rust_check() -> String {
    "cargo check".to_string()
}

fn default_formatter() -> String {
    "npx prettier --write".to_string()
}

fn default_type_check() -> String {
    "npx tsc --noEmit".to_string()
}

fn default_lint() -> String {
    "npx eslint".to_string()
}
