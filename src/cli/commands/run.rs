//! Execute a specific git hook
//!
//! The installed hook script delegates here; the command can also be run
//! manually for testing.

use anyhow::Result;

use crate::cli::Output;
use crate::hooks::{self, HookContext};

/// Execute the run command
pub async fn execute(
    hook: &str,
    _args: &[String],
    config_path: Option<&str>,
    output: &Output,
) -> Result<()> {
    match hook {
        "pre-commit" => {
            let context = HookContext::load(config_path)?;
            hooks::pre_commit::execute(context, output).await
        }
        other => anyhow::bail!("unsupported hook: {other} (supported: pre-commit)"),
    }
}
