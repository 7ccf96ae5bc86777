//! External command execution
//!
//! Runs a command plan sequentially in the repository root. Later commands
//! may assume earlier formatting succeeded, so nothing runs concurrently,
//! and the first non-zero exit aborts the remaining sequence. The failing
//! tool's own output is surfaced verbatim.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::Command;

use crate::cli::Output;
use crate::planner::PlannedCommand;

pub struct CommandRunner<'a> {
    root: PathBuf,
    output: &'a Output,
}

impl<'a> CommandRunner<'a> {
    pub fn new(root: impl Into<PathBuf>, output: &'a Output) -> Self {
        Self {
            root: root.into(),
            output,
        }
    }

    /// Run every command in order, stopping at the first failure
    pub fn run_all(&self, plan: &[PlannedCommand]) -> Result<()> {
        for (index, command) in plan.iter().enumerate() {
            self.output.step(&format!(
                "[{}/{}] {}",
                index + 1,
                plan.len(),
                command.shell_line()
            ));
            self.run_one(command)?;
        }
        Ok(())
    }

    fn run_one(&self, command: &PlannedCommand) -> Result<()> {
        if which::which(&command.program).is_err() {
            bail!(
                "required tool '{}' not found in PATH (needed by: {})",
                command.program,
                command.shell_line()
            );
        }

        let spinner = self.output.spinner(&command.shell_line());
        let result = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&self.root)
            .output();
        spinner.finish_and_clear();

        let result =
            result.with_context(|| format!("failed to launch '{}'", command.shell_line()))?;

        // Tool output is forwarded verbatim on failure (and in verbose
        // mode), so the user sees the tool's own diagnostics.
        if self.output.is_verbose() || !result.status.success() {
            if !result.stdout.is_empty() {
                print!("{}", String::from_utf8_lossy(&result.stdout));
            }
            if !result.stderr.is_empty() {
                eprint!("{}", String::from_utf8_lossy(&result.stderr));
            }
        }

        if !result.status.success() {
            self.output.error(&format!("Command failed: {}", command.shell_line()));
            bail!(
                "'{}' exited with {}",
                command.shell_line(),
                result
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string())
            );
        }

        tracing::debug!("command succeeded: {}", command.shell_line());
        Ok(())
    }
}
