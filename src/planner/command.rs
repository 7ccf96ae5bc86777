//! Planned command representation
//!
//! A planned action is a structured value (program + argument list), not a
//! pre-joined shell string. File paths are appended as discrete argv
//! entries and the process is spawned directly, so staged paths containing
//! spaces or shell metacharacters pass through verbatim as single
//! arguments. Rendering to a display string happens only at the output
//! boundary.

use std::fmt;

/// A single external command in a [`CommandPlan`](super::plan::Planner)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PlannedCommand {
    /// Parse a configured command line ("npx prettier --write") into
    /// program and arguments. Returns `None` for an empty command, which
    /// disables the corresponding step.
    ///
    /// Tool command lines are split on whitespace; paths with spaces are
    /// only supported in the appended file arguments, not in the configured
    /// command itself.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?.to_string();
        let args = parts.map(str::to_string).collect();
        Some(Self { program, args })
    }

    /// Parse a configured command line and append file paths as arguments
    pub fn with_paths(command: &str, paths: &[String]) -> Option<Self> {
        let mut cmd = Self::parse(command)?;
        cmd.args.extend(paths.iter().cloned());
        Some(cmd)
    }

    /// Render the command as a single display line
    pub fn shell_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl fmt::Display for PlannedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shell_line())
    }
}
