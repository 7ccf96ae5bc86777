//! Command plan assembly
//!
//! Builds the ordered command plan for one commit attempt. The order is
//! fixed: rust format, rust compile check, formatter, type check, lint.
//! Formatting runs before the heavier checks so they see formatted output.
//! A bucket's command appears in the plan if and only if that bucket is
//! non-empty, and no command appears twice.

use anyhow::Result;
use globset::GlobSet;
use std::path::{Path, PathBuf};

use super::classify::{compile_globs, matching_paths};
use super::command::PlannedCommand;
use crate::config::PlanSettings;

/// Staged-file command planner
///
/// Glob groups are compiled once at construction; planning itself is a
/// pure, infallible function from the staged-file list to the command
/// plan. The project root is passed in explicitly rather than read from
/// ambient process state.
pub struct Planner {
    settings: PlanSettings,
    buckets: CompiledBuckets,
    root: PathBuf,
}

struct CompiledBuckets {
    data: GlobSet,
    markup: GlobSet,
    rust: GlobSet,
    typescript: GlobSet,
    script: GlobSet,
}

impl Planner {
    pub fn new(settings: PlanSettings, root: impl Into<PathBuf>) -> Result<Self> {
        let buckets = CompiledBuckets {
            data: compile_globs(&settings.buckets.data)?,
            markup: compile_globs(&settings.buckets.markup)?,
            rust: compile_globs(&settings.buckets.rust)?,
            typescript: compile_globs(&settings.buckets.typescript)?,
            script: compile_globs(&settings.buckets.script)?,
        };
        Ok(Self {
            settings,
            buckets,
            root: root.into(),
        })
    }

    /// Assemble the command plan for the given staged files
    pub fn plan(&self, staged_files: &[String]) -> Vec<PlannedCommand> {
        let root: &Path = &self.root;
        let data = matching_paths(staged_files, &self.buckets.data, root);
        let markup = matching_paths(staged_files, &self.buckets.markup, root);
        let rust = matching_paths(staged_files, &self.buckets.rust, root);
        let typescript = matching_paths(staged_files, &self.buckets.typescript, root);
        let script = matching_paths(staged_files, &self.buckets.script, root);

        // Composite buckets: lint targets and format targets
        let mut lint_targets = typescript.clone();
        lint_targets.extend(script.iter().cloned());

        let mut format_targets = data;
        format_targets.extend(markup);
        format_targets.extend(typescript.iter().cloned());
        format_targets.extend(script);

        let tools = &self.settings.tools;
        let mut plan = Vec::new();

        if !rust.is_empty() {
            push_unique(&mut plan, PlannedCommand::parse(&tools.rust_format));
            push_unique(&mut plan, PlannedCommand::parse(&tools.rust_check));
        }
        if !format_targets.is_empty() {
            push_unique(
                &mut plan,
                PlannedCommand::with_paths(&tools.formatter, &format_targets),
            );
        }
        if !typescript.is_empty() {
            push_unique(&mut plan, PlannedCommand::parse(&tools.type_check));
        }
        if !lint_targets.is_empty() {
            push_unique(
                &mut plan,
                PlannedCommand::with_paths(&tools.lint, &lint_targets),
            );
        }

        plan
    }
}

fn push_unique(plan: &mut Vec<PlannedCommand>, command: Option<PlannedCommand>) {
    if let Some(command) = command
        && !plan.contains(&command)
    {
        plan.push(command);
    }
}
