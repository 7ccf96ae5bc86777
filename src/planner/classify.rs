//! Glob-based staged-file classification
//!
//! Partitions a staged-file list against one glob group and rewrites the
//! matched paths relative to the project root. Classification is total:
//! a path that matches no pattern is simply excluded, and empty input
//! yields empty output.

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Return the subset of `all_files` matching any pattern in the group,
/// with each matched path rewritten relative to `root`.
pub fn classify(all_files: &[String], patterns: &[String], root: &Path) -> Result<Vec<String>> {
    let set = compile_globs(patterns)?;
    Ok(matching_paths(all_files, &set, root))
}

/// Compile a glob group into a `GlobSet` for batch matching
pub fn compile_globs(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("Invalid glob pattern '{}': {}", pattern, e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Match `files` against a precompiled glob set, preserving input order
pub(crate) fn matching_paths(files: &[String], set: &GlobSet, root: &Path) -> Vec<String> {
    if set.is_empty() {
        return Vec::new();
    }

    files
        .iter()
        .filter(|file| {
            // Check both the path as given and its root-relative form, so
            // directory-qualified patterns like "src/**/*.ts" also match
            // absolute staged paths.
            set.is_match(file.as_str())
                || Path::new(file)
                    .strip_prefix(root)
                    .map(|rel| set.is_match(rel))
                    .unwrap_or(false)
        })
        .map(|file| rewrite_path(file, root))
        .collect()
}

/// Rewrite a matched path relative to the project root: the root prefix is
/// stripped and the path reported in `./` form. Paths outside the root are
/// kept in their original form.
fn rewrite_path(path: &str, root: &Path) -> String {
    let mut prefix = root.to_string_lossy().into_owned();
    if !prefix.ends_with('/') {
        prefix.push('/');
    }

    if let Some(rel) = path.strip_prefix(prefix.as_str()) {
        format!("./{rel}")
    } else if Path::new(path).is_absolute() || path.starts_with("./") {
        path.to_string()
    } else {
        format!("./{path}")
    }
}
