//! Finding the files a run lints.

use anyhow::{bail, Context, Result};
use gostyle_core::{FileRole, SourceInput};
use std::path::Path;

/// Collects lintable files under `root`, sorted by path.
///
/// A file root is linted on its own and must have a known role. Directory
/// roots are walked; files whose names carry no role are skipped silently.
///
/// # Errors
///
/// Returns an error if `root` does not exist, an exclude pattern is invalid,
/// or the walk fails.
pub fn discover(root: &Path, exclude: &[String], respect_gitignore: bool) -> Result<Vec<SourceInput>> {
    if !root.exists() {
        bail!("Path does not exist: {}", root.display());
    }

    if root.is_file() {
        let Some(role) = FileRole::from_path(root) else {
            bail!(
                "Not a Go or proto file: {} (expected *.go, *_test.go or *.proto)",
                root.display()
            );
        };
        return Ok(vec![SourceInput::new(root, role)]);
    }

    let patterns = exclude
        .iter()
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .require_git(false);

    let mut inputs = Vec::new();
    for entry in builder.build() {
        let entry = entry.context("Failed to walk source tree")?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Some(role) = FileRole::from_path(path) else {
            continue;
        };
        if is_excluded(path, root, &patterns) {
            tracing::debug!("Excluding: {}", path.display());
            continue;
        }
        inputs.push(SourceInput::new(path, role));
    }

    inputs.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!("Discovered {} file(s) under {}", inputs.len(), root.display());
    Ok(inputs)
}

/// Matches patterns against the full path and the path relative to `root`.
fn is_excluded(path: &Path, root: &Path, patterns: &[glob::Pattern]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    patterns
        .iter()
        .any(|p| p.matches_path(path) || p.matches_path(relative))
}
