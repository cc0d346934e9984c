//! Project structure setup: destination replace + recursive tree copy

use crate::error::FatalError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Replace `destination_dir` with a full copy of `source_dir`.
///
/// A missing source directory is fatal (exit code 2). An existing destination
/// is deleted entirely first, whether it is a directory tree or a stray file.
/// No partial-failure handling: an interrupted copy leaves whatever was
/// already written.
///
/// Returns the number of files copied.
pub fn setup_project_structure(source_dir: &Path, destination_dir: &Path) -> Result<u64> {
    if !source_dir.is_dir() {
        return Err(FatalError::MissingSourceDir { path: source_dir.to_path_buf() }.into());
    }

    if destination_dir.symlink_metadata().is_ok() {
        if destination_dir.is_dir() {
            fs::remove_dir_all(destination_dir).with_context(|| {
                format!("Failed removing existing destination: {}", destination_dir.display())
            })?;
        } else {
            fs::remove_file(destination_dir).with_context(|| {
                format!("Failed removing existing destination: {}", destination_dir.display())
            })?;
        }
        tracing::debug!("Removed existing destination {}", destination_dir.display());
    }

    let copied = copy_tree(source_dir, destination_dir)?;
    tracing::info!(
        "Copied project structure from {} to {} ({} files)",
        source_dir.display(),
        destination_dir.display(),
        copied
    );
    Ok(copied)
}

fn copy_tree(source: &Path, destination: &Path) -> Result<u64> {
    let mut copied = 0u64;
    for entry in WalkDir::new(source) {
        let entry = entry.with_context(|| format!("Failed walking {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("Path escapes source root: {}", entry.path().display()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed creating directory: {}", target.display()))?;
        } else {
            // Symlinked files land here too; fs::copy follows the link and
            // copies the referent's content.
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed copying {} to {}", entry.path().display(), target.display())
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}
