//! Placeholder substitution over configured target files

use crate::config::{ensure_json_extension, load_document, value_to_string};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Outcome counters for one transformation pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub files_rewritten: u64,
    pub files_missing: u64,
    pub entries_skipped: u64,
}

/// Rewrite `${placeholder}` tokens in every file the config lists.
///
/// The config document maps relative filenames to replacement maps. The same
/// document doubles as the environment config, so entries whose value is not
/// a JSON object are skipped. A missing target file is a warning, never an
/// error: remaining files are still processed.
pub fn apply_transformations(config_path: &Path, target_dir: &Path) -> Result<TransformStats> {
    let config_file = ensure_json_extension(config_path);
    let doc = load_document(&config_file)?;

    let mut stats = TransformStats::default();
    for (filename, replacements) in &doc {
        let Some(replacements) = replacements.as_object() else {
            tracing::debug!("Skipping config entry '{}': not a replacement map", filename);
            stats.entries_skipped += 1;
            continue;
        };

        let target_file = target_dir.join(filename);
        if !target_file.exists() {
            tracing::warn!("Target file {} does not exist", target_file.display());
            stats.files_missing += 1;
            continue;
        }

        rewrite_file(&target_file, replacements)?;
        stats.files_rewritten += 1;
        tracing::info!("Applied transformations to {}", target_file.display());
    }
    Ok(stats)
}

fn rewrite_file(target_file: &Path, replacements: &serde_json::Map<String, Value>) -> Result<()> {
    let mut content = fs::read_to_string(target_file)
        .with_context(|| format!("Failed reading target file: {}", target_file.display()))?;

    for (placeholder, value) in replacements {
        let token = format!("${{{placeholder}}}");
        content = content.replace(&token, &value_to_string(value));
    }

    // In-place overwrite; a crash mid-write can truncate the file.
    fs::write(target_file, content)
        .with_context(|| format!("Failed writing target file: {}", target_file.display()))
}
