//! File discovery and name-pattern helpers.

use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::Regex;

use crate::config::CONFIG_FILE;
use crate::store::STORE_FILE;

/// List plain files in `dir` whose names match `pattern`.
///
/// Non-recursive. Hidden files and the tool's own store/config files are
/// skipped so they never enter the competition.
pub fn discover_files(dir: &Path, pattern: &Regex) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name == STORE_FILE || name == CONFIG_FILE {
            continue;
        }
        if pattern.is_match(&name) {
            files.push(name);
        }
    }
    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered files");
    Ok(files)
}

/// Convert a comma-separated extension list into a file name regex.
///
/// "py,rs" and ".py,.rs" both become `.*\.(py|rs)$`. An empty list matches
/// everything.
pub fn extensions_to_pattern(extensions: &str) -> String {
    let exts: Vec<String> = extensions
        .split(',')
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .map(regex::escape)
        .collect();

    match exts.len() {
        0 => ".*".to_string(),
        1 => format!(r".*\.{}$", exts[0]),
        _ => format!(r".*\.({})$", exts.join("|")),
    }
}

/// Expand a single-`*` wildcard rename over the files in `dir`.
///
/// Returns (old, new) name pairs for every match. Both patterns must
/// contain exactly one `*`; the matched middle of each file name is
/// substituted into the replacement.
pub fn wildcard_renames(
    old_pattern: &str,
    new_pattern: &str,
    dir: &Path,
) -> Result<Vec<(String, String)>> {
    if old_pattern.matches('*').count() != 1 {
        bail!("pattern must contain exactly one * wildcard");
    }
    if new_pattern.matches('*').count() != 1 {
        bail!("replacement pattern must contain exactly one * wildcard");
    }

    let (prefix, suffix) = old_pattern
        .split_once('*')
        .context("pattern must contain a * wildcard")?;

    let mut renames = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.len() >= prefix.len() + suffix.len()
            && name.starts_with(prefix)
            && name.ends_with(suffix)
        {
            let middle = &name[prefix.len()..name.len() - suffix.len()];
            renames.push((name.clone(), new_pattern.replace('*', middle)));
        }
    }

    if renames.is_empty() {
        bail!("no files found matching pattern {:?}", old_pattern);
    }
    renames.sort();
    Ok(renames)
}

/// Move a file into a `.trash/` subdirectory with a timestamp suffix.
pub fn trash_file(dir: &Path, name: &str) -> Result<()> {
    let source = dir.join(name);
    if !source.exists() {
        bail!("file {} does not exist on disk", source.display());
    }

    let trash_dir = dir.join(".trash");
    std::fs::create_dir_all(&trash_dir)
        .with_context(|| format!("failed to create {}", trash_dir.display()))?;

    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let target = trash_dir.join(format!("{}_{}{}", stem, timestamp, ext));

    std::fs::rename(&source, &target)
        .with_context(|| format!("failed to move {} to trash", source.display()))?;
    tracing::debug!(from = %source.display(), to = %target.display(), "trashed file");
    Ok(())
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod discover_tests;
