//! Source and locale file enumeration.
//!
//! Produces deterministic, lexicographically sorted file lists so that
//! extraction and merge results never depend on filesystem iteration order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

/// Extensions scanned for marker calls.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Locale catalog file names: `en.json`, `en-US.json`.
static LOCALE_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?\.json$").unwrap());

/// Result of scanning a source tree.
#[derive(Debug)]
pub struct SourceScan {
    /// Matching files, lexicographically sorted.
    pub files: Vec<String>,
    /// Paths that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal path prefixes.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Recursively enumerate scannable source files under `root`.
///
/// A missing or unreadable root aborts the run before any extraction;
/// per-entry access errors only bump `skipped_count`.
pub fn scan_source_files(root: &Path, ignores: &[String], verbose: bool) -> Result<SourceScan> {
    if !root.exists() {
        bail!("Source root '{}' does not exist.", root.display());
    }
    if !root.is_dir() {
        bail!("Source root '{}' is not a directory.", root.display());
    }

    // Separate ignore patterns into literal path prefixes and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for pattern in ignores {
        if is_glob_pattern(pattern) {
            match Pattern::new(pattern) {
                Ok(glob) => glob_patterns.push(glob),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            pattern,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(pattern));
        }
    }

    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignored| path.starts_with(ignored))
        {
            continue;
        }
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path.is_file() && is_source_file(path) {
            files.insert(path_str.into());
        }
    }

    let mut files: Vec<String> = files.into_iter().collect();
    files.sort();

    Ok(SourceScan {
        files,
        skipped_count,
    })
}

/// True if `path` names a per-locale catalog file.
pub fn is_locale_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| LOCALE_FILE_REGEX.is_match(name))
}

/// Locale name of a catalog file: `locales/en-US.json` -> `en-US`.
pub fn locale_name(path: &Path) -> Option<String> {
    if !is_locale_file(path) {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Enumerate locale catalog files directly inside `dir`, sorted by name.
pub fn scan_locale_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Messages directory '{}' does not exist.", dir.display());
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_locale_file(path))
        .collect();
    files.sort();
    Ok(files)
}
