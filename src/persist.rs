//! Reading and writing catalog and flat locale files.
//!
//! JSON is pretty-printed with a trailing newline. A failed final write is
//! fatal and surfaces the offending path; a missing merge target is not an
//! error (the caller initializes the locale instead).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::catalog::Catalog;
use crate::core::convert::FlatMessages;

/// Read an internal catalog file.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

/// Read an internal catalog file, treating a missing file as `None`.
///
/// Any error other than NotFound still fails: a target that exists but
/// cannot be read must never be silently overwritten.
pub fn read_catalog_if_exists(path: &Path) -> Result<Option<Catalog>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let catalog = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
            Ok(Some(catalog))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read catalog: {}", path.display()))
        }
    }
}

/// Read a flat external locale file.
pub fn read_flat(path: &Path) -> Result<FlatMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale file: {}", path.display()))
}

/// Write a catalog file, creating parent directories as needed.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    write_json(path, catalog)
}

/// Write a flat external locale file.
pub fn write_flat(path: &Path, flat: &FlatMessages) -> Result<()> {
    write_json(path, flat)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content =
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
