//! Conversion between catalogs and the flat external locale format.
//!
//! The external format is a plain `key -> message` mapping with no contexts
//! and no flags. Crossing this boundary is deliberately lossy: contexts and
//! reconciliation state cannot be reconstructed from a flat file.

use indexmap::IndexMap;

use crate::core::catalog::{Catalog, CatalogEntry, Flag};

/// The flat external locale mapping.
pub type FlatMessages = IndexMap<String, String>;

/// Convert a catalog to the flat external format.
///
/// Only clean entries are exported: a key makes it out when its message is
/// non-empty and its flag is `None`. MISSING and UNUSED entries are omitted
/// because the external format has nowhere to carry them.
pub fn externalize(catalog: &Catalog) -> FlatMessages {
    catalog
        .iter()
        .filter(|(_, entry)| entry.has_message() && entry.flag.is_none())
        .map(|(key, entry)| {
            (
                key.clone(),
                entry.message.clone().unwrap_or_default(),
            )
        })
        .collect()
}

/// Convert a flat external mapping back to a catalog.
///
/// Contexts are gone for good; an empty external value comes back as an
/// untranslated MISSING entry.
pub fn internalize(flat: &FlatMessages) -> Catalog {
    flat.iter()
        .map(|(key, value)| {
            let entry = if value.is_empty() {
                CatalogEntry {
                    message: None,
                    contexts: Vec::new(),
                    flag: Flag::Missing,
                }
            } else {
                CatalogEntry {
                    message: Some(value.clone()),
                    contexts: Vec::new(),
                    flag: Flag::None,
                }
            };
            (key.clone(), entry)
        })
        .collect()
}
