//! Catalog reconciliation.
//!
//! Merges a freshly extracted default-locale catalog (authoritative on
//! usage) into a previously persisted target-locale catalog (authoritative
//! on translations). Keys the source has but the target lacks become
//! MISSING; translated keys the source no longer references become UNUSED;
//! existing translations are preserved and their contexts refreshed.

use crate::core::catalog::{Catalog, CatalogEntry, Flag};

/// Missing/unused tallies of one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub missing: usize,
    pub unused: usize,
}

/// Reconcile `source` (just extracted) against `target` (previously
/// persisted translations). Both catalogs must be fully materialized; the
/// two passes are strictly batch.
///
/// An empty `target` is the locale-initialization case: every source entry
/// comes back untranslated and flagged MISSING.
pub fn merge(source: &Catalog, target: &Catalog) -> (Catalog, MergeStats) {
    let mut merged = Catalog::new();
    let mut stats = MergeStats::default();

    // Pass 1: every source key, translated or missing. Contexts always come
    // from the source; the target's are stale once code has moved.
    for (key, entry) in source.iter() {
        let translation = target
            .get(key)
            .filter(|t| t.has_message())
            .and_then(|t| t.message.clone());
        match translation {
            Some(message) => {
                merged.insert(
                    key.clone(),
                    CatalogEntry {
                        message: Some(message),
                        contexts: entry.contexts.clone(),
                        flag: Flag::None,
                    },
                );
            }
            None => {
                merged.insert(
                    key.clone(),
                    CatalogEntry {
                        message: None,
                        contexts: entry.contexts.clone(),
                        flag: Flag::Missing,
                    },
                );
                stats.missing += 1;
            }
        }
    }

    // Pass 2: target-only keys are kept but flagged UNUSED.
    for (key, entry) in target.iter() {
        if source.contains_key(key) {
            continue;
        }
        merged.insert(
            key.clone(),
            CatalogEntry {
                flag: Flag::Unused,
                ..entry.clone()
            },
        );
        stats.unused += 1;
    }

    (merged, stats)
}
