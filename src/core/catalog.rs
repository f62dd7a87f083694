//! Catalog data model: keys, entries, contexts and reconciliation flags.
//!
//! A `Catalog` is the deduplicated key → entry mapping for one locale.
//! Entries keep every distinct source location of their message as a
//! `Context` and carry a `Flag` describing their reconciliation state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reconciliation state of a catalog entry.
///
/// Serialized catalogs omit the field entirely for `None`; only `MISSING`
/// and `UNUSED` ever appear on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Flag {
    /// Clean: the entry is used and translated.
    #[default]
    None,
    /// Needed by the source code but not translated yet.
    #[serde(rename = "MISSING")]
    Missing,
    /// Translated but no longer referenced by any source file.
    #[serde(rename = "UNUSED")]
    Unused,
}

impl Flag {
    pub fn is_none(&self) -> bool {
        matches!(self, Flag::None)
    }
}

/// One recorded source location where a key's message appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub file: String,
    pub line: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Context {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True if both contexts point at the exact same `(file, line, column)`.
    pub fn same_location(&self, other: &Context) -> bool {
        self.file == other.file && self.line == other.line && self.column == other.column
    }
}

/// One message with every location it occurs at and its reconciliation flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The message text. `None` for untranslated (MISSING) entries and for
    /// comment-directive keys whose text lives only in the default locale.
    pub message: Option<String>,
    /// Distinct occurrence locations, in insertion order. Never contains two
    /// contexts with identical `(file, line, column)`.
    #[serde(default)]
    pub contexts: Vec<Context>,
    #[serde(default, skip_serializing_if = "Flag::is_none")]
    pub flag: Flag,
}

impl CatalogEntry {
    /// True if this entry carries usable message text.
    pub fn has_message(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// Key → entry mapping for one locale.
///
/// Keys are unique; insertion order is preserved so serialization is
/// deterministic and matches the order entries were discovered in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut CatalogEntry> {
        self.entries.get_mut(key)
    }

    /// Insert an entry, replacing any previous entry for the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: CatalogEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CatalogEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl FromIterator<(String, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
