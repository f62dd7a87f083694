//! Core extraction and reconciliation engine.
//!
//! The pipeline: scanned files are parsed (`parser`), walked for message
//! sites (`extract`), folded into a default-locale catalog (`aggregate`),
//! reconciled against persisted per-locale catalogs (`merge`) and mapped
//! to/from the flat external format (`convert`).

pub mod aggregate;
pub mod catalog;
pub mod convert;
pub mod extract;
pub mod key;
pub mod merge;
pub mod parser;
pub mod pipeline;
pub mod scanner;

pub use aggregate::{AggregateOptions, aggregate};
pub use catalog::{Catalog, CatalogEntry, Context, Flag};
pub use convert::{FlatMessages, externalize, internalize};
pub use extract::{ExtractOptions, FileExtraction, MessageSite, extract_sites};
pub use key::{KeyScheme, derive_key};
pub use merge::{MergeStats, merge};
pub use parser::{ParsedSource, parse_source};
pub use pipeline::{ExtractionOutcome, extract_catalog};
pub use scanner::{SourceScan, locale_name, scan_locale_files, scan_source_files};
