//! Lingot - i18n message extraction and catalog reconciliation
//!
//! Lingot is a CLI tool and library that scans source code for calls to a
//! configurable translation-marker function, builds a catalog of localizable
//! messages for the default locale, reconciles it against persisted
//! per-locale translation files (flagging MISSING and UNUSED entries while
//! preserving human translations), and converts catalogs to and from a flat
//! external locale format.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, aggregation, merge and conversion engine
//! - `diagnostics`: Per-file and per-site warning types
//! - `persist`: Catalog and locale file reading/writing

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod persist;
