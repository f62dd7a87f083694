//! Parallel extraction across a scanned file set.
//!
//! Each file is read, parsed and extracted inside one rayon task, with no
//! shared mutable state between tasks. The per-file results are collected
//! back in input order, so the aggregation fold sees files in the scanner's
//! sorted order no matter when individual tasks finish.

use std::fs;

use rayon::prelude::*;

use crate::core::aggregate::{AggregateOptions, aggregate};
use crate::core::catalog::Catalog;
use crate::core::extract::{ExtractOptions, FileExtraction, extract_sites};
use crate::core::parser::parse_source;
use crate::diagnostics::{ParseFailure, SiteWarning};

/// Everything an extraction run produces.
#[derive(Debug)]
pub struct ExtractionOutcome {
    pub catalog: Catalog,
    pub site_warnings: Vec<SiteWarning>,
    /// Files skipped because they could not be read or parsed.
    pub parse_failures: Vec<ParseFailure>,
}

enum FileOutcome {
    Extracted(String, FileExtraction),
    Failed(ParseFailure),
}

fn process_file(file: &str, options: &ExtractOptions) -> FileOutcome {
    let code = match fs::read_to_string(file) {
        Ok(code) => code,
        Err(e) => {
            return FileOutcome::Failed(ParseFailure {
                file: file.to_string(),
                error: format!("Failed to read file: {}", e),
            });
        }
    };
    match parse_source(code, file) {
        Ok(parsed) => FileOutcome::Extracted(
            file.to_string(),
            extract_sites(&parsed, file, options),
        ),
        Err(e) => FileOutcome::Failed(ParseFailure {
            file: file.to_string(),
            error: e.to_string(),
        }),
    }
}

/// Extract a catalog from `files` (already in deterministic order).
pub fn extract_catalog(
    files: &[String],
    extract_options: &ExtractOptions,
    aggregate_options: &AggregateOptions,
) -> ExtractionOutcome {
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|file| process_file(file, extract_options))
        .collect();

    let mut per_file_sites = Vec::new();
    let mut site_warnings = Vec::new();
    let mut parse_failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            FileOutcome::Extracted(file, extraction) => {
                site_warnings.extend(extraction.warnings);
                per_file_sites.push((file, extraction.sites));
            }
            FileOutcome::Failed(failure) => parse_failures.push(failure),
        }
    }

    ExtractionOutcome {
        catalog: aggregate(per_file_sites, aggregate_options),
        site_warnings,
        parse_failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::KeyScheme;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::tempdir;

    fn options() -> (ExtractOptions, AggregateOptions) {
        (
            ExtractOptions::new("i18n.m", 0).unwrap(),
            AggregateOptions {
                default_locale: "en-US".to_string(),
                key_scheme: KeyScheme::Verbatim,
                namespace: None,
            },
        )
    }

    fn write(dir: &Path, name: &str, code: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, code).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn catalog_spans_files_in_sorted_order() {
        let dir = tempdir().unwrap();
        let a = write(dir.path(), "a.js", "i18n.m('Shared'); i18n.m('From A');");
        let b = write(dir.path(), "b.js", "i18n.m('Shared');");

        let (extract_options, aggregate_options) = options();
        let outcome = extract_catalog(&[a.clone(), b.clone()], &extract_options, &aggregate_options);

        assert!(outcome.parse_failures.is_empty());
        assert_eq!(outcome.catalog.len(), 2);
        let shared = outcome.catalog.get("Shared").unwrap();
        assert_eq!(shared.contexts.len(), 2);
        assert_eq!(shared.contexts[0].file, a);
        assert_eq!(shared.contexts[1].file, b);
    }

    #[test]
    fn broken_file_is_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        let good = write(dir.path(), "good.js", "i18n.m('Hello');");
        let bad = write(dir.path(), "bad.js", "const = ;;;");

        let (extract_options, aggregate_options) = options();
        let outcome = extract_catalog(&[bad.clone(), good], &extract_options, &aggregate_options);

        assert_eq!(outcome.parse_failures.len(), 1);
        assert_eq!(outcome.parse_failures[0].file, bad);
        assert_eq!(outcome.catalog.len(), 1);
        assert!(outcome.catalog.contains_key("Hello"));
    }

    #[test]
    fn missing_file_is_reported_as_read_failure() {
        let (extract_options, aggregate_options) = options();
        let outcome = extract_catalog(
            &["/nonexistent/app.js".to_string()],
            &extract_options,
            &aggregate_options,
        );
        assert_eq!(outcome.parse_failures.len(), 1);
        assert!(outcome.parse_failures[0].error.contains("Failed to read"));
    }

    #[test]
    fn warnings_are_collected_across_files() {
        let dir = tempdir().unwrap();
        let a = write(dir.path(), "a.js", "i18n.m(42);");
        let b = write(dir.path(), "b.js", "i18n.m(cond ? 'x' : 'y');");

        let (extract_options, aggregate_options) = options();
        let outcome = extract_catalog(&[a, b], &extract_options, &aggregate_options);

        assert_eq!(outcome.site_warnings.len(), 2);
        assert!(outcome.catalog.is_empty());
    }
}
