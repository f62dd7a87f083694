//! Message-site extraction from parsed source units.
//!
//! Extraction runs two independent scans over the same tree and
//! concatenates their results: comment directives first (in comment order),
//! then marker call expressions (in appearance order).

pub mod directives;
pub mod resolve;
pub mod site;
pub mod visitor;

use anyhow::Result;
use swc_ecma_visit::VisitWith;

pub use directives::{CommentScan, scan_comments};
pub use resolve::{UnsupportedShape, WILDCARD, resolve_message_text};
pub use site::{Descriptor, MessageSite};
pub use visitor::{MarkerPath, MarkerVisitor};

use crate::core::parser::ParsedSource;
use crate::diagnostics::SiteWarning;

/// What to look for when extracting.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub marker: MarkerPath,
    /// Index of the message argument; negative values count from the end.
    pub key_argument_index: isize,
}

impl ExtractOptions {
    pub fn new(marker: &str, key_argument_index: isize) -> Result<Self> {
        Ok(Self {
            marker: MarkerPath::parse(marker)?,
            key_argument_index,
        })
    }
}

/// All message sites found in one file, plus per-site warnings.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub sites: Vec<MessageSite>,
    pub warnings: Vec<SiteWarning>,
}

/// Extract every message site from one parsed source unit.
pub fn extract_sites(
    parsed: &ParsedSource,
    file_path: &str,
    options: &ExtractOptions,
) -> FileExtraction {
    let scan = scan_comments(&parsed.comments, &parsed.source_map, file_path);

    let mut visitor = MarkerVisitor::new(
        &options.marker,
        options.key_argument_index,
        &parsed.source_map,
        file_path,
        &scan.suppressed_lines,
    );
    parsed.module.visit_with(&mut visitor);

    let mut sites = scan.directive_sites;
    sites.extend(visitor.sites);
    FileExtraction {
        sites,
        warnings: visitor.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_source;
    use crate::diagnostics::SiteWarningReason;
    use pretty_assertions::assert_eq;

    fn extract(code: &str, marker: &str) -> FileExtraction {
        let parsed = parse_source(code.to_string(), "test.js").unwrap();
        let options = ExtractOptions::new(marker, 0).unwrap();
        extract_sites(&parsed, "test.js", &options)
    }

    #[test]
    fn literal_call_yields_one_site_with_position() {
        let code = "\n\nconst x = i18n.m('Hello world');";
        let extraction = extract(code, "i18n.m");

        assert_eq!(extraction.sites.len(), 1);
        let site = &extraction.sites[0];
        assert_eq!(site.message.as_deref(), Some("Hello world"));
        assert_eq!(site.file, "test.js");
        assert_eq!(site.line, 3);
        assert_eq!(site.column, 11);
    }

    #[test]
    fn bare_identifier_marker_matches() {
        let extraction = extract("translate('Hi');", "translate");
        assert_eq!(extraction.sites.len(), 1);
        assert_eq!(extraction.sites[0].message.as_deref(), Some("Hi"));
    }

    #[test]
    fn unrelated_calls_are_ignored() {
        let extraction = extract("other('Hi'); i18n.format('x'); m('y');", "i18n.m");
        assert!(extraction.sites.is_empty());
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn template_message_uses_wildcards() {
        let extraction = extract("i18n.m(`Hello ${name}`);", "i18n.m");
        assert_eq!(extraction.sites[0].message.as_deref(), Some("Hello *"));
    }

    #[test]
    fn descriptor_argument_is_captured() {
        let code = r#"i18n.m('Hello', { description: 'greeting', messageLocale: 'en-US' });"#;
        let extraction = extract(code, "i18n.m");
        let descriptor = extraction.sites[0].descriptor.as_ref().unwrap();
        assert_eq!(descriptor.description.as_deref(), Some("greeting"));
        assert_eq!(descriptor.message_locale.as_deref(), Some("en-US"));
    }

    #[test]
    fn non_literal_descriptor_is_absent() {
        let code = "i18n.m('Hello', buildOptions());";
        let extraction = extract(code, "i18n.m");
        assert_eq!(extraction.sites[0].descriptor, None);
    }

    #[test]
    fn unsupported_message_shape_warns_and_drops_site() {
        let extraction = extract("i18n.m(count > 1 ? 'Files' : 'File');", "i18n.m");
        assert!(extraction.sites.is_empty());
        assert_eq!(extraction.warnings.len(), 1);
        assert_eq!(
            extraction.warnings[0].reason,
            SiteWarningReason::UnsupportedShape {
                shape: "conditional expression"
            }
        );
    }

    #[test]
    fn disable_line_comment_suppresses_call() {
        let code = "i18n.m('kept');\ni18n.m('skipped'); // i18n-extract-disable-line";
        let extraction = extract(code, "i18n.m");
        assert_eq!(extraction.sites.len(), 1);
        assert_eq!(extraction.sites[0].message.as_deref(), Some("kept"));
    }

    #[test]
    fn suppression_uses_the_call_end_line() {
        let code = "i18n.m(\n  'multiline'\n); // i18n-extract-disable-line";
        let extraction = extract(code, "i18n.m");
        assert!(extraction.sites.is_empty());
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn comment_sites_come_first_then_calls_in_order() {
        let code = "i18n.m('first call');\n// i18n-extract explicit.key\ni18n.m('second call');";
        let extraction = extract(code, "i18n.m");
        let keys: Vec<_> = extraction
            .sites
            .iter()
            .map(|s| {
                s.explicit_key
                    .clone()
                    .or_else(|| s.message.clone())
                    .unwrap()
            })
            .collect();
        assert_eq!(keys, vec!["explicit.key", "first call", "second call"]);
    }

    #[test]
    fn negative_key_index_reads_from_the_end() {
        let parsed = parse_source("tr(ctx, 'Hello');".to_string(), "test.js").unwrap();
        let options = ExtractOptions::new("tr", -1).unwrap();
        let extraction = extract_sites(&parsed, "test.js", &options);
        assert_eq!(extraction.sites[0].message.as_deref(), Some("Hello"));
    }

    #[test]
    fn out_of_bounds_key_index_warns() {
        let parsed = parse_source("tr('only');".to_string(), "test.js").unwrap();
        let options = ExtractOptions::new("tr", 2).unwrap();
        let extraction = extract_sites(&parsed, "test.js", &options);
        assert!(extraction.sites.is_empty());
        assert_eq!(
            extraction.warnings[0].reason,
            SiteWarningReason::KeyArgumentOutOfBounds {
                index: 2,
                argument_count: 1
            }
        );
    }

    #[test]
    fn nested_marker_calls_record_outer_first() {
        let code = "i18n.m('outer ' + i18n.m('inner'));";
        let extraction = extract(code, "i18n.m");
        let messages: Vec<_> = extraction
            .sites
            .iter()
            .map(|s| s.message.clone().unwrap())
            .collect();
        // The inner call resolves to a wildcard within the outer message,
        // and is also recorded as its own site.
        assert_eq!(messages, vec!["outer *", "inner"]);
    }
}
