//! Comment directives recognized during extraction.
//!
//! Two directives are supported:
//! - `i18n-extract <key>` registers an explicit catalog key at the comment's
//!   location, for messages the call scan cannot see (dynamic keys).
//! - `i18n-extract-disable-line` suppresses marker calls ending on the
//!   comment's line.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use swc_common::{SourceMap, comments::SingleThreadedComments};

use super::site::MessageSite;

static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"i18n-extract (.+)").unwrap());

static DISABLE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"i18n-extract-disable-line").unwrap());

/// Everything the comment scan produces for one file.
#[derive(Debug, Default)]
pub struct CommentScan {
    /// Explicit-key sites, in comment order.
    pub directive_sites: Vec<MessageSite>,
    /// Lines on which marker calls must be skipped.
    pub suppressed_lines: HashSet<usize>,
}

/// Scan all comments of a parsed file for extraction directives.
pub fn scan_comments(
    comments: &SingleThreadedComments,
    source_map: &SourceMap,
    file_path: &str,
) -> CommentScan {
    let (leading, trailing) = comments.borrow_all();

    let mut all_comments: Vec<_> = leading
        .iter()
        .chain(trailing.iter())
        .flat_map(|(_, comments)| comments.iter())
        .collect();
    all_comments.sort_by_key(|comment| comment.span.lo);

    let mut scan = CommentScan::default();
    for comment in all_comments {
        let loc = source_map.lookup_char_pos(comment.span.lo);

        if let Some(captures) = DIRECTIVE_REGEX.captures(&comment.text) {
            scan.directive_sites.push(MessageSite {
                message: None,
                explicit_key: Some(captures[1].trim().to_string()),
                file: file_path.to_string(),
                line: loc.line,
                column: loc.col_display + 1,
                descriptor: None,
            });
        }

        if DISABLE_LINE_REGEX.is_match(&comment.text) {
            scan.suppressed_lines.insert(loc.line);
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_source;

    fn scan(code: &str) -> CommentScan {
        let parsed = parse_source(code.to_string(), "test.js").unwrap();
        scan_comments(&parsed.comments, &parsed.source_map, "test.js")
    }

    #[test]
    fn directive_comment_yields_explicit_key_site() {
        let scan = scan("// i18n-extract dynamic.greeting\nconst x = 1;");
        assert_eq!(scan.directive_sites.len(), 1);
        let site = &scan.directive_sites[0];
        assert_eq!(site.explicit_key.as_deref(), Some("dynamic.greeting"));
        assert_eq!(site.message, None);
        assert_eq!(site.line, 1);
    }

    #[test]
    fn directive_key_is_trimmed() {
        let scan = scan("/* i18n-extract   spaced.key   */");
        assert_eq!(
            scan.directive_sites[0].explicit_key.as_deref(),
            Some("spaced.key")
        );
    }

    #[test]
    fn disable_line_records_comment_line() {
        let scan = scan("const a = 1;\nfoo(); // i18n-extract-disable-line\nconst b = 2;");
        assert!(scan.suppressed_lines.contains(&2));
        assert!(scan.directive_sites.is_empty());
    }

    #[test]
    fn directive_sites_keep_comment_order() {
        let scan = scan("// i18n-extract first\n// i18n-extract second\n");
        let keys: Vec<_> = scan
            .directive_sites
            .iter()
            .map(|s| s.explicit_key.clone().unwrap())
            .collect();
        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn plain_comments_are_ignored() {
        let scan = scan("// just a note\n/* block */\nconst x = 1;");
        assert!(scan.directive_sites.is_empty());
        assert!(scan.suppressed_lines.is_empty());
    }
}
