//! AST visitor collecting marker call sites.
//!
//! Walks a parsed module and records a `MessageSite` for every call whose
//! callee matches the configured marker path, resolving the message argument
//! and the optional descriptor argument that follows it.

use std::collections::HashSet;

use anyhow::{Result, bail};
use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread};
use swc_ecma_visit::{Visit, VisitWith};

use super::resolve::resolve_message_text;
use super::site::{MessageSite, parse_descriptor};
use crate::diagnostics::{SiteWarning, SiteWarningReason};

/// A dotted marker path such as `i18n.m` or a bare identifier like `t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPath {
    segments: Vec<String>,
}

impl MarkerPath {
    pub fn parse(marker: &str) -> Result<Self> {
        let segments: Vec<String> = marker.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            bail!("Invalid marker '{}': empty path segment", marker);
        }
        Ok(Self { segments })
    }

    /// Match a callee against the marker: either an identifier equal to a
    /// single-segment marker, or a member chain spelling the dotted path.
    pub fn matches_callee(&self, callee: &Callee) -> bool {
        let Callee::Expr(expr) = callee else {
            return false;
        };
        self.matches_expr(expr)
    }

    fn matches_expr(&self, expr: &Expr) -> bool {
        let mut remaining = self.segments.as_slice();
        let mut current = expr;
        loop {
            match current {
                Expr::Member(member) => {
                    let Some(prop) = member.prop.as_ident() else {
                        return false;
                    };
                    match remaining.split_last() {
                        Some((last, rest)) if prop.sym.as_str() == last.as_str() => {
                            remaining = rest;
                        }
                        _ => return false,
                    }
                    current = &member.obj;
                }
                Expr::Ident(ident) => {
                    return matches!(remaining, [only] if ident.sym.as_str() == only.as_str());
                }
                _ => return false,
            }
        }
    }
}

/// Address an argument list with a signed offset; negative indexes count
/// from the end. Spread arguments never resolve.
fn argument_at(args: &[ExprOrSpread], index: isize) -> Option<&ExprOrSpread> {
    let resolved = if index < 0 {
        args.len().checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    args.get(resolved).filter(|arg| arg.spread.is_none())
}

/// Position (0-based) of the argument a signed offset points at, if any.
fn resolved_index(argument_count: usize, index: isize) -> Option<usize> {
    if index < 0 {
        argument_count.checked_sub(index.unsigned_abs())
    } else {
        let index = index as usize;
        (index < argument_count).then_some(index)
    }
}

pub struct MarkerVisitor<'a> {
    marker: &'a MarkerPath,
    key_argument_index: isize,
    source_map: &'a SourceMap,
    file_path: &'a str,
    suppressed_lines: &'a HashSet<usize>,
    pub sites: Vec<MessageSite>,
    pub warnings: Vec<SiteWarning>,
}

impl<'a> MarkerVisitor<'a> {
    pub fn new(
        marker: &'a MarkerPath,
        key_argument_index: isize,
        source_map: &'a SourceMap,
        file_path: &'a str,
        suppressed_lines: &'a HashSet<usize>,
    ) -> Self {
        Self {
            marker,
            key_argument_index,
            source_map,
            file_path,
            suppressed_lines,
            sites: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn process_marker_call(&mut self, call: &CallExpr) {
        let loc = self.source_map.lookup_char_pos(call.span.lo);
        let line = loc.line;
        let column = loc.col_display + 1;

        let Some(argument) = argument_at(&call.args, self.key_argument_index) else {
            self.warnings.push(SiteWarning {
                file: self.file_path.to_string(),
                line,
                column,
                reason: SiteWarningReason::KeyArgumentOutOfBounds {
                    index: self.key_argument_index,
                    argument_count: call.args.len(),
                },
            });
            return;
        };

        let message = match resolve_message_text(&argument.expr) {
            Ok(message) => message,
            Err(unsupported) => {
                self.warnings.push(SiteWarning {
                    file: self.file_path.to_string(),
                    line,
                    column,
                    reason: SiteWarningReason::UnsupportedShape {
                        shape: unsupported.shape,
                    },
                });
                return;
            }
        };

        // The descriptor, when present, is the argument right after the
        // message argument.
        let descriptor = resolved_index(call.args.len(), self.key_argument_index)
            .and_then(|message_index| call.args.get(message_index + 1))
            .filter(|arg| arg.spread.is_none())
            .and_then(|arg| parse_descriptor(&arg.expr));

        self.sites.push(MessageSite {
            message: Some(message),
            explicit_key: None,
            file: self.file_path.to_string(),
            line,
            column,
            descriptor,
        });
    }
}

impl Visit for MarkerVisitor<'_> {
    fn visit_call_expr(&mut self, call: &CallExpr) {
        let end_line = self.source_map.lookup_char_pos(call.span.hi).line;
        if self.marker.matches_callee(&call.callee) && !self.suppressed_lines.contains(&end_line) {
            self.process_marker_call(call);
        }
        call.visit_children_with(self);
    }
}
