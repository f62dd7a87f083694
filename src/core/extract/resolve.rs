//! Message-text resolution over expression shapes.
//!
//! The message argument of a marker call is resolved recursively:
//! string literals keep their value, `+` concatenations are joined,
//! template literals replace each interpolation with a `*` wildcard, and
//! calls/identifiers/member accesses resolve to a bare wildcard. Every
//! other shape is unsupported and drops the site with a warning.

use swc_ecma_ast::{BinExpr, BinaryOp, Expr, Lit, Str, Tpl};

/// Stand-in for message fragments that cannot be known statically.
pub const WILDCARD: &str = "*";

/// The message argument had no statically readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedShape {
    pub shape: &'static str,
}

/// Expression shapes the resolver knows how to handle.
///
/// Classification is a closed set: adding a shape means extending this enum
/// and the exhaustive match in [`resolve_message_text`].
enum MessageShape<'a> {
    StringLiteral(&'a Str),
    BinaryAdd(&'a BinExpr),
    TemplateLiteral(&'a Tpl),
    /// Calls, identifiers and member accesses carry no static information;
    /// the whole fragment becomes a wildcard.
    Unresolvable,
    Unsupported(&'static str),
}

fn classify(expr: &Expr) -> MessageShape<'_> {
    match expr {
        Expr::Paren(paren) => classify(&paren.expr),
        Expr::Lit(Lit::Str(s)) => MessageShape::StringLiteral(s),
        Expr::Bin(bin) if bin.op == BinaryOp::Add => MessageShape::BinaryAdd(bin),
        Expr::Tpl(tpl) => MessageShape::TemplateLiteral(tpl),
        Expr::Call(_) | Expr::Ident(_) | Expr::Member(_) => MessageShape::Unresolvable,
        other => MessageShape::Unsupported(shape_name(other)),
    }
}

/// Resolve the static text of a message expression.
pub fn resolve_message_text(expr: &Expr) -> Result<String, UnsupportedShape> {
    match classify(expr) {
        MessageShape::StringLiteral(s) => Ok(s.value.to_string_lossy().to_string()),
        MessageShape::BinaryAdd(bin) => {
            let left = resolve_message_text(&bin.left)?;
            let right = resolve_message_text(&bin.right)?;
            Ok(left + right.as_str())
        }
        MessageShape::TemplateLiteral(tpl) => Ok(tpl
            .quasis
            .iter()
            .map(|quasi| {
                quasi
                    .cooked
                    .as_ref()
                    .map_or_else(
                        || quasi.raw.to_string(),
                        |cooked| cooked.to_string_lossy().to_string(),
                    )
            })
            .collect::<Vec<_>>()
            .join(WILDCARD)),
        MessageShape::Unresolvable => Ok(WILDCARD.to_string()),
        MessageShape::Unsupported(shape) => Err(UnsupportedShape { shape }),
    }
}

fn shape_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::Bin(_) => "binary expression",
        Expr::Cond(_) => "conditional expression",
        Expr::Arrow(_) => "arrow function",
        Expr::Fn(_) => "function expression",
        Expr::Object(_) => "object literal",
        Expr::Array(_) => "array literal",
        Expr::Unary(_) => "unary expression",
        Expr::Assign(_) => "assignment expression",
        Expr::Seq(_) => "sequence expression",
        Expr::New(_) => "new expression",
        Expr::TaggedTpl(_) => "tagged template",
        Expr::OptChain(_) => "optional chain",
        Expr::Await(_) => "await expression",
        Expr::Lit(Lit::Num(_)) => "numeric literal",
        Expr::Lit(Lit::Bool(_)) => "boolean literal",
        Expr::Lit(Lit::Null(_)) => "null literal",
        Expr::Lit(_) => "literal",
        _ => "expression",
    }
}
