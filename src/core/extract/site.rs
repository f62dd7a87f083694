//! Message site and descriptor data collected during extraction.

use swc_ecma_ast::{Expr, Lit, Prop, PropName, PropOrSpread};

/// One occurrence of a candidate localizable message.
///
/// Created while walking a single file's AST and consumed immediately by the
/// aggregator; sites are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSite {
    /// Resolved message text. Non-literal fragments are represented by the
    /// `*` wildcard. `None` for comment-directive sites.
    pub message: Option<String>,
    /// Key given by an `i18n-extract <key>` comment directive. Overrides
    /// derived keys during aggregation.
    pub explicit_key: Option<String>,
    pub file: String,
    /// 1-based source position of the call or comment.
    pub line: usize,
    pub column: usize,
    pub descriptor: Option<Descriptor>,
}

impl MessageSite {
    /// The message locale this site was authored in, if declared.
    pub fn message_locale(&self) -> Option<&str> {
        self.descriptor
            .as_ref()
            .and_then(|d| d.message_locale.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.descriptor
            .as_ref()
            .and_then(|d| d.description.as_deref())
    }
}

/// Recognized options from the descriptor argument following the message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Descriptor {
    pub description: Option<String>,
    pub message_locale: Option<String>,
}

/// Parse the descriptor argument of a marker call.
///
/// Only an object literal whose properties all have literal values counts;
/// anything else (spreads, computed keys, non-literal values) yields `None`
/// and the site simply carries no descriptor.
pub fn parse_descriptor(expr: &Expr) -> Option<Descriptor> {
    let Expr::Object(object) = expr else {
        return None;
    };

    let mut descriptor = Descriptor::default();
    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            return None;
        };
        let Prop::KeyValue(key_value) = prop.as_ref() else {
            return None;
        };
        let name = match &key_value.key {
            PropName::Ident(ident) => ident.sym.to_string(),
            PropName::Str(s) => s.value.to_string_lossy().to_string(),
            _ => return None,
        };
        let value = literal_text(&key_value.value)?;
        match name.as_str() {
            "description" => descriptor.description = Some(value),
            "messageLocale" => descriptor.message_locale = Some(value),
            // Unrecognized options are tolerated but not recorded
            _ => {}
        }
    }
    Some(descriptor)
}

fn literal_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => Some(s.value.to_string_lossy().to_string()),
        Expr::Lit(Lit::Num(n)) => Some(n.value.to_string()),
        Expr::Lit(Lit::Bool(b)) => Some(b.value.to_string()),
        _ => None,
    }
}
