//! Source parsing via swc.
//!
//! The extraction engine only consumes the parser's output: a module AST,
//! its comments and a source map for span → line/column lookups.

use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source unit ready for message extraction.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
    pub comments: SingleThreadedComments,
}

/// Pick a syntax for a file. TypeScript syntax covers plain JS as well;
/// `.ts` files disable TSX so generic arrow functions parse unambiguously.
fn syntax_for(file_path: &str) -> Syntax {
    Syntax::Typescript(TsSyntax {
        tsx: !file_path.ends_with(".ts"),
        ..Default::default()
    })
}

/// Parse JS/JSX/TS/TSX source code into an AST.
///
/// A malformed file is a per-file error: callers skip the file and continue
/// with the rest of the scan.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

    let comments = SingleThreadedComments::default();
    let mut parser = Parser::new(
        syntax_for(file_path),
        StringInput::from(&*source_file),
        Some(&comments),
    );
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse source: {:?}", e))?;
    Ok(ParsedSource {
        module,
        source_map,
        comments,
    })
}
