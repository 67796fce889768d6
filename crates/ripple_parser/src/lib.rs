//! ripple_parser: incremental recursive descent parser.
//!
//! Turns source text into an arena-allocated syntax tree. Errors never stop
//! a parse: they are collected as diagnostics next to a complete tree, and
//! the nodes that follow an error are marked so that [`reparse`] will not
//! reuse them.
//!
//! ```
//! use bumpalo::Bump;
//! use ripple_core::text::{TextChangeRange, TextSpan};
//! use ripple_parser::{reparse, Parser};
//!
//! let arena = Bump::new();
//! let file = Parser::new(&arena, "main.ts", "let x = 1;").parse_source_file();
//! assert!(file.parse_diagnostics.is_empty());
//!
//! // Replace `1` with `42`.
//! let change = TextChangeRange::new(TextSpan::new(8, 1), 2);
//! let edited = reparse(&arena, &file, "let x = 42;", change)?;
//! assert_eq!(edited.statements.len(), 1);
//! assert!(edited.parse_diagnostics.is_empty());
//! # Ok::<(), ripple_parser::ReparseError>(())
//! ```

mod cursor;
mod declarations;
mod expressions;
mod incremental;
mod jsdoc;
mod jsx;
mod list;
mod parser;
mod precedence;
mod statements;
mod types;
mod utilities;

use ripple_core::intern::StringInterner;
use ripple_diagnostics::Diagnostic;

pub use incremental::{reparse, ReparseError};
pub use jsdoc::parse_isolated_jsdoc_comment;
pub use parser::Parser;

/// Result of parsing a fragment rather than a whole file.
#[derive(Debug)]
pub struct Parsed<'a, T> {
    pub node: &'a T,
    pub diagnostics: Vec<Diagnostic>,
    /// Resolves the identifier and literal texts in `node`.
    pub interner: StringInterner,
}
