//! Values the scanner hands out besides the current token.

use ripple_ast::{SyntaxKind, TokenFlags};
use ripple_diagnostics::DiagnosticMessage;

/// A lexical error located in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError {
    pub message: DiagnosticMessage,
    pub start: u32,
    pub length: u32,
}

/// Lexical modes the current token can be re-read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RescanMode {
    /// `/` or `/=` as the start of a regular expression literal.
    Slash,
    /// `>` merged with following `>` and `=` characters.
    GreaterThan,
    /// `<<` split back into a single `<`.
    LessThan,
    /// `}` as the start of a template middle or tail.
    TemplateContinuation,
    /// Tag text from the start of the current token's trivia.
    JsxText,
    /// An identifier extended with `-` separated parts.
    JsxIdentifier,
}

/// A bookmark of the full scanner state.
#[derive(Debug, Clone)]
pub struct ScannerState {
    pub(crate) pos: usize,
    pub(crate) full_start: usize,
    pub(crate) token_start: usize,
    pub(crate) token: SyntaxKind,
    pub(crate) token_value: String,
    pub(crate) token_flags: TokenFlags,
    pub(crate) error_count: usize,
}

impl ScannerState {
    /// Start of the saved token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn token(&self) -> SyntaxKind {
        self.token
    }
}
