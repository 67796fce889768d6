//! ripple_scanner: on-demand tokenizer for script source text.
//!
//! The scanner works on UTF-8 bytes and reports byte offsets. It produces
//! one token per call and leaves context decisions to the parser, which
//! rescans the current token when the grammar needs another reading of it:
//! - regular expressions instead of `/`
//! - merged `>>`, `>=`, `>>>=` operators
//! - template middles and tails
//! - tag text, dashed tag names and attribute values
//! - doc-comment tag tokens

pub mod char_codes;
mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{RescanMode, ScanError, ScannerState};
