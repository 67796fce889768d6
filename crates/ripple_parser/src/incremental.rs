//! Incremental reparsing of an edited text against its previous tree.

use bumpalo::Bump;
use thiserror::Error;
use tracing::debug;

use ripple_ast::node::SourceFile;
use ripple_core::text::{TextChangeRange, TextPos};

use crate::cursor::SyntaxCursor;
use crate::parser::Parser;

/// A change that does not describe how `new_text` came from the old text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReparseError {
    #[error("change span {start}..{end} is outside the old text of length {old_length}")]
    SpanOutOfRange {
        start: TextPos,
        end: TextPos,
        old_length: TextPos,
    },
    #[error("new text has length {actual}, but the change implies {expected}")]
    LengthMismatch { expected: u64, actual: u64 },
    #[error("change boundary {pos} does not fall on a character boundary")]
    NotCharBoundary { pos: TextPos },
}

/// Parse `new_text`, reusing the subtrees of `old` that the edit left alone.
///
/// `change.span` is in old-text coordinates. The new tree shares the arena
/// and interner of the old one; its node ids continue after the old tree's.
pub fn reparse<'a>(
    arena: &'a Bump,
    old: &SourceFile<'a>,
    new_text: &str,
    change: TextChangeRange,
) -> Result<SourceFile<'a>, ReparseError> {
    validate_change(old.text, new_text, change)?;
    debug!(
        file = %old.file_name,
        start = change.span.start,
        old_length = change.span.length,
        new_length = change.new_length,
        "reparsing"
    );

    // An empty tree has nothing to reuse.
    let cursor = (!old.statements.is_empty()).then(|| SyntaxCursor::new(old, change));
    let mut parser = Parser::new(arena, &old.file_name, new_text)
        .with_language_variant(old.language_variant)
        .with_interner(old.interner.clone())
        .with_cursor(cursor, old.node_count);
    let file = parser.parse_source_file_in_place();

    debug!(
        statements = file.statements.len(),
        reused = parser.reused_node_count,
        new_nodes = file.node_count - old.node_count,
        "reparse finished"
    );
    Ok(file)
}

fn validate_change(old_text: &str, new_text: &str, change: TextChangeRange) -> Result<(), ReparseError> {
    let start = change.span.start;
    let old_length = old_text.len() as TextPos;
    let end = match start.checked_add(change.span.length) {
        Some(end) if end <= old_length => end,
        _ => {
            return Err(ReparseError::SpanOutOfRange {
                start,
                end: start.saturating_add(change.span.length),
                old_length,
            })
        }
    };

    let expected = old_text.len() as u64 - u64::from(change.span.length) + u64::from(change.new_length);
    let actual = new_text.len() as u64;
    if expected != actual {
        return Err(ReparseError::LengthMismatch { expected, actual });
    }

    let new_end = u64::from(start) + u64::from(change.new_length);
    for (text, pos) in [(old_text, u64::from(start)), (old_text, u64::from(end)), (new_text, new_end)] {
        if !text.is_char_boundary(pos as usize) {
            return Err(ReparseError::NotCharBoundary { pos: pos as TextPos });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::text::TextSpan;

    fn change(start: u32, length: u32, new_length: u32) -> TextChangeRange {
        TextChangeRange::new(TextSpan::new(start, length), new_length)
    }

    #[test]
    fn span_past_the_end_is_rejected() {
        let err = validate_change("abc", "abc", change(2, 5, 5)).unwrap_err();
        assert_eq!(err, ReparseError::SpanOutOfRange { start: 2, end: 7, old_length: 3 });
    }

    #[test]
    fn span_end_overflow_is_rejected() {
        let err = validate_change("abc", "abc", change(u32::MAX, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            ReparseError::SpanOutOfRange { start: u32::MAX, end: u32::MAX, old_length: 3 }
        );
        assert!(validate_change("abc", "abc", change(1, u32::MAX, 3)).is_err());
    }

    #[test]
    fn inconsistent_new_length_is_rejected() {
        let err = validate_change("let a;", "let abc;", change(4, 1, 1)).unwrap_err();
        assert_eq!(err, ReparseError::LengthMismatch { expected: 6, actual: 8 });
    }

    #[test]
    fn split_characters_are_rejected() {
        let err = validate_change("'é'", "'e'", change(2, 1, 0)).unwrap_err();
        assert!(matches!(err, ReparseError::NotCharBoundary { .. }));
    }

    #[test]
    fn consistent_change_is_accepted() {
        assert!(validate_change("let a;", "let abc;", change(4, 1, 3)).is_ok());
        assert!(validate_change("", "x", change(0, 0, 1)).is_ok());
    }
}
