//! ripple_diagnostics: Diagnostic messages and the parse diagnostic sink.
//!
//! Diagnostics carry a located span, the message template they were built
//! from, and the arguments substituted into it. The collection is
//! append-only during a parse, collapses a diagnostic whose start equals the
//! previous one's, and can be truncated back to a snapshot length when a
//! speculative parse is rewound.

use ripple_core::text::{LineAndColumn, LineMap, TextSpan};
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Suggestion => write!(f, "suggestion"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g. 1005).
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The message template. May contain `{0}`, `{1}`, ... placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// The template this diagnostic was built from.
    pub message: DiagnosticMessage,
    /// Arguments substituted into the template.
    pub args: Vec<String>,
    /// The formatted message.
    pub message_text: String,
}

impl Diagnostic {
    /// Create a diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message: *message,
            args: args.iter().map(|a| a.to_string()).collect(),
            message_text: format_message(message.message, args),
        }
    }

    /// Create a diagnostic at a span of a file.
    pub fn with_location(
        file: Option<String>,
        span: TextSpan,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            span: Some(span),
            file,
            ..Self::new(message, args)
        }
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.message.code
    }

    #[inline]
    pub fn category(&self) -> DiagnosticCategory {
        self.message.category
    }

    /// Start offset, if located.
    #[inline]
    pub fn start(&self) -> Option<u32> {
        self.span.map(|s| s.start)
    }

    pub fn is_error(&self) -> bool {
        self.message.category == DiagnosticCategory::Error
    }

    /// Line and column of the diagnostic start.
    pub fn location(&self, line_map: &LineMap) -> Option<LineAndColumn> {
        self.span.map(|s| line_map.line_and_column_of(s.start))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(
            f,
            "{} RP{}: {}",
            self.message.category, self.message.code, self.message_text
        )
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Ordered diagnostics accumulated by one parse.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Append a diagnostic. Returns `false` when it was collapsed into the
    /// previous one because both start at the same offset.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if let (Some(last), Some(start)) = (self.diagnostics.last(), diagnostic.start()) {
            if last.start() == Some(start) {
                return false;
            }
        }
        self.diagnostics.push(diagnostic);
        true
    }

    /// Start offset of the most recent diagnostic.
    pub fn last_start(&self) -> Option<u32> {
        self.diagnostics.last().and_then(|d| d.start())
    }

    /// Drop every diagnostic recorded after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.diagnostics.truncate(len);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
    }

    // ========================================================================
    // Lexical errors
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, Error, "'*/' expected.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1124, Error, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1125, Error, "Hexadecimal digit expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1160, Error, "Unterminated template literal.");
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: DiagnosticMessage = diag!(1161, Error, "Unterminated regular expression literal.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1177, Error, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1178, Error, "Octal digit expected.");
    pub const UNTERMINATED_UNICODE_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1199, Error, "Unterminated Unicode escape sequence.");
    pub const MERGE_CONFLICT_MARKER_ENCOUNTERED: DiagnosticMessage = diag!(1185, Error, "Merge conflict marker encountered.");

    // ========================================================================
    // Expected-token errors
    // ========================================================================
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, Error, "Identifier expected.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, Error, "Unexpected token.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, Error, "Expression expected.");
    pub const TYPE_EXPECTED: DiagnosticMessage = diag!(1110, Error, "Type expected.");
    pub const UNEXPECTED_END_OF_TEXT: DiagnosticMessage = diag!(1126, Error, "Unexpected end of text.");
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = diag!(1128, Error, "Declaration or statement expected.");
    pub const CASE_OR_DEFAULT_EXPECTED: DiagnosticMessage = diag!(1130, Error, "'case' or 'default' expected.");
    pub const PROPERTY_OR_SIGNATURE_EXPECTED: DiagnosticMessage = diag!(1131, Error, "Property or signature expected.");
    pub const ENUM_MEMBER_EXPECTED: DiagnosticMessage = diag!(1132, Error, "Enum member expected.");
    pub const VARIABLE_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1134, Error, "Variable declaration expected.");
    pub const ARGUMENT_EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1135, Error, "Argument expression expected.");
    pub const PROPERTY_ASSIGNMENT_EXPECTED: DiagnosticMessage = diag!(1136, Error, "Property assignment expected.");
    pub const EXPRESSION_OR_COMMA_EXPECTED: DiagnosticMessage = diag!(1137, Error, "Expression or comma expected.");
    pub const PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1138, Error, "Parameter declaration expected.");
    pub const TYPE_PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1139, Error, "Type parameter declaration expected.");
    pub const TYPE_ARGUMENT_EXPECTED: DiagnosticMessage = diag!(1140, Error, "Type argument expected.");
    pub const OR_EXPECTED: DiagnosticMessage = diag!(1144, Error, "'{' or ';' expected.");
    pub const STATEMENT_EXPECTED: DiagnosticMessage = diag!(1129, Error, "Statement expected.");
    pub const DECLARATION_EXPECTED: DiagnosticMessage = diag!(1146, Error, "Declaration expected.");
    pub const UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED: DiagnosticMessage = diag!(1068, Error, "Unexpected token. A constructor, method, accessor, or property was expected.");
    pub const IDENTIFIER_OR_STRING_LITERAL_EXPECTED: DiagnosticMessage = diag!(1478, Error, "Identifier or string literal expected.");
    pub const PROPERTY_DESTRUCTURING_PATTERN_EXPECTED: DiagnosticMessage = diag!(1180, Error, "Property destructuring pattern expected.");
    pub const ARRAY_ELEMENT_DESTRUCTURING_PATTERN_EXPECTED: DiagnosticMessage = diag!(1181, Error, "Array element destructuring pattern expected.");
    pub const IDENTIFIER_EXPECTED_0_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE: DiagnosticMessage = diag!(1359, Error, "Identifier expected. '{0}' is a reserved word that cannot be used here.");
    pub const PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES: DiagnosticMessage = diag!(18016, Error, "Private identifiers are not allowed outside class bodies.");
    pub const AN_ENUM_MEMBER_NAME_MUST_BE_FOLLOWED_BY_A_OR: DiagnosticMessage = diag!(1357, Error, "An enum member name must be followed by a ',', '=', or '}'.");

    // ========================================================================
    // Grammar errors reported by the parser
    // ========================================================================
    pub const LINE_BREAK_NOT_PERMITTED_HERE: DiagnosticMessage = diag!(1142, Error, "Line break not permitted here.");
    pub const LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW: DiagnosticMessage = diag!(1200, Error, "Line terminator not permitted before arrow.");
    pub const DECORATORS_ARE_NOT_VALID_HERE: DiagnosticMessage = diag!(1206, Error, "Decorators are not valid here.");
    pub const _0_MODIFIER_ALREADY_SEEN: DiagnosticMessage = diag!(1030, Error, "'{0}' modifier already seen.");
    pub const A_REST_PARAMETER_MUST_BE_LAST: DiagnosticMessage = diag!(1014, Error, "A rest parameter must be last in a parameter list.");
    pub const TYPE_PARAMETER_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1098, Error, "Type parameter list cannot be empty.");
    pub const TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1099, Error, "Type argument list cannot be empty.");
    pub const FUNCTION_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_A_UNION_TYPE: DiagnosticMessage = diag!(1385, Error, "Function type notation must be parenthesized when used in a union type.");
    pub const CONSTRUCTOR_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_A_UNION_TYPE: DiagnosticMessage = diag!(1386, Error, "Constructor type notation must be parenthesized when used in a union type.");
    pub const FUNCTION_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_AN_INTERSECTION_TYPE: DiagnosticMessage = diag!(1387, Error, "Function type notation must be parenthesized when used in an intersection type.");
    pub const CONSTRUCTOR_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_AN_INTERSECTION_TYPE: DiagnosticMessage = diag!(1388, Error, "Constructor type notation must be parenthesized when used in an intersection type.");
    pub const AN_ELEMENT_ACCESS_EXPRESSION_SHOULD_TAKE_AN_ARGUMENT: DiagnosticMessage = diag!(1011, Error, "An element access expression should take an argument.");
    pub const VARIABLE_DECLARATION_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = diag!(1123, Error, "Variable declaration list cannot be empty.");
    pub const CATCH_CLAUSE_VARIABLE_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1197, Error, "Catch clause variable cannot have an initializer.");
    pub const TRY_EXPECTED_CATCH_OR_FINALLY: DiagnosticMessage = diag!(1472, Error, "'catch' or 'finally' expected.");
    pub const A_DEFAULT_CLAUSE_CANNOT_APPEAR_MORE_THAN_ONCE_IN_A_SWITCH_STATEMENT: DiagnosticMessage = diag!(1113, Error, "A 'default' clause cannot appear more than once in a 'switch' statement.");
    pub const AN_UNARY_EXPRESSION_WITH_THE_0_OPERATOR_IS_NOT_ALLOWED_IN_THE_LEFT_HAND_SIDE_OF_AN_EXPONENTIATION_EXPRESSION: DiagnosticMessage = diag!(17006, Error, "An unary expression with the '{0}' operator is not allowed in the left-hand side of an exponentiation expression. Consider enclosing the expression in parentheses.");
    pub const A_TYPE_ASSERTION_EXPRESSION_IS_NOT_ALLOWED_IN_THE_LEFT_HAND_SIDE_OF_AN_EXPONENTIATION_EXPRESSION: DiagnosticMessage = diag!(17007, Error, "A type assertion expression is not allowed in the left-hand side of an exponentiation expression. Consider enclosing the expression in parentheses.");
    pub const AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF: DiagnosticMessage = diag!(1198, Error, "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive.");

    // ========================================================================
    // Tag markup
    // ========================================================================
    pub const EXPECTED_CORRESPONDING_CLOSING_TAG_FOR_0: DiagnosticMessage = diag!(17002, Error, "Expected corresponding closing tag for '{0}'.");
    pub const EXPECTED_CORRESPONDING_CLOSING_TAG_FOR_FRAGMENT: DiagnosticMessage = diag!(17015, Error, "Expected corresponding closing tag for fragment.");
    pub const TAG_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG: DiagnosticMessage = diag!(17008, Error, "Tag element '{0}' has no corresponding closing tag.");
    pub const TAG_FRAGMENT_HAS_NO_CORRESPONDING_CLOSING_TAG: DiagnosticMessage = diag!(17014, Error, "Tag fragment has no corresponding closing tag.");
    pub const OR_TAG_ELEMENT_EXPECTED: DiagnosticMessage = diag!(1145, Error, "'{' or tag element expected.");
    pub const TAG_ELEMENTS_MUST_HAVE_ONE_PARENT_ELEMENT: DiagnosticMessage = diag!(2657, Error, "Tag expressions must have one parent element.");
    pub const TAG_ATTRIBUTES_MUST_ONLY_BE_ASSIGNED_A_NON_EMPTY_EXPRESSION: DiagnosticMessage = diag!(17000, Error, "Tag attributes must only be assigned a non-empty 'expression'.");
    pub const UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_GT: DiagnosticMessage = diag!(1382, Error, "Unexpected token. Did you mean `{'>'}` or `&gt;`?");
    pub const UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_RBRACE: DiagnosticMessage = diag!(1381, Error, "Unexpected token. Did you mean `{'}'}` or `&rbrace;`?");

    // ========================================================================
    // Doc comments
    // ========================================================================
    pub const _0_TAG_ALREADY_SPECIFIED: DiagnosticMessage = diag!(1223, Error, "'{0}' tag already specified.");
    pub const DOC_COMMENT_EXPECTED: DiagnosticMessage = diag!(1490, Error, "Doc comment must start with '/**' and end with '*/'.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: u32) -> Diagnostic {
        Diagnostic::with_location(None, TextSpan::new(start, 1), &messages::_0_EXPECTED, &[")"])
    }

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' expected.", &[";"]), "';' expected.");
        let d = Diagnostic::new(&messages::_0_EXPECTED, &["}"]);
        assert_eq!(d.message_text, "'}' expected.");
        assert_eq!(d.args, vec!["}".to_string()]);
        assert_eq!(d.code(), 1005);
    }

    #[test]
    fn test_same_start_is_collapsed() {
        let mut diags = DiagnosticCollection::new();
        assert!(diags.add(at(4)));
        assert!(!diags.add(at(4)));
        assert!(diags.add(at(5)));
        assert!(diags.add(at(4)));
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn test_truncate_rewinds() {
        let mut diags = DiagnosticCollection::new();
        diags.add(at(1));
        let mark = diags.len();
        diags.add(at(2));
        diags.add(at(3));
        diags.truncate(mark);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.last_start(), Some(1));
    }

    #[test]
    fn test_error_counting_skips_warnings() {
        const UNUSED: DiagnosticMessage = DiagnosticMessage {
            code: 6133,
            category: DiagnosticCategory::Warning,
            message: "'{0}' is declared but its value is never read.",
        };
        let mut diags = DiagnosticCollection::new();
        diags.add(Diagnostic::with_location(None, TextSpan::new(0, 1), &UNUSED, &["x"]));
        assert!(!diags.has_errors());
        diags.add(at(3));
        assert!(diags.has_errors());
        assert_eq!(diags.error_count(), 1);
    }

    #[test]
    fn test_location_uses_line_map() {
        let map = LineMap::new("a\nbc d");
        let d = at(5);
        let loc = d.location(&map).unwrap();
        assert_eq!((loc.line, loc.character), (1, 3));
    }
}
