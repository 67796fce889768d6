//! Scanner integration tests.
//!
//! Tokenizes whole snippets through the public API and checks kinds, values,
//! positions and reported errors.

use ripple_ast::{SyntaxKind, TokenFlags};
use ripple_scanner::{RescanMode, Scanner};

/// Helper: scan all tokens from source and return as (kind, value) pairs.
fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_value().to_string()));
    }
    tokens
}

fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

/// Helper: error codes reported while scanning all of `source`.
fn error_codes(source: &str) -> Vec<u32> {
    let mut scanner = Scanner::new(source);
    let mut codes = Vec::new();
    while scanner.scan() != SyntaxKind::EndOfFileToken {
        codes.extend(scanner.drain_errors().map(|e| e.message.code));
    }
    codes.extend(scanner.drain_errors().map(|e| e.message.code));
    codes
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    assert!(scan_all("   \n\t  ").is_empty());
}

#[test]
fn test_numeric_literals() {
    let tokens = scan_all("42 3.14 .5 0xFF 0b1010 0o77 1_000_000");
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::NumericLiteral));
    let values: Vec<_> = tokens.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", ".5", "0xFF", "0b1010", "0o77", "1_000_000"]);
}

#[test]
fn test_bigint_literals() {
    assert_eq!(
        scan_kinds("0n 123n 0x1Fn 0b1n 0o7n"),
        vec![SyntaxKind::BigIntLiteral; 5]
    );
    // A fraction never takes the `n` suffix.
    assert_eq!(
        scan_kinds("1.5n"),
        vec![SyntaxKind::NumericLiteral, SyntaxKind::Identifier]
    );
}

#[test]
fn test_missing_exponent_digits() {
    assert_eq!(error_codes("1e+"), vec![1124]);
    assert_eq!(error_codes("0x"), vec![1125]);
    assert_eq!(error_codes("0o"), vec![1178]);
}

#[test]
fn test_string_literals() {
    let tokens = scan_all(r#""hello" 'world' '' "it\'s""#);
    let values: Vec<_> = tokens.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, vec!["hello", "world", "", "it's"]);
}

#[test]
fn test_string_line_continuation() {
    let tokens = scan_all("'a\\\nb'");
    assert_eq!(tokens, vec![(SyntaxKind::StringLiteral, "ab".to_string())]);
}

#[test]
fn test_legacy_octal_escape() {
    let tokens = scan_all(r"'\101\0'");
    assert_eq!(tokens[0].1, "A\0");
}

#[test]
fn test_invalid_unicode_escapes() {
    assert_eq!(error_codes(r"'\u{110000}'"), vec![1198]);
    assert_eq!(error_codes(r"'\u{41'"), vec![1199]);
    assert_eq!(error_codes(r"'\xZ'"), vec![1125]);
}

#[test]
fn test_template_with_invalid_escape_is_flagged() {
    let mut scanner = Scanner::new(r"`\unicode`");
    assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
}

#[test]
fn test_template_normalizes_carriage_returns() {
    let tokens = scan_all("`a\r\nb\rc`");
    assert_eq!(tokens[0].1, "a\nb\nc");
}

#[test]
fn test_unterminated_template() {
    let mut scanner = Scanner::new("`abc");
    assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.drain_errors().map(|e| e.message.code).collect::<Vec<_>>(), vec![1160]);
}

#[test]
fn test_keywords() {
    let source = "if else while for return function class interface type enum";
    assert_eq!(
        scan_kinds(source),
        vec![
            SyntaxKind::IfKeyword,
            SyntaxKind::ElseKeyword,
            SyntaxKind::WhileKeyword,
            SyntaxKind::ForKeyword,
            SyntaxKind::ReturnKeyword,
            SyntaxKind::FunctionKeyword,
            SyntaxKind::ClassKeyword,
            SyntaxKind::InterfaceKeyword,
            SyntaxKind::TypeKeyword,
            SyntaxKind::EnumKeyword,
        ]
    );
}

#[test]
fn test_contextual_keywords_count_as_identifiers() {
    let mut scanner = Scanner::new("type of if");
    scanner.scan();
    assert!(scanner.is_identifier());
    scanner.scan();
    assert!(scanner.is_identifier());
    scanner.scan();
    assert!(!scanner.is_identifier());
    assert!(scanner.is_reserved_word());
}

#[test]
fn test_escaped_keyword_is_identifier() {
    let mut scanner = Scanner::new(r"\u0069f");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "if");
}

#[test]
fn test_operators() {
    assert_eq!(
        scan_kinds("+ - * / % = == === != !== ** => ... ?. ?? ??="),
        vec![
            SyntaxKind::PlusToken,
            SyntaxKind::MinusToken,
            SyntaxKind::AsteriskToken,
            SyntaxKind::SlashToken,
            SyntaxKind::PercentToken,
            SyntaxKind::EqualsToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::AsteriskAsteriskToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::QuestionDotToken,
            SyntaxKind::QuestionQuestionToken,
            SyntaxKind::QuestionQuestionEqualsToken,
        ]
    );
}

#[test]
fn test_assignment_operators() {
    assert_eq!(
        scan_kinds("+= -= *= /= %= **= &&= ||= &= |= ^= <<="),
        vec![
            SyntaxKind::PlusEqualsToken,
            SyntaxKind::MinusEqualsToken,
            SyntaxKind::AsteriskEqualsToken,
            SyntaxKind::SlashEqualsToken,
            SyntaxKind::PercentEqualsToken,
            SyntaxKind::AsteriskAsteriskEqualsToken,
            SyntaxKind::AmpersandAmpersandEqualsToken,
            SyntaxKind::BarBarEqualsToken,
            SyntaxKind::AmpersandEqualsToken,
            SyntaxKind::BarEqualsToken,
            SyntaxKind::CaretEqualsToken,
            SyntaxKind::LessThanLessThanEqualsToken,
        ]
    );
}

#[test]
fn test_question_dot_before_digit_is_conditional() {
    assert_eq!(
        scan_kinds("a?.5:b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::ColonToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_rescan_greater_than_variants() {
    for (source, expected) in [
        (">=", SyntaxKind::GreaterThanEqualsToken),
        (">>", SyntaxKind::GreaterThanGreaterThanToken),
        (">>>", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
        (">>>=", SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
    ] {
        let mut scanner = Scanner::new(source);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.rescan(RescanMode::GreaterThan), expected, "{source}");
        assert_eq!(scanner.token_end(), source.len());
    }
}

#[test]
fn test_rescan_less_than_splits_shift() {
    let mut scanner = Scanner::new("<<T>");
    assert_eq!(scanner.scan(), SyntaxKind::LessThanLessThanToken);
    assert_eq!(scanner.rescan(RescanMode::LessThan), SyntaxKind::LessThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_regex_with_slash_equals() {
    let mut scanner = Scanner::new("/=a/g");
    assert_eq!(scanner.scan(), SyntaxKind::SlashEqualsToken);
    assert_eq!(scanner.rescan(RescanMode::Slash), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(scanner.token_text(), "/=a/g");
}

#[test]
fn test_regex_escaped_slash() {
    let mut scanner = Scanner::new(r"/a\/b/");
    scanner.scan();
    scanner.rescan(RescanMode::Slash);
    assert_eq!(scanner.token_end(), 6);
    assert!(!scanner.is_unterminated());
}

#[test]
fn test_comments_skipped() {
    assert_eq!(
        scan_kinds("a // line\nb /* block */ c"),
        vec![SyntaxKind::Identifier; 3]
    );
}

#[test]
fn test_full_start_includes_trivia() {
    let mut scanner = Scanner::new("a  /* c */ b");
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.full_start(), 1);
    assert_eq!(scanner.token_start(), 11);
}

#[test]
fn test_line_break_tracking() {
    let mut scanner = Scanner::new("a\nb c\u{2028}d");
    scanner.scan();
    assert!(!scanner.has_preceding_line_break());
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
    scanner.scan();
    assert!(!scanner.has_preceding_line_break());
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_crlf_line_breaks() {
    let mut scanner = Scanner::new("a\r\nb");
    scanner.scan();
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.token_start(), 3);
}

#[test]
fn test_unicode_whitespace_and_identifiers() {
    let tokens = scan_all("\u{00A0}café\u{3000}日本");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Identifier, "café".to_string()),
            (SyntaxKind::Identifier, "日本".to_string()),
        ]
    );
}

#[test]
fn test_invalid_character_advances_one_char() {
    let mut scanner = Scanner::new("a ☃ b");
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.token_end() - scanner.token_start(), '☃'.len_utf8());
    assert_eq!(scanner.drain_errors().count(), 1);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_conflict_marker_reported() {
    assert_eq!(error_codes("<<<<<<< HEAD\nx\n>>>>>>> other\n"), vec![1185, 1185]);
}

#[test]
fn test_not_a_conflict_marker_mid_line() {
    assert!(error_codes("a <<<<<<< b").is_empty());
}

#[test]
fn test_try_scan_keeps_successful_result() {
    let mut scanner = Scanner::new("a b c");
    scanner.scan();
    let kept = scanner.try_scan(|s| {
        s.scan();
        Some(s.token_value().to_string())
    });
    assert_eq!(kept.as_deref(), Some("b"));
    assert_eq!(scanner.token_value(), "b");

    let rewound: Option<()> = scanner.try_scan(|s| {
        s.scan();
        None
    });
    assert!(rewound.is_none());
    assert_eq!(scanner.token_value(), "b");
}

#[test]
fn test_reset_to_continues_from_offset() {
    let mut scanner = Scanner::new("let a = 1; let b = 2;");
    scanner.reset_to(11);
    assert_eq!(scanner.scan(), SyntaxKind::LetKeyword);
    assert_eq!(scanner.token_start(), 11);
}

#[test]
fn test_jsx_text_reports_stray_braces() {
    let mut scanner = Scanner::new("a > b } <");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
    let codes: Vec<_> = scanner.drain_errors().map(|e| e.message.code).collect();
    assert_eq!(codes, vec![1382, 1381]);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanToken);
}

#[test]
fn test_rescan_jsx_text_from_full_start() {
    let mut scanner = Scanner::new("<a> hello</a>");
    scanner.scan();
    scanner.scan();
    scanner.scan();
    // The parser sees `hello` as an identifier first.
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.rescan(RescanMode::JsxText), SyntaxKind::JsxText);
    assert_eq!(scanner.token_value(), " hello");
    assert_eq!(scanner.token_start(), 3);
}

#[test]
fn test_jsx_attribute_value_spans_lines() {
    let mut scanner = Scanner::new("'a\nb' x");
    assert_eq!(scanner.scan_jsx_attribute_value(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "a\nb");
    assert!(!scanner.has_pending_errors());
}
