//! The scanner.
//!
//! Converts UTF-8 source text into tokens on demand. All positions are byte
//! offsets into the full text, also when scanning is limited to a window of
//! it. The parser owns the grammar decisions: it asks the scanner to re-read
//! the current token in another lexical mode (regex instead of divide, merged
//! `>` operators, template continuations, tag text) when the grammar says so.
//!
//! Lexical errors are collected with their location and drained by the
//! parser after every scan.

use crate::char_codes::*;
use crate::token::{RescanMode, ScanError, ScannerState};
use ripple_ast::{SyntaxKind, TokenFlags};
use ripple_diagnostics::{messages, DiagnosticMessage};

/// The scanner converts source text into tokens.
pub struct Scanner<'a> {
    /// The full source text.
    text: &'a str,
    /// Exclusive end of the scanned window.
    end: usize,
    /// Current position (end of the current token).
    pos: usize,
    /// Start of the current token including leading trivia.
    full_start: usize,
    /// Start of the current token (after trivia).
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// The cooked value of the current token.
    token_value: String,
    /// Token flags for the current token.
    token_flags: TokenFlags,
    errors: Vec<ScanError>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over the whole of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            end: text.len(),
            pos: 0,
            full_start: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            errors: Vec::new(),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Restrict scanning to `text[start..start + length]` and move to `start`.
    pub fn set_text_window(&mut self, start: usize, length: usize) {
        let start = start.min(self.text.len());
        self.end = start.saturating_add(length).min(self.text.len());
        self.reset_to(start);
    }

    /// Forget the current token and continue scanning at `pos`.
    pub fn reset_to(&mut self, pos: usize) {
        debug_assert!(self.text.is_char_boundary(pos));
        self.pos = pos.min(self.end);
        self.full_start = self.pos;
        self.token_start = self.pos;
        self.token = SyntaxKind::Unknown;
        self.token_value.clear();
        self.token_flags = TokenFlags::NONE;
    }

    // ========================================================================
    // Current token
    // ========================================================================

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// The cooked value of the current token: identifier names with escapes
    /// resolved, string and template contents without quotes.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// The raw source text of the current token.
    pub fn token_text(&self) -> &'a str {
        self.text.get(self.token_start..self.pos).unwrap_or_default()
    }

    #[inline]
    pub fn full_start(&self) -> usize {
        self.full_start
    }

    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn has_unicode_escape(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNICODE_ESCAPE)
    }

    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    /// Identifiers and contextual keywords. Reserved words are excluded.
    pub fn is_identifier(&self) -> bool {
        self.token == SyntaxKind::Identifier
            || (self.token > SyntaxKind::LAST_RESERVED_WORD && self.token <= SyntaxKind::LAST_KEYWORD)
    }

    pub fn is_reserved_word(&self) -> bool {
        self.token >= SyntaxKind::FIRST_RESERVED_WORD && self.token <= SyntaxKind::LAST_RESERVED_WORD
    }

    // ========================================================================
    // Errors and bookmarks
    // ========================================================================

    /// Errors recorded since the last drain, in source order of discovery.
    pub fn drain_errors(&mut self) -> std::vec::Drain<'_, ScanError> {
        self.errors.drain(..)
    }

    pub fn has_pending_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn error(&mut self, message: DiagnosticMessage, start: usize, length: usize) {
        self.errors.push(ScanError {
            message,
            start: start as u32,
            length: length as u32,
        });
    }

    pub fn save_state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            full_start: self.full_start,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            error_count: self.errors.len(),
        }
    }

    pub fn restore_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.full_start = state.full_start;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_value = state.token_value;
        self.token_flags = state.token_flags;
        self.errors.truncate(state.error_count);
    }

    /// Run `f`, then rewind to the state before the call.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.save_state();
        let result = f(self);
        self.restore_state(state);
        result
    }

    /// Run `f` and rewind only when it returns `None`.
    pub fn try_scan<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let state = self.save_state();
        let result = f(self);
        if result.is_none() {
            self.restore_state(state);
        }
        result
    }

    // ========================================================================
    // Low-level access
    // ========================================================================

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        if pos < self.end {
            Some(self.text.as_bytes()[pos])
        } else {
            None
        }
    }

    #[inline]
    fn peek(&self, offset: usize) -> Option<u8> {
        self.byte_at(self.pos + offset)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..self.end).and_then(|s| s.chars().next())
    }

    #[inline]
    fn window(&self) -> &'a [u8] {
        &self.text.as_bytes()[..self.end]
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_trivia(&mut self) {
        if self.pos == 0 && self.text[..self.end].starts_with("#!") {
            self.pos = self.line_end_from(self.pos);
        }
        while let Some(b) = self.byte_at(self.pos) {
            match b {
                b'\n' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                b'\r' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                    if self.byte_at(self.pos) == Some(b'\n') {
                        self.pos += 1;
                    }
                }
                b' ' | b'\t' | 0x0B | 0x0C => self.pos += 1,
                b'/' => match self.peek(1) {
                    Some(b'/') => {
                        self.pos = self.line_end_from(self.pos + 2);
                    }
                    Some(b'*') => self.skip_multi_line_comment(),
                    _ => return,
                },
                b'<' | b'>' | b'=' | b'|' if self.is_conflict_marker_trivia(self.pos) => {
                    self.skip_conflict_marker_trivia();
                }
                _ if !b.is_ascii() => {
                    let Some(ch) = self.char_at(self.pos) else { return };
                    if is_line_break(ch) {
                        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    } else if !is_white_space_single_line(ch) {
                        return;
                    }
                    self.pos += ch.len_utf8();
                }
                _ => return,
            }
        }
    }

    /// Position of the next line terminator at or after `from`, or the
    /// window end.
    fn line_end_from(&self, from: usize) -> usize {
        let bytes = self.window();
        match bytes.get(from..) {
            Some(rest) => find_line_break(rest).map_or(self.end, |i| from + i),
            None => self.end,
        }
    }

    fn skip_multi_line_comment(&mut self) {
        let start = self.pos;
        let bytes = self.window();
        let is_jsdoc = self.peek(2) == Some(b'*') && self.peek(3) != Some(b'/');
        let body_start = start + 2;
        let comment_end = match memchr::memmem::find(&bytes[body_start..], b"*/") {
            Some(i) => body_start + i + 2,
            None => {
                self.error(messages::ASTERISK_SLASH_EXPECTED, self.end, 0);
                self.end
            }
        };
        if find_line_break(&bytes[start..comment_end]).is_some() {
            self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
        }
        if is_jsdoc {
            self.token_flags |= TokenFlags::PRECEDING_JSDOC_COMMENT;
        }
        self.pos = comment_end;
    }

    fn is_conflict_marker_trivia(&self, pos: usize) -> bool {
        let bytes = self.window();
        if pos > 0 && !matches!(bytes[pos - 1], b'\n' | b'\r') {
            return false;
        }
        if pos + MERGE_CONFLICT_MARKER_LENGTH > bytes.len() {
            return false;
        }
        let ch = bytes[pos];
        if !(1..MERGE_CONFLICT_MARKER_LENGTH).all(|i| bytes[pos + i] == ch) {
            return false;
        }
        ch == b'=' || bytes.get(pos + MERGE_CONFLICT_MARKER_LENGTH) == Some(&b' ')
    }

    fn skip_conflict_marker_trivia(&mut self) {
        self.error(
            messages::MERGE_CONFLICT_MARKER_ENCOUNTERED,
            self.pos,
            MERGE_CONFLICT_MARKER_LENGTH,
        );
        let ch = self.window()[self.pos];
        if ch == b'<' || ch == b'>' {
            self.pos = self.line_end_from(self.pos);
            return;
        }
        // `|||||||` and `=======` open a region that runs to the next
        // `=======` or `>>>>>>>` marker.
        while let Some(b) = self.byte_at(self.pos) {
            if (b == b'=' || b == b'>') && b != ch && self.is_conflict_marker_trivia(self.pos) {
                break;
            }
            self.pos += 1;
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();
        self.skip_trivia();
        self.token_start = self.pos;
        self.token = match self.byte_at(self.pos) {
            None => SyntaxKind::EndOfFileToken,
            Some(b) => self.scan_token(b),
        };
        self.token
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    /// Consume `len` bytes and return `kind`.
    fn take(&mut self, len: usize, kind: SyntaxKind) -> SyntaxKind {
        self.pos += len;
        kind
    }

    fn scan_token(&mut self, b: u8) -> SyntaxKind {
        match b {
            b'(' => self.single(SyntaxKind::OpenParenToken),
            b')' => self.single(SyntaxKind::CloseParenToken),
            b'{' => self.single(SyntaxKind::OpenBraceToken),
            b'}' => self.single(SyntaxKind::CloseBraceToken),
            b'[' => self.single(SyntaxKind::OpenBracketToken),
            b']' => self.single(SyntaxKind::CloseBracketToken),
            b';' => self.single(SyntaxKind::SemicolonToken),
            b',' => self.single(SyntaxKind::CommaToken),
            b'~' => self.single(SyntaxKind::TildeToken),
            b'@' => self.single(SyntaxKind::AtToken),
            b':' => self.single(SyntaxKind::ColonToken),
            b'#' => self.scan_hash(),
            b'.' => self.scan_dot(),
            b'?' => self.scan_question(),
            b'<' => self.scan_less_than(),
            b'>' => self.single(SyntaxKind::GreaterThanToken),
            b'=' => self.scan_equals(),
            b'!' => self.scan_exclamation(),
            b'+' => self.scan_operator(b'+', SyntaxKind::PlusToken, SyntaxKind::PlusPlusToken, SyntaxKind::PlusEqualsToken),
            b'-' => self.scan_operator(b'-', SyntaxKind::MinusToken, SyntaxKind::MinusMinusToken, SyntaxKind::MinusEqualsToken),
            b'*' => self.scan_asterisk(),
            b'/' => self.scan_slash(),
            b'%' => self.scan_with_equals(SyntaxKind::PercentToken, SyntaxKind::PercentEqualsToken),
            b'^' => self.scan_with_equals(SyntaxKind::CaretToken, SyntaxKind::CaretEqualsToken),
            b'&' => self.scan_logical(b'&', SyntaxKind::AmpersandToken, SyntaxKind::AmpersandEqualsToken, SyntaxKind::AmpersandAmpersandToken, SyntaxKind::AmpersandAmpersandEqualsToken),
            b'|' => self.scan_logical(b'|', SyntaxKind::BarToken, SyntaxKind::BarEqualsToken, SyntaxKind::BarBarToken, SyntaxKind::BarBarEqualsToken),
            b'\'' | b'"' => self.scan_string_literal(b),
            b'`' => self.scan_template(true),
            b'0'..=b'9' => self.scan_number(),
            b'\\' => self.scan_escaped_identifier_start(),
            _ if b.is_ascii_alphabetic() || b == b'_' || b == b'$' => self.scan_identifier(),
            _ => {
                let ch = self.char_at(self.pos).unwrap_or('\u{FFFD}');
                if is_identifier_start(ch) {
                    self.scan_identifier()
                } else {
                    let len = ch.len_utf8();
                    self.error(messages::INVALID_CHARACTER, self.pos, len);
                    self.take(len, SyntaxKind::Unknown)
                }
            }
        }
    }

    fn scan_hash(&mut self) -> SyntaxKind {
        match self.char_at(self.pos + 1) {
            Some(ch) if is_identifier_start(ch) => {
                self.pos += 1;
                self.scan_identifier();
                self.token_value.insert(0, '#');
                SyntaxKind::PrivateIdentifier
            }
            _ => {
                self.error(messages::INVALID_CHARACTER, self.pos, 1);
                self.single(SyntaxKind::Unknown)
            }
        }
    }

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.peek(1) == Some(b'.') && self.peek(2) == Some(b'.') {
            self.take(3, SyntaxKind::DotDotDotToken)
        } else if self.peek(1).is_some_and(|b| b.is_ascii_digit()) {
            self.scan_number()
        } else {
            self.single(SyntaxKind::DotToken)
        }
    }

    fn scan_question(&mut self) -> SyntaxKind {
        match (self.peek(1), self.peek(2)) {
            (Some(b'?'), Some(b'=')) => self.take(3, SyntaxKind::QuestionQuestionEqualsToken),
            (Some(b'?'), _) => self.take(2, SyntaxKind::QuestionQuestionToken),
            // `a?.5:b` is a conditional, not an optional chain.
            (Some(b'.'), next) if !next.is_some_and(|b| b.is_ascii_digit()) => {
                self.take(2, SyntaxKind::QuestionDotToken)
            }
            _ => self.single(SyntaxKind::QuestionToken),
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        match (self.peek(1), self.peek(2)) {
            (Some(b'<'), Some(b'=')) => self.take(3, SyntaxKind::LessThanLessThanEqualsToken),
            (Some(b'<'), _) => self.take(2, SyntaxKind::LessThanLessThanToken),
            (Some(b'='), _) => self.take(2, SyntaxKind::LessThanEqualsToken),
            _ => self.single(SyntaxKind::LessThanToken),
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        match (self.peek(1), self.peek(2)) {
            (Some(b'='), Some(b'=')) => self.take(3, SyntaxKind::EqualsEqualsEqualsToken),
            (Some(b'='), _) => self.take(2, SyntaxKind::EqualsEqualsToken),
            (Some(b'>'), _) => self.take(2, SyntaxKind::EqualsGreaterThanToken),
            _ => self.single(SyntaxKind::EqualsToken),
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        match (self.peek(1), self.peek(2)) {
            (Some(b'='), Some(b'=')) => self.take(3, SyntaxKind::ExclamationEqualsEqualsToken),
            (Some(b'='), _) => self.take(2, SyntaxKind::ExclamationEqualsToken),
            _ => self.single(SyntaxKind::ExclamationToken),
        }
    }

    /// `+`, `++`, `+=` and the `-` equivalents.
    fn scan_operator(&mut self, ch: u8, single: SyntaxKind, double: SyntaxKind, assign: SyntaxKind) -> SyntaxKind {
        match self.peek(1) {
            Some(b) if b == ch => self.take(2, double),
            Some(b'=') => self.take(2, assign),
            _ => self.single(single),
        }
    }

    fn scan_with_equals(&mut self, single: SyntaxKind, assign: SyntaxKind) -> SyntaxKind {
        if self.peek(1) == Some(b'=') {
            self.take(2, assign)
        } else {
            self.single(single)
        }
    }

    /// `&`, `&=`, `&&`, `&&=` and the `|` equivalents.
    fn scan_logical(
        &mut self,
        ch: u8,
        single: SyntaxKind,
        assign: SyntaxKind,
        double: SyntaxKind,
        double_assign: SyntaxKind,
    ) -> SyntaxKind {
        match (self.peek(1), self.peek(2)) {
            (Some(b), Some(b'=')) if b == ch => self.take(3, double_assign),
            (Some(b), _) if b == ch => self.take(2, double),
            (Some(b'='), _) => self.take(2, assign),
            _ => self.single(single),
        }
    }

    fn scan_asterisk(&mut self) -> SyntaxKind {
        match (self.peek(1), self.peek(2)) {
            (Some(b'*'), Some(b'=')) => self.take(3, SyntaxKind::AsteriskAsteriskEqualsToken),
            (Some(b'*'), _) => self.take(2, SyntaxKind::AsteriskAsteriskToken),
            (Some(b'='), _) => self.take(2, SyntaxKind::AsteriskEqualsToken),
            _ => self.single(SyntaxKind::AsteriskToken),
        }
    }

    fn scan_slash(&mut self) -> SyntaxKind {
        // Comments were consumed as trivia; this is division until the
        // parser asks for a regex rescan.
        self.scan_with_equals(SyntaxKind::SlashToken, SyntaxKind::SlashEqualsToken)
    }

    // ========================================================================
    // Strings and templates
    // ========================================================================

    fn scan_string_literal(&mut self, quote: u8) -> SyntaxKind {
        self.pos += 1;
        let mut chunk = self.pos;
        loop {
            match self.byte_at(self.pos) {
                None | Some(b'\n') | Some(b'\r') => {
                    self.push_chunk(chunk);
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(messages::UNTERMINATED_STRING_LITERAL, self.pos, 0);
                    break;
                }
                Some(b) if b == quote => {
                    self.push_chunk(chunk);
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    self.push_chunk(chunk);
                    self.scan_escape_sequence(false);
                    chunk = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
        SyntaxKind::StringLiteral
    }

    /// Append `text[chunk..pos]` to the token value.
    fn push_chunk(&mut self, chunk: usize) {
        if let Some(s) = self.text.get(chunk..self.pos) {
            self.token_value.push_str(s);
        }
    }

    /// Scan a template starting at `` ` `` or, for a continuation, at `}`.
    fn scan_template(&mut self, starts_with_backtick: bool) -> SyntaxKind {
        self.pos += 1;
        let mut chunk = self.pos;
        loop {
            match self.byte_at(self.pos) {
                None => {
                    self.push_chunk(chunk);
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(messages::UNTERMINATED_TEMPLATE_LITERAL, self.pos, 0);
                    return if starts_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                Some(b'`') => {
                    self.push_chunk(chunk);
                    self.pos += 1;
                    return if starts_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                Some(b'$') if self.peek(1) == Some(b'{') => {
                    self.push_chunk(chunk);
                    self.pos += 2;
                    return if starts_with_backtick {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                Some(b'\\') => {
                    self.push_chunk(chunk);
                    self.scan_escape_sequence(true);
                    chunk = self.pos;
                }
                Some(b'\r') => {
                    // Template values normalize CRLF and CR to LF.
                    self.push_chunk(chunk);
                    self.pos += 1;
                    if self.byte_at(self.pos) == Some(b'\n') {
                        self.pos += 1;
                    }
                    self.token_value.push('\n');
                    chunk = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Decode the escape sequence at `pos` (a backslash) into the token value.
    /// Inside templates malformed escapes are flagged instead of reported,
    /// since tagged templates may contain them.
    fn scan_escape_sequence(&mut self, in_template: bool) {
        let start = self.pos;
        self.pos += 1;
        let Some(ch) = self.char_at(self.pos) else {
            self.error(messages::UNEXPECTED_END_OF_TEXT, self.pos, 0);
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            '0' if !self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) => {
                self.token_value.push('\0');
            }
            '0'..='7' => {
                if in_template {
                    self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                }
                // Legacy octal escape: up to three octal digits.
                let mut value = ch as u32 - '0' as u32;
                for _ in 0..2 {
                    match self.byte_at(self.pos) {
                        Some(b) if is_octal_digit(b) && value * 8 + u32::from(b - b'0') <= 0xFF => {
                            value = value * 8 + u32::from(b - b'0');
                            self.pos += 1;
                        }
                        _ => break,
                    }
                }
                self.token_value.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
            }
            '8' | '9' => {
                if in_template {
                    self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                }
                self.token_value.push(ch);
            }
            'b' => self.token_value.push('\u{0008}'),
            't' => self.token_value.push('\t'),
            'n' => self.token_value.push('\n'),
            'v' => self.token_value.push('\u{000B}'),
            'f' => self.token_value.push('\u{000C}'),
            'r' => self.token_value.push('\r'),
            'x' => match self.scan_exact_hex_digits(2) {
                Some(value) => self.token_value.push(char::from_u32(value).unwrap_or('\u{FFFD}')),
                None => self.invalid_escape(start, in_template, messages::HEXADECIMAL_DIGIT_EXPECTED),
            },
            'u' => {
                let error_count = self.errors.len();
                match self.scan_unicode_escape_value() {
                    Some(value) => self.token_value.push(char::from_u32(value).unwrap_or('\u{FFFD}')),
                    None if in_template => {
                        self.errors.truncate(error_count);
                        self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                        self.push_raw_escape(start);
                    }
                    None => {}
                }
            }
            // Line continuation.
            '\r' => {
                if self.byte_at(self.pos) == Some(b'\n') {
                    self.pos += 1;
                }
            }
            '\n' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {}
            _ => self.token_value.push(ch),
        }
    }

    fn invalid_escape(&mut self, start: usize, in_template: bool, message: DiagnosticMessage) {
        if in_template {
            self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
        } else {
            self.error(message, self.pos, 1);
        }
        self.push_raw_escape(start);
    }

    fn push_raw_escape(&mut self, start: usize) {
        if let Some(raw) = self.text.get(start..self.pos) {
            self.token_value.push_str(raw);
        }
    }

    /// Exactly `count` hex digits.
    fn scan_exact_hex_digits(&mut self, count: usize) -> Option<u32> {
        let mut value = 0u32;
        for i in 0..count {
            let digit = self.byte_at(self.pos + i).and_then(|b| (b as char).to_digit(16))?;
            value = value * 16 + digit;
        }
        self.pos += count;
        Some(value)
    }

    /// The part of a `\u` escape after the `u`: `XXXX` or `{X...}`.
    fn scan_unicode_escape_value(&mut self) -> Option<u32> {
        if self.byte_at(self.pos) != Some(b'{') {
            let value = self.scan_exact_hex_digits(4);
            if value.is_none() {
                self.error(messages::HEXADECIMAL_DIGIT_EXPECTED, self.pos, 1);
            }
            return value;
        }
        self.pos += 1;
        self.token_flags |= TokenFlags::EXTENDED_UNICODE_ESCAPE;
        let digits_start = self.pos;
        let mut value: u32 = 0;
        let mut overflow = false;
        while let Some(digit) = self.byte_at(self.pos).and_then(|b| (b as char).to_digit(16)) {
            value = value.saturating_mul(16).saturating_add(digit);
            overflow |= value > 0x10FFFF;
            self.pos += 1;
        }
        if self.pos == digits_start {
            self.error(messages::HEXADECIMAL_DIGIT_EXPECTED, self.pos, 1);
            return None;
        }
        if overflow {
            self.error(
                messages::AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF,
                digits_start,
                self.pos - digits_start,
            );
            return None;
        }
        if self.byte_at(self.pos) != Some(b'}') {
            self.error(messages::UNTERMINATED_UNICODE_ESCAPE_SEQUENCE, self.pos, 0);
            return None;
        }
        self.pos += 1;
        Some(value)
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        if self.byte_at(start) == Some(b'0') {
            match self.peek(1) {
                Some(b'x' | b'X') => {
                    self.pos += 2;
                    self.token_flags |= TokenFlags::HEX_SPECIFIER;
                    return self.scan_radix_digits(start, 16, messages::HEXADECIMAL_DIGIT_EXPECTED);
                }
                Some(b'b' | b'B') => {
                    self.pos += 2;
                    self.token_flags |= TokenFlags::BINARY_SPECIFIER;
                    return self.scan_radix_digits(start, 2, messages::BINARY_DIGIT_EXPECTED);
                }
                Some(b'o' | b'O') => {
                    self.pos += 2;
                    self.token_flags |= TokenFlags::OCTAL_SPECIFIER;
                    return self.scan_radix_digits(start, 8, messages::OCTAL_DIGIT_EXPECTED);
                }
                Some(b) if b.is_ascii_digit() && self.is_legacy_octal(start + 1) => {
                    self.pos += 1;
                    while self.byte_at(self.pos).is_some_and(is_octal_digit) {
                        self.pos += 1;
                    }
                    self.token_flags |= TokenFlags::OCTAL;
                    self.push_chunk(start);
                    return SyntaxKind::NumericLiteral;
                }
                _ => {}
            }
        }

        self.scan_digits();
        if self.byte_at(self.pos) == Some(b'.') {
            self.pos += 1;
            self.scan_digits();
        }
        let mut is_decimal_integer = !self.text[start..self.pos].contains('.');
        if let Some(b'e' | b'E') = self.byte_at(self.pos) {
            self.pos += 1;
            self.token_flags |= TokenFlags::SCIENTIFIC;
            is_decimal_integer = false;
            if let Some(b'+' | b'-') = self.byte_at(self.pos) {
                self.pos += 1;
            }
            if !self.scan_digits() {
                self.error(messages::DIGIT_EXPECTED, self.pos, 0);
            }
        }
        if is_decimal_integer && self.byte_at(self.pos) == Some(b'n') {
            self.pos += 1;
            self.push_chunk(start);
            return SyntaxKind::BigIntLiteral;
        }
        self.push_chunk(start);
        SyntaxKind::NumericLiteral
    }

    /// `0` followed only by octal digits, e.g. `0777`.
    fn is_legacy_octal(&self, from: usize) -> bool {
        let bytes = self.window();
        let mut i = from;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            if !is_octal_digit(bytes[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Decimal digits with `_` separators. Returns whether any digit was seen.
    fn scan_digits(&mut self) -> bool {
        let start = self.pos;
        while let Some(b) = self.byte_at(self.pos) {
            if b == b'_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
            } else if !b.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }
        self.pos > start
    }

    fn scan_radix_digits(&mut self, start: usize, radix: u32, missing: DiagnosticMessage) -> SyntaxKind {
        let digits_start = self.pos;
        while let Some(b) = self.byte_at(self.pos) {
            if b == b'_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
            } else if (b as char).to_digit(radix).is_none() {
                break;
            }
            self.pos += 1;
        }
        if self.pos == digits_start {
            self.error(missing, self.pos, 1);
        }
        let kind = if self.byte_at(self.pos) == Some(b'n') {
            self.pos += 1;
            SyntaxKind::BigIntLiteral
        } else {
            SyntaxKind::NumericLiteral
        };
        self.push_chunk(start);
        kind
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        if let Some(ch) = self.char_at(self.pos) {
            self.pos += ch.len_utf8();
        }
        loop {
            match self.byte_at(self.pos) {
                Some(b) if b.is_ascii_alphanumeric() || b == b'_' || b == b'$' => self.pos += 1,
                Some(b'\\') => {
                    self.push_chunk(start);
                    return self.scan_identifier_with_escapes();
                }
                Some(b) if !b.is_ascii() => match self.char_at(self.pos) {
                    Some(ch) if is_identifier_part(ch) => self.pos += ch.len_utf8(),
                    _ => break,
                },
                _ => break,
            }
        }
        let text = &self.text[start..self.pos];
        self.token_value.push_str(text);
        SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_escaped_identifier_start(&mut self) -> SyntaxKind {
        let start = self.pos;
        match self.peek_unicode_escape() {
            Some(ch) if is_identifier_start(ch) => self.scan_identifier_with_escapes(),
            _ => {
                self.error(messages::INVALID_CHARACTER, start, 1);
                self.single(SyntaxKind::Unknown)
            }
        }
    }

    /// Continue an identifier whose value so far is in `token_value`.
    /// Escaped keywords stay plain identifiers.
    fn scan_identifier_with_escapes(&mut self) -> SyntaxKind {
        loop {
            match self.char_at(self.pos) {
                Some('\\') => match self.peek_unicode_escape() {
                    Some(ch) if is_identifier_part(ch) => {
                        self.pos += 2;
                        self.scan_unicode_escape_value();
                        self.token_value.push(ch);
                        self.token_flags |= TokenFlags::UNICODE_ESCAPE;
                    }
                    _ => break,
                },
                Some(ch) if is_identifier_part(ch) => {
                    self.token_value.push(ch);
                    self.pos += ch.len_utf8();
                }
                _ => break,
            }
        }
        SyntaxKind::Identifier
    }

    /// The character denoted by a `\u` escape at `pos`, without consuming it.
    fn peek_unicode_escape(&mut self) -> Option<char> {
        if self.byte_at(self.pos) != Some(b'\\') || self.byte_at(self.pos + 1) != Some(b'u') {
            return None;
        }
        let state = self.save_state();
        self.pos += 2;
        let value = self.scan_unicode_escape_value();
        self.restore_state(state);
        value.and_then(char::from_u32)
    }

    // ========================================================================
    // Rescanning
    // ========================================================================

    /// Re-read the current token in another lexical mode.
    pub fn rescan(&mut self, mode: RescanMode) -> SyntaxKind {
        match mode {
            RescanMode::Slash => self.rescan_slash(),
            RescanMode::GreaterThan => self.rescan_greater_than(),
            RescanMode::LessThan => {
                if self.token == SyntaxKind::LessThanLessThanToken {
                    self.pos = self.token_start + 1;
                    self.token = SyntaxKind::LessThanToken;
                }
                self.token
            }
            RescanMode::TemplateContinuation => {
                debug_assert_eq!(self.token, SyntaxKind::CloseBraceToken);
                self.pos = self.token_start;
                self.token_value.clear();
                self.token = self.scan_template(false);
                self.token
            }
            RescanMode::JsxText => {
                self.pos = self.full_start;
                self.scan_jsx_token()
            }
            RescanMode::JsxIdentifier => self.rescan_jsx_identifier(),
        }
    }

    fn rescan_slash(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        self.pos = self.token_start + 1;
        let mut in_character_class = false;
        loop {
            let Some(ch) = self.char_at(self.pos) else {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL, self.token_start, self.pos - self.token_start);
                break;
            };
            if is_line_break(ch) {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL, self.token_start, self.pos - self.token_start);
                break;
            }
            self.pos += ch.len_utf8();
            match ch {
                '\\' => {
                    if let Some(next) = self.char_at(self.pos).filter(|c| !is_line_break(*c)) {
                        self.pos += next.len_utf8();
                    }
                }
                '[' => in_character_class = true,
                ']' => in_character_class = false,
                '/' if !in_character_class => {
                    while let Some(flag) = self.char_at(self.pos).filter(|c| is_identifier_part(*c)) {
                        self.pos += flag.len_utf8();
                    }
                    break;
                }
                _ => {}
            }
        }
        self.token_value.clear();
        self.push_chunk(self.token_start);
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    /// Merge `>` with following `>` and `=` characters into `>=`, `>>`,
    /// `>>=`, `>>>` or `>>>=`. The scanner never produces these itself so that
    /// `a<b<c>>` closes two type argument lists.
    fn rescan_greater_than(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::GreaterThanToken {
            return self.token;
        }
        self.token = match (self.peek(0), self.peek(1), self.peek(2)) {
            (Some(b'>'), Some(b'>'), Some(b'=')) => self.take(3, SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
            (Some(b'>'), Some(b'>'), _) => self.take(2, SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
            (Some(b'>'), Some(b'='), _) => self.take(2, SyntaxKind::GreaterThanGreaterThanEqualsToken),
            (Some(b'>'), _, _) => self.take(1, SyntaxKind::GreaterThanGreaterThanToken),
            (Some(b'='), _, _) => self.take(1, SyntaxKind::GreaterThanEqualsToken),
            _ => SyntaxKind::GreaterThanToken,
        };
        self.token
    }

    // ========================================================================
    // Tag markup
    // ========================================================================

    /// Scan a token between tags: `<`, `</`, `{`, or a run of text.
    pub fn scan_jsx_token(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_start = self.pos;
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();
        self.token = match self.byte_at(self.pos) {
            None => SyntaxKind::EndOfFileToken,
            Some(b'<') if self.peek(1) == Some(b'/') => self.take(2, SyntaxKind::LessThanSlashToken),
            Some(b'<') => self.single(SyntaxKind::LessThanToken),
            Some(b'{') => self.single(SyntaxKind::OpenBraceToken),
            Some(_) => self.scan_jsx_text(),
        };
        self.token
    }

    fn scan_jsx_text(&mut self) -> SyntaxKind {
        let start = self.pos;
        // Whitespace containing a line break and nothing else is trivia.
        let mut saw_line_break = false;
        let mut only_whitespace = true;
        while let Some(b) = self.byte_at(self.pos) {
            match b {
                b'{' | b'<' => break,
                b'>' => {
                    self.error(messages::UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_GT, self.pos, 1);
                    only_whitespace = false;
                }
                b'}' => {
                    self.error(messages::UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_RBRACE, self.pos, 1);
                    only_whitespace = false;
                }
                b'\n' | b'\r' => {
                    if only_whitespace {
                        saw_line_break = true;
                    }
                }
                b' ' | b'\t' | 0x0B | 0x0C => {}
                _ => only_whitespace = false,
            }
            self.pos += 1;
        }
        self.push_chunk(start);
        if only_whitespace && saw_line_break {
            SyntaxKind::JsxTextAllWhiteSpaces
        } else {
            SyntaxKind::JsxText
        }
    }

    fn rescan_jsx_identifier(&mut self) -> SyntaxKind {
        let is_name = self.token == SyntaxKind::Identifier || self.token.is_keyword();
        if !is_name {
            return self.token;
        }
        loop {
            match self.char_at(self.pos) {
                Some('-') => {
                    self.token_value.push('-');
                    self.pos += 1;
                }
                Some(ch) if is_identifier_part(ch) => {
                    self.token_value.push(ch);
                    self.pos += ch.len_utf8();
                }
                _ => break,
            }
        }
        self.token = SyntaxKind::from_keyword(&self.token_value).unwrap_or(SyntaxKind::Identifier);
        self.token
    }

    /// Scan an attribute value right after `=`. Quoted values are taken
    /// verbatim: backslashes are not escapes and line breaks are allowed.
    pub fn scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        match self.byte_at(self.pos) {
            Some(quote @ (b'"' | b'\'')) => {
                self.full_start = self.pos;
                self.token_start = self.pos;
                self.token_flags = TokenFlags::NONE;
                self.token_value.clear();
                self.pos += 1;
                let body = self.pos;
                match memchr::memchr(quote, &self.window()[body..]) {
                    Some(i) => {
                        self.pos = body + i;
                        self.push_chunk(body);
                        self.pos += 1;
                    }
                    None => {
                        self.pos = self.end;
                        self.push_chunk(body);
                        self.token_flags |= TokenFlags::UNTERMINATED;
                        self.error(messages::UNTERMINATED_STRING_LITERAL, self.pos, 0);
                    }
                }
                self.token = SyntaxKind::StringLiteral;
                self.token
            }
            _ => self.scan(),
        }
    }

    // ========================================================================
    // Doc comments
    // ========================================================================

    /// Scan a token of the doc-comment tag grammar. Words are always
    /// `Identifier`; whitespace and line breaks are returned as trivia tokens.
    pub fn scan_jsdoc_token(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_start = self.pos;
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();
        let Some(ch) = self.char_at(self.pos) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };
        self.pos += ch.len_utf8();
        self.token = match ch {
            '\n' => SyntaxKind::NewLineTrivia,
            '\r' => {
                if self.byte_at(self.pos) == Some(b'\n') {
                    self.pos += 1;
                }
                SyntaxKind::NewLineTrivia
            }
            '@' => SyntaxKind::AtToken,
            '*' => SyntaxKind::AsteriskToken,
            '{' => SyntaxKind::OpenBraceToken,
            '}' => SyntaxKind::CloseBraceToken,
            '[' => SyntaxKind::OpenBracketToken,
            ']' => SyntaxKind::CloseBracketToken,
            '=' => SyntaxKind::EqualsToken,
            '.' => SyntaxKind::DotToken,
            ',' => SyntaxKind::CommaToken,
            c if is_white_space_single_line(c) => {
                while let Some(c) = self.char_at(self.pos).filter(|c| is_white_space_single_line(*c)) {
                    self.pos += c.len_utf8();
                }
                SyntaxKind::WhitespaceTrivia
            }
            c if is_identifier_start(c) => {
                while let Some(c) = self.char_at(self.pos).filter(|c| is_identifier_part(*c)) {
                    self.pos += c.len_utf8();
                }
                self.push_chunk(self.token_start);
                SyntaxKind::Identifier
            }
            _ => SyntaxKind::Unknown,
        };
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<SyntaxKind> {
        let mut scanner = Scanner::new(source);
        let mut out = Vec::new();
        while scanner.scan() != SyntaxKind::EndOfFileToken {
            out.push(scanner.token());
        }
        out
    }

    #[test]
    fn test_scan_simple_tokens() {
        assert_eq!(
            kinds("( ) { } [ ] ; , :"),
            vec![
                SyntaxKind::OpenParenToken,
                SyntaxKind::CloseParenToken,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
                SyntaxKind::OpenBracketToken,
                SyntaxKind::CloseBracketToken,
                SyntaxKind::SemicolonToken,
                SyntaxKind::CommaToken,
                SyntaxKind::ColonToken,
            ]
        );
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let mut scanner = Scanner::new("é = 'ü' + x");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!((scanner.token_start(), scanner.token_end()), (0, 2));
        assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
        assert_eq!(scanner.token_start(), 3);
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), "ü");
        assert_eq!((scanner.token_start(), scanner.token_end()), (5, 9));
        assert_eq!(scanner.scan(), SyntaxKind::PlusToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "x");
    }

    #[test]
    fn test_greater_than_is_split_until_rescanned() {
        let mut scanner = Scanner::new(">>= >");
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.token_end(), 1);
        assert_eq!(scanner.rescan(RescanMode::GreaterThan), SyntaxKind::GreaterThanGreaterThanEqualsToken);
        assert_eq!(scanner.token_end(), 3);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.rescan(RescanMode::GreaterThan), SyntaxKind::GreaterThanToken);
    }

    #[test]
    fn test_rescan_slash_as_regex() {
        let mut scanner = Scanner::new("/a[/]b/gi.x");
        assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
        assert_eq!(scanner.rescan(RescanMode::Slash), SyntaxKind::RegularExpressionLiteral);
        assert_eq!(scanner.token_value(), "/a[/]b/gi");
        assert_eq!(scanner.scan(), SyntaxKind::DotToken);
    }

    #[test]
    fn test_unterminated_regex_reports_error() {
        let mut scanner = Scanner::new("/abc\n");
        scanner.scan();
        scanner.rescan(RescanMode::Slash);
        assert!(scanner.is_unterminated());
        let errors: Vec<_> = scanner.drain_errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message.code, 1161);
        assert_eq!(errors[0].start, 0);
    }

    #[test]
    fn test_template_continuation() {
        let mut scanner = Scanner::new("`a${x}b${y}c`");
        assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
        assert_eq!(scanner.token_value(), "a");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.rescan(RescanMode::TemplateContinuation), SyntaxKind::TemplateMiddle);
        assert_eq!(scanner.token_value(), "b");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.rescan(RescanMode::TemplateContinuation), SyntaxKind::TemplateTail);
        assert_eq!(scanner.token_value(), "c");
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_string_escapes_are_cooked() {
        let mut scanner = Scanner::new(r#""a\n\x41B\u{1F600}\\""#);
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), "a\nAB\u{1F600}\\");
        assert!(!scanner.has_pending_errors());
    }

    #[test]
    fn test_unterminated_string_stops_at_line_break() {
        let mut scanner = Scanner::new("'abc\nx");
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert!(scanner.is_unterminated());
        assert_eq!(scanner.token_value(), "abc");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert!(scanner.has_preceding_line_break());
    }

    #[test]
    fn test_numeric_flags() {
        let mut scanner = Scanner::new("0x1F 1e10 0777 1_000 10n 0b");
        scanner.scan();
        assert!(scanner.token_flags().contains(TokenFlags::HEX_SPECIFIER));
        scanner.scan();
        assert!(scanner.token_flags().contains(TokenFlags::SCIENTIFIC));
        scanner.scan();
        assert!(scanner.token_flags().contains(TokenFlags::OCTAL));
        scanner.scan();
        assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_SEPARATOR));
        assert_eq!(scanner.scan(), SyntaxKind::BigIntLiteral);
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        let errors: Vec<_> = scanner.drain_errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message.code, 1177);
    }

    #[test]
    fn test_private_identifier() {
        let mut scanner = Scanner::new("#count");
        assert_eq!(scanner.scan(), SyntaxKind::PrivateIdentifier);
        assert_eq!(scanner.token_value(), "#count");
    }

    #[test]
    fn test_escaped_identifier() {
        let mut scanner = Scanner::new(r"ab\u{63}");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "abc");
        assert!(scanner.has_unicode_escape());
    }

    #[test]
    fn test_jsdoc_comment_flag() {
        let mut scanner = Scanner::new("/** doc */ x /**/ y");
        scanner.scan();
        assert!(scanner.token_flags().contains(TokenFlags::PRECEDING_JSDOC_COMMENT));
        scanner.scan();
        assert!(!scanner.token_flags().contains(TokenFlags::PRECEDING_JSDOC_COMMENT));
    }

    #[test]
    fn test_multi_line_comment_line_break() {
        let mut scanner = Scanner::new("a /*\n*/ b /* */ c");
        scanner.scan();
        scanner.scan();
        assert!(scanner.has_preceding_line_break());
        scanner.scan();
        assert!(!scanner.has_preceding_line_break());
    }

    #[test]
    fn test_unterminated_comment() {
        let mut scanner = Scanner::new("a /* b");
        scanner.scan();
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
        let errors: Vec<_> = scanner.drain_errors().collect();
        assert_eq!(errors[0].message.code, 1010);
        assert_eq!(errors[0].start, 6);
    }

    #[test]
    fn test_conflict_markers_are_trivia() {
        let source = "a\n<<<<<<< HEAD\nb\n=======\nc\n>>>>>>> branch\nd";
        assert_eq!(
            kinds(source),
            vec![SyntaxKind::Identifier, SyntaxKind::Identifier, SyntaxKind::Identifier]
        );
    }

    #[test]
    fn test_text_window() {
        let mut scanner = Scanner::new("aaa bbb ccc");
        scanner.set_text_window(4, 3);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "bbb");
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
        assert_eq!(scanner.token_start(), 7);
    }

    #[test]
    fn test_save_restore_rewinds_errors() {
        let mut scanner = Scanner::new("x 'open");
        scanner.scan();
        let state = scanner.save_state();
        scanner.scan();
        assert!(scanner.has_pending_errors());
        scanner.restore_state(state);
        assert!(!scanner.has_pending_errors());
        assert_eq!(scanner.token(), SyntaxKind::Identifier);
    }

    #[test]
    fn test_jsx_tokens() {
        let mut scanner = Scanner::new("<a>hi {x}</a>");
        assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
        assert_eq!(scanner.token_value(), "hi ");
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::OpenBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanSlashToken);
    }

    #[test]
    fn test_less_than_slash_only_in_jsx_mode() {
        assert_eq!(kinds("a </b/"), vec![
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::SlashToken,
            SyntaxKind::Identifier,
            SyntaxKind::SlashToken,
        ]);
    }

    #[test]
    fn test_jsx_identifier_and_attribute_value() {
        let mut scanner = Scanner::new(r#"data-foo="a\b""#);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.rescan(RescanMode::JsxIdentifier), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "data-foo");
        assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
        assert_eq!(scanner.scan_jsx_attribute_value(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), r"a\b");
    }

    #[test]
    fn test_jsx_whitespace_text() {
        let mut scanner = Scanner::new("  \n  <");
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxTextAllWhiteSpaces);
        let mut scanner = Scanner::new("  <");
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
    }

    #[test]
    fn test_jsdoc_tokens() {
        let mut scanner = Scanner::new("@param {T} [name]\n *");
        let mut seen = Vec::new();
        while scanner.scan_jsdoc_token() != SyntaxKind::EndOfFileToken {
            seen.push(scanner.token());
        }
        assert_eq!(
            seen,
            vec![
                SyntaxKind::AtToken,
                SyntaxKind::Identifier,
                SyntaxKind::WhitespaceTrivia,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::Identifier,
                SyntaxKind::CloseBraceToken,
                SyntaxKind::WhitespaceTrivia,
                SyntaxKind::OpenBracketToken,
                SyntaxKind::Identifier,
                SyntaxKind::CloseBracketToken,
                SyntaxKind::NewLineTrivia,
                SyntaxKind::WhitespaceTrivia,
                SyntaxKind::AsteriskToken,
            ]
        );
    }

    #[test]
    fn test_look_ahead() {
        let mut scanner = Scanner::new("let x = 1;");
        scanner.scan();
        let next = scanner.look_ahead(|s| s.scan());
        assert_eq!(next, SyntaxKind::Identifier);
        assert_eq!(scanner.token(), SyntaxKind::LetKeyword);
        assert_eq!(scanner.token_end(), 3);
    }

    #[test]
    fn test_shebang_is_skipped() {
        let mut scanner = Scanner::new("#!/usr/bin/env node\nlet x = 1;");
        assert_eq!(scanner.scan(), SyntaxKind::LetKeyword);
        assert!(scanner.has_preceding_line_break());
    }
}
