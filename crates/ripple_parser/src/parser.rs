//! Parser state and the token-level machinery shared by every production.
//!
//! The grammar lives in sibling modules as further `impl Parser` blocks:
//! statements, declarations, expressions, types, tags and doc comments.
//! This module owns the pieces they all lean on: token consumption, error
//! reporting, node finishing, context flags and speculation.

use std::ops::{Deref, DerefMut};

use bumpalo::Bump;
use rustc_hash::FxHashSet;
use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::types::*;
use ripple_core::arena::ArenaExt;
use ripple_core::intern::StringInterner;
use ripple_core::text::{TextRange, TextSpan};
use ripple_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use ripple_scanner::{RescanMode, Scanner, ScannerState};

use crate::cursor::SyntaxCursor;
use crate::list::ParsingContext;
use crate::utilities::token_is_identifier_or_keyword;
use crate::Parsed;

/// A recursive descent parser over one source text.
///
/// A parser is single use: each entry point consumes it.
pub struct Parser<'a> {
    pub(crate) arena: &'a Bump,
    pub(crate) scanner: Scanner<'a>,
    pub(crate) file_name: String,
    pub(crate) language_variant: LanguageVariant,
    pub(crate) interner: StringInterner,
    pub(crate) context_flags: NodeFlags,
    /// Bitset of the `ParsingContext`s currently being parsed.
    pub(crate) parsing_contexts: u32,
    pub(crate) diagnostics: DiagnosticCollection,
    /// Set by every reported error; consumed by the next finished node.
    pub(crate) parse_error_before_next_finished_node: bool,
    pub(crate) node_count: u32,
    pub(crate) identifier_count: u32,
    pub(crate) cursor: Option<SyntaxCursor<'a>>,
    pub(crate) reused_node_count: u32,
    /// Token starts where a parenthesized arrow function was ruled out;
    /// survives rewinds so nested ambiguity stays linear.
    pub(crate) not_parenthesized_arrow: FxHashSet<u32>,
}

/// Everything a speculative parse can change.
struct Snapshot {
    scanner: ScannerState,
    diagnostics_len: usize,
    parse_error_before_next_finished_node: bool,
    node_count: u32,
    identifier_count: u32,
    context_flags: NodeFlags,
}

/// Puts the `mask` bits of the context flags back to `restore` when
/// dropped, whether the scoped closure returned or unwound.
struct ContextScope<'p, 'a> {
    parser: &'p mut Parser<'a>,
    mask: NodeFlags,
    restore: NodeFlags,
}

impl<'a> Deref for ContextScope<'_, 'a> {
    type Target = Parser<'a>;

    fn deref(&self) -> &Parser<'a> {
        self.parser
    }
}

impl<'a> DerefMut for ContextScope<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Parser<'a> {
        self.parser
    }
}

impl Drop for ContextScope<'_, '_> {
    fn drop(&mut self) {
        let flags = &mut self.parser.context_flags;
        *flags = (*flags & !self.mask) | (self.restore & self.mask);
    }
}

/// Rewinds to `snapshot` when dropped unless the attempt was kept.
struct Speculation<'p, 'a> {
    parser: &'p mut Parser<'a>,
    snapshot: Option<Snapshot>,
}

impl<'a> Deref for Speculation<'_, 'a> {
    type Target = Parser<'a>;

    fn deref(&self) -> &Parser<'a> {
        self.parser
    }
}

impl<'a> DerefMut for Speculation<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Parser<'a> {
        self.parser
    }
}

impl Drop for Speculation<'_, '_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.parser.rewind(snapshot);
        }
    }
}

impl<'a> Parser<'a> {
    /// Create a parser for `text`. The text is copied into the arena so the
    /// resulting tree can borrow it.
    pub fn new(arena: &'a Bump, file_name: &str, text: &str) -> Self {
        let text: &'a str = arena.alloc_str(text);
        let context_flags = if is_javascript_file(file_name) {
            NodeFlags::JAVASCRIPT_FILE
        } else {
            NodeFlags::NONE
        };
        Self {
            arena,
            scanner: Scanner::new(text),
            file_name: file_name.to_string(),
            language_variant: LanguageVariant::from_file_name(file_name),
            interner: StringInterner::new(),
            context_flags,
            parsing_contexts: 0,
            diagnostics: DiagnosticCollection::new(),
            parse_error_before_next_finished_node: false,
            node_count: 0,
            identifier_count: 0,
            cursor: None,
            reused_node_count: 0,
            not_parenthesized_arrow: FxHashSet::default(),
        }
    }

    /// Override the language variant derived from the file name.
    pub fn with_language_variant(mut self, language_variant: LanguageVariant) -> Self {
        self.language_variant = language_variant;
        self
    }

    /// Share an existing interner, e.g. the one of a previous tree.
    pub fn with_interner(mut self, interner: StringInterner) -> Self {
        self.interner = interner;
        self
    }

    /// Continue node numbering and reuse nodes from a previous tree.
    pub(crate) fn with_cursor(mut self, cursor: Option<SyntaxCursor<'a>>, first_node_id: u32) -> Self {
        self.cursor = cursor;
        self.node_count = first_node_id;
        self
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    /// Parse the whole text as a module.
    pub fn parse_source_file(mut self) -> SourceFile<'a> {
        self.parse_source_file_in_place()
    }

    pub(crate) fn parse_source_file_in_place(&mut self) -> SourceFile<'a> {
        self.next_token();
        let statements = self.parse_list(ParsingContext::SourceElements, Self::parse_statement);
        debug_assert_eq!(self.token(), SyntaxKind::EndOfFileToken);
        let end_of_file_token = self.parse_token_node();

        let text = self.scanner.text();
        let mut data = self.finish_node(SyntaxKind::SourceFile, 0);
        data.range = TextRange::new(0, text.len() as u32);

        SourceFile {
            data,
            statements,
            end_of_file_token,
            file_name: self.file_name.clone(),
            text,
            language_variant: self.language_variant,
            node_count: self.node_count,
            identifier_count: self.identifier_count,
            parse_diagnostics: std::mem::take(&mut self.diagnostics).into_diagnostics(),
            interner: self.interner.clone(),
        }
    }

    /// Parse the text as exactly one statement.
    pub fn parse_single_statement(mut self) -> Parsed<'a, Statement<'a>> {
        self.next_token();
        let statement = self.parse_statement();
        self.expect_end_of_input();
        let node = self.arena.alloc(statement);
        self.into_parsed(node)
    }

    /// Parse the text as exactly one expression.
    pub fn parse_single_expression(mut self) -> Parsed<'a, Expression<'a>> {
        self.next_token();
        let node = self.parse_expression_and_alloc();
        self.expect_end_of_input();
        self.into_parsed(node)
    }

    /// Parse the text as exactly one type.
    pub fn parse_type_expression(mut self) -> Parsed<'a, TypeNode<'a>> {
        self.next_token();
        let node = self.parse_type_and_alloc();
        self.expect_end_of_input();
        self.into_parsed(node)
    }

    fn expect_end_of_input(&mut self) {
        if self.token() != SyntaxKind::EndOfFileToken {
            self.parse_error_at_current_token(&messages::UNEXPECTED_TOKEN, &[]);
        }
    }

    pub(crate) fn into_parsed<T>(self, node: &'a T) -> Parsed<'a, T> {
        Parsed {
            node,
            diagnostics: self.diagnostics.into_diagnostics(),
            interner: self.interner,
        }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        let token = self.scanner.scan();
        self.drain_scan_errors();
        token
    }

    pub(crate) fn rescan(&mut self, mode: RescanMode) -> SyntaxKind {
        let token = self.scanner.rescan(mode);
        self.drain_scan_errors();
        token
    }

    pub(crate) fn rescan_greater_than(&mut self) -> SyntaxKind {
        self.rescan(RescanMode::GreaterThan)
    }

    pub(crate) fn scan_jsx_token(&mut self) -> SyntaxKind {
        let token = self.scanner.scan_jsx_token();
        self.drain_scan_errors();
        token
    }

    pub(crate) fn scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        let token = self.scanner.scan_jsx_attribute_value();
        self.drain_scan_errors();
        token
    }

    pub(crate) fn scan_jsdoc_token(&mut self) -> SyntaxKind {
        let token = self.scanner.scan_jsdoc_token();
        self.drain_scan_errors();
        token
    }

    fn drain_scan_errors(&mut self) {
        if !self.scanner.has_pending_errors() {
            return;
        }
        let errors: Vec<_> = self.scanner.drain_errors().collect();
        for error in errors {
            self.parse_error_at(error.start, error.length, &error.message, &[]);
        }
    }

    /// Full start of the current token: where a node beginning here starts.
    #[inline]
    pub(crate) fn node_pos(&self) -> u32 {
        self.scanner.full_start() as u32
    }

    #[inline]
    pub(crate) fn token_start(&self) -> u32 {
        self.scanner.token_start() as u32
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.token_end() as u32
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &str {
        self.scanner.token_value()
    }

    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    /// Identifiers, plus contextual keywords that are not claimed by the
    /// current context (`yield` in generators, `await` in async code).
    pub(crate) fn is_identifier(&self) -> bool {
        match self.token() {
            SyntaxKind::Identifier => true,
            SyntaxKind::YieldKeyword if self.in_yield_context() => false,
            SyntaxKind::AwaitKeyword if self.in_await_context() => false,
            token => token > SyntaxKind::LAST_RESERVED_WORD && token <= SyntaxKind::LAST_KEYWORD,
        }
    }

    /// Consume `kind` or report `'kind' expected`.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        self.parse_expected_with(kind, None, true)
    }

    pub(crate) fn parse_expected_with(
        &mut self,
        kind: SyntaxKind,
        message: Option<&DiagnosticMessage>,
        advance: bool,
    ) -> bool {
        if self.token() == kind {
            if advance {
                self.next_token();
            }
            return true;
        }
        match message {
            Some(message) => self.parse_error_at_current_token(message, &[]),
            None => self.parse_error_at_current_token(&messages::_0_EXPECTED, &[token_to_string(kind)]),
        }
        false
    }

    /// Consume `kind` as a token node, or synthesize a missing one.
    pub(crate) fn parse_expected_token(&mut self, kind: SyntaxKind) -> Token {
        if self.token() == kind {
            return self.parse_token_node();
        }
        self.parse_error_at_current_token(&messages::_0_EXPECTED, &[token_to_string(kind)]);
        self.create_missing_token(kind)
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.token() == kind {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub(crate) fn parse_optional_token(&mut self, kind: SyntaxKind) -> Option<Token> {
        (self.token() == kind).then(|| self.parse_token_node())
    }

    /// Turn the current token into a node and advance.
    pub(crate) fn parse_token_node(&mut self) -> Token {
        let pos = self.node_pos();
        let kind = self.token();
        self.next_token();
        Token {
            data: self.finish_node(kind, pos),
        }
    }

    pub(crate) fn create_missing_token(&mut self, kind: SyntaxKind) -> Token {
        let pos = self.node_pos();
        Token {
            data: self.finish_node(kind, pos),
        }
    }

    /// A node that was not read token by token, spanning `pos..end`.
    pub(crate) fn synthesize_node(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeData {
        let mut data = self.finish_node(kind, pos);
        data.range = TextRange::new(pos, end);
        data
    }

    // ========================================================================
    // Automatic semicolon insertion
    // ========================================================================

    pub(crate) fn can_parse_semicolon(&self) -> bool {
        match self.token() {
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken => true,
            _ => self.has_preceding_line_break(),
        }
    }

    pub(crate) fn try_parse_semicolon(&mut self) -> bool {
        if !self.can_parse_semicolon() {
            return false;
        }
        if self.token() == SyntaxKind::SemicolonToken {
            self.next_token();
        }
        true
    }

    pub(crate) fn parse_semicolon(&mut self) -> bool {
        self.try_parse_semicolon() || self.parse_expected(SyntaxKind::SemicolonToken)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &DiagnosticMessage, args: &[&str]) {
        self.diagnostics.add(Diagnostic::with_location(
            Some(self.file_name.clone()),
            TextSpan::new(start, length),
            message,
            args,
        ));
        self.parse_error_before_next_finished_node = true;
    }

    pub(crate) fn parse_error_at_range(&mut self, start: u32, end: u32, message: &DiagnosticMessage, args: &[&str]) {
        self.parse_error_at(start, end.saturating_sub(start), message, args);
    }

    /// Report over a node's range, starting at its first token rather than
    /// at its leading trivia.
    pub(crate) fn parse_error_at_node(&mut self, range: TextRange, message: &DiagnosticMessage, args: &[&str]) {
        let start = self.skip_trivia(range.pos).min(range.end);
        self.parse_error_at_range(start, range.end, message, args);
    }

    fn skip_trivia(&self, pos: u32) -> u32 {
        let mut scanner = Scanner::new(self.scanner.text());
        scanner.reset_to(pos as usize);
        scanner.scan();
        scanner.token_start() as u32
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let start = self.token_start();
        let end = self.token_end();
        self.parse_error_at_range(start, end, message, args);
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    fn next_node_id(&mut self) -> NodeId {
        let id = NodeId(self.node_count);
        self.node_count += 1;
        id
    }

    /// Header for a node that began at `pos` and ends at the last consumed token.
    pub(crate) fn finish_node(&mut self, kind: SyntaxKind, pos: u32) -> NodeData {
        self.finish_node_with_flags(kind, pos, NodeFlags::NONE)
    }

    pub(crate) fn finish_node_with_flags(&mut self, kind: SyntaxKind, pos: u32, flags: NodeFlags) -> NodeData {
        let end = (self.scanner.full_start() as u32).max(pos);
        let mut flags = flags | self.context_flags;
        if self.parse_error_before_next_finished_node {
            self.parse_error_before_next_finished_node = false;
            flags |= NodeFlags::THIS_NODE_HAS_ERROR;
        }
        NodeData {
            kind,
            range: TextRange::new(pos, end),
            flags,
            modifier_flags: ModifierFlags::NONE,
            id: self.next_node_id(),
        }
    }

    /// Move `nodes` into the arena as a list spanning `pos` to the current position.
    pub(crate) fn create_node_list<T>(&self, nodes: Vec<T>, pos: u32) -> NodeList<'a, T> {
        let arena = self.arena;
        let elements: Vec<Child<'a, T>> = nodes.into_iter().map(|n| Child::new(&*arena.alloc(n))).collect();
        let end = (self.scanner.full_start() as u32).max(pos);
        NodeList::new(TextRange::new(pos, end), arena.alloc_vec(elements))
    }

    /// A list over elements that were already wrapped, e.g. by node reuse.
    pub(crate) fn create_child_list<T>(&self, elements: Vec<Child<'a, T>>, pos: u32) -> NodeList<'a, T> {
        let end = (self.scanner.full_start() as u32).max(pos);
        NodeList::new(TextRange::new(pos, end), self.arena.alloc_vec(elements))
    }

    /// Header for a declaration, carrying the flags of its modifiers.
    pub(crate) fn finish_declaration(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        decorators: Option<NodeList<'a, Decorator<'a>>>,
        modifiers: Option<NodeList<'a, Token>>,
    ) -> NodeData {
        let mut data = self.finish_node(kind, pos);
        data.modifier_flags = modifier_flags(decorators, modifiers);
        data
    }

    /// A zero-width list at the current position.
    pub(crate) fn create_missing_list<T>(&self) -> NodeList<'a, T> {
        NodeList::empty(self.node_pos())
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    /// Consume the current token as an identifier when `is_identifier`,
    /// otherwise report and synthesize a missing one.
    pub(crate) fn create_identifier(&mut self, is_identifier: bool, message: Option<&DiagnosticMessage>) -> Identifier {
        if is_identifier {
            self.identifier_count += 1;
            let pos = self.node_pos();
            let token = self.token();
            let original_keyword_kind = (token != SyntaxKind::Identifier).then_some(token);
            let escaped_text = self.interner.intern(self.scanner.token_value());
            self.next_token();
            return Identifier {
                data: self.finish_node(SyntaxKind::Identifier, pos),
                escaped_text,
                original_keyword_kind,
            };
        }

        if self.token() == SyntaxKind::PrivateIdentifier {
            self.parse_error_at_current_token(&messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES, &[]);
            return self.create_identifier(true, None);
        }

        if let Some(message) = message {
            self.parse_error_at_current_token(message, &[]);
        } else if self.scanner.is_reserved_word() {
            let text = self.scanner.token_text();
            self.parse_error_at_current_token(
                &messages::IDENTIFIER_EXPECTED_0_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE,
                &[text],
            );
        } else {
            self.parse_error_at_current_token(&messages::IDENTIFIER_EXPECTED, &[]);
        }
        self.create_missing_identifier()
    }

    pub(crate) fn create_missing_identifier(&mut self) -> Identifier {
        self.identifier_count += 1;
        let pos = self.node_pos();
        Identifier {
            data: self.finish_node(SyntaxKind::Identifier, pos),
            escaped_text: self.interner.intern(""),
            original_keyword_kind: None,
        }
    }

    pub(crate) fn parse_identifier(&mut self) -> Identifier {
        self.create_identifier(self.is_identifier(), None)
    }

    pub(crate) fn parse_identifier_with_message(&mut self, message: &DiagnosticMessage) -> Identifier {
        self.create_identifier(self.is_identifier(), Some(message))
    }

    /// Identifiers in binding position also admit `yield` and `await`; their
    /// misuse is left to later checks.
    pub(crate) fn is_binding_identifier(&self) -> bool {
        let token = self.token();
        token == SyntaxKind::Identifier || (token > SyntaxKind::LAST_RESERVED_WORD && token <= SyntaxKind::LAST_KEYWORD)
    }

    pub(crate) fn parse_binding_identifier(&mut self) -> Identifier {
        self.create_identifier(self.is_binding_identifier(), None)
    }

    pub(crate) fn parse_optional_binding_identifier(&mut self) -> Option<Identifier> {
        self.is_binding_identifier().then(|| self.parse_binding_identifier())
    }

    /// `#name`; the text keeps its `#`.
    pub(crate) fn parse_private_identifier(&mut self) -> Identifier {
        self.identifier_count += 1;
        let pos = self.node_pos();
        let escaped_text = self.interner.intern(self.scanner.token_value());
        self.next_token();
        Identifier {
            data: self.finish_node(SyntaxKind::PrivateIdentifier, pos),
            escaped_text,
            original_keyword_kind: None,
        }
    }

    /// Any identifier or keyword, as after `.` in a member access.
    pub(crate) fn parse_identifier_name(&mut self) -> Identifier {
        self.create_identifier(token_is_identifier_or_keyword(self.token()), None)
    }

    pub(crate) fn parse_identifier_name_with_message(&mut self, message: &DiagnosticMessage) -> Identifier {
        self.create_identifier(token_is_identifier_or_keyword(self.token()), Some(message))
    }

    // ========================================================================
    // Context flags
    // ========================================================================

    #[inline]
    pub(crate) fn in_context(&self, flags: NodeFlags) -> bool {
        self.context_flags.intersects(flags)
    }

    #[inline]
    pub(crate) fn in_yield_context(&self) -> bool {
        self.in_context(NodeFlags::YIELD_CONTEXT)
    }

    #[inline]
    pub(crate) fn in_await_context(&self) -> bool {
        self.in_context(NodeFlags::AWAIT_CONTEXT)
    }

    #[inline]
    pub(crate) fn in_disallow_in_context(&self) -> bool {
        self.in_context(NodeFlags::DISALLOW_IN_CONTEXT)
    }

    #[inline]
    pub(crate) fn in_decorator_context(&self) -> bool {
        self.in_context(NodeFlags::DECORATOR_CONTEXT)
    }

    #[inline]
    pub(crate) fn in_disallow_conditional_types_context(&self) -> bool {
        self.in_context(NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT)
    }

    /// Run `f` with `flags` set, restoring only the bits this call changed.
    pub(crate) fn do_inside_of_context<T>(&mut self, flags: NodeFlags, f: impl FnOnce(&mut Self) -> T) -> T {
        let set = flags & !self.context_flags;
        if set.is_empty() {
            return f(self);
        }
        self.context_flags |= set;
        let mut scope = ContextScope {
            parser: self,
            mask: set,
            restore: NodeFlags::NONE,
        };
        f(&mut *scope)
    }

    /// Run `f` with `flags` cleared, restoring only the bits this call changed.
    pub(crate) fn do_outside_of_context<T>(&mut self, flags: NodeFlags, f: impl FnOnce(&mut Self) -> T) -> T {
        let cleared = flags & self.context_flags;
        if cleared.is_empty() {
            return f(self);
        }
        self.context_flags &= !cleared;
        let mut scope = ContextScope {
            parser: self,
            mask: cleared,
            restore: cleared,
        };
        f(&mut *scope)
    }

    pub(crate) fn allow_in_and<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.do_outside_of_context(NodeFlags::DISALLOW_IN_CONTEXT, f)
    }

    pub(crate) fn disallow_in_and<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.do_inside_of_context(NodeFlags::DISALLOW_IN_CONTEXT, f)
    }

    pub(crate) fn allow_conditional_types_and<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.do_outside_of_context(NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT, f)
    }

    pub(crate) fn disallow_conditional_types_and<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.do_inside_of_context(NodeFlags::DISALLOW_CONDITIONAL_TYPES_CONTEXT, f)
    }

    pub(crate) fn do_in_decorator_context<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.do_inside_of_context(NodeFlags::DECORATOR_CONTEXT, f)
    }

    pub(crate) fn do_outside_of_yield_and_await_context<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.do_outside_of_context(NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT, f)
    }

    /// Run `f` with exactly the yield/await bits given.
    pub(crate) fn with_yield_and_await<T>(&mut self, yield_: bool, await_: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let mask = NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT;
        let restore = self.context_flags & mask;
        self.context_flags.set(NodeFlags::YIELD_CONTEXT, yield_);
        self.context_flags.set(NodeFlags::AWAIT_CONTEXT, await_);
        let mut scope = ContextScope {
            parser: self,
            mask,
            restore,
        };
        f(&mut *scope)
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            scanner: self.scanner.save_state(),
            diagnostics_len: self.diagnostics.len(),
            parse_error_before_next_finished_node: self.parse_error_before_next_finished_node,
            node_count: self.node_count,
            identifier_count: self.identifier_count,
            context_flags: self.context_flags,
        }
    }

    fn rewind(&mut self, snapshot: Snapshot) {
        debug_assert_eq!(
            self.context_flags, snapshot.context_flags,
            "context flags must unwind through the call stack"
        );
        self.scanner.restore_state(snapshot.scanner);
        self.diagnostics.truncate(snapshot.diagnostics_len);
        self.parse_error_before_next_finished_node = snapshot.parse_error_before_next_finished_node;
        self.node_count = snapshot.node_count;
        self.identifier_count = snapshot.identifier_count;
    }

    /// Run `f` and rewind unconditionally.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let mut speculation = Speculation {
            parser: self,
            snapshot: Some(snapshot),
        };
        f(&mut *speculation)
    }

    /// Run `f`; keep its effects only when it returns `Some`.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let mut speculation = Speculation {
            parser: self,
            snapshot: Some(snapshot),
        };
        let result = f(&mut *speculation);
        if result.is_some() {
            speculation.snapshot = None;
        }
        result
    }

    // ========================================================================
    // Small lookahead predicates
    // ========================================================================

    pub(crate) fn next_token_is(&mut self, kind: SyntaxKind) -> bool {
        self.look_ahead(|p| p.next_token() == kind)
    }

    pub(crate) fn next_token_is_on_same_line(&mut self, kind: SyntaxKind) -> bool {
        self.look_ahead(|p| p.next_token() == kind && !p.has_preceding_line_break())
    }

    pub(crate) fn next_token_is_identifier_on_same_line(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            !p.has_preceding_line_break() && p.is_identifier()
        })
    }

    pub(crate) fn next_token_is_identifier_or_keyword_on_same_line(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            token_is_identifier_or_keyword(p.token()) && !p.has_preceding_line_break()
        })
    }

    pub(crate) fn next_token_is_identifier_or_string_literal_on_same_line(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            !p.has_preceding_line_break() && (p.is_identifier() || p.token() == SyntaxKind::StringLiteral)
        })
    }
}

/// Display text of a token kind for `'{0}' expected` messages.
pub(crate) fn token_to_string(kind: SyntaxKind) -> &'static str {
    kind.punctuation_text()
        .or_else(|| kind.keyword_text())
        .unwrap_or(match kind {
            SyntaxKind::Identifier => "identifier",
            SyntaxKind::StringLiteral => "string literal",
            SyntaxKind::EndOfFileToken => "end of file",
            _ => "token",
        })
}

/// Modifier flags of a declaration, with `DECORATOR` when it is decorated.
pub(crate) fn modifier_flags<'a>(
    decorators: Option<NodeList<'a, Decorator<'a>>>,
    modifiers: Option<NodeList<'a, Token>>,
) -> ModifierFlags {
    let mut flags = modifiers
        .iter()
        .flat_map(|list| list.iter())
        .fold(ModifierFlags::NONE, |flags, m| flags | ModifierFlags::from_modifier_kind(m.data.kind));
    if decorators.is_some_and(|d| !d.is_empty()) {
        flags |= ModifierFlags::DECORATOR;
    }
    flags
}

fn is_javascript_file(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    [".js", ".jsx", ".mjs", ".cjs"].iter().any(|ext| lower.ends_with(ext))
}
