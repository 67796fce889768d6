//! The generic list driver.
//!
//! Every sequence in the grammar (statements, members, parameters,
//! arguments, ...) is parsed by `parse_list` or `parse_delimited_list`,
//! parameterized by a [`ParsingContext`]. The context decides which tokens
//! start an element, which end the list, and which old nodes may be reused
//! in it. Recovery is shared: an unexpected token is reported once, then the
//! list either yields to an enclosing list that can handle the token or skips
//! it, so every iteration makes progress.

use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::{ListElement, NodeRef};
use ripple_diagnostics::{messages, DiagnosticMessage};

use crate::parser::Parser;
use crate::utilities::{is_in_or_of_keyword, is_literal_property_name, token_is_identifier_or_keyword};

/// What kind of list is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum ParsingContext {
    SourceElements,
    BlockStatements,
    SwitchClauses,
    SwitchClauseStatements,
    TypeMembers,
    ClassMembers,
    EnumMembers,
    HeritageClauseElement,
    VariableDeclarations,
    ObjectBindingElements,
    ArrayBindingElements,
    ArgumentExpressions,
    ObjectLiteralMembers,
    JsxAttributes,
    JsxChildren,
    ArrayLiteralMembers,
    Parameters,
    TypeParameters,
    TypeArguments,
    TupleElementTypes,
    HeritageClauses,
    ImportOrExportSpecifiers,
    ImportAttributes,
}

const ALL_CONTEXTS: [ParsingContext; 23] = [
    ParsingContext::SourceElements,
    ParsingContext::BlockStatements,
    ParsingContext::SwitchClauses,
    ParsingContext::SwitchClauseStatements,
    ParsingContext::TypeMembers,
    ParsingContext::ClassMembers,
    ParsingContext::EnumMembers,
    ParsingContext::HeritageClauseElement,
    ParsingContext::VariableDeclarations,
    ParsingContext::ObjectBindingElements,
    ParsingContext::ArrayBindingElements,
    ParsingContext::ArgumentExpressions,
    ParsingContext::ObjectLiteralMembers,
    ParsingContext::JsxAttributes,
    ParsingContext::JsxChildren,
    ParsingContext::ArrayLiteralMembers,
    ParsingContext::Parameters,
    ParsingContext::TypeParameters,
    ParsingContext::TypeArguments,
    ParsingContext::TupleElementTypes,
    ParsingContext::HeritageClauses,
    ParsingContext::ImportOrExportSpecifiers,
    ParsingContext::ImportAttributes,
];

impl ParsingContext {
    #[inline]
    pub(crate) fn bit(self) -> u32 {
        1 << (self as u8)
    }

    /// Contexts whose elements may be taken from a previous tree. Expression
    /// lists are excluded: their original lookahead may have read text that
    /// has since changed.
    pub(crate) fn is_reusable(self) -> bool {
        matches!(
            self,
            ParsingContext::SourceElements
                | ParsingContext::BlockStatements
                | ParsingContext::SwitchClauses
                | ParsingContext::SwitchClauseStatements
                | ParsingContext::TypeMembers
                | ParsingContext::ClassMembers
                | ParsingContext::EnumMembers
                | ParsingContext::VariableDeclarations
                | ParsingContext::Parameters
        )
    }

    /// Whether an old node of this kind may stand in for a fresh element.
    pub(crate) fn can_reuse(self, node: NodeRef<'_>) -> bool {
        match self {
            ParsingContext::SourceElements
            | ParsingContext::BlockStatements
            | ParsingContext::SwitchClauseStatements => matches!(node, NodeRef::Statement(_)),
            ParsingContext::SwitchClauses => matches!(node, NodeRef::CaseOrDefaultClause(_)),
            ParsingContext::TypeMembers => matches!(
                node,
                NodeRef::TypeElement(
                    TypeElement::PropertySignature(_)
                        | TypeElement::MethodSignature(_)
                        | TypeElement::CallSignature(_)
                        | TypeElement::ConstructSignature(_)
                        | TypeElement::IndexSignature(_)
                )
            ),
            ParsingContext::ClassMembers => match node {
                // A method named `constructor` may be reparsed as a constructor.
                NodeRef::ClassElement(ClassElement::MethodDeclaration(method)) => !matches!(
                    &method.name,
                    PropertyName::Identifier(id)
                        if id.original_keyword_kind == Some(SyntaxKind::ConstructorKeyword)
                ),
                NodeRef::ClassElement(ClassElement::ClassStaticBlockDeclaration(_)) => false,
                NodeRef::ClassElement(_) => true,
                _ => false,
            },
            ParsingContext::EnumMembers => matches!(node, NodeRef::EnumMember(_)),
            // An initializer's lookahead may have consumed what is now a
            // different statement boundary.
            ParsingContext::VariableDeclarations => {
                matches!(node, NodeRef::VariableDeclaration(decl) if decl.initializer.is_none())
            }
            ParsingContext::Parameters => {
                matches!(node, NodeRef::Parameter(param) if param.initializer.is_none())
            }
            _ => false,
        }
    }

    fn expected_element_message(self) -> &'static DiagnosticMessage {
        match self {
            ParsingContext::SourceElements | ParsingContext::BlockStatements => {
                &messages::DECLARATION_OR_STATEMENT_EXPECTED
            }
            ParsingContext::SwitchClauseStatements => &messages::STATEMENT_EXPECTED,
            ParsingContext::SwitchClauses => &messages::CASE_OR_DEFAULT_EXPECTED,
            ParsingContext::TypeMembers => &messages::PROPERTY_OR_SIGNATURE_EXPECTED,
            ParsingContext::ClassMembers => {
                &messages::UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED
            }
            ParsingContext::EnumMembers => &messages::ENUM_MEMBER_EXPECTED,
            ParsingContext::HeritageClauseElement => &messages::EXPRESSION_EXPECTED,
            ParsingContext::VariableDeclarations => &messages::VARIABLE_DECLARATION_EXPECTED,
            ParsingContext::ObjectBindingElements => &messages::PROPERTY_DESTRUCTURING_PATTERN_EXPECTED,
            ParsingContext::ArrayBindingElements => &messages::ARRAY_ELEMENT_DESTRUCTURING_PATTERN_EXPECTED,
            ParsingContext::ArgumentExpressions => &messages::ARGUMENT_EXPRESSION_EXPECTED,
            ParsingContext::ObjectLiteralMembers => &messages::PROPERTY_ASSIGNMENT_EXPECTED,
            ParsingContext::ArrayLiteralMembers => &messages::EXPRESSION_OR_COMMA_EXPECTED,
            ParsingContext::Parameters => &messages::PARAMETER_DECLARATION_EXPECTED,
            ParsingContext::TypeParameters => &messages::TYPE_PARAMETER_DECLARATION_EXPECTED,
            ParsingContext::TypeArguments => &messages::TYPE_ARGUMENT_EXPECTED,
            ParsingContext::TupleElementTypes => &messages::TYPE_EXPECTED,
            ParsingContext::HeritageClauses => &messages::UNEXPECTED_TOKEN,
            ParsingContext::ImportOrExportSpecifiers | ParsingContext::ImportAttributes => {
                &messages::IDENTIFIER_OR_STRING_LITERAL_EXPECTED
            }
            ParsingContext::JsxAttributes | ParsingContext::JsxChildren => &messages::IDENTIFIER_EXPECTED,
        }
    }
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Membership and termination
    // ========================================================================

    pub(crate) fn is_list_element(&mut self, context: ParsingContext, in_error_recovery: bool) -> bool {
        let token = self.token();
        match context {
            ParsingContext::SourceElements
            | ParsingContext::BlockStatements
            | ParsingContext::SwitchClauseStatements => {
                // A stray `;` is not worth resyncing on.
                !(token == SyntaxKind::SemicolonToken && in_error_recovery) && self.is_start_of_statement()
            }
            ParsingContext::SwitchClauses => {
                matches!(token, SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword)
            }
            ParsingContext::TypeMembers => self.look_ahead(Self::is_type_member_start),
            ParsingContext::ClassMembers => {
                self.look_ahead(Self::is_class_member_start)
                    || (token == SyntaxKind::SemicolonToken && !in_error_recovery)
            }
            ParsingContext::EnumMembers => {
                token == SyntaxKind::OpenBracketToken || token == SyntaxKind::PrivateIdentifier || is_literal_property_name(token)
            }
            ParsingContext::ObjectLiteralMembers => match token {
                SyntaxKind::OpenBracketToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::DotDotDotToken
                | SyntaxKind::DotToken => true,
                _ => is_literal_property_name(token),
            },
            ParsingContext::ObjectBindingElements => {
                token == SyntaxKind::OpenBracketToken
                    || token == SyntaxKind::DotDotDotToken
                    || is_literal_property_name(token)
            }
            ParsingContext::ImportAttributes => {
                token_is_identifier_or_keyword(token) || token == SyntaxKind::StringLiteral
            }
            ParsingContext::HeritageClauseElement => {
                if token == SyntaxKind::OpenBraceToken {
                    return false;
                }
                let starts = if in_error_recovery {
                    self.is_identifier()
                } else {
                    self.is_start_of_left_hand_side_expression()
                };
                starts && !matches!(token, SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword)
            }
            ParsingContext::VariableDeclarations => self.is_binding_identifier_or_pattern(),
            ParsingContext::ArrayBindingElements => {
                matches!(token, SyntaxKind::CommaToken | SyntaxKind::DotDotDotToken)
                    || self.is_binding_identifier_or_pattern()
            }
            ParsingContext::TypeParameters => {
                matches!(token, SyntaxKind::InKeyword | SyntaxKind::ConstKeyword) || self.is_identifier()
            }
            ParsingContext::ArrayLiteralMembers => {
                matches!(token, SyntaxKind::CommaToken | SyntaxKind::DotToken | SyntaxKind::DotDotDotToken)
                    || self.is_start_of_expression()
            }
            ParsingContext::ArgumentExpressions => {
                token == SyntaxKind::DotDotDotToken || self.is_start_of_expression()
            }
            ParsingContext::Parameters => self.is_start_of_parameter(),
            ParsingContext::TypeArguments | ParsingContext::TupleElementTypes => {
                token == SyntaxKind::CommaToken || self.is_start_of_type(false)
            }
            ParsingContext::HeritageClauses => {
                matches!(token, SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword)
            }
            ParsingContext::ImportOrExportSpecifiers => {
                if token == SyntaxKind::FromKeyword && self.next_token_is(SyntaxKind::StringLiteral) {
                    return false;
                }
                token == SyntaxKind::StringLiteral || token_is_identifier_or_keyword(token)
            }
            ParsingContext::JsxAttributes => {
                token_is_identifier_or_keyword(token) || token == SyntaxKind::OpenBraceToken
            }
            ParsingContext::JsxChildren => true,
        }
    }

    pub(crate) fn is_list_terminator(&mut self, context: ParsingContext) -> bool {
        let token = self.token();
        if token == SyntaxKind::EndOfFileToken {
            return true;
        }
        match context {
            ParsingContext::BlockStatements
            | ParsingContext::SwitchClauses
            | ParsingContext::TypeMembers
            | ParsingContext::ClassMembers
            | ParsingContext::EnumMembers
            | ParsingContext::ObjectLiteralMembers
            | ParsingContext::ObjectBindingElements
            | ParsingContext::ImportOrExportSpecifiers
            | ParsingContext::ImportAttributes => token == SyntaxKind::CloseBraceToken,
            ParsingContext::SwitchClauseStatements => matches!(
                token,
                SyntaxKind::CloseBraceToken | SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword
            ),
            ParsingContext::HeritageClauseElement => matches!(
                token,
                SyntaxKind::OpenBraceToken | SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
            ),
            ParsingContext::VariableDeclarations => {
                self.can_parse_semicolon()
                    || is_in_or_of_keyword(token)
                    || token == SyntaxKind::EqualsGreaterThanToken
            }
            ParsingContext::TypeParameters => matches!(
                token,
                SyntaxKind::GreaterThanToken
                    | SyntaxKind::OpenParenToken
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::ExtendsKeyword
                    | SyntaxKind::ImplementsKeyword
            ),
            ParsingContext::ArgumentExpressions => {
                matches!(token, SyntaxKind::CloseParenToken | SyntaxKind::SemicolonToken)
            }
            ParsingContext::ArrayLiteralMembers
            | ParsingContext::TupleElementTypes
            | ParsingContext::ArrayBindingElements => token == SyntaxKind::CloseBracketToken,
            ParsingContext::Parameters => {
                matches!(token, SyntaxKind::CloseParenToken | SyntaxKind::CloseBracketToken)
            }
            // Anything but a comma ends a type argument list.
            ParsingContext::TypeArguments => token != SyntaxKind::CommaToken,
            ParsingContext::HeritageClauses => {
                matches!(token, SyntaxKind::OpenBraceToken | SyntaxKind::CloseBraceToken)
            }
            ParsingContext::JsxAttributes => {
                matches!(token, SyntaxKind::GreaterThanToken | SyntaxKind::SlashToken)
            }
            ParsingContext::JsxChildren => token == SyntaxKind::LessThanSlashToken,
            ParsingContext::SourceElements => false,
        }
    }

    /// True when some list being parsed, including the current one, can
    /// handle the current token.
    fn is_in_some_parsing_context(&mut self) -> bool {
        for context in ALL_CONTEXTS {
            if self.parsing_contexts & context.bit() != 0
                && (self.is_list_element(context, true) || self.is_list_terminator(context))
            {
                return true;
            }
        }
        false
    }

    /// Report the current token, then decide whether to leave the list
    /// (`true`) or skip the token and keep going (`false`).
    pub(crate) fn abort_parsing_list_or_move_to_next_token(&mut self, context: ParsingContext) -> bool {
        self.report_list_error(context);
        if self.is_in_some_parsing_context() {
            return true;
        }
        self.next_token();
        false
    }

    fn report_list_error(&mut self, context: ParsingContext) {
        let token = self.token();
        match context {
            ParsingContext::SourceElements | ParsingContext::BlockStatements
                if token == SyntaxKind::DefaultKeyword =>
            {
                self.parse_error_at_current_token(&messages::_0_EXPECTED, &["export"]);
            }
            ParsingContext::VariableDeclarations if self.scanner.is_reserved_word() => {
                let text = self.scanner.token_text();
                self.parse_error_at_current_token(
                    &messages::IDENTIFIER_EXPECTED_0_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE,
                    &[text],
                );
            }
            _ => self.parse_error_at_current_token(context.expected_element_message(), &[]),
        }
    }

    // ========================================================================
    // Drivers
    // ========================================================================

    /// Parse elements until the context's terminator.
    pub(crate) fn parse_list<T: ListElement<'a>>(
        &mut self,
        context: ParsingContext,
        mut parse_element: impl FnMut(&mut Self) -> T,
    ) -> NodeList<'a, T> {
        let saved_contexts = self.parsing_contexts;
        self.parsing_contexts |= context.bit();
        let pos = self.node_pos();
        let mut elements = Vec::new();

        while !self.is_list_terminator(context) {
            if self.is_list_element(context, false) {
                elements.push(self.parse_list_element(context, &mut parse_element));
                continue;
            }
            if self.abort_parsing_list_or_move_to_next_token(context) {
                break;
            }
        }

        self.parsing_contexts = saved_contexts;
        self.create_child_list(elements, pos)
    }

    /// Parse comma-separated elements until the context's terminator.
    ///
    /// With `consider_semicolon_as_delimiter`, a `;` on the same line after
    /// a missing comma is skipped as if it were the comma.
    pub(crate) fn parse_delimited_list<T: ListElement<'a>>(
        &mut self,
        context: ParsingContext,
        mut parse_element: impl FnMut(&mut Self) -> T,
        consider_semicolon_as_delimiter: bool,
    ) -> NodeList<'a, T> {
        let saved_contexts = self.parsing_contexts;
        self.parsing_contexts |= context.bit();
        let pos = self.node_pos();
        let mut elements = Vec::new();
        let mut trailing_comma = false;

        loop {
            if self.is_list_element(context, false) {
                let start_pos = self.node_pos();
                elements.push(self.parse_list_element(context, &mut parse_element));
                if self.parse_optional(SyntaxKind::CommaToken) {
                    trailing_comma = true;
                    continue;
                }
                trailing_comma = false;
                if self.is_list_terminator(context) {
                    break;
                }

                if context == ParsingContext::EnumMembers {
                    self.parse_expected_with(
                        SyntaxKind::CommaToken,
                        Some(&messages::AN_ENUM_MEMBER_NAME_MUST_BE_FOLLOWED_BY_A_OR),
                        true,
                    );
                } else {
                    self.parse_expected(SyntaxKind::CommaToken);
                }
                if consider_semicolon_as_delimiter
                    && self.token() == SyntaxKind::SemicolonToken
                    && !self.has_preceding_line_break()
                {
                    self.next_token();
                }
                if start_pos == self.node_pos() {
                    // The element consumed nothing; skip the token that stopped it.
                    self.next_token();
                }
                continue;
            }

            if self.is_list_terminator(context) {
                break;
            }
            if self.abort_parsing_list_or_move_to_next_token(context) {
                break;
            }
        }

        self.parsing_contexts = saved_contexts;
        let mut list = self.create_child_list(elements, pos);
        list.has_trailing_comma = trailing_comma;
        list
    }

    /// `open` list `close`, reporting a missing bracket on either side.
    pub(crate) fn parse_bracketed_list<T: ListElement<'a>>(
        &mut self,
        context: ParsingContext,
        parse_element: impl FnMut(&mut Self) -> T,
        open: SyntaxKind,
        close: SyntaxKind,
    ) -> NodeList<'a, T> {
        if !self.parse_expected(open) {
            return self.create_missing_list();
        }
        let list = self.parse_delimited_list(context, parse_element, false);
        self.parse_expected(close);
        list
    }

    fn parse_list_element<T: ListElement<'a>>(
        &mut self,
        context: ParsingContext,
        parse_element: &mut impl FnMut(&mut Self) -> T,
    ) -> Child<'a, T> {
        if let Some(reused) = self.reuse_node::<T>(context) {
            return reused;
        }
        let node = parse_element(self);
        Child::new(self.arena.alloc(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn context_bits_are_distinct() {
        let mut seen = 0u32;
        for context in ALL_CONTEXTS {
            assert_eq!(seen & context.bit(), 0);
            seen |= context.bit();
        }
    }

    #[test]
    fn only_statement_like_contexts_are_reusable() {
        assert!(ParsingContext::ClassMembers.is_reusable());
        assert!(ParsingContext::Parameters.is_reusable());
        assert!(!ParsingContext::ArgumentExpressions.is_reusable());
        assert!(!ParsingContext::ObjectLiteralMembers.is_reusable());
    }

    #[test]
    fn skipped_tokens_are_reported_once_each() {
        let arena = Bump::new();
        let mut p = Parser::new(&arena, "test.ts", ") ) x;");
        p.next_token();
        let list = p.parse_list(ParsingContext::SourceElements, Parser::parse_statement);
        assert_eq!(list.len(), 1);
        assert_eq!(p.diagnostics.len(), 2);
    }

    #[test]
    fn delimited_list_records_trailing_comma() {
        let arena = Bump::new();
        let mut p = Parser::new(&arena, "test.ts", "a, b,)");
        p.next_token();
        let list = p.parse_delimited_list(ParsingContext::ArgumentExpressions, |p| p.parse_argument_expression(), false);
        assert_eq!(list.len(), 2);
        assert!(list.has_trailing_comma);
        assert_eq!(p.token(), SyntaxKind::CloseParenToken);
        assert!(p.diagnostics.is_empty());
    }

    #[test]
    fn missing_comma_is_reported_and_parsing_continues() {
        let arena = Bump::new();
        let mut p = Parser::new(&arena, "test.ts", "a b)");
        p.next_token();
        let list = p.parse_delimited_list(ParsingContext::ArgumentExpressions, |p| p.parse_argument_expression(), false);
        assert_eq!(list.len(), 2);
        assert_eq!(p.diagnostics.diagnostics()[0].message_text, "',' expected.");
    }
}
