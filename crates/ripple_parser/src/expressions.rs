//! Expressions: precedence climbing from the comma operator down to
//! primary expressions, with arrow functions decided by a tri-state
//! lookahead and a speculative parse for the ambiguous cases.

use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::types::{ModifierFlags, NodeFlags, TokenFlags};
use ripple_ast::HasNodeData;
use ripple_diagnostics::messages;

use crate::list::ParsingContext;
use crate::parser::{token_to_string, Parser};
use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};
use crate::utilities::{is_left_hand_side_expression_start, is_template_start, token_is_identifier_or_keyword};

/// Answer of the arrow-function lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tristate {
    False,
    True,
    Unknown,
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Starts
    // ========================================================================

    pub(crate) fn is_start_of_left_hand_side_expression(&mut self) -> bool {
        let token = self.token();
        if is_left_hand_side_expression_start(token) {
            return true;
        }
        match token {
            SyntaxKind::ImportKeyword => self.look_ahead(Self::next_token_is_open_paren_or_less_than_or_dot),
            _ => self.is_identifier(),
        }
    }

    pub(crate) fn is_start_of_expression(&mut self) -> bool {
        if self.is_start_of_left_hand_side_expression() {
            return true;
        }
        match self.token() {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::AwaitKeyword
            | SyntaxKind::YieldKeyword
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::AtToken => true,
            // A stray binary operator is read as the start of an expression
            // so the missing operand gets reported in place.
            _ => self.is_binary_operator() || self.is_identifier(),
        }
    }

    fn is_binary_operator(&self) -> bool {
        if self.in_disallow_in_context() && self.token() == SyntaxKind::InKeyword {
            return false;
        }
        get_binary_operator_precedence(self.token()) != OperatorPrecedence::Invalid
    }

    fn next_token_is_open_paren_or_less_than_or_dot(&mut self) -> bool {
        matches!(
            self.next_token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken | SyntaxKind::DotToken
        )
    }

    fn next_token_is_identifier_or_keyword_or_literal_on_same_line(&mut self) -> bool {
        self.next_token();
        (token_is_identifier_or_keyword(self.token())
            || matches!(
                self.token(),
                SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral | SyntaxKind::StringLiteral
            ))
            && !self.has_preceding_line_break()
    }

    // ========================================================================
    // Comma and assignment
    // ========================================================================

    pub(crate) fn parse_expression(&mut self) -> Expression<'a> {
        // `@dec(a[0])`: element access is only off directly inside the decorator.
        self.do_outside_of_context(NodeFlags::DECORATOR_CONTEXT, |p| {
            let pos = p.node_pos();
            let mut expression = p.parse_assignment_expression_or_higher();
            while let Some(operator_token) = p.parse_optional_token(SyntaxKind::CommaToken) {
                let right = p.parse_assignment_expression_or_higher();
                expression = p.make_binary_expression(expression, operator_token, right, pos);
            }
            expression
        })
    }

    pub(crate) fn parse_expression_and_alloc(&mut self) -> &'a Expression<'a> {
        let expression = self.parse_expression();
        self.arena.alloc(expression)
    }

    pub(crate) fn parse_assignment_expression_or_higher(&mut self) -> Expression<'a> {
        self.parse_assignment_expression_or_higher_with(true)
    }

    pub(crate) fn parse_assignment_expression_or_higher_and_alloc(&mut self) -> &'a Expression<'a> {
        let expression = self.parse_assignment_expression_or_higher();
        self.arena.alloc(expression)
    }

    /// `allow_return_type_in_arrow` is off for the true branch of a
    /// conditional, where `a ? (b) : c => d` must keep its `:`.
    fn parse_assignment_expression_or_higher_with(&mut self, allow_return_type_in_arrow: bool) -> Expression<'a> {
        if self.is_yield_expression() {
            return self.parse_yield_expression();
        }

        if let Some(arrow) = self.try_parse_parenthesized_arrow_function_expression(allow_return_type_in_arrow) {
            return arrow;
        }
        if let Some(arrow) = self.try_parse_async_simple_arrow_function_expression(allow_return_type_in_arrow) {
            return arrow;
        }

        let pos = self.node_pos();
        let expression = self.parse_binary_expression_or_higher(OperatorPrecedence::Lowest);

        if let Expression::Identifier(identifier) = expression {
            if self.token() == SyntaxKind::EqualsGreaterThanToken {
                return self.parse_simple_arrow_function_expression(pos, identifier, allow_return_type_in_arrow, None);
            }
        }

        // `>>=` and friends arrive as `>` and are merged here.
        if is_left_hand_side_expression(&expression) && self.rescan_greater_than().is_assignment_operator() {
            let operator_token = self.parse_token_node();
            let right = self.parse_assignment_expression_or_higher_with(allow_return_type_in_arrow);
            return self.make_binary_expression(expression, operator_token, right, pos);
        }

        self.parse_conditional_expression_rest(expression, pos, allow_return_type_in_arrow)
    }

    fn is_yield_expression(&mut self) -> bool {
        if self.token() != SyntaxKind::YieldKeyword {
            return false;
        }
        // Outside a generator `yield` is an identifier, unless what follows
        // could only be its operand.
        self.in_yield_context() || self.look_ahead(Self::next_token_is_identifier_or_keyword_or_literal_on_same_line)
    }

    fn parse_yield_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        self.next_token();
        let (asterisk_token, expression) = if !self.has_preceding_line_break()
            && (self.token() == SyntaxKind::AsteriskToken || self.is_start_of_expression())
        {
            let asterisk_token = self.parse_optional_token(SyntaxKind::AsteriskToken);
            (asterisk_token, Some(self.parse_assignment_expression_or_higher_and_alloc()))
        } else {
            (None, None)
        };
        Expression::Yield(YieldExpression {
            data: self.finish_node(SyntaxKind::YieldExpression, pos),
            asterisk_token,
            expression,
        })
    }

    fn parse_conditional_expression_rest(
        &mut self,
        condition: Expression<'a>,
        pos: u32,
        allow_return_type_in_arrow: bool,
    ) -> Expression<'a> {
        let Some(question_token) = self.parse_optional_token(SyntaxKind::QuestionToken) else {
            return condition;
        };
        let when_true = self.do_outside_of_context(NodeFlags::DISALLOW_IN_CONTEXT | NodeFlags::DECORATOR_CONTEXT, |p| {
            p.parse_assignment_expression_or_higher_with(false)
        });
        let colon_token = self.parse_expected_token(SyntaxKind::ColonToken);
        let when_false = if colon_token.data.is_missing() {
            Expression::Identifier(self.create_missing_identifier())
        } else {
            self.parse_assignment_expression_or_higher_with(allow_return_type_in_arrow)
        };
        let arena = self.arena;
        Expression::Conditional(ConditionalExpression {
            data: self.finish_node(SyntaxKind::ConditionalExpression, pos),
            condition: arena.alloc(condition),
            question_token,
            when_true: arena.alloc(when_true),
            colon_token,
            when_false: arena.alloc(when_false),
        })
    }

    fn make_binary_expression(
        &mut self,
        left: Expression<'a>,
        operator_token: Token,
        right: Expression<'a>,
        pos: u32,
    ) -> Expression<'a> {
        let arena = self.arena;
        Expression::Binary(BinaryExpression {
            data: self.finish_node(SyntaxKind::BinaryExpression, pos),
            left: arena.alloc(left),
            operator_token,
            right: arena.alloc(right),
        })
    }

    // ========================================================================
    // Binary
    // ========================================================================

    pub(crate) fn parse_binary_expression_or_higher(&mut self, precedence: OperatorPrecedence) -> Expression<'a> {
        let pos = self.node_pos();
        let left = self.parse_unary_expression_or_higher();
        self.parse_binary_expression_rest(precedence, left, pos)
    }

    /// Consume operators binding tighter than `precedence`. `**` is right
    /// associative, so it also continues at equal precedence.
    fn parse_binary_expression_rest(
        &mut self,
        precedence: OperatorPrecedence,
        mut left: Expression<'a>,
        pos: u32,
    ) -> Expression<'a> {
        loop {
            self.rescan_greater_than();
            let token = self.token();
            let new_precedence = get_binary_operator_precedence(token);
            if new_precedence == OperatorPrecedence::Invalid {
                break;
            }
            let consume = if token == SyntaxKind::AsteriskAsteriskToken {
                new_precedence >= precedence
            } else {
                new_precedence > precedence
            };
            if !consume {
                break;
            }
            if token == SyntaxKind::InKeyword && self.in_disallow_in_context() {
                break;
            }

            if matches!(token, SyntaxKind::AsKeyword | SyntaxKind::SatisfiesKeyword) {
                // `x\nas` starts a new statement.
                if self.has_preceding_line_break() {
                    break;
                }
                self.next_token();
                let type_node = self.parse_type_and_alloc();
                let expression = self.arena.alloc(left);
                left = if token == SyntaxKind::AsKeyword {
                    Expression::As(TypeCastExpression {
                        data: self.finish_node(SyntaxKind::AsExpression, pos),
                        expression,
                        type_node,
                    })
                } else {
                    Expression::Satisfies(TypeCastExpression {
                        data: self.finish_node(SyntaxKind::SatisfiesExpression, pos),
                        expression,
                        type_node,
                    })
                };
            } else {
                let operator_token = self.parse_token_node();
                let right = self.parse_binary_expression_or_higher(new_precedence);
                left = self.make_binary_expression(left, operator_token, right, pos);
            }
        }
        left
    }

    // ========================================================================
    // Unary
    // ========================================================================

    fn parse_unary_expression_or_higher(&mut self) -> Expression<'a> {
        if self.is_update_expression() {
            let pos = self.node_pos();
            let update = self.parse_update_expression();
            return if self.token() == SyntaxKind::AsteriskAsteriskToken {
                let precedence = get_binary_operator_precedence(SyntaxKind::AsteriskAsteriskToken);
                self.parse_binary_expression_rest(precedence, update, pos)
            } else {
                update
            };
        }

        // `-a ** b` is ambiguous and rejected; `(-a) ** b` is fine.
        let operator = self.token();
        let simple = self.parse_simple_unary_expression();
        if self.token() == SyntaxKind::AsteriskAsteriskToken {
            if matches!(simple, Expression::TypeAssertion(_)) {
                self.parse_error_at_node(
                    simple.range(),
                    &messages::A_TYPE_ASSERTION_EXPRESSION_IS_NOT_ALLOWED_IN_THE_LEFT_HAND_SIDE_OF_AN_EXPONENTIATION_EXPRESSION,
                    &[],
                );
            } else {
                self.parse_error_at_node(
                    simple.range(),
                    &messages::AN_UNARY_EXPRESSION_WITH_THE_0_OPERATOR_IS_NOT_ALLOWED_IN_THE_LEFT_HAND_SIDE_OF_AN_EXPONENTIATION_EXPRESSION,
                    &[token_to_string(operator)],
                );
            }
        }
        simple
    }

    fn is_update_expression(&self) -> bool {
        match self.token() {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::AwaitKeyword => false,
            // `<T>x` is a type assertion, except where `<` opens a tag.
            SyntaxKind::LessThanToken => self.language_variant == LanguageVariant::Jsx,
            _ => true,
        }
    }

    fn parse_simple_unary_expression(&mut self) -> Expression<'a> {
        match self.token() {
            SyntaxKind::PlusToken | SyntaxKind::MinusToken | SyntaxKind::TildeToken | SyntaxKind::ExclamationToken => {
                let pos = self.node_pos();
                let operator = self.token();
                self.next_token();
                let operand = self.parse_simple_unary_expression();
                Expression::PrefixUnary(PrefixUnaryExpression {
                    data: self.finish_node(SyntaxKind::PrefixUnaryExpression, pos),
                    operator,
                    operand: self.arena.alloc(operand),
                })
            }
            SyntaxKind::DeleteKeyword => {
                let (data, expression) = self.parse_unary_keyword_expression(SyntaxKind::DeleteExpression);
                Expression::Delete(UnaryKeywordExpression { data, expression })
            }
            SyntaxKind::TypeOfKeyword => {
                let (data, expression) = self.parse_unary_keyword_expression(SyntaxKind::TypeOfExpression);
                Expression::TypeOf(UnaryKeywordExpression { data, expression })
            }
            SyntaxKind::VoidKeyword => {
                let (data, expression) = self.parse_unary_keyword_expression(SyntaxKind::VoidExpression);
                Expression::Void(UnaryKeywordExpression { data, expression })
            }
            SyntaxKind::LessThanToken if self.language_variant != LanguageVariant::Jsx => self.parse_type_assertion(),
            SyntaxKind::AwaitKeyword if self.is_await_expression() => {
                let (data, expression) = self.parse_unary_keyword_expression(SyntaxKind::AwaitExpression);
                Expression::Await(UnaryKeywordExpression { data, expression })
            }
            _ => self.parse_update_expression(),
        }
    }

    fn parse_unary_keyword_expression(&mut self, kind: SyntaxKind) -> (NodeData, &'a Expression<'a>) {
        let pos = self.node_pos();
        self.next_token();
        let expression = self.parse_simple_unary_expression();
        let expression = self.arena.alloc(expression);
        (self.finish_node(kind, pos), expression)
    }

    fn is_await_expression(&mut self) -> bool {
        if self.token() != SyntaxKind::AwaitKeyword {
            return false;
        }
        self.in_await_context() || self.look_ahead(Self::next_token_is_identifier_or_keyword_or_literal_on_same_line)
    }

    fn parse_type_assertion(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::LessThanToken);
        let type_node = self.parse_type_and_alloc();
        self.parse_expected(SyntaxKind::GreaterThanToken);
        let expression = self.parse_simple_unary_expression();
        Expression::TypeAssertion(TypeAssertionExpression {
            data: self.finish_node(SyntaxKind::TypeAssertionExpression, pos),
            type_node,
            expression: self.arena.alloc(expression),
        })
    }

    fn parse_update_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        if matches!(self.token(), SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken) {
            let operator = self.token();
            self.next_token();
            let operand = self.parse_left_hand_side_expression_or_higher();
            return Expression::PrefixUnary(PrefixUnaryExpression {
                data: self.finish_node(SyntaxKind::PrefixUnaryExpression, pos),
                operator,
                operand: self.arena.alloc(operand),
            });
        }

        if self.language_variant == LanguageVariant::Jsx
            && self.token() == SyntaxKind::LessThanToken
            && self.look_ahead(|p| {
                p.next_token();
                token_is_identifier_or_keyword(p.token()) || p.token() == SyntaxKind::GreaterThanToken
            })
        {
            return self.parse_jsx_element_or_self_closing_element_or_fragment();
        }

        let expression = self.parse_left_hand_side_expression_or_higher();
        if matches!(self.token(), SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken) && !self.has_preceding_line_break() {
            let operator = self.token();
            self.next_token();
            return Expression::PostfixUnary(PostfixUnaryExpression {
                data: self.finish_node(SyntaxKind::PostfixUnaryExpression, pos),
                operand: self.arena.alloc(expression),
                operator,
            });
        }
        expression
    }

    // ========================================================================
    // Left-hand side: member access and calls
    // ========================================================================

    pub(crate) fn parse_left_hand_side_expression_or_higher(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        let expression = match self.token() {
            SyntaxKind::ImportKeyword => {
                if self.look_ahead(|p| matches!(p.next_token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)) {
                    // `import(...)`
                    let token = self.parse_token_node();
                    Expression::ImportKeyword(token.data)
                } else if self.look_ahead(|p| p.next_token() == SyntaxKind::DotToken) {
                    // `import.meta`
                    self.next_token();
                    self.next_token();
                    let name = self.parse_identifier_name();
                    Expression::MetaProperty(MetaPropertyExpression {
                        data: self.finish_node(SyntaxKind::MetaProperty, pos),
                        keyword_token: SyntaxKind::ImportKeyword,
                        name,
                    })
                } else {
                    self.parse_member_expression_or_higher()
                }
            }
            SyntaxKind::SuperKeyword => self.parse_super_expression(),
            _ => self.parse_member_expression_or_higher(),
        };
        self.parse_call_expression_rest(pos, expression)
    }

    fn parse_member_expression_or_higher(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        let expression = self.parse_primary_expression();
        self.parse_member_expression_rest(pos, expression, true)
    }

    /// `super` must be called or accessed.
    fn parse_super_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        let token = self.parse_token_node();
        let expression = Expression::SuperKeyword(token.data);
        if matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::DotToken | SyntaxKind::OpenBracketToken
        ) {
            return expression;
        }
        self.parse_expected(SyntaxKind::DotToken);
        let name = self.parse_right_side_of_dot();
        Expression::PropertyAccess(PropertyAccessExpression {
            data: self.finish_node(SyntaxKind::PropertyAccessExpression, pos),
            expression: self.arena.alloc(expression),
            question_dot_token: None,
            name,
        })
    }

    fn is_start_of_optional_property_or_element_access_chain(&mut self) -> bool {
        self.token() == SyntaxKind::QuestionDotToken
            && self.look_ahead(|p| {
                p.next_token();
                let token = p.token();
                token_is_identifier_or_keyword(token)
                    || matches!(token, SyntaxKind::OpenBracketToken | SyntaxKind::PrivateIdentifier)
                    || is_template_start(token)
            })
    }

    fn parse_member_expression_rest(
        &mut self,
        pos: u32,
        mut expression: Expression<'a>,
        allow_optional_chain: bool,
    ) -> Expression<'a> {
        loop {
            let mut question_dot_token = None;
            let is_property_access = if allow_optional_chain && self.is_start_of_optional_property_or_element_access_chain() {
                question_dot_token = Some(self.parse_expected_token(SyntaxKind::QuestionDotToken));
                token_is_identifier_or_keyword(self.token()) || self.token() == SyntaxKind::PrivateIdentifier
            } else {
                self.parse_optional(SyntaxKind::DotToken)
            };

            if is_property_access {
                let name = self.parse_right_side_of_dot();
                let flags = optional_chain_flags(question_dot_token.is_some(), &expression);
                expression = Expression::PropertyAccess(PropertyAccessExpression {
                    data: self.finish_node_with_flags(SyntaxKind::PropertyAccessExpression, pos, flags),
                    expression: self.arena.alloc(expression),
                    question_dot_token,
                    name,
                });
                continue;
            }

            // In a decorator `[` may begin a computed member name instead.
            if (question_dot_token.is_some() || !self.in_decorator_context())
                && self.parse_optional(SyntaxKind::OpenBracketToken)
            {
                let argument_expression = if self.token() == SyntaxKind::CloseBracketToken {
                    self.parse_error_at_current_token(&messages::AN_ELEMENT_ACCESS_EXPRESSION_SHOULD_TAKE_AN_ARGUMENT, &[]);
                    let missing = Expression::Identifier(self.create_missing_identifier());
                    &*self.arena.alloc(missing)
                } else {
                    self.allow_in_and(Self::parse_expression_and_alloc)
                };
                self.parse_expected(SyntaxKind::CloseBracketToken);
                let flags = optional_chain_flags(question_dot_token.is_some(), &expression);
                expression = Expression::ElementAccess(ElementAccessExpression {
                    data: self.finish_node_with_flags(SyntaxKind::ElementAccessExpression, pos, flags),
                    expression: self.arena.alloc(expression),
                    question_dot_token,
                    argument_expression,
                });
                continue;
            }

            if is_template_start(self.token()) {
                expression = self.parse_tagged_template_rest(pos, expression, question_dot_token, None);
                continue;
            }

            if question_dot_token.is_none() && self.token() == SyntaxKind::ExclamationToken && !self.has_preceding_line_break() {
                self.next_token();
                let flags = optional_chain_flags(false, &expression);
                expression = Expression::NonNull(NonNullExpression {
                    data: self.finish_node_with_flags(SyntaxKind::NonNullExpression, pos, flags),
                    expression: self.arena.alloc(expression),
                });
                continue;
            }

            return expression;
        }
    }

    pub(crate) fn parse_right_side_of_dot(&mut self) -> MemberName {
        // `a.\nlet x` is an incomplete access followed by a declaration.
        if self.has_preceding_line_break()
            && token_is_identifier_or_keyword(self.token())
            && self.next_token_is_identifier_or_keyword_on_same_line()
        {
            self.parse_error_at_current_token(&messages::IDENTIFIER_EXPECTED, &[]);
            return MemberName::Identifier(self.create_missing_identifier());
        }
        if self.token() == SyntaxKind::PrivateIdentifier {
            return MemberName::PrivateIdentifier(self.parse_private_identifier());
        }
        MemberName::Identifier(self.parse_identifier_name())
    }

    fn parse_tagged_template_rest(
        &mut self,
        pos: u32,
        tag: Expression<'a>,
        question_dot_token: Option<Token>,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    ) -> Expression<'a> {
        let template = if self.token() == SyntaxKind::NoSubstitutionTemplateLiteral {
            Expression::NoSubstitutionTemplateLiteral(self.parse_literal_expression())
        } else {
            self.parse_template_expression()
        };
        let flags = if question_dot_token.is_some() {
            NodeFlags::OPTIONAL_CHAIN
        } else {
            NodeFlags::NONE
        };
        let arena = self.arena;
        Expression::TaggedTemplate(TaggedTemplateExpression {
            data: self.finish_node_with_flags(SyntaxKind::TaggedTemplateExpression, pos, flags),
            tag: arena.alloc(tag),
            type_arguments,
            template: arena.alloc(template),
        })
    }

    fn parse_call_expression_rest(&mut self, pos: u32, mut expression: Expression<'a>) -> Expression<'a> {
        loop {
            expression = self.parse_member_expression_rest(pos, expression, true);
            let question_dot_token = self.parse_optional_token(SyntaxKind::QuestionDotToken);

            let mut type_arguments = None;
            if question_dot_token.is_some() || matches!(self.token(), SyntaxKind::LessThanToken | SyntaxKind::LessThanLessThanToken) {
                type_arguments = self.try_parse(Self::parse_type_arguments_in_expression);
                if is_template_start(self.token()) && (question_dot_token.is_some() || type_arguments.is_some()) {
                    expression = self.parse_tagged_template_rest(pos, expression, question_dot_token, type_arguments);
                    continue;
                }
            }

            if type_arguments.is_some() || self.token() == SyntaxKind::OpenParenToken {
                let arguments = self.parse_argument_list();
                let flags = optional_chain_flags(question_dot_token.is_some(), &expression);
                expression = Expression::Call(CallExpression {
                    data: self.finish_node_with_flags(SyntaxKind::CallExpression, pos, flags),
                    expression: self.arena.alloc(expression),
                    question_dot_token,
                    type_arguments,
                    arguments,
                });
                continue;
            }

            if question_dot_token.is_some() {
                // `a?.` followed by nothing usable.
                self.parse_error_at_current_token(&messages::IDENTIFIER_EXPECTED, &[]);
                let name = MemberName::Identifier(self.create_missing_identifier());
                expression = Expression::PropertyAccess(PropertyAccessExpression {
                    data: self.finish_node_with_flags(SyntaxKind::PropertyAccessExpression, pos, NodeFlags::OPTIONAL_CHAIN),
                    expression: self.arena.alloc(expression),
                    question_dot_token,
                    name,
                });
            }
            return expression;
        }
    }

    /// `<T>` in `f<T>(x)` or ``f<T>`...` ``. Fails, so the caller can rewind,
    /// when the brackets do not close or a call does not follow.
    fn parse_type_arguments_in_expression(&mut self) -> Option<NodeList<'a, TypeNode<'a>>> {
        if self.in_context(NodeFlags::JAVASCRIPT_FILE) {
            return None;
        }
        if self.rescan(ripple_scanner::RescanMode::LessThan) != SyntaxKind::LessThanToken {
            return None;
        }
        self.next_token();
        let type_arguments = self.parse_delimited_list(ParsingContext::TypeArguments, Self::parse_type, false);
        if self.rescan_greater_than() != SyntaxKind::GreaterThanToken {
            return None;
        }
        self.next_token();
        let can_follow = matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead
        );
        (can_follow && !type_arguments.is_empty()).then_some(type_arguments)
    }

    fn parse_argument_list(&mut self) -> NodeList<'a, Expression<'a>> {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let arguments = self.parse_delimited_list(ParsingContext::ArgumentExpressions, Self::parse_argument_expression, false);
        self.parse_expected(SyntaxKind::CloseParenToken);
        arguments
    }

    pub(crate) fn parse_argument_expression(&mut self) -> Expression<'a> {
        self.do_outside_of_context(
            NodeFlags::DISALLOW_IN_CONTEXT | NodeFlags::DECORATOR_CONTEXT,
            Self::parse_argument_or_array_literal_element,
        )
    }

    fn parse_argument_or_array_literal_element(&mut self) -> Expression<'a> {
        match self.token() {
            SyntaxKind::DotDotDotToken => self.parse_spread_element(),
            SyntaxKind::CommaToken => {
                let pos = self.node_pos();
                Expression::OmittedExpression(self.finish_node(SyntaxKind::OmittedExpression, pos))
            }
            _ => self.parse_assignment_expression_or_higher(),
        }
    }

    fn parse_spread_element(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::DotDotDotToken);
        let expression = self.parse_assignment_expression_or_higher_and_alloc();
        Expression::Spread(SpreadElement {
            data: self.finish_node(SyntaxKind::SpreadElement, pos),
            expression,
        })
    }

    // ========================================================================
    // Primary
    // ========================================================================

    fn parse_primary_expression(&mut self) -> Expression<'a> {
        match self.token() {
            SyntaxKind::NoSubstitutionTemplateLiteral => {
                Expression::NoSubstitutionTemplateLiteral(self.parse_literal_expression())
            }
            SyntaxKind::NumericLiteral => Expression::NumericLiteral(self.parse_numeric_literal()),
            SyntaxKind::BigIntLiteral => Expression::BigIntLiteral(self.parse_literal_expression()),
            SyntaxKind::StringLiteral => Expression::StringLiteral(self.parse_string_literal()),
            SyntaxKind::ThisKeyword => Expression::ThisKeyword(self.parse_token_node().data),
            SyntaxKind::SuperKeyword => Expression::SuperKeyword(self.parse_token_node().data),
            SyntaxKind::NullKeyword => Expression::NullKeyword(self.parse_token_node().data),
            SyntaxKind::TrueKeyword => Expression::TrueKeyword(self.parse_token_node().data),
            SyntaxKind::FalseKeyword => Expression::FalseKeyword(self.parse_token_node().data),
            SyntaxKind::OpenParenToken => self.parse_parenthesized_expression(),
            SyntaxKind::OpenBracketToken => self.parse_array_literal_expression(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal_expression(),
            SyntaxKind::AsyncKeyword if self.next_token_is_on_same_line(SyntaxKind::FunctionKeyword) => {
                self.parse_function_expression()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_expression(),
            SyntaxKind::AtToken => self.parse_decorated_expression(),
            SyntaxKind::ClassKeyword => {
                let pos = self.node_pos();
                Expression::ClassExpression(self.parse_class_declaration_or_expression(
                    pos,
                    None,
                    None,
                    SyntaxKind::ClassExpression,
                ))
            }
            SyntaxKind::NewKeyword => self.parse_new_expression_or_new_dot_target(),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken
                if self.rescan(ripple_scanner::RescanMode::Slash) == SyntaxKind::RegularExpressionLiteral =>
            {
                Expression::RegularExpressionLiteral(self.parse_literal_expression())
            }
            SyntaxKind::TemplateHead => self.parse_template_expression(),
            SyntaxKind::PrivateIdentifier => Expression::PrivateIdentifier(self.parse_private_identifier()),
            _ => Expression::Identifier(self.parse_identifier_with_message(&messages::EXPRESSION_EXPECTED)),
        }
    }

    fn parse_parenthesized_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.allow_in_and(Self::parse_expression_and_alloc);
        self.parse_expected(SyntaxKind::CloseParenToken);
        Expression::Parenthesized(ParenthesizedExpression {
            data: self.finish_node(SyntaxKind::ParenthesizedExpression, pos),
            expression,
        })
    }

    fn parse_array_literal_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let multi_line = self.has_preceding_line_break();
        let elements = self.parse_delimited_list(
            ParsingContext::ArrayLiteralMembers,
            Self::parse_argument_or_array_literal_element,
            false,
        );
        self.parse_expected(SyntaxKind::CloseBracketToken);
        Expression::ArrayLiteral(ArrayLiteralExpression {
            data: self.finish_node(SyntaxKind::ArrayLiteralExpression, pos),
            elements,
            multi_line,
        })
    }

    fn parse_object_literal_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let multi_line = self.has_preceding_line_break();
        let properties = self.parse_delimited_list(
            ParsingContext::ObjectLiteralMembers,
            Self::parse_object_literal_element,
            true,
        );
        self.parse_expected(SyntaxKind::CloseBraceToken);
        Expression::ObjectLiteral(ObjectLiteralExpression {
            data: self.finish_node(SyntaxKind::ObjectLiteralExpression, pos),
            properties,
            multi_line,
        })
    }

    fn parse_object_literal_element(&mut self) -> ObjectLiteralElement<'a> {
        let pos = self.node_pos();
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let expression = self.parse_assignment_expression_or_higher_and_alloc();
            return ObjectLiteralElement::SpreadAssignment(SpreadAssignment {
                data: self.finish_node(SyntaxKind::SpreadAssignment, pos),
                expression,
            });
        }

        let decorators = self.parse_decorators();
        let modifiers = self.parse_modifiers(false, false);
        if self.parse_contextual_modifier(SyntaxKind::GetKeyword) {
            let accessor = self.parse_accessor_declaration(pos, decorators, modifiers, SyntaxKind::GetAccessor, false);
            return ObjectLiteralElement::GetAccessor(accessor);
        }
        if self.parse_contextual_modifier(SyntaxKind::SetKeyword) {
            let accessor = self.parse_accessor_declaration(pos, decorators, modifiers, SyntaxKind::SetAccessor, false);
            return ObjectLiteralElement::SetAccessor(accessor);
        }

        let asterisk_token = self.parse_optional_token(SyntaxKind::AsteriskToken);
        let token_is_identifier = self.is_identifier();
        let name = self.parse_property_name();
        // `{ a?: 1 }` and `{ a!: 1 }` are accepted here and left to later checks.
        let question_token = self.parse_optional_token(SyntaxKind::QuestionToken);
        self.parse_optional(SyntaxKind::ExclamationToken);

        if asterisk_token.is_some() || matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
            let method =
                self.parse_method_declaration(pos, decorators, modifiers, asterisk_token, name, question_token, None);
            return ObjectLiteralElement::MethodDeclaration(method);
        }

        match name {
            // `{ a }` and `{ a = 1 }`; the latter only makes sense as a
            // destructuring target.
            PropertyName::Identifier(name) if token_is_identifier && self.token() != SyntaxKind::ColonToken => {
                let object_assignment_initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                    Some(self.allow_in_and(Self::parse_assignment_expression_or_higher_and_alloc))
                } else {
                    None
                };
                ObjectLiteralElement::ShorthandPropertyAssignment(ShorthandPropertyAssignment {
                    data: self.finish_node(SyntaxKind::ShorthandPropertyAssignment, pos),
                    name,
                    object_assignment_initializer,
                })
            }
            name => {
                self.parse_expected(SyntaxKind::ColonToken);
                let initializer = self.allow_in_and(Self::parse_assignment_expression_or_higher_and_alloc);
                ObjectLiteralElement::PropertyAssignment(PropertyAssignment {
                    data: self.finish_node(SyntaxKind::PropertyAssignment, pos),
                    name,
                    initializer,
                })
            }
        }
    }

    fn parse_function_expression(&mut self) -> Expression<'a> {
        self.do_outside_of_context(NodeFlags::DECORATOR_CONTEXT, |p| {
            let pos = p.node_pos();
            let modifiers = p.parse_modifiers(false, false);
            p.parse_expected(SyntaxKind::FunctionKeyword);
            let asterisk_token = p.parse_optional_token(SyntaxKind::AsteriskToken);
            let is_generator = asterisk_token.is_some();
            let is_async = crate::parser::modifier_flags(None, modifiers).contains(ModifierFlags::ASYNC);
            // The name of `function* yield() {}` follows the function's own rules.
            let name = p.with_yield_and_await(is_generator, is_async, Self::parse_optional_binding_identifier);
            let type_parameters = p.parse_type_parameters();
            let parameters = p.parse_parameters(is_generator, is_async);
            let return_type = p.parse_return_type();
            let body = p.parse_function_block(is_generator, is_async, None);
            let mut data = p.finish_node(SyntaxKind::FunctionExpression, pos);
            data.modifier_flags = crate::parser::modifier_flags(None, modifiers);
            Expression::FunctionExpression(FunctionExpression {
                data,
                modifiers,
                asterisk_token,
                name,
                type_parameters,
                parameters,
                return_type,
                body,
            })
        })
    }

    /// `@dec class {}` in expression position.
    fn parse_decorated_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        let decorators = self.parse_decorators();
        let modifiers = self.parse_modifiers(false, false);
        if self.token() == SyntaxKind::ClassKeyword {
            return Expression::ClassExpression(self.parse_class_declaration_or_expression(
                pos,
                decorators,
                modifiers,
                SyntaxKind::ClassExpression,
            ));
        }
        self.parse_error_at_current_token(&messages::EXPRESSION_EXPECTED, &[]);
        Expression::Identifier(self.create_missing_identifier())
    }

    fn parse_new_expression_or_new_dot_target(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::NewKeyword);
        if self.parse_optional(SyntaxKind::DotToken) {
            let name = self.parse_identifier_name();
            return Expression::MetaProperty(MetaPropertyExpression {
                data: self.finish_node(SyntaxKind::MetaProperty, pos),
                keyword_token: SyntaxKind::NewKeyword,
                name,
            });
        }

        let expression_pos = self.node_pos();
        let primary = self.parse_primary_expression();
        let expression = self.parse_member_expression_rest(expression_pos, primary, false);
        let type_arguments = if matches!(self.token(), SyntaxKind::LessThanToken | SyntaxKind::LessThanLessThanToken) {
            self.try_parse(Self::parse_type_arguments_in_expression)
        } else {
            None
        };
        let arguments = (self.token() == SyntaxKind::OpenParenToken).then(|| self.parse_argument_list());
        Expression::New(NewExpression {
            data: self.finish_node(SyntaxKind::NewExpression, pos),
            expression: self.arena.alloc(expression),
            type_arguments,
            arguments,
        })
    }

    // ========================================================================
    // Literals and templates
    // ========================================================================

    pub(crate) fn parse_string_literal(&mut self) -> StringLiteral {
        let pos = self.node_pos();
        let is_single_quote = self.scanner.token_text().starts_with('\'');
        let text = self.interner.intern(self.token_value());
        self.next_token();
        StringLiteral {
            data: self.finish_node(SyntaxKind::StringLiteral, pos),
            text,
            is_single_quote,
        }
    }

    /// Numeric or bigint literal; the kind follows the token.
    pub(crate) fn parse_numeric_literal(&mut self) -> NumericLiteral {
        let pos = self.node_pos();
        let kind = self.token();
        let numeric_literal_flags = self.scanner.token_flags() & TokenFlags::NUMERIC_LITERAL_FLAGS;
        let text = self.interner.intern(self.token_value());
        self.next_token();
        NumericLiteral {
            data: self.finish_node(kind, pos),
            text,
            numeric_literal_flags,
        }
    }

    pub(crate) fn parse_literal_expression(&mut self) -> LiteralExpression {
        let pos = self.node_pos();
        let kind = self.token();
        let text = self.interner.intern(self.token_value());
        self.next_token();
        LiteralExpression {
            data: self.finish_node(kind, pos),
            text,
        }
    }

    /// Head, middle or tail of a template, as the current token says.
    pub(crate) fn parse_template_literal_part(&mut self) -> TemplateLiteralPart {
        let pos = self.node_pos();
        let kind = self.token();
        let text = self.interner.intern(self.token_value());
        self.next_token();
        TemplateLiteralPart {
            data: self.finish_node(kind, pos),
            text,
        }
    }

    /// After a substitution: `}` continues the template, anything else
    /// leaves a missing tail.
    pub(crate) fn parse_template_continuation(&mut self) -> TemplateLiteralPart {
        if self.token() == SyntaxKind::CloseBraceToken {
            self.rescan(ripple_scanner::RescanMode::TemplateContinuation);
            return self.parse_template_literal_part();
        }
        self.parse_error_at_current_token(&messages::_0_EXPECTED, &["}"]);
        let pos = self.node_pos();
        TemplateLiteralPart {
            data: self.finish_node(SyntaxKind::TemplateTail, pos),
            text: self.interner.intern(""),
        }
    }

    fn parse_template_expression(&mut self) -> Expression<'a> {
        let pos = self.node_pos();
        let head = self.parse_template_literal_part();
        let list_pos = self.node_pos();
        let mut spans = Vec::new();
        loop {
            let span_pos = self.node_pos();
            let expression = self.allow_in_and(Self::parse_expression_and_alloc);
            let literal = self.parse_template_continuation();
            let is_middle = literal.data.kind == SyntaxKind::TemplateMiddle;
            spans.push(TemplateSpan {
                data: self.finish_node(SyntaxKind::TemplateSpan, span_pos),
                expression,
                literal,
            });
            if !is_middle {
                break;
            }
        }
        let template_spans = self.create_node_list(spans, list_pos);
        Expression::TemplateExpression(TemplateExpression {
            data: self.finish_node(SyntaxKind::TemplateExpression, pos),
            head,
            template_spans,
        })
    }

    // ========================================================================
    // Arrow functions
    // ========================================================================

    fn try_parse_parenthesized_arrow_function_expression(&mut self, allow_return_type_in_arrow: bool) -> Option<Expression<'a>> {
        match self.is_parenthesized_arrow_function_expression() {
            Tristate::False => None,
            Tristate::True => self.parse_parenthesized_arrow_function_expression(true, true),
            Tristate::Unknown => self.try_parse(|p| p.parse_possible_parenthesized_arrow_function_expression(allow_return_type_in_arrow)),
        }
    }

    fn parse_possible_parenthesized_arrow_function_expression(
        &mut self,
        allow_return_type_in_arrow: bool,
    ) -> Option<Expression<'a>> {
        let token_start = self.token_start();
        if self.not_parenthesized_arrow.contains(&token_start) {
            return None;
        }
        let result = self.parse_parenthesized_arrow_function_expression(false, allow_return_type_in_arrow);
        if result.is_none() {
            self.not_parenthesized_arrow.insert(token_start);
        }
        result
    }

    fn is_parenthesized_arrow_function_expression(&mut self) -> Tristate {
        match self.token() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken | SyntaxKind::AsyncKeyword => {
                self.look_ahead(Self::is_parenthesized_arrow_function_expression_worker)
            }
            // `=> x` with no head at all: parse it as an arrow for recovery.
            SyntaxKind::EqualsGreaterThanToken => Tristate::True,
            _ => Tristate::False,
        }
    }

    fn is_parenthesized_arrow_function_expression_worker(&mut self) -> Tristate {
        if self.token() == SyntaxKind::AsyncKeyword {
            self.next_token();
            if self.has_preceding_line_break() {
                return Tristate::False;
            }
            if !matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
                return Tristate::False;
            }
        }

        let first = self.token();
        let second = self.next_token();

        if first == SyntaxKind::OpenParenToken {
            if second == SyntaxKind::CloseParenToken {
                // `()` must be followed by `=>`, a return type or a body.
                return match self.next_token() {
                    SyntaxKind::EqualsGreaterThanToken | SyntaxKind::ColonToken | SyntaxKind::OpenBraceToken => Tristate::True,
                    _ => Tristate::False,
                };
            }
            // `([a]` and `({a}` could be either a pattern or a literal.
            if matches!(second, SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken) {
                return Tristate::Unknown;
            }
            if second == SyntaxKind::DotDotDotToken {
                return Tristate::True;
            }
            // `(public x` is a parameter property, `(public as T)` is not.
            if second.is_modifier_kind()
                && second != SyntaxKind::AsyncKeyword
                && self.look_ahead(|p| {
                    p.next_token();
                    p.is_identifier()
                })
            {
                return if self.next_token() == SyntaxKind::AsKeyword {
                    Tristate::False
                } else {
                    Tristate::True
                };
            }
            if !self.is_identifier() && second != SyntaxKind::ThisKeyword {
                return Tristate::False;
            }
            return match self.next_token() {
                // `(a:` is a parameter with a type.
                SyntaxKind::ColonToken => Tristate::True,
                SyntaxKind::QuestionToken => {
                    self.next_token();
                    if matches!(
                        self.token(),
                        SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::EqualsToken | SyntaxKind::CloseParenToken
                    ) {
                        Tristate::True
                    } else {
                        Tristate::False
                    }
                }
                SyntaxKind::CommaToken | SyntaxKind::EqualsToken | SyntaxKind::CloseParenToken => Tristate::Unknown,
                _ => Tristate::False,
            };
        }

        debug_assert_eq!(first, SyntaxKind::LessThanToken);
        if !self.is_identifier() && self.token() != SyntaxKind::ConstKeyword {
            return Tristate::False;
        }
        if self.language_variant == LanguageVariant::Jsx {
            // In tag files `<T>` opens an element; only `<T,>`, `<T = ...>`
            // and `<T extends U>` heads are arrows.
            let is_arrow_in_jsx = self.look_ahead(|p| {
                p.parse_optional(SyntaxKind::ConstKeyword);
                match p.next_token() {
                    SyntaxKind::ExtendsKeyword => !matches!(
                        p.next_token(),
                        SyntaxKind::EqualsToken | SyntaxKind::GreaterThanToken | SyntaxKind::SlashToken
                    ),
                    SyntaxKind::CommaToken | SyntaxKind::EqualsToken => true,
                    _ => false,
                }
            });
            return if is_arrow_in_jsx { Tristate::True } else { Tristate::False };
        }
        Tristate::Unknown
    }

    /// With `allow_ambiguity` off this is a speculative parse: any sign that
    /// the head is not a parameter list yields `None`.
    fn parse_parenthesized_arrow_function_expression(
        &mut self,
        allow_ambiguity: bool,
        allow_return_type_in_arrow: bool,
    ) -> Option<Expression<'a>> {
        let pos = self.node_pos();
        let modifiers = self.parse_modifiers_for_arrow_function();
        let is_async = modifiers.is_some();
        let type_parameters = self.parse_type_parameters();

        let parameters = if !self.parse_expected(SyntaxKind::OpenParenToken) {
            if !allow_ambiguity {
                return None;
            }
            self.create_missing_list()
        } else {
            let mut all_names = true;
            let parameters = self.with_yield_and_await(false, is_async, |p| {
                p.parse_delimited_list(
                    ParsingContext::Parameters,
                    |p| {
                        let (parameter, is_name_start) = p.parse_parameter_worker(allow_ambiguity);
                        all_names &= is_name_start;
                        parameter
                    },
                    false,
                )
            });
            if !all_names {
                return None;
            }
            if !self.parse_expected(SyntaxKind::CloseParenToken) && !allow_ambiguity {
                return None;
            }
            self.check_rest_parameters(&parameters);
            parameters
        };

        let has_return_colon = self.token() == SyntaxKind::ColonToken;
        let return_type = self.parse_return_type();
        if let Some(return_type) = return_type {
            if !allow_ambiguity && type_has_arrow_function_blocking_parse_error(return_type) {
                return None;
            }
        }

        // `(a, b)` and `(a): b` without `=>` are not arrow heads.
        let last_token = self.token();
        if !allow_ambiguity && last_token != SyntaxKind::EqualsGreaterThanToken && last_token != SyntaxKind::OpenBraceToken {
            return None;
        }

        let equals_greater_than_token = self.parse_arrow_token();
        let body = if matches!(last_token, SyntaxKind::EqualsGreaterThanToken | SyntaxKind::OpenBraceToken) {
            self.parse_arrow_function_expression_body(is_async, allow_return_type_in_arrow)
        } else {
            let identifier = Expression::Identifier(self.parse_identifier());
            ArrowFunctionBody::Expression(self.arena.alloc(identifier))
        };

        // In `a ? (b): c => d` the `: c` belongs to the conditional unless
        // another `:` follows for it.
        if !allow_return_type_in_arrow && has_return_colon && self.token() != SyntaxKind::ColonToken {
            return None;
        }

        let mut data = self.finish_node(SyntaxKind::ArrowFunction, pos);
        data.modifier_flags = crate::parser::modifier_flags(None, modifiers);
        Some(Expression::ArrowFunction(ArrowFunction {
            data,
            modifiers,
            type_parameters,
            parameters,
            return_type,
            equals_greater_than_token,
            body,
        }))
    }

    fn try_parse_async_simple_arrow_function_expression(&mut self, allow_return_type_in_arrow: bool) -> Option<Expression<'a>> {
        if self.token() != SyntaxKind::AsyncKeyword {
            return None;
        }
        // `async x => ...`
        let is_arrow = self.look_ahead(|p| {
            p.next_token();
            if p.has_preceding_line_break() || p.token() == SyntaxKind::EqualsGreaterThanToken {
                return false;
            }
            let expression = p.parse_binary_expression_or_higher(OperatorPrecedence::Lowest);
            !p.has_preceding_line_break()
                && matches!(expression, Expression::Identifier(_))
                && p.token() == SyntaxKind::EqualsGreaterThanToken
        });
        if !is_arrow {
            return None;
        }
        let pos = self.node_pos();
        let modifiers = self.parse_modifiers_for_arrow_function();
        let parameter = self.parse_identifier();
        Some(self.parse_simple_arrow_function_expression(pos, parameter, allow_return_type_in_arrow, modifiers))
    }

    fn parse_modifiers_for_arrow_function(&mut self) -> Option<NodeList<'a, Token>> {
        if self.token() != SyntaxKind::AsyncKeyword {
            return None;
        }
        let pos = self.node_pos();
        let modifier = self.parse_token_node();
        Some(self.create_node_list(vec![modifier], pos))
    }

    /// `x => ...`: the identifier becomes the sole parameter.
    fn parse_simple_arrow_function_expression(
        &mut self,
        pos: u32,
        identifier: Identifier,
        allow_return_type_in_arrow: bool,
        modifiers: Option<NodeList<'a, Token>>,
    ) -> Expression<'a> {
        debug_assert_eq!(self.token(), SyntaxKind::EqualsGreaterThanToken);
        let parameter_pos = identifier.data.range.pos;
        let parameter = ParameterDeclaration {
            data: self.finish_node(SyntaxKind::Parameter, parameter_pos),
            decorators: None,
            modifiers: None,
            dot_dot_dot_token: None,
            name: BindingName::Identifier(identifier),
            question_token: None,
            type_annotation: None,
            initializer: None,
        };
        let parameters = self.create_node_list(vec![parameter], parameter_pos);
        let equals_greater_than_token = self.parse_arrow_token();
        let is_async = modifiers.is_some();
        let body = self.parse_arrow_function_expression_body(is_async, allow_return_type_in_arrow);
        let mut data = self.finish_node(SyntaxKind::ArrowFunction, pos);
        data.modifier_flags = crate::parser::modifier_flags(None, modifiers);
        Expression::ArrowFunction(ArrowFunction {
            data,
            modifiers,
            type_parameters: None,
            parameters,
            return_type: None,
            equals_greater_than_token,
            body,
        })
    }

    /// `=>`, which may not start a line.
    fn parse_arrow_token(&mut self) -> Token {
        if self.token() == SyntaxKind::EqualsGreaterThanToken && self.has_preceding_line_break() {
            self.parse_error_at_current_token(&messages::LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW, &[]);
        }
        self.parse_expected_token(SyntaxKind::EqualsGreaterThanToken)
    }

    fn parse_arrow_function_expression_body(&mut self, is_async: bool, allow_return_type_in_arrow: bool) -> ArrowFunctionBody<'a> {
        if self.token() == SyntaxKind::OpenBraceToken {
            let block = self.parse_function_block(false, is_async, None);
            return ArrowFunctionBody::Block(self.arena.alloc(block));
        }

        // `() => return 1` or similar: a statement where an expression was
        // expected. Parse a block with the brace missing.
        if !matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::FunctionKeyword | SyntaxKind::ClassKeyword
        ) && self.is_start_of_statement()
            && !self.is_start_of_expression_statement()
        {
            let block = self.with_yield_and_await(false, is_async, |p| {
                p.do_outside_of_context(NodeFlags::DECORATOR_CONTEXT, |p| p.parse_block(true, None))
            });
            return ArrowFunctionBody::Block(self.arena.alloc(block));
        }

        let expression = self.with_yield_and_await(self.in_yield_context(), is_async, |p| {
            p.parse_assignment_expression_or_higher_with(allow_return_type_in_arrow)
        });
        ArrowFunctionBody::Expression(self.arena.alloc(expression))
    }

    fn is_start_of_expression_statement(&mut self) -> bool {
        !matches!(
            self.token(),
            SyntaxKind::OpenBraceToken | SyntaxKind::FunctionKeyword | SyntaxKind::ClassKeyword | SyntaxKind::AtToken
        ) && self.is_start_of_expression()
    }
}

/// Expressions that may be assigned to, at least syntactically.
fn is_left_hand_side_expression(expression: &Expression<'_>) -> bool {
    matches!(
        expression,
        Expression::PropertyAccess(_)
            | Expression::ElementAccess(_)
            | Expression::New(_)
            | Expression::Call(_)
            | Expression::JsxElement(_)
            | Expression::JsxSelfClosingElement(_)
            | Expression::JsxFragment(_)
            | Expression::TaggedTemplate(_)
            | Expression::ArrayLiteral(_)
            | Expression::Parenthesized(_)
            | Expression::ObjectLiteral(_)
            | Expression::ClassExpression(_)
            | Expression::FunctionExpression(_)
            | Expression::Identifier(_)
            | Expression::PrivateIdentifier(_)
            | Expression::RegularExpressionLiteral(_)
            | Expression::NumericLiteral(_)
            | Expression::BigIntLiteral(_)
            | Expression::StringLiteral(_)
            | Expression::NoSubstitutionTemplateLiteral(_)
            | Expression::TemplateExpression(_)
            | Expression::FalseKeyword(_)
            | Expression::NullKeyword(_)
            | Expression::ThisKeyword(_)
            | Expression::TrueKeyword(_)
            | Expression::SuperKeyword(_)
            | Expression::NonNull(_)
            | Expression::MetaProperty(_)
            | Expression::ImportKeyword(_)
    )
}

/// `OPTIONAL_CHAIN` for a link that has its own `?.` or extends an
/// unparenthesized chain.
fn optional_chain_flags(has_question_dot: bool, expression: &Expression<'_>) -> NodeFlags {
    let continues_chain = matches!(
        expression,
        Expression::PropertyAccess(_) | Expression::ElementAccess(_) | Expression::Call(_) | Expression::NonNull(_)
    ) && expression.flags().contains(NodeFlags::OPTIONAL_CHAIN);
    if has_question_dot || continues_chain {
        NodeFlags::OPTIONAL_CHAIN
    } else {
        NodeFlags::NONE
    }
}

/// A return type that can only have come from misreading a conditional,
/// e.g. `a ? (b) : (c) => d`.
fn type_has_arrow_function_blocking_parse_error(node: &TypeNode<'_>) -> bool {
    match node {
        TypeNode::TypeReference(reference) => reference.type_name.is_missing(),
        TypeNode::FunctionType(function) | TypeNode::ConstructorType(function) => {
            type_has_arrow_function_blocking_parse_error(function.return_type)
        }
        TypeNode::ParenthesizedType(wrapped) => type_has_arrow_function_blocking_parse_error(wrapped.type_node),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    fn expression<'a>(arena: &'a Bump, text: &str) -> crate::Parsed<'a, Expression<'a>> {
        Parser::new(arena, "test.ts", text).parse_single_expression()
    }

    fn binary<'e, 'a>(expression: &'e Expression<'a>) -> &'e BinaryExpression<'a> {
        match expression {
            Expression::Binary(binary) => binary,
            other => panic!("expected binary expression, got {:?}", other.kind()),
        }
    }

    #[test]
    fn as_does_not_cross_a_line_break() {
        let arena = Bump::new();
        let parsed = expression(&arena, "x as T");
        assert!(matches!(parsed.node, Expression::As(_)));

        let parsed = Parser::new(&arena, "test.ts", "x\nas\nT").parse_source_file();
        assert_eq!(parsed.statements.len(), 3);
    }

    #[test]
    fn shift_assignment_is_merged_from_greater_than() {
        let arena = Bump::new();
        let parsed = expression(&arena, "a >>>= 1");
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(binary(parsed.node).operator_token.data.kind, SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken);
    }

    #[test]
    fn unary_left_of_exponentiation_is_reported() {
        let arena = Bump::new();
        let parsed = expression(&arena, "-a ** b");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].code(), 17006);
        assert_eq!(parsed.diagnostics[0].start(), Some(0));

        let parsed = expression(&arena, "(-a) ** b");
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn generic_call_versus_comparison() {
        let arena = Bump::new();
        let parsed = expression(&arena, "f<T>(x)");
        match parsed.node {
            Expression::Call(call) => assert_eq!(call.type_arguments.map(|t| t.len()), Some(1)),
            other => panic!("expected call, got {:?}", other.kind()),
        }

        let parsed = expression(&arena, "a < b > c");
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(binary(parsed.node).operator_token.data.kind, SyntaxKind::GreaterThanToken);
    }

    #[test]
    fn optional_chain_flags_propagate() {
        let arena = Bump::new();
        let parsed = expression(&arena, "a?.b.c()");
        assert!(parsed.node.flags().contains(NodeFlags::OPTIONAL_CHAIN));

        let parsed = expression(&arena, "(a?.b).c");
        assert!(!parsed.node.flags().contains(NodeFlags::OPTIONAL_CHAIN));
    }

    #[test]
    fn conditional_keeps_colon_from_arrow_return_type() {
        let arena = Bump::new();
        let parsed = expression(&arena, "a ? (b) : c => d");
        assert!(parsed.diagnostics.is_empty());
        match parsed.node {
            Expression::Conditional(conditional) => {
                assert!(matches!(conditional.when_true, Expression::Parenthesized(_)));
                assert!(matches!(conditional.when_false, Expression::ArrowFunction(_)));
            }
            other => panic!("expected conditional, got {:?}", other.kind()),
        }
    }

    #[test]
    fn failed_arrow_heads_are_remembered() {
        let arena = Bump::new();
        let mut parser = Parser::new(&arena, "test.ts", "(a, b)");
        parser.next_token();
        let parsed = parser.parse_expression();
        assert!(matches!(parsed, Expression::Parenthesized(_)));
        assert!(!parser.not_parenthesized_arrow.is_empty());
    }

    #[test]
    fn regex_is_rescanned_from_slash() {
        let arena = Bump::new();
        let parsed = expression(&arena, "/ab+c/gi.test(s)");
        assert!(parsed.diagnostics.is_empty());
        let Expression::Call(call) = parsed.node else {
            panic!("expected call");
        };
        let Expression::PropertyAccess(access) = call.expression else {
            panic!("expected property access");
        };
        assert!(matches!(access.expression, Expression::RegularExpressionLiteral(_)));
    }

    #[test]
    fn template_spans_end_at_tail() {
        let arena = Bump::new();
        let parsed = expression(&arena, "`a${b}c${d}e`");
        assert!(parsed.diagnostics.is_empty());
        match parsed.node {
            Expression::TemplateExpression(template) => {
                assert_eq!(template.template_spans.len(), 2);
                assert_eq!(
                    template.template_spans.last().map(|s| s.literal.data.kind),
                    Some(SyntaxKind::TemplateTail)
                );
            }
            other => panic!("expected template, got {:?}", other.kind()),
        }
    }
}
