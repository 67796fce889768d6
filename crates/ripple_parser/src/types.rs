//! Type grammar: unions and intersections, conditional types, type
//! operators, postfix array/indexed access, and the primary type forms.
//! Object type members (signatures, index signatures, property and method
//! signatures) live here too since interfaces and type literals share them.

use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::types::NodeFlags;
use ripple_ast::HasNodeData;
use ripple_diagnostics::{messages, DiagnosticMessage};

use crate::list::ParsingContext;
use crate::parser::Parser;
use crate::utilities::{is_keyword_type, is_literal_property_name, token_is_identifier_or_keyword};

impl<'a> Parser<'a> {
    // ========================================================================
    // Entry points
    // ========================================================================

    pub(crate) fn parse_type(&mut self) -> TypeNode<'a> {
        // `yield` and `await` are plain names inside a type.
        if self.in_context(NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT) {
            return self.do_outside_of_context(NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT, Self::parse_type);
        }

        if self.is_start_of_function_type_or_constructor_type() {
            return self.parse_function_or_constructor_type();
        }
        let pos = self.node_pos();
        let check_type = self.parse_union_type_or_higher();
        if !self.in_disallow_conditional_types_context()
            && !self.has_preceding_line_break()
            && self.parse_optional(SyntaxKind::ExtendsKeyword)
        {
            // `A extends B ? C : D`: the extends type may not itself be conditional.
            let extends_type = self.disallow_conditional_types_and(Self::parse_type_and_alloc);
            self.parse_expected(SyntaxKind::QuestionToken);
            let true_type = self.allow_conditional_types_and(Self::parse_type_and_alloc);
            self.parse_expected(SyntaxKind::ColonToken);
            let false_type = self.allow_conditional_types_and(Self::parse_type_and_alloc);
            return TypeNode::ConditionalType(ConditionalTypeNode {
                data: self.finish_node(SyntaxKind::ConditionalType, pos),
                check_type: self.arena.alloc(check_type),
                extends_type,
                true_type,
                false_type,
            });
        }
        check_type
    }

    pub(crate) fn parse_type_and_alloc(&mut self) -> &'a TypeNode<'a> {
        let type_node = self.parse_type();
        self.arena.alloc(type_node)
    }

    /// `: T`, when present.
    pub(crate) fn parse_type_annotation(&mut self) -> OptionalNode<'a, TypeNode<'a>> {
        if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_type_and_alloc())
        } else {
            None
        }
    }

    /// `: T` after a signature; the type may be a predicate.
    pub(crate) fn parse_return_type(&mut self) -> OptionalNode<'a, TypeNode<'a>> {
        if self.parse_optional(SyntaxKind::ColonToken) {
            let type_node = self.parse_type_or_type_predicate();
            Some(self.arena.alloc(type_node))
        } else {
            None
        }
    }

    fn parse_type_or_type_predicate(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        if self.token() == SyntaxKind::AssertsKeyword && self.next_token_is_identifier_or_keyword_on_same_line() {
            return self.parse_asserts_type_predicate();
        }
        let parameter_name = if self.is_identifier() {
            self.try_parse(Self::parse_type_predicate_prefix)
        } else {
            None
        };
        let type_node = self.parse_type();
        match parameter_name {
            Some(name) => TypeNode::TypePredicate(TypePredicateNode {
                data: self.finish_node(SyntaxKind::TypePredicate, pos),
                asserts_modifier: None,
                parameter_name: TypePredicateParameterName::Identifier(name),
                type_node: Some(self.arena.alloc(type_node)),
            }),
            None => type_node,
        }
    }

    fn parse_type_predicate_prefix(&mut self) -> Option<Identifier> {
        let name = self.parse_identifier();
        if self.token() == SyntaxKind::IsKeyword && !self.has_preceding_line_break() {
            self.next_token();
            return Some(name);
        }
        None
    }

    /// `asserts x`, `asserts x is T` and `asserts this`.
    fn parse_asserts_type_predicate(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        let asserts_modifier = Some(self.parse_expected_token(SyntaxKind::AssertsKeyword));
        let parameter_name = if self.token() == SyntaxKind::ThisKeyword {
            TypePredicateParameterName::ThisType(self.parse_token_node())
        } else {
            TypePredicateParameterName::Identifier(self.parse_identifier())
        };
        let type_node = if self.parse_optional(SyntaxKind::IsKeyword) {
            Some(self.parse_type_and_alloc())
        } else {
            None
        };
        TypeNode::TypePredicate(TypePredicateNode {
            data: self.finish_node(SyntaxKind::TypePredicate, pos),
            asserts_modifier,
            parameter_name,
            type_node,
        })
    }

    // ========================================================================
    // Starts
    // ========================================================================

    /// `in_start_of_parameter` rules out forms that would make `(a` in a
    /// parameter list ambiguous.
    pub(crate) fn is_start_of_type(&mut self, in_start_of_parameter: bool) -> bool {
        match self.token() {
            SyntaxKind::AnyKeyword
            | SyntaxKind::UnknownKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::BigIntKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::SymbolKeyword
            | SyntaxKind::UniqueKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::UndefinedKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ThisKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::NeverKeyword
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::BarToken
            | SyntaxKind::AmpersandToken
            | SyntaxKind::NewKeyword
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::ObjectKeyword
            | SyntaxKind::AsteriskToken
            | SyntaxKind::QuestionToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::DotDotDotToken
            | SyntaxKind::InferKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::AssertsKeyword
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead => true,
            SyntaxKind::FunctionKeyword => !in_start_of_parameter,
            SyntaxKind::MinusToken => {
                !in_start_of_parameter
                    && self.look_ahead(|p| {
                        matches!(p.next_token(), SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral)
                    })
            }
            SyntaxKind::OpenParenToken => {
                !in_start_of_parameter
                    && self.look_ahead(|p| {
                        p.next_token();
                        p.token() == SyntaxKind::CloseParenToken || p.is_start_of_parameter() || p.is_start_of_type(false)
                    })
            }
            _ => self.is_identifier(),
        }
    }

    fn is_start_of_function_type_or_constructor_type(&mut self) -> bool {
        match self.token() {
            SyntaxKind::LessThanToken | SyntaxKind::NewKeyword => true,
            SyntaxKind::OpenParenToken => self.look_ahead(Self::is_unambiguously_start_of_function_type),
            SyntaxKind::AbstractKeyword => self.next_token_is(SyntaxKind::NewKeyword),
            _ => false,
        }
    }

    fn is_unambiguously_start_of_function_type(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::CloseParenToken | SyntaxKind::DotDotDotToken) {
            // `()` and `(...` can only be a parameter list.
            return true;
        }
        if self.skip_parameter_start() {
            // `(a:`, `(a,`, `(a?`, `(a=` and `(a) =>`.
            if matches!(
                self.token(),
                SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::QuestionToken | SyntaxKind::EqualsToken
            ) {
                return true;
            }
            if self.token() == SyntaxKind::CloseParenToken && self.next_token() == SyntaxKind::EqualsGreaterThanToken {
                return true;
            }
        }
        false
    }

    fn skip_parameter_start(&mut self) -> bool {
        if self.token().is_modifier_kind() {
            self.parse_modifiers(false, false);
        }
        if self.is_identifier() || self.token() == SyntaxKind::ThisKeyword {
            self.next_token();
            return true;
        }
        if matches!(self.token(), SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken) {
            // A pattern only counts when it parses cleanly.
            let error_count = self.diagnostics.len();
            self.parse_identifier_or_pattern();
            return error_count == self.diagnostics.len();
        }
        false
    }

    // ========================================================================
    // Function and constructor types
    // ========================================================================

    fn parse_function_or_constructor_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        let modifiers = if self.token() == SyntaxKind::AbstractKeyword {
            let list_pos = self.node_pos();
            let modifier = self.parse_token_node();
            Some(self.create_node_list(vec![modifier], list_pos))
        } else {
            None
        };
        let is_constructor_type = self.parse_optional(SyntaxKind::NewKeyword);
        let type_parameters = self.parse_type_parameters();
        let parameters = self.parse_parameters(false, false);
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);
        let return_type = self.parse_type_or_type_predicate();
        let return_type = &*self.arena.alloc(return_type);

        let kind = if is_constructor_type {
            SyntaxKind::ConstructorType
        } else {
            SyntaxKind::FunctionType
        };
        let mut data = self.finish_node(kind, pos);
        data.modifier_flags = crate::parser::modifier_flags(None, modifiers);
        let node = FunctionOrConstructorTypeNode {
            data,
            modifiers,
            type_parameters,
            parameters,
            return_type,
        };
        if is_constructor_type {
            TypeNode::ConstructorType(node)
        } else {
            TypeNode::FunctionType(node)
        }
    }

    // ========================================================================
    // Unions, intersections and type operators
    // ========================================================================

    fn parse_union_type_or_higher(&mut self) -> TypeNode<'a> {
        self.parse_union_or_intersection_type(SyntaxKind::BarToken, Self::parse_intersection_type_or_higher)
    }

    fn parse_intersection_type_or_higher(&mut self) -> TypeNode<'a> {
        self.parse_union_or_intersection_type(SyntaxKind::AmpersandToken, Self::parse_type_operator_or_higher)
    }

    /// A leading operator is allowed: `type A = | B | C`.
    fn parse_union_or_intersection_type(
        &mut self,
        operator: SyntaxKind,
        parse_constituent: fn(&mut Self) -> TypeNode<'a>,
    ) -> TypeNode<'a> {
        let pos = self.node_pos();
        let is_union = operator == SyntaxKind::BarToken;
        let has_leading_operator = self.parse_optional(operator);
        let first = if has_leading_operator {
            self.parse_function_or_constructor_type_to_error(is_union)
        } else {
            None
        }
        .unwrap_or_else(|| parse_constituent(self));

        if self.token() != operator && !has_leading_operator {
            return first;
        }
        let mut types = vec![first];
        while self.parse_optional(operator) {
            let constituent = self
                .parse_function_or_constructor_type_to_error(is_union)
                .unwrap_or_else(|| parse_constituent(self));
            types.push(constituent);
        }
        let types = self.create_node_list(types, pos);
        let node = UnionOrIntersectionTypeNode {
            data: self.finish_node(
                if is_union {
                    SyntaxKind::UnionType
                } else {
                    SyntaxKind::IntersectionType
                },
                pos,
            ),
            types,
        };
        if is_union {
            TypeNode::UnionType(node)
        } else {
            TypeNode::IntersectionType(node)
        }
    }

    /// `A | () => B` needs parentheses; parse it anyway and say so.
    fn parse_function_or_constructor_type_to_error(&mut self, is_in_union: bool) -> Option<TypeNode<'a>> {
        if !self.is_start_of_function_type_or_constructor_type() {
            return None;
        }
        let type_node = self.parse_function_or_constructor_type();
        let message: &DiagnosticMessage = match (&type_node, is_in_union) {
            (TypeNode::FunctionType(_), true) => &messages::FUNCTION_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_A_UNION_TYPE,
            (TypeNode::FunctionType(_), false) => {
                &messages::FUNCTION_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_AN_INTERSECTION_TYPE
            }
            (_, true) => &messages::CONSTRUCTOR_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_A_UNION_TYPE,
            (_, false) => &messages::CONSTRUCTOR_TYPE_NOTATION_MUST_BE_PARENTHESIZED_WHEN_USED_IN_AN_INTERSECTION_TYPE,
        };
        self.parse_error_at_node(type_node.range(), message, &[]);
        Some(type_node)
    }

    fn parse_type_operator_or_higher(&mut self) -> TypeNode<'a> {
        match self.token() {
            SyntaxKind::KeyOfKeyword | SyntaxKind::UniqueKeyword | SyntaxKind::ReadonlyKeyword => {
                let pos = self.node_pos();
                let operator = self.token();
                self.next_token();
                let type_node = self.parse_type_operator_or_higher();
                TypeNode::TypeOperator(TypeOperatorNode {
                    data: self.finish_node(SyntaxKind::TypeOperator, pos),
                    operator,
                    type_node: self.arena.alloc(type_node),
                })
            }
            SyntaxKind::InferKeyword => self.parse_infer_type(),
            _ => self.allow_conditional_types_and(Self::parse_postfix_type_or_higher),
        }
    }

    fn parse_infer_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::InferKeyword);
        let parameter_pos = self.node_pos();
        let name = self.parse_identifier();
        let constraint = self.try_parse(Self::try_parse_constraint_of_infer_type);
        let type_parameter = TypeParameterDeclaration {
            data: self.finish_node(SyntaxKind::TypeParameter, parameter_pos),
            modifiers: None,
            name,
            constraint,
            default: None,
        };
        TypeNode::InferType(InferTypeNode {
            data: self.finish_node(SyntaxKind::InferType, pos),
            type_parameter: self.arena.alloc(type_parameter),
        })
    }

    /// `infer U extends X`, unless the `extends` opens a conditional type:
    /// `infer U extends X ? A : B`.
    fn try_parse_constraint_of_infer_type(&mut self) -> Option<&'a TypeNode<'a>> {
        if !self.parse_optional(SyntaxKind::ExtendsKeyword) {
            return None;
        }
        let constraint = self.disallow_conditional_types_and(Self::parse_type_and_alloc);
        if self.in_disallow_conditional_types_context() || self.token() != SyntaxKind::QuestionToken {
            return Some(constraint);
        }
        None
    }

    fn parse_postfix_type_or_higher(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        let mut type_node = self.parse_non_array_type();
        while !self.has_preceding_line_break() {
            match self.token() {
                SyntaxKind::ExclamationToken => {
                    self.next_token();
                    type_node = self.wrap_jsdoc_type(SyntaxKind::JSDocNonNullableType, pos, type_node, true);
                }
                SyntaxKind::QuestionToken => {
                    // `A extends B ? C : D` is a conditional, not `B?`.
                    if self.look_ahead(|p| {
                        p.next_token();
                        p.is_start_of_type(false)
                    }) {
                        return type_node;
                    }
                    self.next_token();
                    type_node = self.wrap_jsdoc_type(SyntaxKind::JSDocNullableType, pos, type_node, true);
                }
                SyntaxKind::EqualsToken if self.in_context(NodeFlags::JSDOC) => {
                    self.next_token();
                    type_node = self.wrap_jsdoc_type(SyntaxKind::JSDocOptionalType, pos, type_node, true);
                }
                SyntaxKind::OpenBracketToken => {
                    self.parse_expected(SyntaxKind::OpenBracketToken);
                    let object_type = &*self.arena.alloc(type_node);
                    if self.is_start_of_type(false) {
                        let index_type = self.parse_type_and_alloc();
                        self.parse_expected(SyntaxKind::CloseBracketToken);
                        type_node = TypeNode::IndexedAccessType(IndexedAccessTypeNode {
                            data: self.finish_node(SyntaxKind::IndexedAccessType, pos),
                            object_type,
                            index_type,
                        });
                    } else {
                        self.parse_expected(SyntaxKind::CloseBracketToken);
                        type_node = TypeNode::ArrayType(ArrayTypeNode {
                            data: self.finish_node(SyntaxKind::ArrayType, pos),
                            element_type: object_type,
                        });
                    }
                }
                _ => return type_node,
            }
        }
        type_node
    }

    fn wrap_jsdoc_type(&mut self, kind: SyntaxKind, pos: u32, type_node: TypeNode<'a>, postfix: bool) -> TypeNode<'a> {
        let node = JsDocWrappedType {
            data: self.finish_node(kind, pos),
            type_node: self.arena.alloc(type_node),
            postfix,
        };
        match kind {
            SyntaxKind::JSDocNonNullableType => TypeNode::JsDocNonNullableType(node),
            SyntaxKind::JSDocOptionalType => TypeNode::JsDocOptionalType(node),
            SyntaxKind::JSDocVariadicType => TypeNode::JsDocVariadicType(node),
            _ => TypeNode::JsDocNullableType(node),
        }
    }

    // ========================================================================
    // Primary types
    // ========================================================================

    fn parse_non_array_type(&mut self) -> TypeNode<'a> {
        let token = self.token();
        match token {
            _ if is_keyword_type(token) => self
                .try_parse(Self::parse_keyword_and_no_dot)
                .unwrap_or_else(|| self.parse_type_reference()),
            SyntaxKind::AsteriskToken => {
                let pos = self.node_pos();
                self.next_token();
                TypeNode::JsDocAllType(KeywordTypeNode {
                    data: self.finish_node(SyntaxKind::JSDocAllType, pos),
                })
            }
            SyntaxKind::QuestionToken => self.parse_jsdoc_unknown_or_nullable_type(),
            SyntaxKind::ExclamationToken => {
                let pos = self.node_pos();
                self.next_token();
                let type_node = self.parse_non_array_type();
                self.wrap_jsdoc_type(SyntaxKind::JSDocNonNullableType, pos, type_node, false)
            }
            SyntaxKind::DotDotDotToken if self.in_context(NodeFlags::JSDOC) => {
                let pos = self.node_pos();
                self.next_token();
                let type_node = self.parse_type();
                self.wrap_jsdoc_type(SyntaxKind::JSDocVariadicType, pos, type_node, false)
            }
            SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => self.parse_literal_type_node(false),
            SyntaxKind::MinusToken => {
                if self.look_ahead(|p| matches!(p.next_token(), SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral)) {
                    self.parse_literal_type_node(true)
                } else {
                    self.parse_type_reference()
                }
            }
            SyntaxKind::VoidKeyword => TypeNode::KeywordType(KeywordTypeNode {
                data: self.parse_token_node().data,
            }),
            SyntaxKind::ThisKeyword => {
                let this_type = self.parse_token_node();
                if self.token() == SyntaxKind::IsKeyword && !self.has_preceding_line_break() {
                    self.parse_this_type_predicate(this_type)
                } else {
                    TypeNode::ThisType(KeywordTypeNode {
                        data: NodeData {
                            kind: SyntaxKind::ThisType,
                            ..this_type.data
                        },
                    })
                }
            }
            SyntaxKind::TypeOfKeyword => {
                if self.next_token_is(SyntaxKind::ImportKeyword) {
                    self.parse_import_type()
                } else {
                    self.parse_type_query()
                }
            }
            SyntaxKind::OpenBraceToken => {
                if self.look_ahead(Self::is_start_of_mapped_type) {
                    self.parse_mapped_type()
                } else {
                    let pos = self.node_pos();
                    let members = self.parse_object_type_members();
                    TypeNode::TypeLiteral(TypeLiteralNode {
                        data: self.finish_node(SyntaxKind::TypeLiteral, pos),
                        members,
                    })
                }
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::OpenParenToken => self.parse_parenthesized_type(),
            SyntaxKind::ImportKeyword => self.parse_import_type(),
            SyntaxKind::AssertsKeyword if self.next_token_is_identifier_or_keyword_on_same_line() => {
                self.parse_asserts_type_predicate()
            }
            SyntaxKind::TemplateHead => self.parse_template_type(),
            _ => self.parse_type_reference(),
        }
    }

    /// A keyword type, or `None` when it is the start of a qualified name
    /// such as `string.Foo`.
    pub(crate) fn parse_keyword_and_no_dot(&mut self) -> Option<TypeNode<'a>> {
        let keyword = self.parse_token_node();
        if self.token() == SyntaxKind::DotToken {
            return None;
        }
        Some(TypeNode::KeywordType(KeywordTypeNode { data: keyword.data }))
    }

    /// `?` alone is the unknown type; `?T` is nullable.
    fn parse_jsdoc_unknown_or_nullable_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        self.next_token();
        if matches!(
            self.token(),
            SyntaxKind::CommaToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::GreaterThanToken
                | SyntaxKind::EqualsToken
                | SyntaxKind::BarToken
        ) {
            return TypeNode::JsDocUnknownType(KeywordTypeNode {
                data: self.finish_node(SyntaxKind::JSDocUnknownType, pos),
            });
        }
        let type_node = self.parse_type();
        self.wrap_jsdoc_type(SyntaxKind::JSDocNullableType, pos, type_node, false)
    }

    fn parse_literal_type_node(&mut self, negative: bool) -> TypeNode<'a> {
        let pos = self.node_pos();
        if negative {
            self.next_token();
        }
        let literal = match self.token() {
            SyntaxKind::TrueKeyword => Expression::TrueKeyword(self.parse_token_node().data),
            SyntaxKind::FalseKeyword => Expression::FalseKeyword(self.parse_token_node().data),
            SyntaxKind::NullKeyword => Expression::NullKeyword(self.parse_token_node().data),
            SyntaxKind::StringLiteral => Expression::StringLiteral(self.parse_string_literal()),
            SyntaxKind::NumericLiteral => Expression::NumericLiteral(self.parse_numeric_literal()),
            SyntaxKind::BigIntLiteral => Expression::BigIntLiteral(self.parse_literal_expression()),
            _ => Expression::NoSubstitutionTemplateLiteral(self.parse_literal_expression()),
        };
        let literal = if negative {
            Expression::PrefixUnary(PrefixUnaryExpression {
                data: self.finish_node(SyntaxKind::PrefixUnaryExpression, pos),
                operator: SyntaxKind::MinusToken,
                operand: self.arena.alloc(literal),
            })
        } else {
            literal
        };
        TypeNode::LiteralType(LiteralTypeNode {
            data: self.finish_node(SyntaxKind::LiteralType, pos),
            literal: self.arena.alloc(literal),
        })
    }

    fn parse_this_type_predicate(&mut self, this_type: Token) -> TypeNode<'a> {
        let pos = this_type.data.range.pos;
        self.next_token();
        let type_node = self.parse_type_and_alloc();
        TypeNode::TypePredicate(TypePredicateNode {
            data: self.finish_node(SyntaxKind::TypePredicate, pos),
            asserts_modifier: None,
            parameter_name: TypePredicateParameterName::ThisType(this_type),
            type_node: Some(type_node),
        })
    }

    fn parse_type_reference(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        let type_name = self.parse_entity_name(true, Some(&messages::TYPE_EXPECTED));
        let type_arguments = if self.has_preceding_line_break() {
            None
        } else {
            self.try_parse_type_arguments()
        };
        TypeNode::TypeReference(TypeReferenceNode {
            data: self.finish_node(SyntaxKind::TypeReference, pos),
            type_name,
            type_arguments,
        })
    }

    /// `A`, `A.B.C`. With `allow_reserved_words`, keywords are accepted
    /// as names.
    pub(crate) fn parse_entity_name(
        &mut self,
        allow_reserved_words: bool,
        message: Option<&DiagnosticMessage>,
    ) -> EntityName<'a> {
        let pos = self.node_pos();
        let message = message.unwrap_or(&messages::IDENTIFIER_EXPECTED);
        let first = if allow_reserved_words {
            self.parse_identifier_name_with_message(message)
        } else {
            self.parse_identifier_with_message(message)
        };
        let mut entity = EntityName::Identifier(first);
        while self.parse_optional(SyntaxKind::DotToken) {
            // `A.<B>` in doc comments.
            if self.token() == SyntaxKind::LessThanToken {
                break;
            }
            let right = if allow_reserved_words {
                self.parse_identifier_name()
            } else {
                self.parse_identifier()
            };
            let name = QualifiedName {
                data: self.finish_node(SyntaxKind::QualifiedName, pos),
                left: entity,
                right,
            };
            entity = EntityName::QualifiedName(self.arena.alloc(name));
        }
        entity
    }

    /// `<A, B>` directly after a type name; `<<` is split first.
    pub(crate) fn try_parse_type_arguments(&mut self) -> Option<NodeList<'a, TypeNode<'a>>> {
        if self.rescan(ripple_scanner::RescanMode::LessThan) != SyntaxKind::LessThanToken {
            return None;
        }
        let start = self.token_start();
        let type_arguments = self.parse_bracketed_list(
            ParsingContext::TypeArguments,
            Self::parse_type,
            SyntaxKind::LessThanToken,
            SyntaxKind::GreaterThanToken,
        );
        if type_arguments.is_empty() {
            let end = self.node_pos();
            self.parse_error_at_range(start, end, &messages::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY, &[]);
        }
        Some(type_arguments)
    }

    fn parse_type_query(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::TypeOfKeyword);
        let expr_name = self.parse_entity_name(true, None);
        let type_arguments = if self.has_preceding_line_break() {
            None
        } else {
            self.try_parse_type_arguments()
        };
        TypeNode::TypeQuery(TypeQueryNode {
            data: self.finish_node(SyntaxKind::TypeQuery, pos),
            expr_name,
            type_arguments,
        })
    }

    /// `import("m")`, `typeof import("m").A<T>` and the attribute form
    /// `import("m", { with: { ... } })`.
    fn parse_import_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        let is_type_of = self.parse_optional(SyntaxKind::TypeOfKeyword);
        self.parse_expected(SyntaxKind::ImportKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);
        let argument = self.parse_type_and_alloc();

        let mut attributes = None;
        if self.parse_optional(SyntaxKind::CommaToken) {
            self.parse_expected(SyntaxKind::OpenBraceToken);
            let attributes_pos = self.node_pos();
            let token = self.token();
            if matches!(token, SyntaxKind::WithKeyword | SyntaxKind::AssertKeyword) {
                self.next_token();
            } else {
                self.parse_error_at_current_token(&messages::_0_EXPECTED, &["with"]);
            }
            self.parse_expected(SyntaxKind::ColonToken);
            attributes = Some(self.parse_import_attributes_rest(attributes_pos, token));
            self.parse_optional(SyntaxKind::CommaToken);
            self.parse_expected(SyntaxKind::CloseBraceToken);
        }
        self.parse_expected(SyntaxKind::CloseParenToken);

        let qualifier = if self.parse_optional(SyntaxKind::DotToken) {
            Some(self.parse_entity_name(true, Some(&messages::TYPE_EXPECTED)))
        } else {
            None
        };
        let type_arguments = if self.has_preceding_line_break() {
            None
        } else {
            self.try_parse_type_arguments()
        };
        TypeNode::ImportType(ImportTypeNode {
            data: self.finish_node(SyntaxKind::ImportType, pos),
            is_type_of,
            argument,
            attributes,
            qualifier,
            type_arguments,
        })
    }

    fn parse_parenthesized_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenParenToken);
        let type_node = self.parse_type_and_alloc();
        self.parse_expected(SyntaxKind::CloseParenToken);
        TypeNode::ParenthesizedType(WrappedTypeNode {
            data: self.finish_node(SyntaxKind::ParenthesizedType, pos),
            type_node,
        })
    }

    fn parse_template_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        let head = self.parse_template_literal_part();
        let list_pos = self.node_pos();
        let mut spans = Vec::new();
        loop {
            let span_pos = self.node_pos();
            let type_node = self.parse_type_and_alloc();
            let literal = self.parse_template_continuation();
            let is_middle = literal.data.kind == SyntaxKind::TemplateMiddle;
            spans.push(TemplateLiteralTypeSpan {
                data: self.finish_node(SyntaxKind::TemplateLiteralTypeSpan, span_pos),
                type_node,
                literal,
            });
            if !is_middle {
                break;
            }
        }
        let template_spans = self.create_node_list(spans, list_pos);
        TypeNode::TemplateLiteralType(TemplateLiteralTypeNode {
            data: self.finish_node(SyntaxKind::TemplateLiteralType, pos),
            head,
            template_spans,
        })
    }

    // ========================================================================
    // Tuples
    // ========================================================================

    fn parse_tuple_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        let elements = self.parse_bracketed_list(
            ParsingContext::TupleElementTypes,
            Self::parse_tuple_element_name_or_tuple_element_type,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
        );
        TypeNode::TupleType(TupleTypeNode {
            data: self.finish_node(SyntaxKind::TupleType, pos),
            elements,
        })
    }

    fn parse_tuple_element_name_or_tuple_element_type(&mut self) -> TypeNode<'a> {
        if !self.look_ahead(Self::is_tuple_element_name) {
            return self.parse_tuple_element_type();
        }
        let pos = self.node_pos();
        let dot_dot_dot_token = self.parse_optional_token(SyntaxKind::DotDotDotToken);
        let name = self.parse_identifier_name();
        let question_token = self.parse_optional_token(SyntaxKind::QuestionToken);
        self.parse_expected(SyntaxKind::ColonToken);
        let type_node = self.parse_tuple_element_type();
        TypeNode::NamedTupleMember(NamedTupleMemberNode {
            data: self.finish_node(SyntaxKind::NamedTupleMember, pos),
            dot_dot_dot_token,
            name,
            question_token,
            type_node: self.arena.alloc(type_node),
        })
    }

    fn is_tuple_element_name(&mut self) -> bool {
        if self.token() == SyntaxKind::DotDotDotToken {
            self.next_token();
        }
        if !token_is_identifier_or_keyword(self.token()) {
            return false;
        }
        match self.next_token() {
            SyntaxKind::ColonToken => true,
            SyntaxKind::QuestionToken => self.next_token() == SyntaxKind::ColonToken,
            _ => false,
        }
    }

    /// `...T`, `T?` or `T`.
    fn parse_tuple_element_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let type_node = self.parse_type_and_alloc();
            return TypeNode::RestType(WrappedTypeNode {
                data: self.finish_node(SyntaxKind::RestType, pos),
                type_node,
            });
        }
        match self.parse_type() {
            // The postfix `?` parsed as nullable is the optional marker here.
            TypeNode::JsDocNullableType(nullable) if nullable.postfix && nullable.type_node.pos() == pos => {
                TypeNode::OptionalType(WrappedTypeNode {
                    data: NodeData {
                        kind: SyntaxKind::OptionalType,
                        ..nullable.data
                    },
                    type_node: nullable.type_node,
                })
            }
            type_node => type_node,
        }
    }

    // ========================================================================
    // Mapped types
    // ========================================================================

    fn is_start_of_mapped_type(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            return self.next_token() == SyntaxKind::ReadonlyKeyword;
        }
        if self.token() == SyntaxKind::ReadonlyKeyword {
            self.next_token();
        }
        if self.token() != SyntaxKind::OpenBracketToken {
            return false;
        }
        self.next_token();
        self.is_identifier() && self.next_token() == SyntaxKind::InKeyword
    }

    /// `{ readonly [K in T as N]?: V }` with `+`/`-` on either modifier.
    fn parse_mapped_type(&mut self) -> TypeNode<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let readonly_token = if matches!(
            self.token(),
            SyntaxKind::ReadonlyKeyword | SyntaxKind::PlusToken | SyntaxKind::MinusToken
        ) {
            let token = self.parse_token_node();
            if token.data.kind != SyntaxKind::ReadonlyKeyword {
                self.parse_expected(SyntaxKind::ReadonlyKeyword);
            }
            Some(token)
        } else {
            None
        };

        self.parse_expected(SyntaxKind::OpenBracketToken);
        let parameter_pos = self.node_pos();
        let name = self.parse_identifier_name();
        self.parse_expected(SyntaxKind::InKeyword);
        let constraint = self.parse_type_and_alloc();
        let type_parameter = TypeParameterDeclaration {
            data: self.finish_node(SyntaxKind::TypeParameter, parameter_pos),
            modifiers: None,
            name,
            constraint: Some(constraint),
            default: None,
        };
        let name_type = if self.parse_optional(SyntaxKind::AsKeyword) {
            Some(self.parse_type_and_alloc())
        } else {
            None
        };
        self.parse_expected(SyntaxKind::CloseBracketToken);

        let question_token = if matches!(
            self.token(),
            SyntaxKind::QuestionToken | SyntaxKind::PlusToken | SyntaxKind::MinusToken
        ) {
            let token = self.parse_token_node();
            if token.data.kind != SyntaxKind::QuestionToken {
                self.parse_expected(SyntaxKind::QuestionToken);
            }
            Some(token)
        } else {
            None
        };
        let type_node = self.parse_type_annotation();
        self.parse_semicolon();
        self.parse_expected(SyntaxKind::CloseBraceToken);
        TypeNode::MappedType(MappedTypeNode {
            data: self.finish_node(SyntaxKind::MappedType, pos),
            readonly_token,
            type_parameter: self.arena.alloc(type_parameter),
            name_type,
            question_token,
            type_node,
        })
    }

    // ========================================================================
    // Type members
    // ========================================================================

    /// `{ members }`, or a missing list when the brace is absent.
    pub(crate) fn parse_object_type_members(&mut self) -> NodeList<'a, TypeElement<'a>> {
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return self.create_missing_list();
        }
        let members = self.parse_list(ParsingContext::TypeMembers, Self::parse_type_member);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        members
    }

    /// Lookahead: modifiers, then a name followed by something only a member
    /// can have.
    pub(crate) fn is_type_member_start(&mut self) -> bool {
        if matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken | SyntaxKind::GetKeyword | SyntaxKind::SetKeyword
        ) {
            return true;
        }
        let mut id_token = false;
        while self.token().is_modifier_kind() {
            id_token = true;
            self.next_token();
        }
        if self.token() == SyntaxKind::OpenBracketToken {
            return true;
        }
        if is_literal_property_name(self.token()) {
            id_token = true;
            self.next_token();
        }
        id_token
            && (matches!(
                self.token(),
                SyntaxKind::OpenParenToken
                    | SyntaxKind::LessThanToken
                    | SyntaxKind::QuestionToken
                    | SyntaxKind::ColonToken
                    | SyntaxKind::CommaToken
            ) || self.can_parse_semicolon())
    }

    fn parse_type_member(&mut self) -> TypeElement<'a> {
        if matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
            return TypeElement::CallSignature(self.parse_signature_member(SyntaxKind::CallSignature));
        }
        if self.token() == SyntaxKind::NewKeyword
            && self.look_ahead(|p| matches!(p.next_token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken))
        {
            return TypeElement::ConstructSignature(self.parse_signature_member(SyntaxKind::ConstructSignature));
        }

        let pos = self.node_pos();
        let modifiers = self.parse_modifiers(false, false);
        if self.parse_contextual_modifier(SyntaxKind::GetKeyword) {
            return TypeElement::GetAccessor(self.parse_accessor_declaration(
                pos,
                None,
                modifiers,
                SyntaxKind::GetAccessor,
                true,
            ));
        }
        if self.parse_contextual_modifier(SyntaxKind::SetKeyword) {
            return TypeElement::SetAccessor(self.parse_accessor_declaration(
                pos,
                None,
                modifiers,
                SyntaxKind::SetAccessor,
                true,
            ));
        }
        if self.is_index_signature() {
            return TypeElement::IndexSignature(self.parse_index_signature_declaration(pos, None, modifiers));
        }
        self.parse_property_or_method_signature(pos, modifiers)
    }

    fn parse_signature_member(&mut self, kind: SyntaxKind) -> SignatureDeclaration<'a> {
        let pos = self.node_pos();
        if kind == SyntaxKind::ConstructSignature {
            self.parse_expected(SyntaxKind::NewKeyword);
        }
        let type_parameters = self.parse_type_parameters();
        let parameters = self.parse_parameters(false, false);
        let return_type = self.parse_return_type();
        self.parse_type_member_semicolon();
        SignatureDeclaration {
            data: self.finish_node(kind, pos),
            type_parameters,
            parameters,
            return_type,
        }
    }

    fn parse_property_or_method_signature(&mut self, pos: u32, modifiers: Option<NodeList<'a, Token>>) -> TypeElement<'a> {
        let name = self.parse_property_name();
        let question_token = self.parse_optional_token(SyntaxKind::QuestionToken);
        if matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
            let type_parameters = self.parse_type_parameters();
            let parameters = self.parse_parameters(false, false);
            let return_type = self.parse_return_type();
            self.parse_type_member_semicolon();
            return TypeElement::MethodSignature(MethodSignature {
                data: self.finish_declaration(SyntaxKind::MethodSignature, pos, None, modifiers),
                modifiers,
                name,
                question_token,
                type_parameters,
                parameters,
                return_type,
            });
        }
        let type_annotation = self.parse_type_annotation();
        // `{ a: T = 1 }` is accepted syntactically; the initializer is dropped.
        if self.token() == SyntaxKind::EqualsToken {
            self.parse_initializer();
        }
        self.parse_type_member_semicolon();
        TypeElement::PropertySignature(PropertySignature {
            data: self.finish_declaration(SyntaxKind::PropertySignature, pos, None, modifiers),
            modifiers,
            name,
            question_token,
            type_annotation,
        })
    }

    /// Members end with `,` or `;`, or nothing before a line break or `}`.
    pub(crate) fn parse_type_member_semicolon(&mut self) {
        if self.parse_optional(SyntaxKind::CommaToken) {
            return;
        }
        self.parse_semicolon();
    }

    pub(crate) fn is_index_signature(&mut self) -> bool {
        self.token() == SyntaxKind::OpenBracketToken && self.look_ahead(Self::is_unambiguously_index_signature)
    }

    /// `[` followed by `...`, `]`, `modifier name`, `name:`, `name,` or
    /// `name?` with one of `:`, `,` or `]`.
    fn is_unambiguously_index_signature(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::DotDotDotToken | SyntaxKind::CloseBracketToken) {
            return true;
        }
        if self.token().is_modifier_kind() {
            self.next_token();
            if self.is_identifier() {
                return true;
            }
        } else if !self.is_identifier() {
            return false;
        } else {
            self.next_token();
        }
        if matches!(self.token(), SyntaxKind::ColonToken | SyntaxKind::CommaToken) {
            return true;
        }
        if self.token() != SyntaxKind::QuestionToken {
            return false;
        }
        matches!(
            self.next_token(),
            SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::CloseBracketToken
        )
    }

    pub(crate) fn parse_index_signature_declaration(
        &mut self,
        pos: u32,
        decorators: Option<NodeList<'a, Decorator<'a>>>,
        modifiers: Option<NodeList<'a, Token>>,
    ) -> IndexSignatureDeclaration<'a> {
        let parameters = self.parse_bracketed_list(
            ParsingContext::Parameters,
            Self::parse_parameter,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
        );
        let type_annotation = self.parse_type_annotation();
        self.parse_type_member_semicolon();
        IndexSignatureDeclaration {
            data: self.finish_declaration(SyntaxKind::IndexSignature, pos, decorators, modifiers),
            decorators,
            modifiers,
            parameters,
            type_annotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    fn parse_type<'a>(arena: &'a Bump, text: &str) -> crate::Parsed<'a, TypeNode<'a>> {
        Parser::new(arena, "test.ts", text).parse_type_expression()
    }

    #[test]
    fn union_binds_looser_than_array() {
        let arena = Bump::new();
        let parsed = parse_type(&arena, "string | number[]");
        assert!(parsed.diagnostics.is_empty());
        let TypeNode::UnionType(union) = parsed.node else {
            panic!("expected union, got {:?}", parsed.node.kind());
        };
        assert_eq!(union.types.len(), 2);
        assert!(matches!(union.types.get(1), Some(TypeNode::ArrayType(_))));
    }

    #[test]
    fn leading_bar_is_allowed() {
        let arena = Bump::new();
        let parsed = parse_type(&arena, "| 'a' | 'b'");
        assert!(parsed.diagnostics.is_empty());
        assert!(matches!(parsed.node, TypeNode::UnionType(_)));
    }

    #[test]
    fn conditional_with_infer_constraint() {
        let arena = Bump::new();
        let parsed = parse_type(&arena, "T extends [infer U extends string] ? U : never");
        assert!(parsed.diagnostics.is_empty());
        let TypeNode::ConditionalType(conditional) = parsed.node else {
            panic!("expected conditional, got {:?}", parsed.node.kind());
        };
        let TypeNode::TupleType(tuple) = conditional.extends_type else {
            panic!("expected tuple");
        };
        let Some(TypeNode::InferType(infer)) = tuple.elements.first() else {
            panic!("expected infer");
        };
        assert!(infer.type_parameter.constraint.is_some());
    }

    #[test]
    fn function_type_in_union_must_be_parenthesized() {
        let arena = Bump::new();
        let parsed = parse_type(&arena, "string | () => void");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].code(), 1385);

        let parsed = parse_type(&arena, "string | (() => void)");
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn optional_and_rest_tuple_elements() {
        let arena = Bump::new();
        let parsed = parse_type(&arena, "[string, number?, ...boolean[]]");
        assert!(parsed.diagnostics.is_empty());
        let TypeNode::TupleType(tuple) = parsed.node else {
            panic!("expected tuple");
        };
        let kinds: Vec<_> = tuple.elements.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![SyntaxKind::StringKeyword, SyntaxKind::OptionalType, SyntaxKind::RestType]
        );
    }

    #[test]
    fn mapped_type_with_modifiers() {
        let arena = Bump::new();
        let parsed = parse_type(&arena, "{ -readonly [K in keyof T as `get${K}`]+?: T[K] }");
        assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
        let TypeNode::MappedType(mapped) = parsed.node else {
            panic!("expected mapped type, got {:?}", parsed.node.kind());
        };
        assert_eq!(mapped.readonly_token.map(|t| t.data.kind), Some(SyntaxKind::MinusToken));
        assert_eq!(mapped.question_token.map(|t| t.data.kind), Some(SyntaxKind::PlusToken));
        assert!(mapped.name_type.is_some());
        assert!(matches!(mapped.type_node, Some(TypeNode::IndexedAccessType(_))));
    }

    #[test]
    fn type_predicates() {
        let arena = Bump::new();
        let parsed = Parser::new(&arena, "test.ts", "function f(x): x is string {}\nfunction g(x): asserts x {}")
            .parse_source_file();
        assert!(parsed.parse_diagnostics.is_empty());
    }

    #[test]
    fn empty_type_argument_list_is_reported() {
        let arena = Bump::new();
        let parsed = parse_type(&arena, "Array<>");
        assert_eq!(parsed.diagnostics[0].code(), 1099);
    }

    #[test]
    fn type_member_forms() {
        let arena = Bump::new();
        let parsed = parse_type(
            &arena,
            "{ (): void; new (x: number): Foo; [key: string]: any; readonly a?: number, m<T>(): T; get x(): number }",
        );
        assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
        let TypeNode::TypeLiteral(literal) = parsed.node else {
            panic!("expected type literal");
        };
        let kinds: Vec<_> = literal.members.iter().map(|m| m.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::CallSignature,
                SyntaxKind::ConstructSignature,
                SyntaxKind::IndexSignature,
                SyntaxKind::PropertySignature,
                SyntaxKind::MethodSignature,
                SyntaxKind::GetAccessor,
            ]
        );
    }
}
