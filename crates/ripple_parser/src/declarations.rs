//! Declarations: functions, classes, interfaces, type aliases, enums,
//! modules, imports and exports, plus the pieces they share (decorators,
//! modifiers, parameters, type parameters and binding patterns).

use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::types::{ModifierFlags, NodeFlags};
use ripple_ast::HasNodeData;
use ripple_diagnostics::{messages, DiagnosticMessage};

use crate::list::ParsingContext;
use crate::parser::{modifier_flags, token_to_string, Parser};
use crate::utilities::{is_literal_property_name, token_is_identifier_or_keyword};

type Decorators<'a> = Option<NodeList<'a, Decorator<'a>>>;
type Modifiers<'a> = Option<NodeList<'a, Token>>;

impl<'a> Parser<'a> {
    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Whether the tokens ahead begin a declaration. Modifiers are skipped
    /// as long as they stay on one line.
    pub(crate) fn is_start_of_declaration(&mut self) -> bool {
        self.look_ahead(Self::scan_for_declaration_start)
    }

    fn scan_for_declaration_start(&mut self) -> bool {
        loop {
            match self.token() {
                SyntaxKind::VarKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::EnumKeyword => return true,
                SyntaxKind::UsingKeyword => return self.is_using_declaration(),
                SyntaxKind::AwaitKeyword => return self.is_await_using_declaration(),
                SyntaxKind::InterfaceKeyword | SyntaxKind::TypeKeyword => {
                    return self.next_token_is_identifier_on_same_line();
                }
                SyntaxKind::ModuleKeyword | SyntaxKind::NamespaceKeyword => {
                    return self.next_token_is_identifier_or_string_literal_on_same_line();
                }
                SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword => {
                    let previous = self.token();
                    self.next_token();
                    if self.has_preceding_line_break() {
                        return false;
                    }
                    if previous == SyntaxKind::DeclareKeyword && self.token() == SyntaxKind::TypeKeyword {
                        // `declare type` is a declaration even without a name yet.
                        return true;
                    }
                }
                SyntaxKind::GlobalKeyword => {
                    self.next_token();
                    return matches!(
                        self.token(),
                        SyntaxKind::OpenBraceToken | SyntaxKind::Identifier | SyntaxKind::ExportKeyword
                    );
                }
                SyntaxKind::ImportKeyword => {
                    self.next_token();
                    return matches!(
                        self.token(),
                        SyntaxKind::StringLiteral | SyntaxKind::AsteriskToken | SyntaxKind::OpenBraceToken
                    ) || token_is_identifier_or_keyword(self.token());
                }
                SyntaxKind::ExportKeyword => {
                    let mut current = self.next_token();
                    if current == SyntaxKind::TypeKeyword {
                        current = self.look_ahead(|p| p.next_token());
                    }
                    if matches!(
                        current,
                        SyntaxKind::EqualsToken
                            | SyntaxKind::AsteriskToken
                            | SyntaxKind::OpenBraceToken
                            | SyntaxKind::DefaultKeyword
                            | SyntaxKind::AsKeyword
                            | SyntaxKind::AtToken
                    ) {
                        return true;
                    }
                }
                SyntaxKind::StaticKeyword => {
                    self.next_token();
                }
                _ => return false,
            }
        }
    }

    pub(crate) fn parse_declaration(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        let mut decorators = self.parse_decorators();
        let modifiers = self.parse_modifiers(false, false);
        // `export @dec class C {}`
        if decorators.is_none() && self.token() == SyntaxKind::AtToken {
            decorators = self.parse_decorators();
        }

        match self.token() {
            SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::UsingKeyword
            | SyntaxKind::AwaitKeyword => self.parse_variable_statement(pos, decorators, modifiers),
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(pos, decorators, modifiers),
            SyntaxKind::ClassKeyword => Statement::ClassDeclaration(self.parse_class_declaration_or_expression(
                pos,
                decorators,
                modifiers,
                SyntaxKind::ClassDeclaration,
            )),
            SyntaxKind::InterfaceKeyword => self.parse_interface_declaration(pos, decorators, modifiers),
            SyntaxKind::TypeKeyword => self.parse_type_alias_declaration(pos, decorators, modifiers),
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(pos, decorators, modifiers),
            SyntaxKind::GlobalKeyword | SyntaxKind::ModuleKeyword | SyntaxKind::NamespaceKeyword => {
                self.parse_module_declaration(pos, decorators, modifiers)
            }
            SyntaxKind::ImportKeyword => self.parse_import_declaration_or_import_equals_declaration(pos, decorators, modifiers),
            SyntaxKind::ExportKeyword => {
                self.next_token();
                match self.token() {
                    SyntaxKind::DefaultKeyword | SyntaxKind::EqualsToken => {
                        self.parse_export_assignment(pos, decorators, modifiers)
                    }
                    SyntaxKind::AsKeyword => self.parse_namespace_export_declaration(pos),
                    _ => self.parse_export_declaration(pos, decorators, modifiers),
                }
            }
            _ => {
                // Decorators or modifiers with nothing to attach them to.
                self.parse_error_at_current_token(&messages::DECLARATION_EXPECTED, &[]);
                let missing = Expression::Identifier(self.create_missing_identifier());
                let expression = self.arena.alloc(missing);
                Statement::ExpressionStatement(ExpressionStatement {
                    data: self.finish_declaration(SyntaxKind::ExpressionStatement, pos, decorators, modifiers),
                    expression,
                })
            }
        }
    }

    // ========================================================================
    // Decorators and modifiers
    // ========================================================================

    pub(crate) fn parse_decorators(&mut self) -> Decorators<'a> {
        let list_pos = self.node_pos();
        let mut decorators = Vec::new();
        while self.token() == SyntaxKind::AtToken {
            let pos = self.node_pos();
            self.next_token();
            let expression = self.do_in_decorator_context(Self::parse_left_hand_side_expression_or_higher);
            let expression = self.arena.alloc(expression);
            decorators.push(Decorator {
                data: self.finish_node(SyntaxKind::Decorator, pos),
                expression,
            });
        }
        (!decorators.is_empty()).then(|| self.create_node_list(decorators, list_pos))
    }

    /// Parse a run of modifier keywords. A keyword only counts as a modifier
    /// when what follows it can continue a declaration, so `static()` or
    /// `public = 1` stay member names.
    pub(crate) fn parse_modifiers(&mut self, permit_const: bool, stop_on_static_block: bool) -> Modifiers<'a> {
        let list_pos = self.node_pos();
        let mut modifiers: Vec<Token> = Vec::new();
        let mut seen_static = false;
        while let Some(modifier) = self.try_parse_modifier(permit_const, stop_on_static_block, seen_static) {
            let kind = modifier.data.kind;
            if modifiers.iter().any(|m| m.data.kind == kind) {
                self.parse_error_at_node(modifier.data.range, &messages::_0_MODIFIER_ALREADY_SEEN, &[token_to_string(kind)]);
            }
            seen_static |= kind == SyntaxKind::StaticKeyword;
            modifiers.push(modifier);
        }
        (!modifiers.is_empty()).then(|| self.create_node_list(modifiers, list_pos))
    }

    fn try_parse_modifier(&mut self, permit_const: bool, stop_on_static_block: bool, seen_static: bool) -> Option<Token> {
        let pos = self.node_pos();
        let kind = self.token();
        if kind == SyntaxKind::ConstKeyword && permit_const {
            // `<const T>`: only a modifier when a name follows on the same line.
            self.try_parse(|p| p.next_token_is_on_same_line_and_can_follow_modifier().then_some(()))?;
        } else if stop_on_static_block && kind == SyntaxKind::StaticKeyword && self.next_token_is(SyntaxKind::OpenBraceToken) {
            return None;
        } else if seen_static && kind == SyntaxKind::StaticKeyword {
            return None;
        } else if !self.parse_any_contextual_modifier() {
            return None;
        }
        Some(Token {
            data: self.finish_node(kind, pos),
        })
    }

    fn parse_any_contextual_modifier(&mut self) -> bool {
        self.token().is_modifier_kind() && self.try_parse(|p| p.next_token_can_follow_modifier().then_some(())).is_some()
    }

    /// Consume `kind` when it is used as a modifier (`get`/`set` before a name).
    pub(crate) fn parse_contextual_modifier(&mut self, kind: SyntaxKind) -> bool {
        self.token() == kind && self.try_parse(|p| p.next_token_can_follow_modifier().then_some(())).is_some()
    }

    fn next_token_can_follow_modifier(&mut self) -> bool {
        match self.token() {
            SyntaxKind::ConstKeyword => self.next_token() == SyntaxKind::EnumKeyword,
            SyntaxKind::ExportKeyword => {
                self.next_token();
                match self.token() {
                    SyntaxKind::DefaultKeyword => self.look_ahead(Self::next_token_can_follow_default_keyword),
                    SyntaxKind::TypeKeyword => self.look_ahead(|p| {
                        p.next_token();
                        p.can_follow_export_modifier()
                    }),
                    _ => self.can_follow_export_modifier(),
                }
            }
            SyntaxKind::DefaultKeyword => self.next_token_can_follow_default_keyword(),
            SyntaxKind::StaticKeyword | SyntaxKind::GetKeyword | SyntaxKind::SetKeyword => {
                self.next_token();
                self.can_follow_modifier()
            }
            _ => self.next_token_is_on_same_line_and_can_follow_modifier(),
        }
    }

    fn next_token_is_on_same_line_and_can_follow_modifier(&mut self) -> bool {
        self.next_token();
        !self.has_preceding_line_break() && self.can_follow_modifier()
    }

    fn can_follow_modifier(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::DotDotDotToken
                | SyntaxKind::PrivateIdentifier
        ) || is_literal_property_name(self.token())
    }

    fn can_follow_export_modifier(&self) -> bool {
        self.token() == SyntaxKind::AtToken
            || (!matches!(
                self.token(),
                SyntaxKind::AsteriskToken | SyntaxKind::AsKeyword | SyntaxKind::OpenBraceToken
            ) && self.can_follow_modifier())
    }

    fn next_token_can_follow_default_keyword(&mut self) -> bool {
        match self.next_token() {
            SyntaxKind::ClassKeyword | SyntaxKind::FunctionKeyword | SyntaxKind::InterfaceKeyword | SyntaxKind::AtToken => true,
            SyntaxKind::AbstractKeyword => self.next_token_is_on_same_line(SyntaxKind::ClassKeyword),
            SyntaxKind::AsyncKeyword => self.next_token_is_on_same_line(SyntaxKind::FunctionKeyword),
            _ => false,
        }
    }

    // ========================================================================
    // Functions
    // ========================================================================

    pub(crate) fn parse_function_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
    ) -> Statement<'a> {
        let flags = modifier_flags(decorators, modifiers);
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let asterisk_token = self.parse_optional_token(SyntaxKind::AsteriskToken);
        // `export default function () {}` may omit the name.
        let name = if flags.contains(ModifierFlags::DEFAULT) {
            self.parse_optional_binding_identifier()
        } else {
            Some(self.parse_binding_identifier())
        };
        let is_generator = asterisk_token.is_some();
        let is_async = flags.contains(ModifierFlags::ASYNC);
        let type_parameters = self.parse_type_parameters();
        let parameters = self.parse_parameters(is_generator, is_async);
        let return_type = self.parse_return_type();
        let body = self.parse_function_block_or_semicolon(is_generator, is_async, Some(&messages::OR_EXPECTED));
        Statement::FunctionDeclaration(FunctionDeclaration {
            data: self.finish_declaration(SyntaxKind::FunctionDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            asterisk_token,
            name,
            type_parameters,
            parameters,
            return_type,
            body,
        })
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub(crate) fn parse_class_declaration_or_expression(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
        kind: SyntaxKind,
    ) -> ClassLikeDeclaration<'a> {
        self.parse_expected(SyntaxKind::ClassKeyword);
        // `class implements I {}` has no name.
        let name = if self.is_binding_identifier() && !self.is_implements_clause() {
            Some(self.parse_binding_identifier())
        } else {
            None
        };
        let type_parameters = self.parse_type_parameters();
        let heritage_clauses = self.parse_heritage_clauses();
        let members = if self.parse_expected(SyntaxKind::OpenBraceToken) {
            let members = self.parse_list(ParsingContext::ClassMembers, Self::parse_class_element);
            self.parse_expected(SyntaxKind::CloseBraceToken);
            members
        } else {
            self.create_missing_list()
        };
        ClassLikeDeclaration {
            data: self.finish_declaration(kind, pos, decorators, modifiers),
            decorators,
            modifiers,
            name,
            type_parameters,
            heritage_clauses,
            members,
        }
    }

    fn is_implements_clause(&mut self) -> bool {
        self.token() == SyntaxKind::ImplementsKeyword
            && self.look_ahead(|p| {
                p.next_token();
                token_is_identifier_or_keyword(p.token())
            })
    }

    pub(crate) fn parse_heritage_clauses(&mut self) -> Option<NodeList<'a, HeritageClause<'a>>> {
        if !matches!(self.token(), SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword) {
            return None;
        }
        Some(self.parse_list(ParsingContext::HeritageClauses, Self::parse_heritage_clause))
    }

    fn parse_heritage_clause(&mut self) -> HeritageClause<'a> {
        let pos = self.node_pos();
        let token = self.token();
        self.next_token();
        let types = self.parse_delimited_list(
            ParsingContext::HeritageClauseElement,
            Self::parse_expression_with_type_arguments,
            false,
        );
        HeritageClause {
            data: self.finish_node(SyntaxKind::HeritageClause, pos),
            token,
            types,
        }
    }

    fn parse_expression_with_type_arguments(&mut self) -> ExpressionWithTypeArguments<'a> {
        let pos = self.node_pos();
        let expression = self.parse_left_hand_side_expression_or_higher();
        let expression = self.arena.alloc(expression);
        let type_arguments = (self.token() == SyntaxKind::LessThanToken).then(|| {
            self.parse_bracketed_list(
                ParsingContext::TypeArguments,
                Self::parse_type,
                SyntaxKind::LessThanToken,
                SyntaxKind::GreaterThanToken,
            )
        });
        ExpressionWithTypeArguments {
            data: self.finish_node(SyntaxKind::ExpressionWithTypeArguments, pos),
            expression,
            type_arguments,
        }
    }

    /// Runs inside a lookahead; free to consume tokens.
    pub(crate) fn is_class_member_start(&mut self) -> bool {
        if self.token() == SyntaxKind::AtToken {
            return true;
        }
        let mut id_token = None;
        // Modifiers may also be member names: `public;`, `static() {}`.
        while self.token().is_modifier_kind() {
            id_token = Some(self.token());
            if is_class_member_modifier(self.token()) {
                return true;
            }
            self.next_token();
        }
        if self.token() == SyntaxKind::AsteriskToken {
            return true;
        }
        if is_literal_property_name(self.token()) || self.token() == SyntaxKind::PrivateIdentifier {
            id_token = Some(self.token());
            self.next_token();
        }
        if self.token() == SyntaxKind::OpenBracketToken {
            return true;
        }
        let Some(id_token) = id_token else {
            return false;
        };
        if !id_token.is_keyword() || matches!(id_token, SyntaxKind::GetKeyword | SyntaxKind::SetKeyword) {
            return true;
        }
        match self.token() {
            SyntaxKind::OpenParenToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::ColonToken
            | SyntaxKind::EqualsToken
            | SyntaxKind::QuestionToken => true,
            _ => self.can_parse_semicolon(),
        }
    }

    pub(crate) fn parse_class_element(&mut self) -> ClassElement<'a> {
        let pos = self.node_pos();
        if self.token() == SyntaxKind::SemicolonToken {
            self.next_token();
            return ClassElement::SemicolonClassElement(self.finish_node(SyntaxKind::SemicolonClassElement, pos));
        }

        let decorators = self.parse_decorators();
        let modifiers = self.parse_modifiers(true, true);

        if self.token() == SyntaxKind::StaticKeyword && self.next_token_is(SyntaxKind::OpenBraceToken) {
            if let Some(decorators) = decorators {
                self.parse_error_at_node(decorators.range, &messages::DECORATORS_ARE_NOT_VALID_HERE, &[]);
            }
            return ClassElement::ClassStaticBlockDeclaration(self.parse_class_static_block_declaration(pos));
        }

        if self.parse_contextual_modifier(SyntaxKind::GetKeyword) {
            let accessor = self.parse_accessor_declaration(pos, decorators, modifiers, SyntaxKind::GetAccessor, false);
            return ClassElement::GetAccessor(accessor);
        }
        if self.parse_contextual_modifier(SyntaxKind::SetKeyword) {
            let accessor = self.parse_accessor_declaration(pos, decorators, modifiers, SyntaxKind::SetAccessor, false);
            return ClassElement::SetAccessor(accessor);
        }

        if self.token() == SyntaxKind::ConstructorKeyword || self.is_quoted_constructor_name() {
            return ClassElement::Constructor(self.parse_constructor_declaration(pos, decorators, modifiers));
        }

        if self.is_index_signature() {
            return ClassElement::IndexSignature(self.parse_index_signature_declaration(pos, decorators, modifiers));
        }

        let token = self.token();
        if token_is_identifier_or_keyword(token)
            || matches!(
                token,
                SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
                    | SyntaxKind::AsteriskToken
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::PrivateIdentifier
            )
        {
            return self.parse_property_or_method_declaration(pos, decorators, modifiers);
        }

        // Decorators or modifiers followed by something that is not a member.
        self.parse_error_at_current_token(&messages::DECLARATION_EXPECTED, &[]);
        let name = PropertyName::Identifier(self.create_missing_identifier());
        ClassElement::PropertyDeclaration(PropertyDeclaration {
            data: self.finish_declaration(SyntaxKind::PropertyDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            name,
            question_token: None,
            exclamation_token: None,
            type_annotation: None,
            initializer: None,
        })
    }

    /// `"constructor"() {}` declares a constructor too.
    fn is_quoted_constructor_name(&mut self) -> bool {
        self.token() == SyntaxKind::StringLiteral
            && self.token_value() == "constructor"
            && self.next_token_is(SyntaxKind::OpenParenToken)
    }

    fn parse_class_static_block_declaration(&mut self, pos: u32) -> ClassStaticBlockDeclaration<'a> {
        self.parse_expected(SyntaxKind::StaticKeyword);
        let body = self.with_yield_and_await(false, true, |p| p.parse_block(false, None));
        ClassStaticBlockDeclaration {
            data: self.finish_node(SyntaxKind::ClassStaticBlockDeclaration, pos),
            body,
        }
    }

    fn parse_constructor_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
    ) -> ConstructorDeclaration<'a> {
        self.next_token();
        // Type parameters and a return type are not allowed on a constructor;
        // they are parsed for recovery and dropped.
        self.parse_type_parameters();
        let parameters = self.parse_parameters(false, false);
        self.parse_return_type();
        let body = self.parse_function_block_or_semicolon(false, false, Some(&messages::OR_EXPECTED));
        ConstructorDeclaration {
            data: self.finish_declaration(SyntaxKind::Constructor, pos, decorators, modifiers),
            decorators,
            modifiers,
            parameters,
            body,
        }
    }

    fn parse_property_or_method_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
    ) -> ClassElement<'a> {
        let asterisk_token = self.parse_optional_token(SyntaxKind::AsteriskToken);
        let name = self.parse_property_name();
        let question_token = self.parse_optional_token(SyntaxKind::QuestionToken);
        if asterisk_token.is_some() || matches!(self.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
            return ClassElement::MethodDeclaration(self.parse_method_declaration(
                pos,
                decorators,
                modifiers,
                asterisk_token,
                name,
                question_token,
                Some(&messages::OR_EXPECTED),
            ));
        }

        let exclamation_token = if question_token.is_none() && !self.has_preceding_line_break() {
            self.parse_optional_token(SyntaxKind::ExclamationToken)
        } else {
            None
        };
        let type_annotation = self.parse_type_annotation();
        let initializer = self.do_outside_of_context(
            NodeFlags::YIELD_CONTEXT | NodeFlags::AWAIT_CONTEXT | NodeFlags::DISALLOW_IN_CONTEXT,
            Self::parse_initializer,
        );
        self.parse_semicolon();
        ClassElement::PropertyDeclaration(PropertyDeclaration {
            data: self.finish_declaration(SyntaxKind::PropertyDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            name,
            question_token,
            exclamation_token,
            type_annotation,
            initializer,
        })
    }

    /// The rest of a method after its name; shared by classes and object literals.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn parse_method_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
        asterisk_token: Option<Token>,
        name: PropertyName<'a>,
        question_token: Option<Token>,
        message: Option<&DiagnosticMessage>,
    ) -> MethodDeclaration<'a> {
        let is_generator = asterisk_token.is_some();
        let is_async = modifier_flags(decorators, modifiers).contains(ModifierFlags::ASYNC);
        let type_parameters = self.parse_type_parameters();
        let parameters = self.parse_parameters(is_generator, is_async);
        let return_type = self.parse_return_type();
        let body = self.parse_function_block_or_semicolon(is_generator, is_async, message);
        MethodDeclaration {
            data: self.finish_declaration(SyntaxKind::MethodDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            asterisk_token,
            name,
            question_token,
            type_parameters,
            parameters,
            return_type,
            body,
        }
    }

    /// The rest of a `get`/`set` accessor once the keyword is consumed. In a
    /// type member the body is optional and a `,` may end it.
    pub(crate) fn parse_accessor_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
        kind: SyntaxKind,
        in_type: bool,
    ) -> AccessorDeclaration<'a> {
        let name = self.parse_property_name();
        let type_parameters = self.parse_type_parameters();
        let parameters = self.parse_parameters(false, false);
        let return_type = self.parse_return_type();
        let body = if in_type && self.token() != SyntaxKind::OpenBraceToken {
            self.parse_type_member_semicolon();
            None
        } else {
            self.parse_function_block_or_semicolon(false, false, None)
        };
        AccessorDeclaration {
            data: self.finish_declaration(kind, pos, decorators, modifiers),
            decorators,
            modifiers,
            name,
            type_parameters,
            parameters,
            return_type,
            body,
        }
    }

    pub(crate) fn parse_property_name(&mut self) -> PropertyName<'a> {
        match self.token() {
            SyntaxKind::StringLiteral => PropertyName::StringLiteral(self.parse_string_literal()),
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                PropertyName::NumericLiteral(self.parse_numeric_literal())
            }
            SyntaxKind::OpenBracketToken => {
                let pos = self.node_pos();
                self.next_token();
                let expression = self.allow_in_and(Self::parse_expression_and_alloc);
                self.parse_expected(SyntaxKind::CloseBracketToken);
                let computed = ComputedPropertyName {
                    data: self.finish_node(SyntaxKind::ComputedPropertyName, pos),
                    expression,
                };
                PropertyName::ComputedPropertyName(self.arena.alloc(computed))
            }
            SyntaxKind::PrivateIdentifier => PropertyName::PrivateIdentifier(self.parse_private_identifier()),
            _ => PropertyName::Identifier(self.parse_identifier_name()),
        }
    }

    // ========================================================================
    // Interfaces, type aliases, enums
    // ========================================================================

    fn parse_interface_declaration(&mut self, pos: u32, decorators: Decorators<'a>, modifiers: Modifiers<'a>) -> Statement<'a> {
        self.parse_expected(SyntaxKind::InterfaceKeyword);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameters();
        let heritage_clauses = self.parse_heritage_clauses();
        let members = self.parse_object_type_members();
        Statement::InterfaceDeclaration(InterfaceDeclaration {
            data: self.finish_declaration(SyntaxKind::InterfaceDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            name,
            type_parameters,
            heritage_clauses,
            members,
        })
    }

    fn parse_type_alias_declaration(&mut self, pos: u32, decorators: Decorators<'a>, modifiers: Modifiers<'a>) -> Statement<'a> {
        self.parse_expected(SyntaxKind::TypeKeyword);
        if self.has_preceding_line_break() {
            self.parse_error_at_current_token(&messages::LINE_BREAK_NOT_PERMITTED_HERE, &[]);
        }
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameters();
        self.parse_expected(SyntaxKind::EqualsToken);
        let intrinsic = if self.token() == SyntaxKind::IntrinsicKeyword {
            self.try_parse(Self::parse_keyword_and_no_dot)
        } else {
            None
        };
        let type_node = match intrinsic {
            Some(intrinsic) => &*self.arena.alloc(intrinsic),
            None => self.parse_type_and_alloc(),
        };
        self.parse_semicolon();
        Statement::TypeAliasDeclaration(TypeAliasDeclaration {
            data: self.finish_declaration(SyntaxKind::TypeAliasDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            name,
            type_parameters,
            type_node,
        })
    }

    fn parse_enum_declaration(&mut self, pos: u32, decorators: Decorators<'a>, modifiers: Modifiers<'a>) -> Statement<'a> {
        self.parse_expected(SyntaxKind::EnumKeyword);
        let name = self.parse_identifier();
        let members = if self.parse_expected(SyntaxKind::OpenBraceToken) {
            let members = self.do_outside_of_yield_and_await_context(|p| {
                p.parse_delimited_list(ParsingContext::EnumMembers, Self::parse_enum_member, false)
            });
            self.parse_expected(SyntaxKind::CloseBraceToken);
            members
        } else {
            self.create_missing_list()
        };
        Statement::EnumDeclaration(EnumDeclaration {
            data: self.finish_declaration(SyntaxKind::EnumDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            name,
            members,
        })
    }

    fn parse_enum_member(&mut self) -> EnumMember<'a> {
        let pos = self.node_pos();
        let name = self.parse_property_name();
        let initializer = self.allow_in_and(Self::parse_initializer);
        EnumMember {
            data: self.finish_node(SyntaxKind::EnumMember, pos),
            name,
            initializer,
        }
    }

    // ========================================================================
    // Modules
    // ========================================================================

    fn parse_module_declaration(&mut self, pos: u32, decorators: Decorators<'a>, modifiers: Modifiers<'a>) -> Statement<'a> {
        let declaration = if self.token() == SyntaxKind::GlobalKeyword {
            self.parse_ambient_external_module_declaration(pos, decorators, modifiers)
        } else if self.parse_optional(SyntaxKind::NamespaceKeyword) {
            self.parse_module_or_namespace_declaration(pos, decorators, modifiers, NodeFlags::NAMESPACE)
        } else {
            self.parse_expected(SyntaxKind::ModuleKeyword);
            if self.token() == SyntaxKind::StringLiteral {
                self.parse_ambient_external_module_declaration(pos, decorators, modifiers)
            } else {
                self.parse_module_or_namespace_declaration(pos, decorators, modifiers, NodeFlags::NONE)
            }
        };
        Statement::ModuleDeclaration(declaration)
    }

    /// `namespace a.b.c {}` nests one declaration per dotted segment.
    fn parse_module_or_namespace_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
        flags: NodeFlags,
    ) -> ModuleDeclaration<'a> {
        let name = ModuleName::Identifier(self.parse_identifier());
        let body = if self.parse_optional(SyntaxKind::DotToken) {
            let inner_pos = self.node_pos();
            let inner = self.parse_module_or_namespace_declaration(
                inner_pos,
                None,
                None,
                NodeFlags::NESTED_NAMESPACE | (flags & NodeFlags::NAMESPACE),
            );
            ModuleBody::ModuleDeclaration(self.arena.alloc(inner))
        } else {
            ModuleBody::ModuleBlock(self.parse_module_block())
        };
        let mut data = self.finish_node_with_flags(SyntaxKind::ModuleDeclaration, pos, flags);
        data.modifier_flags = modifier_flags(decorators, modifiers);
        ModuleDeclaration {
            data,
            decorators,
            modifiers,
            name,
            body: Some(body),
        }
    }

    /// `declare module "x" {}` and `declare global {}`; the body is optional
    /// for the quoted form.
    fn parse_ambient_external_module_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
    ) -> ModuleDeclaration<'a> {
        let mut flags = NodeFlags::NONE;
        let name = if self.token() == SyntaxKind::GlobalKeyword {
            flags |= NodeFlags::GLOBAL_AUGMENTATION;
            ModuleName::Identifier(self.parse_identifier())
        } else {
            ModuleName::StringLiteral(self.parse_string_literal())
        };
        let body = if self.token() == SyntaxKind::OpenBraceToken {
            Some(ModuleBody::ModuleBlock(self.parse_module_block()))
        } else {
            self.parse_semicolon();
            None
        };
        let mut data = self.finish_node_with_flags(SyntaxKind::ModuleDeclaration, pos, flags);
        data.modifier_flags = modifier_flags(decorators, modifiers);
        ModuleDeclaration {
            data,
            decorators,
            modifiers,
            name,
            body,
        }
    }

    fn parse_module_block(&mut self) -> ModuleBlock<'a> {
        let pos = self.node_pos();
        let statements = if self.parse_expected(SyntaxKind::OpenBraceToken) {
            let statements = self.parse_list(ParsingContext::BlockStatements, Self::parse_statement);
            self.parse_expected(SyntaxKind::CloseBraceToken);
            statements
        } else {
            self.create_missing_list()
        };
        ModuleBlock {
            data: self.finish_node(SyntaxKind::ModuleBlock, pos),
            statements,
        }
    }

    // ========================================================================
    // Imports
    // ========================================================================

    fn parse_import_declaration_or_import_equals_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
    ) -> Statement<'a> {
        self.parse_expected(SyntaxKind::ImportKeyword);
        let after_import_pos = self.node_pos();

        let mut identifier = self.is_identifier().then(|| self.parse_identifier());
        let mut is_type_only = false;
        // `import type X from`, `import type { X }`, `import type X = require()`;
        // but `import type from "m"` imports a binding named `type`.
        if identifier.is_some_and(|id| id.original_keyword_kind == Some(SyntaxKind::TypeKeyword))
            && (self.token() != SyntaxKind::FromKeyword
                || (self.is_identifier() && self.look_ahead(Self::next_token_is_from_keyword_or_equals_token)))
            && (self.is_identifier() || self.token_after_import_definitely_produces_import_declaration())
        {
            is_type_only = true;
            identifier = self.is_identifier().then(|| self.parse_identifier());
        }

        if let Some(name) = identifier {
            if !matches!(self.token(), SyntaxKind::CommaToken | SyntaxKind::FromKeyword) {
                return self.parse_import_equals_declaration(pos, decorators, modifiers, name, is_type_only);
            }
        }

        let import_clause = if identifier.is_some() || self.token_after_import_definitely_produces_import_declaration() {
            let clause = self.parse_import_clause(identifier, after_import_pos, is_type_only);
            self.parse_expected(SyntaxKind::FromKeyword);
            Some(clause)
        } else {
            None
        };
        let module_specifier = self.parse_module_specifier();
        let attributes = self.try_parse_import_attributes();
        self.parse_semicolon();
        Statement::ImportDeclaration(ImportDeclaration {
            data: self.finish_declaration(SyntaxKind::ImportDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            import_clause,
            module_specifier,
            attributes,
        })
    }

    fn token_after_import_definitely_produces_import_declaration(&self) -> bool {
        matches!(self.token(), SyntaxKind::AsteriskToken | SyntaxKind::OpenBraceToken)
    }

    fn next_token_is_from_keyword_or_equals_token(&mut self) -> bool {
        matches!(self.next_token(), SyntaxKind::FromKeyword | SyntaxKind::EqualsToken)
    }

    fn parse_import_equals_declaration(
        &mut self,
        pos: u32,
        decorators: Decorators<'a>,
        modifiers: Modifiers<'a>,
        name: Identifier,
        is_type_only: bool,
    ) -> Statement<'a> {
        self.parse_expected(SyntaxKind::EqualsToken);
        let module_reference = if self.token() == SyntaxKind::RequireKeyword
            && self.next_token_is(SyntaxKind::OpenParenToken)
        {
            let reference_pos = self.node_pos();
            self.parse_expected(SyntaxKind::RequireKeyword);
            self.parse_expected(SyntaxKind::OpenParenToken);
            let expression = self.parse_module_specifier();
            self.parse_expected(SyntaxKind::CloseParenToken);
            ModuleReference::ExternalModuleReference(ExternalModuleReference {
                data: self.finish_node(SyntaxKind::ExternalModuleReference, reference_pos),
                expression,
            })
        } else {
            ModuleReference::EntityName(self.parse_entity_name(false, None))
        };
        self.parse_semicolon();
        Statement::ImportEqualsDeclaration(ImportEqualsDeclaration {
            data: self.finish_declaration(SyntaxKind::ImportEqualsDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            is_type_only,
            name,
            module_reference,
        })
    }

    fn parse_import_clause(&mut self, name: Option<Identifier>, pos: u32, is_type_only: bool) -> ImportClause<'a> {
        // import d from "m";
        // import * as ns from "m";
        // import { a, b as c } from "m";
        // import d, * as ns from "m";
        // import d, { a } from "m";
        let named_bindings = if name.is_none() || self.parse_optional(SyntaxKind::CommaToken) {
            Some(if self.token() == SyntaxKind::AsteriskToken {
                NamedImportBindings::NamespaceImport(self.parse_namespace_import())
            } else {
                let named_pos = self.node_pos();
                let elements = self.parse_bracketed_list(
                    ParsingContext::ImportOrExportSpecifiers,
                    Self::parse_import_specifier,
                    SyntaxKind::OpenBraceToken,
                    SyntaxKind::CloseBraceToken,
                );
                NamedImportBindings::NamedImports(NamedImports {
                    data: self.finish_node(SyntaxKind::NamedImports, named_pos),
                    elements,
                })
            })
        } else {
            None
        };
        ImportClause {
            data: self.finish_node(SyntaxKind::ImportClause, pos),
            is_type_only,
            name,
            named_bindings,
        }
    }

    fn parse_namespace_import(&mut self) -> NamespaceImport {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::AsteriskToken);
        self.parse_expected(SyntaxKind::AsKeyword);
        let name = self.parse_identifier();
        NamespaceImport {
            data: self.finish_node(SyntaxKind::NamespaceImport, pos),
            name,
        }
    }

    /// A string module specifier. Other expressions are accepted for recovery.
    fn parse_module_specifier(&mut self) -> &'a Expression<'a> {
        if self.token() == SyntaxKind::StringLiteral {
            let literal = Expression::StringLiteral(self.parse_string_literal());
            self.arena.alloc(literal)
        } else {
            self.parse_expression_and_alloc()
        }
    }

    fn try_parse_import_attributes(&mut self) -> Option<ImportAttributes<'a>> {
        if matches!(self.token(), SyntaxKind::WithKeyword | SyntaxKind::AssertKeyword) && !self.has_preceding_line_break() {
            Some(self.parse_import_attributes())
        } else {
            None
        }
    }

    pub(crate) fn parse_import_attributes(&mut self) -> ImportAttributes<'a> {
        let pos = self.node_pos();
        let token = self.token();
        self.next_token();
        self.parse_import_attributes_rest(pos, token)
    }

    /// The braced attribute list once `with` or `assert` is consumed.
    pub(crate) fn parse_import_attributes_rest(&mut self, pos: u32, token: SyntaxKind) -> ImportAttributes<'a> {
        let (elements, multi_line) = if self.parse_expected(SyntaxKind::OpenBraceToken) {
            let multi_line = self.has_preceding_line_break();
            let elements = self.parse_delimited_list(ParsingContext::ImportAttributes, Self::parse_import_attribute, true);
            self.parse_expected(SyntaxKind::CloseBraceToken);
            (elements, multi_line)
        } else {
            (self.create_missing_list(), false)
        };
        ImportAttributes {
            data: self.finish_node(SyntaxKind::ImportAttributes, pos),
            token,
            elements,
            multi_line,
        }
    }

    fn parse_import_attribute(&mut self) -> ImportAttribute<'a> {
        let pos = self.node_pos();
        let name = if self.token() == SyntaxKind::StringLiteral {
            ImportAttributeName::StringLiteral(self.parse_string_literal())
        } else {
            ImportAttributeName::Identifier(self.parse_identifier_name())
        };
        self.parse_expected(SyntaxKind::ColonToken);
        let value = self.parse_assignment_expression_or_higher_and_alloc();
        ImportAttribute {
            data: self.finish_node(SyntaxKind::ImportAttribute, pos),
            name,
            value,
        }
    }

    fn parse_import_specifier(&mut self) -> ImportSpecifier {
        let (data, is_type_only, property_name, name) = self.parse_import_or_export_specifier(SyntaxKind::ImportSpecifier);
        ImportSpecifier {
            data,
            is_type_only,
            property_name,
            name,
        }
    }

    fn parse_export_specifier(&mut self) -> ExportSpecifier {
        let (data, is_type_only, property_name, name) = self.parse_import_or_export_specifier(SyntaxKind::ExportSpecifier);
        ExportSpecifier {
            data,
            is_type_only,
            property_name,
            name,
        }
    }

    /// `a`, `a as b`, `type a`, `type a as b`, with the `type as as` cases
    /// resolved by how many names follow.
    fn parse_import_or_export_specifier(
        &mut self,
        kind: SyntaxKind,
    ) -> (NodeData, bool, Option<Identifier>, Identifier) {
        let pos = self.node_pos();
        let mut keyword_name = self.keyword_name_span();
        let mut is_type_only = false;
        let mut property_name = None;
        let mut can_parse_as_keyword = true;
        let mut name = self.parse_module_export_name();

        if name.original_keyword_kind == Some(SyntaxKind::TypeKeyword) {
            if self.token() == SyntaxKind::AsKeyword {
                // { type as ...? }
                let first_as = self.parse_identifier_name();
                if self.token() == SyntaxKind::AsKeyword {
                    // { type as as ...? }
                    let second_as = self.parse_identifier_name();
                    if token_is_identifier_or_keyword(self.token()) {
                        // { type as as something }
                        is_type_only = true;
                        property_name = Some(first_as);
                        keyword_name = self.keyword_name_span();
                        name = self.parse_module_export_name();
                        can_parse_as_keyword = false;
                    } else {
                        // { type as as }
                        property_name = Some(name);
                        name = second_as;
                        can_parse_as_keyword = false;
                    }
                } else if token_is_identifier_or_keyword(self.token()) {
                    // { type as something }
                    property_name = Some(name);
                    can_parse_as_keyword = false;
                    keyword_name = self.keyword_name_span();
                    name = self.parse_module_export_name();
                } else {
                    // { type as }
                    is_type_only = true;
                    name = first_as;
                }
            } else if token_is_identifier_or_keyword(self.token()) || self.token() == SyntaxKind::StringLiteral {
                // { type something ...? }
                is_type_only = true;
                keyword_name = self.keyword_name_span();
                name = self.parse_module_export_name();
            }
        }

        if can_parse_as_keyword && self.token() == SyntaxKind::AsKeyword {
            property_name = Some(name);
            self.parse_expected(SyntaxKind::AsKeyword);
            keyword_name = self.keyword_name_span();
            name = self.parse_module_export_name();
        }

        // The local name of an import must be a plain identifier.
        if kind == SyntaxKind::ImportSpecifier {
            if let Some((start, end)) = keyword_name {
                self.parse_error_at_range(start, end, &messages::IDENTIFIER_EXPECTED, &[]);
            }
        }
        (self.finish_node(kind, pos), is_type_only, property_name, name)
    }

    /// Span of the current token when it is a keyword that cannot be an identifier.
    fn keyword_name_span(&self) -> Option<(u32, u32)> {
        (self.token().is_keyword() && !self.is_identifier()).then(|| (self.token_start(), self.token_end()))
    }

    /// An identifier name or a string such as `"a-b"`; a string keeps its
    /// value as the name's text.
    fn parse_module_export_name(&mut self) -> Identifier {
        if self.token() != SyntaxKind::StringLiteral {
            return self.parse_identifier_name();
        }
        self.identifier_count += 1;
        let pos = self.node_pos();
        let escaped_text = self.interner.intern(self.token_value());
        self.next_token();
        Identifier {
            data: self.finish_node(SyntaxKind::StringLiteral, pos),
            escaped_text,
            original_keyword_kind: None,
        }
    }

    // ========================================================================
    // Exports
    // ========================================================================

    fn parse_export_assignment(&mut self, pos: u32, decorators: Decorators<'a>, modifiers: Modifiers<'a>) -> Statement<'a> {
        let is_export_equals = if self.parse_optional(SyntaxKind::EqualsToken) {
            true
        } else {
            self.parse_expected(SyntaxKind::DefaultKeyword);
            false
        };
        let expression = self.do_inside_of_context(NodeFlags::AWAIT_CONTEXT, |p| {
            p.allow_in_and(Self::parse_assignment_expression_or_higher_and_alloc)
        });
        self.parse_semicolon();
        Statement::ExportAssignment(ExportAssignment {
            data: self.finish_declaration(SyntaxKind::ExportAssignment, pos, decorators, modifiers),
            decorators,
            modifiers,
            is_export_equals,
            expression,
        })
    }

    /// `export as namespace N;`
    fn parse_namespace_export_declaration(&mut self, pos: u32) -> Statement<'a> {
        self.parse_expected(SyntaxKind::AsKeyword);
        self.parse_expected(SyntaxKind::NamespaceKeyword);
        let name = self.parse_identifier();
        self.parse_semicolon();
        Statement::NamespaceExportDeclaration(NamespaceExportDeclaration {
            data: self.finish_node(SyntaxKind::NamespaceExportDeclaration, pos),
            name,
        })
    }

    fn parse_export_declaration(&mut self, pos: u32, decorators: Decorators<'a>, modifiers: Modifiers<'a>) -> Statement<'a> {
        let is_type_only = self.parse_optional(SyntaxKind::TypeKeyword);
        let clause_pos = self.node_pos();
        let mut export_clause = None;
        let mut module_specifier = None;
        if self.parse_optional(SyntaxKind::AsteriskToken) {
            if self.parse_optional(SyntaxKind::AsKeyword) {
                let name = self.parse_module_export_name();
                export_clause = Some(NamedExportBindings::NamespaceExport(NamespaceExport {
                    data: self.finish_node(SyntaxKind::NamespaceExport, clause_pos),
                    name,
                }));
            }
            self.parse_expected(SyntaxKind::FromKeyword);
            module_specifier = Some(self.parse_module_specifier());
        } else {
            let elements = self.parse_bracketed_list(
                ParsingContext::ImportOrExportSpecifiers,
                Self::parse_export_specifier,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
            );
            export_clause = Some(NamedExportBindings::NamedExports(NamedExports {
                data: self.finish_node(SyntaxKind::NamedExports, clause_pos),
                elements,
            }));
            // `export { a } "m"` is read as a missing `from`.
            if self.token() == SyntaxKind::FromKeyword
                || (self.token() == SyntaxKind::StringLiteral && !self.has_preceding_line_break())
            {
                self.parse_expected(SyntaxKind::FromKeyword);
                module_specifier = Some(self.parse_module_specifier());
            }
        }
        let attributes = if module_specifier.is_some() {
            self.try_parse_import_attributes()
        } else {
            None
        };
        self.parse_semicolon();
        Statement::ExportDeclaration(ExportDeclaration {
            data: self.finish_declaration(SyntaxKind::ExportDeclaration, pos, decorators, modifiers),
            decorators,
            modifiers,
            is_type_only,
            export_clause,
            module_specifier,
            attributes,
        })
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    pub(crate) fn parse_parameters(&mut self, yield_: bool, await_: bool) -> NodeList<'a, ParameterDeclaration<'a>> {
        if !self.parse_expected(SyntaxKind::OpenParenToken) {
            return self.create_missing_list();
        }
        let parameters = self.with_yield_and_await(yield_, await_, |p| {
            p.parse_delimited_list(ParsingContext::Parameters, Self::parse_parameter, false)
        });
        self.parse_expected(SyntaxKind::CloseParenToken);
        self.check_rest_parameters(&parameters);
        parameters
    }

    pub(crate) fn check_rest_parameters(&mut self, parameters: &NodeList<'a, ParameterDeclaration<'a>>) {
        let count = parameters.len();
        for (index, parameter) in parameters.children().enumerate() {
            if index + 1 < count && parameter.dot_dot_dot_token.is_some() {
                self.parse_error_at_node(parameter.range(), &messages::A_REST_PARAMETER_MUST_BE_LAST, &[]);
            }
        }
    }

    pub(crate) fn is_start_of_parameter(&mut self) -> bool {
        let token = self.token();
        token == SyntaxKind::DotDotDotToken
            || token == SyntaxKind::PrivateIdentifier
            || self.is_binding_identifier_or_pattern()
            || token.is_modifier_kind()
            || token == SyntaxKind::AtToken
            || self.is_start_of_type(true)
    }

    pub(crate) fn parse_parameter(&mut self) -> ParameterDeclaration<'a> {
        self.parse_parameter_worker(true).0
    }

    /// Also reports whether the parameter began with something that can only
    /// be a parameter name; speculative arrow heads give up when it did not.
    pub(crate) fn parse_parameter_worker(&mut self, allow_ambiguity: bool) -> (ParameterDeclaration<'a>, bool) {
        let pos = self.node_pos();
        let decorators = self.parse_decorators();

        if self.token() == SyntaxKind::ThisKeyword {
            let name = BindingName::Identifier(self.create_identifier(true, None));
            let type_annotation = self.parse_type_annotation();
            let parameter = ParameterDeclaration {
                data: self.finish_declaration(SyntaxKind::Parameter, pos, decorators, None),
                decorators,
                modifiers: None,
                dot_dot_dot_token: None,
                name,
                question_token: None,
                type_annotation,
                initializer: None,
            };
            return (parameter, true);
        }

        let modifiers = self.parse_modifiers(false, false);
        let dot_dot_dot_token = self.parse_optional_token(SyntaxKind::DotDotDotToken);
        let is_name_start = allow_ambiguity || self.is_binding_identifier_or_pattern();
        let name = self.parse_identifier_or_pattern();
        // `(public)`: a lone modifier keyword that could not be a name.
        if matches!(&name, BindingName::Identifier(id) if id.data.is_missing())
            && modifiers.is_none()
            && self.token().is_modifier_kind()
        {
            self.next_token();
        }
        let question_token = self.parse_optional_token(SyntaxKind::QuestionToken);
        let type_annotation = self.parse_type_annotation();
        let initializer = self.parse_initializer();
        let parameter = ParameterDeclaration {
            data: self.finish_declaration(SyntaxKind::Parameter, pos, decorators, modifiers),
            decorators,
            modifiers,
            dot_dot_dot_token,
            name,
            question_token,
            type_annotation,
            initializer,
        };
        (parameter, is_name_start)
    }

    // ========================================================================
    // Type parameters
    // ========================================================================

    pub(crate) fn parse_type_parameters(&mut self) -> Option<NodeList<'a, TypeParameterDeclaration<'a>>> {
        if self.token() != SyntaxKind::LessThanToken {
            return None;
        }
        let start = self.token_start();
        let list = self.parse_bracketed_list(
            ParsingContext::TypeParameters,
            Self::parse_type_parameter,
            SyntaxKind::LessThanToken,
            SyntaxKind::GreaterThanToken,
        );
        if list.is_empty() {
            let end = self.node_pos();
            self.parse_error_at_range(start, end, &messages::TYPE_PARAMETER_LIST_CANNOT_BE_EMPTY, &[]);
        }
        Some(list)
    }

    pub(crate) fn parse_type_parameter(&mut self) -> TypeParameterDeclaration<'a> {
        let pos = self.node_pos();
        let modifiers = self.parse_modifiers(true, false);
        let name = self.parse_identifier();
        let constraint = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            Some(self.parse_type_and_alloc())
        } else {
            None
        };
        let default = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_type_and_alloc())
        } else {
            None
        };
        TypeParameterDeclaration {
            data: self.finish_declaration(SyntaxKind::TypeParameter, pos, None, modifiers),
            modifiers,
            name,
            constraint,
            default,
        }
    }

    // ========================================================================
    // Binding patterns
    // ========================================================================

    pub(crate) fn is_binding_identifier_or_pattern(&self) -> bool {
        matches!(self.token(), SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken) || self.is_binding_identifier()
    }

    pub(crate) fn parse_identifier_or_pattern(&mut self) -> BindingName<'a> {
        match self.token() {
            SyntaxKind::OpenBracketToken => {
                let pattern = self.parse_array_binding_pattern();
                BindingName::ArrayBindingPattern(self.arena.alloc(pattern))
            }
            SyntaxKind::OpenBraceToken => {
                let pattern = self.parse_object_binding_pattern();
                BindingName::ObjectBindingPattern(self.arena.alloc(pattern))
            }
            _ => BindingName::Identifier(self.parse_binding_identifier()),
        }
    }

    fn parse_object_binding_pattern(&mut self) -> ObjectBindingPattern<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let elements = self.allow_in_and(|p| {
            p.parse_delimited_list(ParsingContext::ObjectBindingElements, Self::parse_object_binding_element, false)
        });
        self.parse_expected(SyntaxKind::CloseBraceToken);
        ObjectBindingPattern {
            data: self.finish_node(SyntaxKind::ObjectBindingPattern, pos),
            elements,
        }
    }

    fn parse_object_binding_element(&mut self) -> BindingElement<'a> {
        let pos = self.node_pos();
        let dot_dot_dot_token = self.parse_optional_token(SyntaxKind::DotDotDotToken);
        let token_is_identifier = self.is_binding_identifier();
        let property_name = self.parse_property_name();
        let (property_name, name) = match property_name {
            // `{ a }` and `{ a = 1 }`: the property is also the binding.
            PropertyName::Identifier(id) if token_is_identifier && self.token() != SyntaxKind::ColonToken => {
                (None, BindingName::Identifier(id))
            }
            property_name => {
                self.parse_expected(SyntaxKind::ColonToken);
                (Some(property_name), self.parse_identifier_or_pattern())
            }
        };
        let initializer = self.parse_initializer();
        BindingElement {
            data: self.finish_node(SyntaxKind::BindingElement, pos),
            dot_dot_dot_token,
            property_name,
            name,
            initializer,
        }
    }

    fn parse_array_binding_pattern(&mut self) -> ArrayBindingPattern<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let elements = self.allow_in_and(|p| {
            p.parse_delimited_list(ParsingContext::ArrayBindingElements, Self::parse_array_binding_element, false)
        });
        self.parse_expected(SyntaxKind::CloseBracketToken);
        ArrayBindingPattern {
            data: self.finish_node(SyntaxKind::ArrayBindingPattern, pos),
            elements,
        }
    }

    fn parse_array_binding_element(&mut self) -> ArrayBindingElement<'a> {
        let pos = self.node_pos();
        if self.token() == SyntaxKind::CommaToken {
            return ArrayBindingElement::OmittedExpression(self.finish_node(SyntaxKind::OmittedExpression, pos));
        }
        let dot_dot_dot_token = self.parse_optional_token(SyntaxKind::DotDotDotToken);
        let name = self.parse_identifier_or_pattern();
        let initializer = self.parse_initializer();
        ArrayBindingElement::BindingElement(BindingElement {
            data: self.finish_node(SyntaxKind::BindingElement, pos),
            dot_dot_dot_token,
            property_name: None,
            name,
            initializer,
        })
    }
}

/// Modifiers that can only introduce a class member.
fn is_class_member_modifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::OverrideKeyword
            | SyntaxKind::StaticKeyword
            | SyntaxKind::AccessorKeyword
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    fn parse_one<'a>(arena: &'a Bump, text: &str) -> crate::Parsed<'a, Statement<'a>> {
        Parser::new(arena, "test.ts", text).parse_single_statement()
    }

    #[test]
    fn modifiers_need_a_follower_on_the_same_line() {
        let arena = Bump::new();
        let parsed = parse_one(&arena, "class C { static\nx = 1 }");
        let Statement::ClassDeclaration(class) = parsed.node else {
            panic!("expected class");
        };
        // `static` on its own line is still a modifier: the next token is a name.
        assert_eq!(class.members.len(), 1);
        assert!(class.members.first().is_some_and(|m| m.modifier_flags().contains(ModifierFlags::STATIC)));

        let parsed = parse_one(&arena, "class C { public() {} }");
        let Statement::ClassDeclaration(class) = parsed.node else {
            panic!("expected class");
        };
        assert!(class.members.first().is_some_and(|m| m.modifier_flags().is_empty()));
    }

    #[test]
    fn duplicate_modifier_is_reported() {
        let arena = Bump::new();
        let parsed = parse_one(&arena, "class C { public public x; }");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].code(), 1030);
    }

    #[test]
    fn export_default_function_may_be_anonymous() {
        let arena = Bump::new();
        let parsed = parse_one(&arena, "export default function () {}");
        assert!(parsed.diagnostics.is_empty());
        match parsed.node {
            Statement::FunctionDeclaration(f) => {
                assert!(f.name.is_none());
                assert!(f.data.modifier_flags.contains(ModifierFlags::EXPORT_DEFAULT));
            }
            other => panic!("expected function, got {:?}", other.kind()),
        }
    }

    #[test]
    fn import_type_as_as() {
        let arena = Bump::new();
        let parsed = parse_one(&arena, "import { type as as x } from 'm';");
        assert!(parsed.diagnostics.is_empty());
        let Statement::ImportDeclaration(import) = parsed.node else {
            panic!("expected import");
        };
        let Some(NamedImportBindings::NamedImports(named)) = import.import_clause.as_ref().and_then(|c| c.named_bindings.as_ref())
        else {
            panic!("expected named imports");
        };
        let specifier = named.elements.first().expect("one specifier");
        assert!(specifier.is_type_only);
        assert_eq!(parsed.interner.resolve(specifier.name.escaped_text), "x");
    }

    #[test]
    fn dotted_namespace_nests() {
        let arena = Bump::new();
        let parsed = parse_one(&arena, "namespace a.b { }");
        let Statement::ModuleDeclaration(outer) = parsed.node else {
            panic!("expected module");
        };
        assert!(outer.data.flags.contains(NodeFlags::NAMESPACE));
        match &outer.body {
            Some(ModuleBody::ModuleDeclaration(inner)) => {
                assert!(inner.data.flags.contains(NodeFlags::NESTED_NAMESPACE));
            }
            other => panic!("expected nested module, got {other:?}"),
        }
    }

    #[test]
    fn rest_parameter_must_be_last() {
        let arena = Bump::new();
        let parsed = parse_one(&arena, "function f(...a, b) {}");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].code(), 1014);
        assert_eq!(parsed.diagnostics[0].start(), Some(11));
    }

    #[test]
    fn empty_type_parameter_list_is_reported() {
        let arena = Bump::new();
        let parsed = parse_one(&arena, "function f<>() {}");
        assert!(parsed.diagnostics.iter().any(|d| d.code() == 1098));
    }
}
