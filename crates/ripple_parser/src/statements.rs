//! Statements, blocks and variable declarations.

use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::types::NodeFlags;
use ripple_ast::HasNodeData;
use ripple_diagnostics::{messages, DiagnosticMessage};

use crate::list::ParsingContext;
use crate::parser::Parser;
use crate::utilities::is_in_or_of_keyword;

impl<'a> Parser<'a> {
    // ========================================================================
    // Dispatch
    // ========================================================================

    pub(crate) fn is_start_of_statement(&mut self) -> bool {
        match self.token() {
            SyntaxKind::AtToken
            | SyntaxKind::SemicolonToken
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::UsingKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::IfKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::WithKeyword
            | SyntaxKind::SwitchKeyword
            | SyntaxKind::ThrowKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::DebuggerKeyword
            // Not valid on their own, but parsing them as the start of a try
            // statement recovers better.
            | SyntaxKind::CatchKeyword
            | SyntaxKind::FinallyKeyword => true,
            SyntaxKind::ImportKeyword => {
                self.is_start_of_declaration()
                    || self.look_ahead(|p| {
                        matches!(
                            p.next_token(),
                            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken | SyntaxKind::DotToken
                        )
                    })
            }
            SyntaxKind::ConstKeyword | SyntaxKind::ExportKeyword => self.is_start_of_declaration(),
            SyntaxKind::AsyncKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::ModuleKeyword
            | SyntaxKind::NamespaceKeyword
            | SyntaxKind::TypeKeyword
            | SyntaxKind::GlobalKeyword => true,
            SyntaxKind::AccessorKeyword
            | SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::StaticKeyword
            | SyntaxKind::ReadonlyKeyword => {
                self.is_start_of_declaration() || !self.next_token_is_identifier_or_keyword_on_same_line()
            }
            _ => self.is_start_of_expression(),
        }
    }

    pub(crate) fn parse_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        match self.token() {
            SyntaxKind::SemicolonToken => {
                self.next_token();
                return Statement::EmptyStatement(self.finish_node(SyntaxKind::EmptyStatement, pos));
            }
            SyntaxKind::OpenBraceToken => return Statement::Block(self.parse_block(false, None)),
            SyntaxKind::VarKeyword => return self.parse_variable_statement(pos, None, None),
            SyntaxKind::LetKeyword if self.is_let_declaration() => {
                return self.parse_variable_statement(pos, None, None);
            }
            SyntaxKind::AwaitKeyword if self.is_await_using_declaration() => {
                return self.parse_variable_statement(pos, None, None);
            }
            SyntaxKind::UsingKeyword if self.is_using_declaration() => {
                return self.parse_variable_statement(pos, None, None);
            }
            SyntaxKind::FunctionKeyword => return self.parse_function_declaration(pos, None, None),
            SyntaxKind::ClassKeyword => {
                let class = self.parse_class_declaration_or_expression(pos, None, None, SyntaxKind::ClassDeclaration);
                return Statement::ClassDeclaration(class);
            }
            SyntaxKind::IfKeyword => return self.parse_if_statement(),
            SyntaxKind::DoKeyword => return self.parse_do_statement(),
            SyntaxKind::WhileKeyword => return self.parse_while_statement(),
            SyntaxKind::ForKeyword => return self.parse_for_or_for_in_or_for_of_statement(),
            SyntaxKind::ContinueKeyword => return self.parse_break_or_continue_statement(SyntaxKind::ContinueStatement),
            SyntaxKind::BreakKeyword => return self.parse_break_or_continue_statement(SyntaxKind::BreakStatement),
            SyntaxKind::ReturnKeyword => return self.parse_return_statement(),
            SyntaxKind::WithKeyword => return self.parse_with_statement(),
            SyntaxKind::SwitchKeyword => return self.parse_switch_statement(),
            SyntaxKind::ThrowKeyword => return self.parse_throw_statement(),
            SyntaxKind::TryKeyword | SyntaxKind::CatchKeyword | SyntaxKind::FinallyKeyword => {
                return self.parse_try_statement();
            }
            SyntaxKind::DebuggerKeyword => {
                self.next_token();
                self.parse_semicolon();
                return Statement::DebuggerStatement(self.finish_node(SyntaxKind::DebuggerStatement, pos));
            }
            SyntaxKind::AtToken => return self.parse_declaration(),
            SyntaxKind::AsyncKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::TypeKeyword
            | SyntaxKind::ModuleKeyword
            | SyntaxKind::NamespaceKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::ExportKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::PublicKeyword
            | SyntaxKind::AbstractKeyword
            | SyntaxKind::AccessorKeyword
            | SyntaxKind::StaticKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::GlobalKeyword
                if self.is_start_of_declaration() =>
            {
                return self.parse_declaration();
            }
            _ => {}
        }
        self.parse_expression_or_labeled_statement()
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    pub(crate) fn parse_block(&mut self, ignore_missing_open_brace: bool, message: Option<&DiagnosticMessage>) -> Block<'a> {
        let pos = self.node_pos();
        let open_brace_parsed = self.parse_expected_with(SyntaxKind::OpenBraceToken, message, true);
        if open_brace_parsed || ignore_missing_open_brace {
            let multi_line = self.has_preceding_line_break();
            let statements = self.parse_list(ParsingContext::BlockStatements, Self::parse_statement);
            self.parse_expected(SyntaxKind::CloseBraceToken);
            return Block {
                data: self.finish_node(SyntaxKind::Block, pos),
                statements,
                multi_line,
            };
        }
        let statements = self.create_missing_list();
        Block {
            data: self.finish_node(SyntaxKind::Block, pos),
            statements,
            multi_line: false,
        }
    }

    /// A function body: the block is parsed with the function's own
    /// yield/await rules and outside any decorator.
    pub(crate) fn parse_function_block(
        &mut self,
        yield_: bool,
        await_: bool,
        message: Option<&DiagnosticMessage>,
    ) -> Block<'a> {
        self.with_yield_and_await(yield_, await_, |p| {
            p.do_outside_of_context(NodeFlags::DECORATOR_CONTEXT, |p| p.parse_block(false, message))
        })
    }

    /// A body, or nothing for an overload or ambient signature.
    pub(crate) fn parse_function_block_or_semicolon(
        &mut self,
        yield_: bool,
        await_: bool,
        message: Option<&DiagnosticMessage>,
    ) -> Option<Block<'a>> {
        if self.token() != SyntaxKind::OpenBraceToken && self.can_parse_semicolon() {
            self.parse_semicolon();
            return None;
        }
        Some(self.parse_function_block(yield_, await_, message))
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    fn parse_if_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::IfKeyword);
        let open_paren_token = self.parse_expected_token(SyntaxKind::OpenParenToken);
        let expression = self.allow_in_and(Self::parse_expression_and_alloc);
        let close_paren_token = self.parse_expected_token(SyntaxKind::CloseParenToken);
        let then_statement = self.parse_statement_and_alloc();
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            Some(self.parse_statement_and_alloc())
        } else {
            None
        };
        Statement::IfStatement(IfStatement {
            data: self.finish_node(SyntaxKind::IfStatement, pos),
            open_paren_token,
            expression,
            close_paren_token,
            then_statement,
            else_statement,
        })
    }

    fn parse_do_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::DoKeyword);
        let statement = self.parse_statement_and_alloc();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let open_paren_token = self.parse_expected_token(SyntaxKind::OpenParenToken);
        let expression = self.allow_in_and(Self::parse_expression_and_alloc);
        let close_paren_token = self.parse_expected_token(SyntaxKind::CloseParenToken);
        // A semicolon may always be inserted after `do ... while (...)`.
        self.parse_optional(SyntaxKind::SemicolonToken);
        Statement::DoStatement(DoStatement {
            data: self.finish_node(SyntaxKind::DoStatement, pos),
            statement,
            open_paren_token,
            expression,
            close_paren_token,
        })
    }

    fn parse_while_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let open_paren_token = self.parse_expected_token(SyntaxKind::OpenParenToken);
        let expression = self.allow_in_and(Self::parse_expression_and_alloc);
        let close_paren_token = self.parse_expected_token(SyntaxKind::CloseParenToken);
        let statement = self.parse_statement_and_alloc();
        Statement::WhileStatement(WhileStatement {
            data: self.finish_node(SyntaxKind::WhileStatement, pos),
            open_paren_token,
            expression,
            close_paren_token,
            statement,
        })
    }

    fn parse_for_or_for_in_or_for_of_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::ForKeyword);
        let await_modifier = self.parse_optional_token(SyntaxKind::AwaitKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);

        let mut initializer = None;
        if self.token() != SyntaxKind::SemicolonToken {
            let declares = match self.token() {
                SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => true,
                SyntaxKind::UsingKeyword => {
                    self.look_ahead(|p| p.next_token_is_binding_identifier_or_start_of_destructuring_on_same_line(true))
                }
                SyntaxKind::AwaitKeyword => self.look_ahead(|p| {
                    p.next_token() == SyntaxKind::UsingKeyword
                        && p.next_token_is_binding_identifier_or_start_of_destructuring_on_same_line(true)
                }),
                _ => false,
            };
            initializer = Some(if declares {
                let list = self.parse_variable_declaration_list(true);
                ForInitializer::VariableDeclarationList(self.arena.alloc(list))
            } else {
                ForInitializer::Expression(self.disallow_in_and(Self::parse_expression_and_alloc))
            });
        }

        let is_of = if await_modifier.is_some() {
            self.parse_expected(SyntaxKind::OfKeyword)
        } else {
            self.parse_optional(SyntaxKind::OfKeyword)
        };
        if is_of {
            let expression = self.allow_in_and(Self::parse_assignment_expression_or_higher_and_alloc);
            self.parse_expected(SyntaxKind::CloseParenToken);
            let initializer = self.for_in_or_of_initializer(initializer);
            let statement = self.parse_statement_and_alloc();
            return Statement::ForOfStatement(ForInOrOfStatement {
                data: self.finish_node(SyntaxKind::ForOfStatement, pos),
                await_modifier,
                initializer,
                expression,
                statement,
            });
        }
        if self.parse_optional(SyntaxKind::InKeyword) {
            let expression = self.allow_in_and(Self::parse_expression_and_alloc);
            self.parse_expected(SyntaxKind::CloseParenToken);
            let initializer = self.for_in_or_of_initializer(initializer);
            let statement = self.parse_statement_and_alloc();
            return Statement::ForInStatement(ForInOrOfStatement {
                data: self.finish_node(SyntaxKind::ForInStatement, pos),
                await_modifier,
                initializer,
                expression,
                statement,
            });
        }

        self.parse_expected(SyntaxKind::SemicolonToken);
        let condition = match self.token() {
            SyntaxKind::SemicolonToken | SyntaxKind::CloseParenToken => None,
            _ => Some(self.allow_in_and(Self::parse_expression_and_alloc)),
        };
        self.parse_expected(SyntaxKind::SemicolonToken);
        let incrementor = match self.token() {
            SyntaxKind::CloseParenToken => None,
            _ => Some(self.allow_in_and(Self::parse_expression_and_alloc)),
        };
        self.parse_expected(SyntaxKind::CloseParenToken);
        let statement = self.parse_statement_and_alloc();
        Statement::ForStatement(ForStatement {
            data: self.finish_node(SyntaxKind::ForStatement, pos),
            initializer,
            condition,
            incrementor,
            statement,
        })
    }

    /// `for (in x)` still gets a left side: a missing identifier.
    fn for_in_or_of_initializer(&mut self, initializer: Option<ForInitializer<'a>>) -> ForInitializer<'a> {
        match initializer {
            Some(initializer) => initializer,
            None => {
                let missing = Expression::Identifier(self.create_missing_identifier());
                ForInitializer::Expression(self.arena.alloc(missing))
            }
        }
    }

    fn parse_break_or_continue_statement(&mut self, kind: SyntaxKind) -> Statement<'a> {
        let pos = self.node_pos();
        self.next_token();
        let label = if self.can_parse_semicolon() {
            None
        } else {
            Some(self.parse_identifier())
        };
        self.parse_semicolon();
        let statement = JumpStatement {
            data: self.finish_node(kind, pos),
            label,
        };
        if kind == SyntaxKind::BreakStatement {
            Statement::BreakStatement(statement)
        } else {
            Statement::ContinueStatement(statement)
        }
    }

    fn parse_return_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::ReturnKeyword);
        let expression = if self.can_parse_semicolon() {
            None
        } else {
            Some(self.allow_in_and(Self::parse_expression_and_alloc))
        };
        self.parse_semicolon();
        Statement::ReturnStatement(ReturnStatement {
            data: self.finish_node(SyntaxKind::ReturnStatement, pos),
            expression,
        })
    }

    fn parse_with_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::WithKeyword);
        let open_paren_token = self.parse_expected_token(SyntaxKind::OpenParenToken);
        let expression = self.allow_in_and(Self::parse_expression_and_alloc);
        let close_paren_token = self.parse_expected_token(SyntaxKind::CloseParenToken);
        let statement = self.parse_statement_and_alloc();
        Statement::WithStatement(WithStatement {
            data: self.finish_node(SyntaxKind::WithStatement, pos),
            open_paren_token,
            expression,
            close_paren_token,
            statement,
        })
    }

    fn parse_switch_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::SwitchKeyword);
        let open_paren_token = self.parse_expected_token(SyntaxKind::OpenParenToken);
        let expression = self.allow_in_and(Self::parse_expression_and_alloc);
        let close_paren_token = self.parse_expected_token(SyntaxKind::CloseParenToken);
        let case_block = self.parse_case_block();
        Statement::SwitchStatement(SwitchStatement {
            data: self.finish_node(SyntaxKind::SwitchStatement, pos),
            open_paren_token,
            expression,
            close_paren_token,
            case_block,
        })
    }

    fn parse_case_block(&mut self) -> CaseBlock<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut seen_default = false;
        let clauses = self.parse_list(ParsingContext::SwitchClauses, |p| p.parse_case_or_default_clause(&mut seen_default));
        self.parse_expected(SyntaxKind::CloseBraceToken);
        CaseBlock {
            data: self.finish_node(SyntaxKind::CaseBlock, pos),
            clauses,
        }
    }

    fn parse_case_or_default_clause(&mut self, seen_default: &mut bool) -> CaseOrDefaultClause<'a> {
        let pos = self.node_pos();
        if self.token() == SyntaxKind::CaseKeyword {
            self.next_token();
            let expression = self.allow_in_and(Self::parse_expression_and_alloc);
            self.parse_expected(SyntaxKind::ColonToken);
            let statements = self.parse_list(ParsingContext::SwitchClauseStatements, Self::parse_statement);
            return CaseOrDefaultClause::CaseClause(CaseClause {
                data: self.finish_node(SyntaxKind::CaseClause, pos),
                expression,
                statements,
            });
        }

        if *seen_default {
            self.parse_error_at_current_token(
                &messages::A_DEFAULT_CLAUSE_CANNOT_APPEAR_MORE_THAN_ONCE_IN_A_SWITCH_STATEMENT,
                &[],
            );
        }
        *seen_default = true;
        self.parse_expected(SyntaxKind::DefaultKeyword);
        self.parse_expected(SyntaxKind::ColonToken);
        let statements = self.parse_list(ParsingContext::SwitchClauseStatements, Self::parse_statement);
        CaseOrDefaultClause::DefaultClause(DefaultClause {
            data: self.finish_node(SyntaxKind::DefaultClause, pos),
            statements,
        })
    }

    fn parse_throw_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        let (keyword_start, keyword_end) = (self.token_start(), self.token_end());
        self.parse_expected(SyntaxKind::ThrowKeyword);
        // `throw` followed by a line break would otherwise take the next
        // line's expression.
        let expression = if self.has_preceding_line_break() {
            self.parse_error_at_range(keyword_start, keyword_end, &messages::LINE_BREAK_NOT_PERMITTED_HERE, &[]);
            let missing = Expression::Identifier(self.create_missing_identifier());
            &*self.arena.alloc(missing)
        } else {
            self.allow_in_and(Self::parse_expression_and_alloc)
        };
        self.parse_semicolon();
        Statement::ThrowStatement(ThrowStatement {
            data: self.finish_node(SyntaxKind::ThrowStatement, pos),
            expression,
        })
    }

    fn parse_try_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::TryKeyword);
        let try_block = self.parse_block(false, None);
        let catch_clause = (self.token() == SyntaxKind::CatchKeyword).then(|| self.parse_catch_clause());

        // With no catch the finally is required.
        let mut finally_block = None;
        if catch_clause.is_none() || self.token() == SyntaxKind::FinallyKeyword {
            self.parse_expected_with(SyntaxKind::FinallyKeyword, Some(&messages::TRY_EXPECTED_CATCH_OR_FINALLY), true);
            finally_block = Some(self.parse_block(false, None));
        }
        Statement::TryStatement(TryStatement {
            data: self.finish_node(SyntaxKind::TryStatement, pos),
            try_block,
            catch_clause,
            finally_block,
        })
    }

    fn parse_catch_clause(&mut self) -> CatchClause<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::CatchKeyword);
        let variable_declaration = if self.parse_optional(SyntaxKind::OpenParenToken) {
            let declaration = self.parse_variable_declaration(false);
            if let Some(initializer) = declaration.initializer {
                self.parse_error_at_node(
                    initializer.range(),
                    &messages::CATCH_CLAUSE_VARIABLE_CANNOT_HAVE_AN_INITIALIZER,
                    &[],
                );
            }
            self.parse_expected(SyntaxKind::CloseParenToken);
            Some(declaration)
        } else {
            // `catch { }` binds nothing.
            None
        };
        let block = self.parse_block(false, None);
        CatchClause {
            data: self.finish_node(SyntaxKind::CatchClause, pos),
            variable_declaration,
            block,
        }
    }

    fn parse_expression_or_labeled_statement(&mut self) -> Statement<'a> {
        let pos = self.node_pos();
        let expression = self.allow_in_and(Self::parse_expression);
        if let Expression::Identifier(label) = expression {
            if self.parse_optional(SyntaxKind::ColonToken) {
                let statement = self.parse_statement_and_alloc();
                return Statement::LabeledStatement(LabeledStatement {
                    data: self.finish_node(SyntaxKind::LabeledStatement, pos),
                    label,
                    statement,
                });
            }
            return self.finish_expression_statement(pos, Expression::Identifier(label));
        }
        self.finish_expression_statement(pos, expression)
    }

    fn finish_expression_statement(&mut self, pos: u32, expression: Expression<'a>) -> Statement<'a> {
        let expression = self.arena.alloc(expression);
        self.parse_semicolon();
        Statement::ExpressionStatement(ExpressionStatement {
            data: self.finish_node(SyntaxKind::ExpressionStatement, pos),
            expression,
        })
    }

    pub(crate) fn parse_statement_and_alloc(&mut self) -> &'a Statement<'a> {
        let statement = self.parse_statement();
        self.arena.alloc(statement)
    }

    // ========================================================================
    // Variables
    // ========================================================================

    pub(crate) fn is_let_declaration(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_binding_identifier() || matches!(p.token(), SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken)
        })
    }

    pub(crate) fn is_using_declaration(&mut self) -> bool {
        self.look_ahead(|p| p.next_token_is_binding_identifier_or_start_of_destructuring_on_same_line(false))
    }

    pub(crate) fn is_await_using_declaration(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token() == SyntaxKind::UsingKeyword
                && !p.has_preceding_line_break()
                && p.next_token_is_binding_identifier_or_start_of_destructuring_on_same_line(false)
        })
    }

    /// `using x` / `using {`: a `using` declaration rather than an
    /// identifier named `using`.
    pub(crate) fn next_token_is_binding_identifier_or_start_of_destructuring_on_same_line(
        &mut self,
        disallow_of: bool,
    ) -> bool {
        self.next_token();
        if disallow_of && self.token() == SyntaxKind::OfKeyword {
            return false;
        }
        (self.is_binding_identifier() || self.token() == SyntaxKind::OpenBraceToken) && !self.has_preceding_line_break()
    }

    pub(crate) fn parse_variable_statement(
        &mut self,
        pos: u32,
        decorators: Option<NodeList<'a, Decorator<'a>>>,
        modifiers: Option<NodeList<'a, Token>>,
    ) -> Statement<'a> {
        let declaration_list = self.parse_variable_declaration_list(false);
        self.parse_semicolon();
        Statement::VariableStatement(VariableStatement {
            data: self.finish_declaration(SyntaxKind::VariableStatement, pos, decorators, modifiers),
            decorators,
            modifiers,
            declaration_list,
        })
    }

    pub(crate) fn parse_variable_declaration_list(&mut self, in_for_statement_initializer: bool) -> VariableDeclarationList<'a> {
        let pos = self.node_pos();
        let (keyword_start, keyword_end) = (self.token_start(), self.token_end());
        let flags = match self.token() {
            SyntaxKind::LetKeyword => NodeFlags::LET,
            SyntaxKind::ConstKeyword => NodeFlags::CONST,
            SyntaxKind::UsingKeyword => NodeFlags::USING,
            SyntaxKind::AwaitKeyword => {
                self.next_token();
                NodeFlags::AWAIT_USING
            }
            _ => NodeFlags::NONE,
        };
        self.next_token();

        // In `for (let of x)`, `of` is the loop keyword rather than a name.
        let declarations = if self.token() == SyntaxKind::OfKeyword && self.look_ahead(Self::can_follow_contextual_of_keyword) {
            self.create_missing_list()
        } else {
            let allow_exclamation = !in_for_statement_initializer;
            let parse = |p: &mut Self| {
                p.parse_delimited_list(
                    ParsingContext::VariableDeclarations,
                    |p| p.parse_variable_declaration(allow_exclamation),
                    false,
                )
            };
            let declarations = if in_for_statement_initializer {
                self.disallow_in_and(parse)
            } else {
                self.allow_in_and(parse)
            };
            if declarations.is_empty() && !in_for_statement_initializer {
                self.parse_error_at_range(
                    keyword_start,
                    keyword_end,
                    &messages::VARIABLE_DECLARATION_LIST_CANNOT_BE_EMPTY,
                    &[],
                );
            }
            declarations
        };

        VariableDeclarationList {
            data: self.finish_node_with_flags(SyntaxKind::VariableDeclarationList, pos, flags),
            declarations,
        }
    }

    fn can_follow_contextual_of_keyword(&mut self) -> bool {
        self.next_token();
        self.is_identifier() && self.next_token() == SyntaxKind::CloseParenToken
    }

    pub(crate) fn parse_variable_declaration(&mut self, allow_exclamation: bool) -> VariableDeclaration<'a> {
        let pos = self.node_pos();
        let name = self.parse_identifier_or_pattern();
        let exclamation_token = if allow_exclamation
            && matches!(name, BindingName::Identifier(_))
            && self.token() == SyntaxKind::ExclamationToken
            && !self.has_preceding_line_break()
        {
            Some(self.parse_token_node())
        } else {
            None
        };
        let type_annotation = self.parse_type_annotation();
        let initializer = if is_in_or_of_keyword(self.token()) {
            None
        } else {
            self.parse_initializer()
        };
        VariableDeclaration {
            data: self.finish_node(SyntaxKind::VariableDeclaration, pos),
            name,
            exclamation_token,
            type_annotation,
            initializer,
        }
    }

    pub(crate) fn parse_initializer(&mut self) -> Option<&'a Expression<'a>> {
        if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_assignment_expression_or_higher_and_alloc())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    fn statement<'a>(arena: &'a Bump, text: &str) -> (&'a Statement<'a>, usize) {
        let parsed = Parser::new(arena, "test.ts", text).parse_single_statement();
        (parsed.node, parsed.diagnostics.len())
    }

    #[test]
    fn let_without_binding_is_an_identifier() {
        let arena = Bump::new();
        let (stmt, errors) = statement(&arena, "let\n");
        assert_eq!(stmt.kind(), SyntaxKind::ExpressionStatement);
        assert_eq!(errors, 0);
    }

    #[test]
    fn using_needs_a_binding_on_the_same_line() {
        let arena = Bump::new();
        let (stmt, _) = statement(&arena, "using x = f();");
        match stmt {
            Statement::VariableStatement(v) => assert!(v.declaration_list.data.flags.contains(NodeFlags::USING)),
            other => panic!("expected variable statement, got {:?}", other.kind()),
        }
        let (stmt, _) = statement(&arena, "using\nx");
        assert_eq!(stmt.kind(), SyntaxKind::ExpressionStatement);
    }

    #[test]
    fn for_of_with_let_of() {
        let arena = Bump::new();
        let (stmt, errors) = statement(&arena, "for (let of of xs) {}");
        assert_eq!(stmt.kind(), SyntaxKind::ForOfStatement);
        assert_eq!(errors, 0);
    }

    #[test]
    fn labeled_statement_takes_its_body() {
        let arena = Bump::new();
        let (stmt, _) = statement(&arena, "outer: for (;;) break outer;");
        match stmt {
            Statement::LabeledStatement(l) => assert_eq!(l.statement.kind(), SyntaxKind::ForStatement),
            other => panic!("expected labeled statement, got {:?}", other.kind()),
        }
    }

    #[test]
    fn throw_requires_expression_on_same_line() {
        let arena = Bump::new();
        let (stmt, errors) = statement(&arena, "throw\nx");
        assert_eq!(stmt.kind(), SyntaxKind::ThrowStatement);
        assert!(errors >= 1);
    }

    #[test]
    fn second_default_clause_is_reported() {
        let arena = Bump::new();
        let parsed = Parser::new(&arena, "test.ts", "switch (x) { default: break; default: }").parse_single_statement();
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].code(), 1113);
    }
}
