//! Doc comments: `/** ... */` parsed on their own, out of a larger text.
//!
//! The comment body is read with the doc-comment token mode; `{type}`
//! sections switch back to the ordinary token stream and the type grammar,
//! in the doc context so `?T`, `T!`, `*` and friends are accepted.

use bumpalo::Bump;
use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::types::NodeFlags;
use ripple_diagnostics::messages;

use crate::parser::Parser;
use crate::Parsed;

/// Parse the doc comment at `text[start..start + length]`.
///
/// The range must cover the whole comment including `/**` and `*/`;
/// anything else is reported and yields an empty comment node.
pub fn parse_isolated_jsdoc_comment<'a>(arena: &'a Bump, text: &str, start: u32, length: u32) -> Parsed<'a, JsDoc<'a>> {
    Parser::new(arena, "", text).parse_isolated_jsdoc_comment(start, length)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Parameter,
    Return,
    Type,
    Template,
    Unknown,
}

impl<'a> Parser<'a> {
    pub fn parse_isolated_jsdoc_comment(mut self, start: u32, length: u32) -> Parsed<'a, JsDoc<'a>> {
        let text = self.scanner.text();
        let end = start.saturating_add(length).min(text.len() as u32);
        let start = start.min(end);
        let content = text.get(start as usize..end as usize).unwrap_or("");

        self.scanner.set_text_window(start as usize, (end - start) as usize);
        if content.len() < 5 || !content.starts_with("/**") || !content.ends_with("*/") {
            self.parse_error_at_range(start, end, &messages::DOC_COMMENT_EXPECTED, &[]);
            let doc = JsDoc {
                data: self.synthesize_node(SyntaxKind::JSDocComment, start, end),
                comment: None,
                tags: None,
            };
            let arena = self.arena;
            return self.into_parsed(arena.alloc(doc));
        }

        let doc = self.do_inside_of_context(NodeFlags::JSDOC, |p| p.parse_jsdoc_comment_body(start, end));
        let arena = self.arena;
        self.into_parsed(arena.alloc(doc))
    }

    fn parse_jsdoc_comment_body(&mut self, start: u32, end: u32) -> JsDoc<'a> {
        self.scanner.set_text_window(start as usize + 3, (end - start) as usize - 5);
        self.scan_jsdoc_token();

        let comment = self.parse_jsdoc_comment_text(true);
        let mut tags: Vec<JsDocTag<'a>> = Vec::new();
        let tags_pos = self.node_pos();
        while self.token() == SyntaxKind::AtToken {
            let tag = self.parse_jsdoc_tag(&tags);
            tags.push(tag);
        }
        let tags = (!tags.is_empty()).then(|| self.create_node_list(tags, tags_pos));

        JsDoc {
            data: self.synthesize_node(SyntaxKind::JSDocComment, start, end),
            comment,
            tags,
        }
    }

    /// Free text up to the next `@` that begins a line, with leading
    /// `*` margins dropped and surrounding blank space trimmed.
    fn parse_jsdoc_comment_text(&mut self, mut at_line_start: bool) -> Option<&'a str> {
        let mut text = String::new();
        let mut saw_asterisk = false;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::AtToken if at_line_start => break,
                SyntaxKind::NewLineTrivia => {
                    let trimmed = text.trim_end_matches([' ', '\t']).len();
                    text.truncate(trimmed);
                    text.push('\n');
                    at_line_start = true;
                    saw_asterisk = false;
                }
                SyntaxKind::AsteriskToken if at_line_start && !saw_asterisk => saw_asterisk = true,
                SyntaxKind::WhitespaceTrivia if at_line_start || text.is_empty() => {}
                _ => {
                    at_line_start = false;
                    text.push_str(self.scanner.token_text());
                }
            }
            self.scan_jsdoc_token();
        }
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| &*self.arena.alloc_str(trimmed))
    }

    fn parse_jsdoc_tag(&mut self, previous: &[JsDocTag<'a>]) -> JsDocTag<'a> {
        let pos = self.node_pos();
        self.scan_jsdoc_token();
        let tag_name = self.parse_jsdoc_identifier_name();
        let kind = match self.interner.resolve(tag_name.escaped_text) {
            "param" | "arg" | "argument" => TagKind::Parameter,
            "return" | "returns" => TagKind::Return,
            "type" => TagKind::Type,
            "template" => TagKind::Template,
            _ => TagKind::Unknown,
        };

        let duplicate = match kind {
            TagKind::Return => previous.iter().any(|tag| matches!(tag, JsDocTag::Return(_))),
            TagKind::Type => previous.iter().any(|tag| matches!(tag, JsDocTag::Type(_))),
            _ => false,
        };
        if duplicate {
            let name = self.interner.resolve(tag_name.escaped_text).to_string();
            self.parse_error_at_node(tag_name.data.range, &messages::_0_TAG_ALREADY_SPECIFIED, &[&name]);
        }

        match kind {
            TagKind::Parameter => JsDocTag::Parameter(self.parse_jsdoc_parameter_tag(pos, tag_name)),
            TagKind::Return => JsDocTag::Return(self.parse_jsdoc_typed_tag(SyntaxKind::JSDocReturnTag, pos, tag_name)),
            TagKind::Type => JsDocTag::Type(self.parse_jsdoc_typed_tag(SyntaxKind::JSDocTypeTag, pos, tag_name)),
            TagKind::Template => JsDocTag::Template(self.parse_jsdoc_template_tag(pos, tag_name)),
            TagKind::Unknown => {
                let comment = self.parse_jsdoc_comment_text(false);
                JsDocTag::Unknown(JsDocUnknownTag {
                    data: self.finish_node(SyntaxKind::JSDocTag, pos),
                    tag_name,
                    comment,
                })
            }
        }
    }

    /// `@param {T} name desc`, `@param name {T} desc` or `@param {T} [name=x] desc`.
    fn parse_jsdoc_parameter_tag(&mut self, pos: u32, tag_name: Identifier) -> JsDocParameterTag<'a> {
        self.skip_jsdoc_whitespace();
        let mut type_expression = self.try_parse_jsdoc_type_expression();
        let is_name_first = type_expression.is_none();
        self.skip_jsdoc_whitespace();

        let is_bracketed = self.token() == SyntaxKind::OpenBracketToken;
        if is_bracketed {
            self.scan_jsdoc_token();
            self.skip_jsdoc_whitespace();
        }
        let name = self.parse_jsdoc_entity_name();
        if is_bracketed {
            self.skip_jsdoc_whitespace();
            if self.token() == SyntaxKind::EqualsToken {
                self.skip_jsdoc_default_value();
            }
            if self.token() == SyntaxKind::CloseBracketToken {
                self.scan_jsdoc_token();
            } else {
                self.parse_error_at_current_token(&messages::_0_EXPECTED, &["]"]);
            }
        }

        self.skip_jsdoc_whitespace();
        if is_name_first {
            type_expression = self.try_parse_jsdoc_type_expression();
        }
        let comment = self.parse_jsdoc_comment_text(false);
        JsDocParameterTag {
            data: self.finish_node(SyntaxKind::JSDocParameterTag, pos),
            tag_name,
            type_expression,
            name,
            is_bracketed,
            is_name_first,
            comment,
        }
    }

    /// Skip `=default` up to the `]` closing a bracketed name.
    fn skip_jsdoc_default_value(&mut self) {
        let mut depth = 0u32;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken | SyntaxKind::NewLineTrivia => return,
                SyntaxKind::OpenBracketToken => depth += 1,
                SyntaxKind::CloseBracketToken if depth == 0 => return,
                SyntaxKind::CloseBracketToken => depth -= 1,
                _ => {}
            }
            self.scan_jsdoc_token();
        }
    }

    fn parse_jsdoc_typed_tag(&mut self, kind: SyntaxKind, pos: u32, tag_name: Identifier) -> JsDocTypedTag<'a> {
        self.skip_jsdoc_whitespace();
        let type_expression = self.try_parse_jsdoc_type_expression();
        let comment = self.parse_jsdoc_comment_text(false);
        JsDocTypedTag {
            data: self.finish_node(kind, pos),
            tag_name,
            type_expression,
            comment,
        }
    }

    /// `@template {Constraint} T, U desc`.
    fn parse_jsdoc_template_tag(&mut self, pos: u32, tag_name: Identifier) -> JsDocTemplateTag<'a> {
        self.skip_jsdoc_whitespace();
        let constraint = self.try_parse_jsdoc_type_expression();
        self.skip_jsdoc_whitespace();

        let list_pos = self.node_pos();
        let mut type_parameters = Vec::new();
        loop {
            self.skip_jsdoc_whitespace();
            let parameter_pos = self.node_pos();
            let name = self.parse_jsdoc_identifier_name();
            type_parameters.push(TypeParameterDeclaration {
                data: self.finish_node(SyntaxKind::TypeParameter, parameter_pos),
                modifiers: None,
                name,
                constraint: None,
                default: None,
            });
            self.skip_jsdoc_whitespace();
            if self.token() != SyntaxKind::CommaToken {
                break;
            }
            self.scan_jsdoc_token();
        }
        let type_parameters = self.create_node_list(type_parameters, list_pos);

        let comment = self.parse_jsdoc_comment_text(false);
        JsDocTemplateTag {
            data: self.finish_node(SyntaxKind::JSDocTemplateTag, pos),
            tag_name,
            constraint,
            type_parameters,
            comment,
        }
    }

    fn try_parse_jsdoc_type_expression(&mut self) -> Option<&'a JsDocTypeExpression<'a>> {
        (self.token() == SyntaxKind::OpenBraceToken).then(|| self.parse_jsdoc_type_expression())
    }

    fn parse_jsdoc_type_expression(&mut self) -> &'a JsDocTypeExpression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let type_node = self.parse_type();
        if self.token() == SyntaxKind::CloseBraceToken {
            self.scan_jsdoc_token();
        } else {
            self.parse_error_at_current_token(&messages::_0_EXPECTED, &["}"]);
        }
        let arena = self.arena;
        arena.alloc(JsDocTypeExpression {
            data: self.finish_node(SyntaxKind::JSDocTypeExpression, pos),
            type_node: arena.alloc(type_node),
        })
    }

    fn parse_jsdoc_entity_name(&mut self) -> EntityName<'a> {
        let pos = self.node_pos();
        let mut entity = EntityName::Identifier(self.parse_jsdoc_identifier_name());
        while self.token() == SyntaxKind::DotToken {
            self.scan_jsdoc_token();
            let right = self.parse_jsdoc_identifier_name();
            let name = QualifiedName {
                data: self.finish_node(SyntaxKind::QualifiedName, pos),
                left: entity,
                right,
            };
            entity = EntityName::QualifiedName(self.arena.alloc(name));
        }
        entity
    }

    /// Every word is a name in a doc comment, keywords included.
    fn parse_jsdoc_identifier_name(&mut self) -> Identifier {
        if self.token() != SyntaxKind::Identifier {
            self.parse_error_at_current_token(&messages::IDENTIFIER_EXPECTED, &[]);
            return self.create_missing_identifier();
        }
        self.identifier_count += 1;
        let pos = self.node_pos();
        let escaped_text = self.interner.intern(self.token_value());
        self.scan_jsdoc_token();
        Identifier {
            data: self.finish_node(SyntaxKind::Identifier, pos),
            escaped_text,
            original_keyword_kind: None,
        }
    }

    fn skip_jsdoc_whitespace(&mut self) {
        while self.token() == SyntaxKind::WhitespaceTrivia {
            self.scan_jsdoc_token();
        }
    }
}
