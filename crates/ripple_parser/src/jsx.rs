//! Tag markup: elements, fragments, attributes, interpolated expressions
//! and text runs.
//!
//! Between tags the scanner runs in its markup mode; everything inside
//! `{ }` and attribute names goes through the ordinary token stream.
//! A closing tag that does not match is reported, never fatal: when it
//! closes an enclosing element instead, the inner element is given an
//! empty closing tag and the outer one takes over the closing tag.

use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::types::NodeFlags;
use ripple_ast::HasNodeData;
use ripple_core::arena::ArenaExt;
use ripple_core::text::TextRange;
use ripple_diagnostics::messages;
use ripple_scanner::RescanMode;

use crate::list::ParsingContext;
use crate::parser::Parser;

/// What a `<` turned out to open.
enum OpeningTag<'a> {
    Element(JsxOpeningElement<'a>),
    SelfClosing(JsxSelfClosingElement<'a>),
    Fragment(Token),
}

/// A complete element before it is placed as an expression or a child.
enum ElementLike<'a> {
    Element(JsxElement<'a>),
    SelfClosing(JsxSelfClosingElement<'a>),
    Fragment(JsxFragment<'a>),
}

impl<'a> ElementLike<'a> {
    fn into_expression(self) -> Expression<'a> {
        match self {
            ElementLike::Element(element) => Expression::JsxElement(element),
            ElementLike::SelfClosing(element) => Expression::JsxSelfClosingElement(element),
            ElementLike::Fragment(fragment) => Expression::JsxFragment(fragment),
        }
    }

    fn into_child(self) -> JsxChild<'a> {
        match self {
            ElementLike::Element(element) => JsxChild::Element(element),
            ElementLike::SelfClosing(element) => JsxChild::SelfClosingElement(element),
            ElementLike::Fragment(fragment) => JsxChild::Fragment(fragment),
        }
    }
}

/// The tag whose children are being parsed.
#[derive(Clone, Copy)]
enum ChildrenOf<'a> {
    Element(&'a JsxTagName<'a>),
    Fragment(TextRange),
}

impl<'a> ChildrenOf<'a> {
    fn tag_name(self) -> Option<&'a JsxTagName<'a>> {
        match self {
            ChildrenOf::Element(tag_name) => Some(tag_name),
            ChildrenOf::Fragment(_) => None,
        }
    }
}

impl<'a> Parser<'a> {
    /// An element in expression position. Adjacent elements are wrapped in
    /// a comma expression and reported, since only one may stand there.
    pub(crate) fn parse_jsx_element_or_self_closing_element_or_fragment(&mut self) -> Expression<'a> {
        self.parse_jsx_element_expression(None)
    }

    fn parse_jsx_element_expression(&mut self, top_invalid_pos: Option<u32>) -> Expression<'a> {
        let pos = self.node_pos();
        let element = self.parse_jsx_element_like(true, None).into_expression();
        if self.token() != SyntaxKind::LessThanToken {
            return element;
        }

        let top = top_invalid_pos.unwrap_or(pos);
        let sibling = self.parse_jsx_element_expression(Some(top));
        let sibling_range = sibling.data().range;
        let operator_token = Token {
            data: self.synthesize_node(SyntaxKind::CommaToken, sibling_range.pos, sibling_range.pos),
        };
        self.parse_error_at_node(
            TextRange::new(top, sibling_range.end),
            &messages::TAG_ELEMENTS_MUST_HAVE_ONE_PARENT_ELEMENT,
            &[],
        );
        let arena = self.arena;
        Expression::Binary(BinaryExpression {
            data: self.finish_node(SyntaxKind::BinaryExpression, pos),
            left: arena.alloc(element),
            operator_token,
            right: arena.alloc(sibling),
        })
    }

    /// `parent` is the tag name of the enclosing element, if any; a closing
    /// tag that matches it ends this element early.
    fn parse_jsx_element_like(
        &mut self,
        in_expression_context: bool,
        parent: Option<&'a JsxTagName<'a>>,
    ) -> ElementLike<'a> {
        let pos = self.node_pos();
        match self.parse_jsx_opening_tag(in_expression_context) {
            OpeningTag::Element(opening) => {
                let opening: &'a JsxOpeningElement<'a> = self.arena.alloc(opening);
                let mut children = self.parse_jsx_children(ChildrenOf::Element(&opening.tag_name));

                let unclosed_last = match children.last() {
                    Some(JsxChild::Element(last))
                        if !last.opening_element.tag_name.same_tag(&last.closing_element.tag_name)
                            && opening.tag_name.same_tag(&last.closing_element.tag_name) =>
                    {
                        Some(last)
                    }
                    _ => None,
                };

                let closing_element = match unclosed_last {
                    Some(last) => {
                        children = self.close_last_child_empty(children, last);
                        last.closing_element
                    }
                    None => {
                        let closing = self.parse_jsx_closing_element(&opening.tag_name, in_expression_context);
                        if !opening.tag_name.same_tag(&closing.tag_name) {
                            let opening_text = self.tag_text(opening.tag_name.data().range);
                            if parent.is_some_and(|parent| parent.same_tag(&closing.tag_name)) {
                                self.parse_error_at_node(
                                    opening.tag_name.data().range,
                                    &messages::TAG_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG,
                                    &[&opening_text],
                                );
                            } else {
                                self.parse_error_at_node(
                                    closing.tag_name.data().range,
                                    &messages::EXPECTED_CORRESPONDING_CLOSING_TAG_FOR_0,
                                    &[&opening_text],
                                );
                            }
                        }
                        &*self.arena.alloc(closing)
                    }
                };

                ElementLike::Element(JsxElement {
                    data: self.finish_node(SyntaxKind::JsxElement, pos),
                    opening_element: opening,
                    children,
                    closing_element,
                })
            }
            OpeningTag::Fragment(opening_fragment) => {
                let children = self.parse_jsx_children(ChildrenOf::Fragment(opening_fragment.data.range));
                let closing_fragment = self.parse_jsx_closing_fragment(in_expression_context);
                ElementLike::Fragment(JsxFragment {
                    data: self.finish_node(SyntaxKind::JsxFragment, pos),
                    opening_fragment,
                    children,
                    closing_fragment,
                })
            }
            OpeningTag::SelfClosing(element) => ElementLike::SelfClosing(element),
        }
    }

    /// Rebuild `children` so its last element, whose closing tag belonged
    /// to the parent, ends with an empty closing tag instead.
    fn close_last_child_empty(
        &mut self,
        children: NodeList<'a, JsxChild<'a>>,
        last: &'a JsxElement<'a>,
    ) -> NodeList<'a, JsxChild<'a>> {
        let end = last.children.end();
        let name = Identifier {
            data: self.synthesize_node(SyntaxKind::Identifier, end, end),
            escaped_text: self.interner.intern(""),
            original_keyword_kind: None,
        };
        let closing = JsxClosingElement {
            data: self.synthesize_node(SyntaxKind::JsxClosingElement, end, end),
            tag_name: JsxTagName::Identifier(name),
        };
        let rebuilt = JsxElement {
            data: self.synthesize_node(SyntaxKind::JsxElement, last.opening_element.data.range.pos, end),
            opening_element: last.opening_element,
            children: last.children,
            closing_element: self.arena.alloc(closing),
        };

        let mut elements: Vec<Child<'a, JsxChild<'a>>> =
            children.elements[..children.elements.len().saturating_sub(1)].to_vec();
        elements.push(Child::new(self.arena.alloc(JsxChild::Element(rebuilt))));
        NodeList::new(TextRange::new(children.pos(), end), self.arena.alloc_vec(elements))
    }

    fn tag_text(&self, range: TextRange) -> String {
        self.scanner
            .text()
            .get(range.pos as usize..range.end as usize)
            .unwrap_or("")
            .trim()
            .to_string()
    }

    // ========================================================================
    // Tags
    // ========================================================================

    fn parse_jsx_opening_tag(&mut self, in_expression_context: bool) -> OpeningTag<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::LessThanToken);
        if self.token() == SyntaxKind::GreaterThanToken {
            self.scan_jsx_token();
            return OpeningTag::Fragment(Token {
                data: self.finish_node(SyntaxKind::JsxOpeningFragment, pos),
            });
        }

        let tag_name = self.parse_jsx_element_name();
        let type_arguments = if !self.in_context(NodeFlags::JAVASCRIPT_FILE) && self.token() == SyntaxKind::LessThanToken {
            self.try_parse_type_arguments()
        } else {
            None
        };
        let attributes = self.parse_jsx_attributes();

        if self.token() == SyntaxKind::GreaterThanToken {
            self.scan_jsx_token();
            return OpeningTag::Element(JsxOpeningElement {
                data: self.finish_node(SyntaxKind::JsxOpeningElement, pos),
                tag_name,
                type_arguments,
                attributes,
            });
        }

        self.parse_expected(SyntaxKind::SlashToken);
        if self.parse_expected_with(SyntaxKind::GreaterThanToken, None, false) {
            if in_expression_context {
                self.next_token();
            } else {
                self.scan_jsx_token();
            }
        }
        OpeningTag::SelfClosing(JsxSelfClosingElement {
            data: self.finish_node(SyntaxKind::JsxSelfClosingElement, pos),
            tag_name,
            type_arguments,
            attributes,
        })
    }

    fn parse_jsx_closing_element(
        &mut self,
        opening_tag_name: &JsxTagName<'a>,
        in_expression_context: bool,
    ) -> JsxClosingElement<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::LessThanSlashToken);
        let tag_name = self.parse_jsx_element_name();
        if self.parse_expected_with(SyntaxKind::GreaterThanToken, None, false) {
            // After a mismatch the enclosing element continues with code, not text.
            if in_expression_context || !opening_tag_name.same_tag(&tag_name) {
                self.next_token();
            } else {
                self.scan_jsx_token();
            }
        }
        JsxClosingElement {
            data: self.finish_node(SyntaxKind::JsxClosingElement, pos),
            tag_name,
        }
    }

    fn parse_jsx_closing_fragment(&mut self, in_expression_context: bool) -> Token {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::LessThanSlashToken);
        if self.parse_expected_with(
            SyntaxKind::GreaterThanToken,
            Some(&messages::EXPECTED_CORRESPONDING_CLOSING_TAG_FOR_FRAGMENT),
            false,
        ) {
            if in_expression_context {
                self.next_token();
            } else {
                self.scan_jsx_token();
            }
        }
        Token {
            data: self.finish_node(SyntaxKind::JsxClosingFragment, pos),
        }
    }

    /// `div`, `ns:tag`, `this`, or a dotted chain such as `Foo.Bar`.
    fn parse_jsx_element_name(&mut self) -> JsxTagName<'a> {
        let pos = self.node_pos();
        let initial = self.parse_jsx_tag_name();
        if self.token() != SyntaxKind::DotToken {
            return initial;
        }
        let mut expression = match initial {
            JsxTagName::Identifier(identifier) => Expression::Identifier(identifier),
            JsxTagName::This(token) => Expression::ThisKeyword(token.data),
            other => return other,
        };
        while self.parse_optional(SyntaxKind::DotToken) {
            let name = self.parse_right_side_of_dot();
            let arena = self.arena;
            expression = Expression::PropertyAccess(PropertyAccessExpression {
                data: self.finish_node(SyntaxKind::PropertyAccessExpression, pos),
                expression: arena.alloc(expression),
                question_dot_token: None,
                name,
            });
        }
        JsxTagName::PropertyAccess(self.arena.alloc(expression))
    }

    fn parse_jsx_tag_name(&mut self) -> JsxTagName<'a> {
        let pos = self.node_pos();
        self.rescan(RescanMode::JsxIdentifier);
        let is_this = self.token() == SyntaxKind::ThisKeyword;
        let name = self.parse_identifier_name();
        if self.parse_optional(SyntaxKind::ColonToken) {
            let namespaced = self.parse_jsx_namespaced_name_rest(pos, name);
            return JsxTagName::Namespaced(self.arena.alloc(namespaced));
        }
        if is_this {
            return JsxTagName::This(Token {
                data: self.finish_node(SyntaxKind::ThisKeyword, pos),
            });
        }
        JsxTagName::Identifier(name)
    }

    fn parse_jsx_namespaced_name_rest(&mut self, pos: u32, namespace: Identifier) -> JsxNamespacedName {
        self.rescan(RescanMode::JsxIdentifier);
        let name = self.parse_identifier_name();
        JsxNamespacedName {
            data: self.finish_node(SyntaxKind::JsxNamespacedName, pos),
            namespace,
            name,
        }
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    fn parse_jsx_attributes(&mut self) -> JsxAttributes<'a> {
        let pos = self.node_pos();
        let properties = self.parse_list(ParsingContext::JsxAttributes, Self::parse_jsx_attribute);
        JsxAttributes {
            data: self.finish_node(SyntaxKind::JsxAttributes, pos),
            properties,
        }
    }

    fn parse_jsx_attribute(&mut self) -> JsxAttributeLike<'a> {
        if self.token() == SyntaxKind::OpenBraceToken {
            return JsxAttributeLike::SpreadAttribute(self.parse_jsx_spread_attribute());
        }
        let pos = self.node_pos();
        let name = self.parse_jsx_attribute_name();
        let initializer = self.parse_jsx_attribute_value();
        JsxAttributeLike::Attribute(JsxAttribute {
            data: self.finish_node(SyntaxKind::JsxAttribute, pos),
            name,
            initializer,
        })
    }

    fn parse_jsx_attribute_name(&mut self) -> JsxAttributeName<'a> {
        let pos = self.node_pos();
        self.rescan(RescanMode::JsxIdentifier);
        let name = self.parse_identifier_name();
        if self.parse_optional(SyntaxKind::ColonToken) {
            let namespaced = self.parse_jsx_namespaced_name_rest(pos, name);
            return JsxAttributeName::Namespaced(self.arena.alloc(namespaced));
        }
        JsxAttributeName::Identifier(name)
    }

    fn parse_jsx_attribute_value(&mut self) -> Option<JsxAttributeValue<'a>> {
        if self.token() != SyntaxKind::EqualsToken {
            return None;
        }
        let arena = self.arena;
        match self.scan_jsx_attribute_value() {
            SyntaxKind::StringLiteral => Some(JsxAttributeValue::StringLiteral(self.parse_string_literal())),
            SyntaxKind::OpenBraceToken => {
                let expression = self.parse_jsx_expression(true);
                if expression.expression.is_none() {
                    self.parse_error_at_node(
                        expression.data.range,
                        &messages::TAG_ATTRIBUTES_MUST_ONLY_BE_ASSIGNED_A_NON_EMPTY_EXPRESSION,
                        &[],
                    );
                }
                Some(JsxAttributeValue::Expression(arena.alloc(expression)))
            }
            SyntaxKind::LessThanToken => {
                let element = self.parse_jsx_element_or_self_closing_element_or_fragment();
                Some(JsxAttributeValue::Element(arena.alloc(element)))
            }
            _ => {
                self.parse_error_at_current_token(&messages::OR_TAG_ELEMENT_EXPECTED, &[]);
                None
            }
        }
    }

    fn parse_jsx_spread_attribute(&mut self) -> JsxSpreadAttribute<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        self.parse_expected(SyntaxKind::DotDotDotToken);
        let expression = self.parse_expression();
        self.parse_expected(SyntaxKind::CloseBraceToken);
        JsxSpreadAttribute {
            data: self.finish_node(SyntaxKind::JsxSpreadAttribute, pos),
            expression: self.arena.alloc(expression),
        }
    }

    // ========================================================================
    // Children
    // ========================================================================

    fn parse_jsx_children(&mut self, parent: ChildrenOf<'a>) -> NodeList<'a, JsxChild<'a>> {
        let pos = self.node_pos();
        let saved_contexts = self.parsing_contexts;
        self.parsing_contexts |= ParsingContext::JsxChildren.bit();
        let mut children = Vec::new();

        loop {
            let child = match self.rescan(RescanMode::JsxText) {
                SyntaxKind::EndOfFileToken => {
                    self.report_unclosed(parent);
                    break;
                }
                SyntaxKind::JsxText | SyntaxKind::JsxTextAllWhiteSpaces => JsxChild::Text(self.parse_jsx_text()),
                SyntaxKind::OpenBraceToken => JsxChild::Expression(self.parse_jsx_expression(false)),
                SyntaxKind::LessThanToken => self.parse_jsx_element_like(false, parent.tag_name()).into_child(),
                _ => break,
            };
            let closes_parent = match (&child, parent.tag_name()) {
                (JsxChild::Element(element), Some(parent_tag)) => {
                    !element.opening_element.tag_name.same_tag(&element.closing_element.tag_name)
                        && parent_tag.same_tag(&element.closing_element.tag_name)
                }
                _ => false,
            };
            children.push(child);
            if closes_parent {
                break;
            }
        }

        self.parsing_contexts = saved_contexts;
        self.create_node_list(children, pos)
    }

    fn report_unclosed(&mut self, parent: ChildrenOf<'a>) {
        match parent {
            ChildrenOf::Fragment(range) => {
                self.parse_error_at_node(range, &messages::TAG_FRAGMENT_HAS_NO_CORRESPONDING_CLOSING_TAG, &[]);
            }
            ChildrenOf::Element(tag_name) => {
                let range = tag_name.data().range;
                let text = self.tag_text(range);
                self.parse_error_at_node(range, &messages::TAG_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG, &[&text]);
            }
        }
    }

    fn parse_jsx_text(&mut self) -> JsxText {
        let pos = self.node_pos();
        let contains_only_trivia_white_spaces = self.token() == SyntaxKind::JsxTextAllWhiteSpaces;
        let text = self.interner.intern(self.token_value());
        self.scan_jsx_token();
        JsxText {
            data: self.finish_node(SyntaxKind::JsxText, pos),
            text,
            contains_only_trivia_white_spaces,
        }
    }

    /// `{expr}`; as a child the expression may be spread or left empty.
    fn parse_jsx_expression(&mut self, in_expression_context: bool) -> JsxExpression<'a> {
        let pos = self.node_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut dot_dot_dot_token = None;
        let mut expression = None;
        if self.token() != SyntaxKind::CloseBraceToken {
            if !in_expression_context {
                dot_dot_dot_token = self.parse_optional_token(SyntaxKind::DotDotDotToken);
            }
            let parsed = self.parse_expression();
            expression = Some(&*self.arena.alloc(parsed));
        }
        if in_expression_context {
            self.parse_expected(SyntaxKind::CloseBraceToken);
        } else if self.parse_expected_with(SyntaxKind::CloseBraceToken, None, false) {
            self.scan_jsx_token();
        }
        JsxExpression {
            data: self.finish_node(SyntaxKind::JsxExpression, pos),
            dot_dot_dot_token,
            expression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    fn markup<'a>(arena: &'a Bump, text: &str) -> crate::Parsed<'a, Expression<'a>> {
        Parser::new(arena, "test.tsx", text).parse_single_expression()
    }

    fn element<'e, 'a>(expression: &'e Expression<'a>) -> &'e JsxElement<'a> {
        match expression {
            Expression::JsxElement(element) => element,
            other => panic!("expected element, got {:?}", other.kind()),
        }
    }

    fn codes(parsed: &crate::Parsed<'_, Expression<'_>>) -> Vec<u32> {
        parsed.diagnostics.iter().map(|d| d.code()).collect()
    }

    #[test]
    fn matching_tags_have_no_diagnostics() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<div>text</div>");
        assert!(parsed.diagnostics.is_empty());
        let element = element(parsed.node);
        assert_eq!(element.children.len(), 1);
        assert!(matches!(element.children.first(), Some(JsxChild::Text(_))));
        assert_eq!(element.data.range, TextRange::new(0, 15));
    }

    #[test]
    fn mismatched_closing_tag_is_reported_once() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<div>text</span>");
        assert_eq!(codes(&parsed), vec![17002]);
        let element = element(parsed.node);
        let opening = &element.opening_element.tag_name;
        let closing = &element.closing_element.tag_name;
        assert!(!opening.same_tag(closing));
        let JsxTagName::Identifier(closing) = closing else {
            panic!("expected an identifier tag");
        };
        assert_eq!(parsed.interner.resolve(closing.escaped_text), "span");
    }

    #[test]
    fn unclosed_child_hands_its_closing_tag_to_the_parent() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<div><span></div>");
        assert_eq!(codes(&parsed), vec![17008]);
        let outer = element(parsed.node);
        assert!(outer.opening_element.tag_name.same_tag(&outer.closing_element.tag_name));
        let Some(JsxChild::Element(inner)) = outer.children.last() else {
            panic!("expected a child element");
        };
        assert_eq!(inner.closing_element.data.range.pos, inner.closing_element.data.range.end);
    }

    #[test]
    fn dotted_and_namespaced_names_compare_structurally() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<Foo.Bar><svg:rect /></Foo.Bar>");
        assert!(parsed.diagnostics.is_empty());
        let outer = element(parsed.node);
        assert!(matches!(outer.opening_element.tag_name, JsxTagName::PropertyAccess(_)));
        let Some(JsxChild::SelfClosingElement(child)) = outer.children.first() else {
            panic!("expected a self-closing child");
        };
        assert!(matches!(child.tag_name, JsxTagName::Namespaced(_)));
    }

    #[test]
    fn fragments_and_children() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<>a{b}<c/></>");
        assert!(parsed.diagnostics.is_empty());
        let Expression::JsxFragment(fragment) = parsed.node else {
            panic!("expected a fragment");
        };
        let kinds: Vec<_> = fragment.children.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![SyntaxKind::JsxText, SyntaxKind::JsxExpression, SyntaxKind::JsxSelfClosingElement]
        );
    }

    #[test]
    fn unclosed_fragment_is_reported() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<>a");
        assert!(codes(&parsed).contains(&17014));
    }

    #[test]
    fn attributes() {
        let arena = Bump::new();
        let parsed = markup(&arena, r#"<a data-id="x\y" on={f} {...rest} disabled />"#);
        assert!(parsed.diagnostics.is_empty());
        let Expression::JsxSelfClosingElement(element) = parsed.node else {
            panic!("expected a self-closing element");
        };
        let properties = &element.attributes.properties;
        assert_eq!(properties.len(), 4);
        let Some(JsxAttributeLike::Attribute(first)) = properties.first() else {
            panic!("expected an attribute");
        };
        let JsxAttributeName::Identifier(name) = &first.name else {
            panic!("expected a plain name");
        };
        assert_eq!(parsed.interner.resolve(name.escaped_text), "data-id");
        let Some(JsxAttributeValue::StringLiteral(value)) = &first.initializer else {
            panic!("expected a string value");
        };
        assert_eq!(parsed.interner.resolve(value.text), "x\\y");
        assert!(matches!(properties.get(2), Some(JsxAttributeLike::SpreadAttribute(_))));
    }

    #[test]
    fn empty_attribute_expression_is_reported() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<a b={} />");
        assert_eq!(codes(&parsed), vec![17000]);
    }

    #[test]
    fn adjacent_elements_are_wrapped_and_reported() {
        let arena = Bump::new();
        let parsed = markup(&arena, "<a/><b/>");
        assert_eq!(codes(&parsed), vec![2657]);
        let Expression::Binary(binary) = parsed.node else {
            panic!("expected a comma expression");
        };
        assert_eq!(binary.operator_token.data.kind, SyntaxKind::CommaToken);
        assert_eq!(binary.operator_token.data.range, TextRange::new(4, 4));
    }

    #[test]
    fn less_than_is_a_type_assertion_outside_markup_files() {
        let arena = Bump::new();
        let parsed = Parser::new(&arena, "test.ts", "<T>x").parse_single_expression();
        assert!(matches!(parsed.node, Expression::TypeAssertion(_)));
    }
}
