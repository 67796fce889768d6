//! Markup parsing in `.tsx` and `.jsx` files.

use bumpalo::Bump;
use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::HasNodeData;
use ripple_parser::{Parsed, Parser};

fn parse<'a>(arena: &'a Bump, source: &str) -> SourceFile<'a> {
    Parser::new(arena, "test.tsx", source).parse_source_file()
}

fn markup<'a>(arena: &'a Bump, source: &str) -> Parsed<'a, Expression<'a>> {
    Parser::new(arena, "test.tsx", source).parse_single_expression()
}

fn codes(parsed: &Parsed<'_, Expression<'_>>) -> Vec<u32> {
    parsed.diagnostics.iter().map(|d| d.code()).collect()
}

fn tag_name<'a>(parsed: &Parsed<'a, Expression<'a>>, name: &JsxTagName<'_>) -> String {
    match name {
        JsxTagName::Identifier(id) => parsed.interner.resolve(id.escaped_text).to_string(),
        JsxTagName::This(_) => "this".to_string(),
        JsxTagName::Namespaced(name) => format!(
            "{}:{}",
            parsed.interner.resolve(name.namespace.escaped_text),
            parsed.interner.resolve(name.name.escaped_text)
        ),
        JsxTagName::PropertyAccess(_) => "<dotted>".to_string(),
    }
}

#[test]
fn closing_tags_match_their_opening_tags() {
    let cases: &[(&str, &[u32])] = &[
        ("<div></div>", &[]),
        ("<div><span></span></div>", &[]),
        ("<a.b.c></a.b.c>", &[]),
        ("<svg:g></svg:g>", &[]),
        ("<this></this>", &[]),
        ("<div></span>", &[17002]),
        ("<a.b></a.c>", &[17002]),
        ("<svg:g></svg:h>", &[17002]),
        ("<a.b></a>", &[17002]),
        ("<div><span></div>", &[17008]),
    ];
    for (source, expected) in cases {
        let arena = Bump::new();
        let parsed = markup(&arena, source);
        assert_eq!(codes(&parsed), *expected, "source: {source}");
    }
}

#[test]
fn mismatch_keeps_both_names() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<open>text</close>");
    let Expression::JsxElement(element) = parsed.node else {
        panic!("expected an element");
    };
    assert_eq!(tag_name(&parsed, &element.opening_element.tag_name), "open");
    assert_eq!(tag_name(&parsed, &element.closing_element.tag_name), "close");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].code(), 17002);
}

#[test]
fn unclosed_elements_at_end_of_file() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<div><p>text");
    assert!(codes(&parsed).contains(&17008), "{:?}", parsed.diagnostics);

    let arena = Bump::new();
    let parsed = markup(&arena, "<>text");
    assert!(codes(&parsed).contains(&17014), "{:?}", parsed.diagnostics);
}

#[test]
fn fragment_closed_by_an_element_tag() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<>text</div>");
    assert!(codes(&parsed).contains(&17015), "{:?}", parsed.diagnostics);
}

#[test]
fn markup_inside_statements() {
    let arena = Bump::new();
    let file = parse(
        &arena,
        "const list = <ul className=\"items\">{items.map(i => <li key={i}>{i}</li>)}</ul>;\n\
         function App() { return <><Header title='hi' /><Main {...props} /></>; }",
    );
    assert!(file.parse_diagnostics.is_empty(), "{:?}", file.parse_diagnostics);
    let kinds: Vec<_> = file.statements.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::VariableStatement, SyntaxKind::FunctionDeclaration]);
}

#[test]
fn children_kinds_in_order() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<p>Hello, {name}! <b>bold</b><br/><>frag</></p>");
    assert!(parsed.diagnostics.is_empty());
    let Expression::JsxElement(element) = parsed.node else {
        panic!("expected an element");
    };
    let kinds: Vec<_> = element.children.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::JsxText,
            SyntaxKind::JsxExpression,
            SyntaxKind::JsxText,
            SyntaxKind::JsxElement,
            SyntaxKind::JsxSelfClosingElement,
            SyntaxKind::JsxFragment,
        ]
    );
}

#[test]
fn whitespace_only_text_is_flagged() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<div>\n  <span />\n</div>");
    assert!(parsed.diagnostics.is_empty());
    let Expression::JsxElement(element) = parsed.node else {
        panic!("expected an element");
    };
    let Some(JsxChild::Text(text)) = element.children.first() else {
        panic!("expected leading text");
    };
    assert!(text.contains_only_trivia_white_spaces);
}

#[test]
fn attribute_values() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<a s='single' d=\"double\" e={x + 1} el=<b/> flag />");
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    let Expression::JsxSelfClosingElement(element) = parsed.node else {
        panic!("expected a self-closing element");
    };
    let values: Vec<_> = element
        .attributes
        .properties
        .iter()
        .map(|property| match property {
            JsxAttributeLike::Attribute(attribute) => match &attribute.initializer {
                Some(JsxAttributeValue::StringLiteral(_)) => "string",
                Some(JsxAttributeValue::Expression(_)) => "expression",
                Some(JsxAttributeValue::Element(_)) => "element",
                None => "none",
            },
            JsxAttributeLike::SpreadAttribute(_) => "spread",
        })
        .collect();
    assert_eq!(values, vec!["string", "string", "expression", "element", "none"]);
}

#[test]
fn bad_attribute_value_is_reported() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<a b=1 />");
    assert!(codes(&parsed).contains(&1145), "{:?}", parsed.diagnostics);
}

#[test]
fn sibling_elements_are_reported_once() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<a></a><b></b>");
    assert_eq!(codes(&parsed), vec![2657]);
    assert!(matches!(parsed.node, Expression::Binary(_)));
}

#[test]
fn type_arguments_on_tags() {
    let arena = Bump::new();
    let parsed = markup(&arena, "<List<string> items={xs} />");
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    let Expression::JsxSelfClosingElement(element) = parsed.node else {
        panic!("expected a self-closing element");
    };
    assert!(element.type_arguments.is_some_and(|args| args.len() == 1));
}

#[test]
fn generic_arrows_need_a_marker_in_markup_files() {
    let arena = Bump::new();
    let file = parse(&arena, "const f = <T,>(x: T) => x;\nconst g = <T extends object>(x: T) => x;");
    assert!(file.parse_diagnostics.is_empty(), "{:?}", file.parse_diagnostics);

    let arena = Bump::new();
    let file = Parser::new(&arena, "test.ts", "const f = <T>(x: T) => x;").parse_source_file();
    assert!(file.parse_diagnostics.is_empty(), "{:?}", file.parse_diagnostics);
}

#[test]
fn plain_javascript_markup() {
    let arena = Bump::new();
    let file = Parser::new(&arena, "view.jsx", "export default () => <div id=\"root\">{1}</div>;").parse_source_file();
    assert!(file.parse_diagnostics.is_empty(), "{:?}", file.parse_diagnostics);
}
