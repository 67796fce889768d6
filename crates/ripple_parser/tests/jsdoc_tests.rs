//! Doc comments parsed out of a larger source text.

use bumpalo::Bump;
use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::HasNodeData;
use ripple_parser::{parse_isolated_jsdoc_comment, Parsed};

/// Parse the first `/** ... */` in `source` in place.
fn first_doc<'a>(arena: &'a Bump, source: &str) -> (Parsed<'a, JsDoc<'a>>, u32, u32) {
    let (Some(start), Some(close)) = (source.find("/**"), source.find("*/")) else {
        panic!("no doc comment in {source}");
    };
    let (start, end) = (start as u32, close as u32 + 2);
    (parse_isolated_jsdoc_comment(arena, source, start, end - start), start, end)
}

fn whole<'a>(arena: &'a Bump, comment: &str) -> Parsed<'a, JsDoc<'a>> {
    parse_isolated_jsdoc_comment(arena, comment, 0, comment.len() as u32)
}

fn tags<'a>(parsed: &Parsed<'a, JsDoc<'a>>) -> Vec<&'a JsDocTag<'a>> {
    parsed.node.tags.map(|tags| tags.iter().collect()).unwrap_or_default()
}

fn codes(parsed: &Parsed<'_, JsDoc<'_>>) -> Vec<u32> {
    parsed.diagnostics.iter().map(|d| d.code()).collect()
}

fn entity_text(parsed: &Parsed<'_, JsDoc<'_>>, name: &EntityName<'_>) -> String {
    match name {
        EntityName::Identifier(id) => parsed.interner.resolve(id.escaped_text).to_string(),
        EntityName::QualifiedName(qualified) => format!(
            "{}.{}",
            entity_text(parsed, &qualified.left),
            parsed.interner.resolve(qualified.right.escaped_text)
        ),
    }
}

#[test]
fn comment_inside_a_larger_text_keeps_absolute_positions() {
    let arena = Bump::new();
    let source = "const x = 1;\n/**\n * Greets someone.\n * @param {string} name who to greet\n */\nfunction greet(name) {}";
    let (parsed, start, end) = first_doc(&arena, source);
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    assert_eq!(parsed.node.data.range.pos, start);
    assert_eq!(parsed.node.data.range.end, end);
    assert_eq!(parsed.node.comment, Some("Greets someone."));

    let tags = tags(&parsed);
    assert_eq!(tags.len(), 1);
    let range = tags[0].data().range;
    assert!(range.pos >= start && range.end <= end, "{range:?} outside {start}..{end}");
    let JsDocTag::Parameter(param) = tags[0] else {
        panic!("expected a parameter tag");
    };
    assert_eq!(entity_text(&parsed, &param.name), "name");
    assert_eq!(param.comment, Some("who to greet"));
}

#[test]
fn parameter_tag_forms() {
    let arena = Bump::new();
    let parsed = whole(
        &arena,
        "/**\n\
         * @param {number} a type first\n\
         * @param b {string} name first\n\
         * @param {boolean} [c] optional\n\
         * @param {number} [d=42] with a default\n\
         * @arg {object} opts.size nested\n\
         */",
    );
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    let params: Vec<_> = tags(&parsed)
        .into_iter()
        .map(|tag| match tag {
            JsDocTag::Parameter(param) => param,
            other => panic!("expected a parameter tag, got {:?}", other.kind()),
        })
        .collect();
    assert_eq!(params.len(), 5);

    let names: Vec<_> = params.iter().map(|p| entity_text(&parsed, &p.name)).collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "opts.size"]);
    let name_first: Vec<_> = params.iter().map(|p| p.is_name_first).collect();
    assert_eq!(name_first, vec![false, true, false, false, false]);
    let bracketed: Vec<_> = params.iter().map(|p| p.is_bracketed).collect();
    assert_eq!(bracketed, vec![false, false, true, true, false]);
    assert!(params.iter().all(|p| p.type_expression.is_some()));
    assert_eq!(params[3].comment, Some("with a default"));
}

#[test]
fn return_type_and_template_tags() {
    let arena = Bump::new();
    let parsed = whole(
        &arena,
        "/**\n * @template {string} K, V the key and value\n * @type {Map<K, V>}\n * @returns {V | undefined} the value\n */",
    );
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    let kinds: Vec<_> = tags(&parsed).iter().map(|tag| tag.kind()).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::JSDocTemplateTag, SyntaxKind::JSDocTypeTag, SyntaxKind::JSDocReturnTag]
    );

    let tags = tags(&parsed);
    let JsDocTag::Template(template) = tags[0] else {
        panic!("expected a template tag");
    };
    assert!(template.constraint.is_some());
    assert_eq!(template.type_parameters.len(), 2);
    assert_eq!(template.comment, Some("the key and value"));

    let JsDocTag::Return(returns) = tags[2] else {
        panic!("expected a return tag");
    };
    let Some(type_expression) = returns.type_expression else {
        panic!("expected a return type");
    };
    assert_eq!(type_expression.type_node.kind(), SyntaxKind::UnionType);
    assert_eq!(returns.comment, Some("the value"));
}

#[test]
fn doc_only_type_forms() {
    let cases = [
        ("{?number}", SyntaxKind::JSDocNullableType),
        ("{!Foo}", SyntaxKind::JSDocNonNullableType),
        ("{number=}", SyntaxKind::JSDocOptionalType),
        ("{...string}", SyntaxKind::JSDocVariadicType),
        ("{*}", SyntaxKind::JSDocAllType),
        ("{Array<string>}", SyntaxKind::TypeReference),
    ];
    for (type_text, expected) in cases {
        let arena = Bump::new();
        let comment = format!("/** @type {type_text} */");
        let parsed = whole(&arena, &comment);
        assert!(parsed.diagnostics.is_empty(), "{comment}: {:?}", parsed.diagnostics);
        let Some(JsDocTag::Type(tag)) = parsed.node.tags.and_then(|tags| tags.first()) else {
            panic!("{comment}: expected a type tag");
        };
        let kind = tag.type_expression.map(|t| t.type_node.kind());
        assert_eq!(kind, Some(expected), "{comment}");
    }
}

#[test]
fn unknown_tags_keep_their_text() {
    let arena = Bump::new();
    let parsed = whole(&arena, "/**\n * @deprecated use\n *   something else\n * @see other\n */");
    assert!(parsed.diagnostics.is_empty());
    let comments: Vec<_> = tags(&parsed)
        .iter()
        .map(|tag| match tag {
            JsDocTag::Unknown(tag) => tag.comment,
            other => panic!("expected an unknown tag, got {:?}", other.kind()),
        })
        .collect();
    assert_eq!(comments, vec![Some("use\nsomething else"), Some("other")]);
}

#[test]
fn duplicate_type_tag_is_reported() {
    let arena = Bump::new();
    let parsed = whole(&arena, "/** @type {A}\n * @type {B} */");
    assert_eq!(codes(&parsed), vec![1223]);
}

#[test]
fn unclosed_type_expression_is_reported() {
    let arena = Bump::new();
    let parsed = whole(&arena, "/** @type {string */");
    assert!(codes(&parsed).contains(&1005), "{:?}", parsed.diagnostics);
}

#[test]
fn comment_without_tags() {
    let arena = Bump::new();
    let parsed = whole(&arena, "/** Just words. */");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.node.comment, Some("Just words."));
    assert!(parsed.node.tags.is_none());

    let arena = Bump::new();
    let parsed = whole(&arena, "/***/");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.node.comment, None);
}

#[test]
fn ranges_that_do_not_cover_a_doc_comment() {
    let arena = Bump::new();
    let source = "let a; /** doc */";
    // Starts one byte early.
    let parsed = parse_isolated_jsdoc_comment(&arena, source, 6, 11);
    assert_eq!(codes(&parsed), vec![1490]);

    let arena = Bump::new();
    let parsed = parse_isolated_jsdoc_comment(&arena, source, 7, 100);
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    assert_eq!(parsed.node.data.range.end, source.len() as u32);
}
