//! Incremental reparse tests.
//!
//! A reparse must produce the same tree shape as a fresh parse of the new
//! text, while taking untouched subtrees from the old tree unchanged.

use bumpalo::Bump;
use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::{walk_source_file, HasNodeData, Visit, Visitor};
use ripple_core::text::{TextChangeRange, TextPos, TextSpan};
use ripple_parser::{reparse, Parser, ReparseError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn change(start: u32, length: u32, new_length: u32) -> TextChangeRange {
    TextChangeRange::new(TextSpan::new(start, length), new_length)
}

/// Replace `length` bytes at `start` of `text` with `replacement`.
fn edit(text: &str, start: u32, length: u32, replacement: &str) -> (String, TextChangeRange) {
    let (start_usize, end) = (start as usize, (start + length) as usize);
    let new_text = format!("{}{}{}", &text[..start_usize], replacement, &text[end..]);
    (new_text, change(start, length, replacement.len() as u32))
}

#[derive(Default)]
struct Shape(Vec<(SyntaxKind, TextPos, TextPos)>);

impl<'a> Visitor<'a> for Shape {
    fn enter(&mut self, visit: Visit<'a>) -> bool {
        let range = visit.range();
        self.0.push((visit.node.data().kind, range.pos, range.end));
        true
    }
}

fn shape(file: &SourceFile<'_>) -> Vec<(SyntaxKind, TextPos, TextPos)> {
    let mut shape = Shape::default();
    walk_source_file(&mut shape, file);
    shape.0
}

fn same_statement(a: &SourceFile<'_>, b: &SourceFile<'_>, index: usize) -> bool {
    match (a.statements.get(index), b.statements.get(index)) {
        (Some(x), Some(y)) => std::ptr::eq(x, y),
        _ => false,
    }
}

/// Reparse after the edit and check the result against a fresh parse.
fn reparse_and_compare<'a>(
    arena: &'a Bump,
    old: &SourceFile<'a>,
    start: u32,
    length: u32,
    replacement: &str,
) -> SourceFile<'a> {
    let (new_text, change) = edit(old.text, start, length, replacement);
    let reparsed = match reparse(arena, old, &new_text, change) {
        Ok(file) => file,
        Err(err) => panic!("reparse failed: {err}"),
    };

    let fresh_arena = Bump::new();
    let fresh = Parser::new(&fresh_arena, &old.file_name, &new_text).parse_source_file();
    assert_eq!(shape(&reparsed), shape(&fresh), "new text: {new_text}");
    let codes = |f: &SourceFile<'_>| f.parse_diagnostics.iter().map(|d| (d.code(), d.start())).collect::<Vec<_>>();
    assert_eq!(codes(&reparsed), codes(&fresh), "new text: {new_text}");
    reparsed
}

fn declarations<'a>(file: &SourceFile<'a>) -> NodeList<'a, VariableDeclaration<'a>> {
    match file.statements.first() {
        Some(Statement::VariableStatement(statement)) => statement.declaration_list.declarations,
        other => panic!("expected a variable statement, got {other:?}"),
    }
}

/// Addresses of the statements in the body of the first function.
fn function_body(file: &SourceFile<'_>) -> Vec<*const ()> {
    match file.statements.first() {
        Some(Statement::FunctionDeclaration(function)) => function
            .body
            .as_ref()
            .map(|b| b.statements.iter().map(|s| s as *const Statement<'_> as *const ()).collect())
            .unwrap_or_default(),
        other => panic!("expected a function, got {other:?}"),
    }
}

#[test]
fn statements_before_the_edit_are_reused() {
    init_tracing();
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a;\nlet b;\nfoo(x);").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 18, 1, "bar");

    assert!(same_statement(&old, &new, 0));
    assert!(same_statement(&old, &new, 1));
    assert!(!same_statement(&old, &new, 2));
}

#[test]
fn statement_ending_before_the_token_at_the_edit_is_parsed_again() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a;\nlet b;\nfoo();").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 14, 3, "bar");

    assert!(same_statement(&old, &new, 0));
    // `let b;` ends where `foo` begins its leading trivia.
    assert!(!same_statement(&old, &new, 1));
}

#[test]
fn edits_in_trailing_trivia_reach_the_statement_before() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "a \nb;").parse_source_file();
    assert_eq!(old.statements.len(), 2);
    // `a` was ended by the line break; a `+` before it continues the expression.
    let new = reparse_and_compare(&arena, &old, 2, 0, "+");
    assert_eq!(new.statements.len(), 1);
    assert!(!same_statement(&old, &new, 0));

    let old = Parser::new(&arena, "test.ts", "a /* note */\nb;").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 2, 0, "+ ");
    assert_eq!(new.statements.len(), 1);

    let old = Parser::new(&arena, "test.ts", "x;\na\n\nb;").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 5, 0, "+");
    assert!(same_statement(&old, &new, 0));
    assert_eq!(new.statements.len(), 2);
}

#[test]
fn statements_after_an_insertion_are_shifted() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a;\nlet b;\nfoo();").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 0, 0, "x;\n");

    assert_eq!(new.statements.len(), 4);
    // The first old statement touches the edit and is parsed again.
    let Some(first_old) = old.statements.first() else {
        panic!("old tree has no statements");
    };
    assert!(new.statements.iter().all(|s| !std::ptr::eq(s, first_old)));

    for (new_index, old_index) in [(2, 1), (3, 2)] {
        let (Some(child), Some(old_node)) = (new.statements.children().nth(new_index), old.statements.get(old_index))
        else {
            panic!("missing statement {new_index}");
        };
        assert!(std::ptr::eq(child.node, old_node));
        assert_eq!(child.shift, 3);
        assert_eq!(child.pos(), old_node.pos() + 3);
    }
}

#[test]
fn declarators_without_initializers_are_reused() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a = 1, b, c = 2;").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 18, 1, "3");

    let (old_list, new_list) = (declarations(&old), declarations(&new));
    assert_eq!(new_list.len(), 3);

    let is_same = |index| match (old_list.get(index), new_list.get(index)) {
        (Some(x), Some(y)) => std::ptr::eq(x, y),
        _ => false,
    };
    // `b` is untouched and has no initializer.
    assert!(is_same(1));
    // `a = 1` has an initializer, `c = 2` contains the edit.
    assert!(!is_same(0));
    assert!(!is_same(2));
}

#[test]
fn statements_with_errors_are_parsed_again() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a = ;\nlet b;\nfoo();").parse_source_file();
    assert!(old.has_parse_errors());
    let new = reparse_and_compare(&arena, &old, 17, 3, "bar");

    assert!(!same_statement(&old, &new, 0));
    assert!(new.has_parse_errors());
}

#[test]
fn editing_inside_a_block_reuses_its_neighbours() {
    let arena = Bump::new();
    let source = "function f() {\n  one();\n  two(arg);\n  three();\n}\nafter();";
    let old = Parser::new(&arena, "test.ts", source).parse_source_file();
    let start = source.find("arg").map(|i| i as u32).unwrap_or_default();
    let new = reparse_and_compare(&arena, &old, start, 3, "value");

    let (old_body, new_body) = (function_body(&old), function_body(&new));
    assert_eq!(new_body.len(), 3);
    assert_eq!(old_body[0], new_body[0]);
    assert_ne!(old_body[1], new_body[1]);
    assert_eq!(old_body[2], new_body[2]);
    assert!(same_statement(&old, &new, 1));
}

#[test]
fn edits_that_change_statement_boundaries() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "a;\nb;\nc;").parse_source_file();
    // Removing the semicolon and newline merges `a` and `b`.
    let merged = reparse_and_compare(&arena, &old, 1, 2, " + ");
    assert_eq!(merged.statements.len(), 2);

    let split = reparse_and_compare(&arena, &merged, 1, 3, ";\n");
    assert_eq!(split.statements.len(), 3);
}

#[test]
fn node_ids_continue_after_the_old_tree() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a;\nlet b;").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 4, 1, "z");
    assert!(new.node_count > old.node_count);
    assert_eq!(new.file_name, old.file_name);
}

#[test]
fn reparse_keeps_the_language_variant() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "view.tsx", "const v = <div>hi</div>;").parse_source_file();
    let (new_text, change) = edit(old.text, 15, 2, "there");
    let new = match reparse(&arena, &old, &new_text, change) {
        Ok(file) => file,
        Err(err) => panic!("reparse failed: {err}"),
    };
    assert_eq!(new.language_variant, old.language_variant);
    assert!(new.parse_diagnostics.is_empty());
}

#[test]
fn identity_edit_reuses_everything_outside_it() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a;\nlet b;\nlet c;").parse_source_file();
    let new = reparse_and_compare(&arena, &old, 7, 0, "");
    assert!(same_statement(&old, &new, 2));
}

#[test]
fn inconsistent_changes_are_errors() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "let a;").parse_source_file();

    let err = reparse(&arena, &old, "let a;", change(3, 10, 10)).err();
    assert!(matches!(err, Some(ReparseError::SpanOutOfRange { .. })));

    let err = reparse(&arena, &old, "let abc;", change(4, 1, 1)).err();
    assert_eq!(err, Some(ReparseError::LengthMismatch { expected: 6, actual: 8 }));

    let err = reparse(&arena, &old, "let a;", change(u32::MAX, 1, 1)).err();
    assert!(matches!(err, Some(ReparseError::SpanOutOfRange { .. })));
}

#[test]
fn empty_tree_is_parsed_from_scratch() {
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", "  ").parse_source_file();
    assert!(old.statements.is_empty());
    let new = reparse_and_compare(&arena, &old, 1, 0, "let a = 1;");
    assert_eq!(new.statements.len(), 1);
    assert!(new.node_count > old.node_count);
}
