//! Parser integration tests.
//!
//! Each test parses a small source text and checks the shape of the tree
//! and the diagnostics that came with it.

use bumpalo::Bump;
use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::HasNodeData;
use ripple_parser::Parser;

fn parse<'a>(arena: &'a Bump, source: &str) -> SourceFile<'a> {
    Parser::new(arena, "test.ts", source).parse_source_file()
}

/// Parse `source` and check that it is error free with the given top-level kinds.
fn assert_kinds(source: &str, expected: &[SyntaxKind]) {
    let arena = Bump::new();
    let file = parse(&arena, source);
    assert!(
        file.parse_diagnostics.is_empty(),
        "source: {source}\ndiagnostics: {:?}",
        file.parse_diagnostics
    );
    let kinds: Vec<_> = file.statements.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, expected, "source: {source}");
}

fn codes(file: &SourceFile<'_>) -> Vec<u32> {
    file.parse_diagnostics.iter().map(|d| d.code()).collect()
}

fn single_expression<'a>(file: &SourceFile<'a>) -> &'a Expression<'a> {
    match file.statements.first() {
        Some(Statement::ExpressionStatement(statement)) => statement.expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

// ============================================================================
// Variable declarations
// ============================================================================

#[test]
fn variable_statements() {
    assert_kinds("const x = 42;", &[SyntaxKind::VariableStatement]);
    assert_kinds("let a = 1, b: string, c;", &[SyntaxKind::VariableStatement]);
    assert_kinds("var v\nlet w", &[SyntaxKind::VariableStatement, SyntaxKind::VariableStatement]);
    assert_kinds("using r = open();", &[SyntaxKind::VariableStatement]);
}

#[test]
fn declarators_keep_their_parts() {
    let arena = Bump::new();
    let file = parse(&arena, "let a: number = 1, b;");
    let Some(Statement::VariableStatement(statement)) = file.statements.first() else {
        panic!("expected a variable statement");
    };
    let declarations = statement.declaration_list.declarations;
    assert_eq!(declarations.len(), 2);
    let Some(first) = declarations.first() else {
        panic!("expected a declarator");
    };
    assert!(first.type_annotation.is_some());
    assert!(first.initializer.is_some());
    assert_eq!(file.text_of(first.data.range).trim(), "a: number = 1");
    assert!(declarations.last().is_some_and(|d| d.initializer.is_none()));
}

#[test]
fn let_as_an_identifier() {
    assert_kinds("let;", &[SyntaxKind::ExpressionStatement]);
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn functions() {
    assert_kinds("function f(a: number, b?: string, ...rest: any[]): void {}", &[SyntaxKind::FunctionDeclaration]);
    assert_kinds("async function f() { await g(); }", &[SyntaxKind::FunctionDeclaration]);
    assert_kinds("function* g() { yield 1; yield* h(); }", &[SyntaxKind::FunctionDeclaration]);
    assert_kinds(
        "function f(a: string): void;\nfunction f(a: any) {}",
        &[SyntaxKind::FunctionDeclaration, SyntaxKind::FunctionDeclaration],
    );
}

#[test]
fn classes() {
    assert_kinds(
        "abstract class A<T> extends B<T> implements C, D {\n\
         static x = 1;\n\
         private readonly y: string;\n\
         #z?: number;\n\
         constructor(public a: number) { super(); }\n\
         get v() { return 1; }\n\
         set v(value) {}\n\
         abstract m(): void;\n\
         [key: string]: any;\n\
         static { init(); }\n\
         accessor w = 2;\n\
         ;\n\
         }",
        &[SyntaxKind::ClassDeclaration],
    );
}

#[test]
fn class_member_kinds() {
    let arena = Bump::new();
    let file = parse(&arena, "class A { x; m() {} constructor() {} get g() { return 1; } static {} }");
    assert!(file.parse_diagnostics.is_empty());
    let Some(Statement::ClassDeclaration(class)) = file.statements.first() else {
        panic!("expected a class");
    };
    let kinds: Vec<_> = class.members.iter().map(|m| m.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::PropertyDeclaration,
            SyntaxKind::MethodDeclaration,
            SyntaxKind::Constructor,
            SyntaxKind::GetAccessor,
            SyntaxKind::ClassStaticBlockDeclaration,
        ]
    );
}

#[test]
fn decorators() {
    assert_kinds("@sealed class A { @log m() {} @field() x = 1; }", &[SyntaxKind::ClassDeclaration]);
    assert_kinds("@a.b(c) export class A {}", &[SyntaxKind::ClassDeclaration]);
}

#[test]
fn interfaces_and_type_aliases() {
    assert_kinds(
        "interface A extends B, C<D> { a: string; b?(): void; new (x: number): A; (y: string): void; readonly [k: string]: any; }",
        &[SyntaxKind::InterfaceDeclaration],
    );
    assert_kinds("type T<K extends string = 'a'> = Record<K, number>;", &[SyntaxKind::TypeAliasDeclaration]);
}

#[test]
fn enums() {
    assert_kinds("enum E { A, B = 2, C = 'c', }", &[SyntaxKind::EnumDeclaration]);
    assert_kinds("const enum E { A }", &[SyntaxKind::EnumDeclaration]);
    assert_kinds("declare enum E {}", &[SyntaxKind::EnumDeclaration]);
}

#[test]
fn modules() {
    assert_kinds("namespace A.B.C { export const x = 1; }", &[SyntaxKind::ModuleDeclaration]);
    assert_kinds("declare module 'm' { export function f(): void; }", &[SyntaxKind::ModuleDeclaration]);
    assert_kinds("declare global { interface Window {} }", &[SyntaxKind::ModuleDeclaration]);
}

#[test]
fn imports() {
    assert_kinds("import x from 'm';", &[SyntaxKind::ImportDeclaration]);
    assert_kinds("import * as ns from 'm';", &[SyntaxKind::ImportDeclaration]);
    assert_kinds("import x, { a, b as c, type d } from 'm';", &[SyntaxKind::ImportDeclaration]);
    assert_kinds("import type { T } from 'm';", &[SyntaxKind::ImportDeclaration]);
    assert_kinds("import 'side-effect';", &[SyntaxKind::ImportDeclaration]);
    assert_kinds("import data from './d.json' with { type: 'json' };", &[SyntaxKind::ImportDeclaration]);
    assert_kinds("import fs = require('fs');", &[SyntaxKind::ImportEqualsDeclaration]);
}

#[test]
fn exports() {
    assert_kinds("export { a, b as c };", &[SyntaxKind::ExportDeclaration]);
    assert_kinds("export * from 'm';", &[SyntaxKind::ExportDeclaration]);
    assert_kinds("export * as ns from 'm';", &[SyntaxKind::ExportDeclaration]);
    assert_kinds("export default function () {}", &[SyntaxKind::FunctionDeclaration]);
    assert_kinds("export default 1 + 2;", &[SyntaxKind::ExportAssignment]);
    assert_kinds("export = foo;", &[SyntaxKind::ExportAssignment]);
    assert_kinds("export as namespace Lib;", &[SyntaxKind::NamespaceExportDeclaration]);
    assert_kinds("export const x = 1;", &[SyntaxKind::VariableStatement]);
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn control_flow() {
    assert_kinds("if (a) b(); else if (c) d(); else {}", &[SyntaxKind::IfStatement]);
    assert_kinds("for (let i = 0; i < n; i++) {}", &[SyntaxKind::ForStatement]);
    assert_kinds("for (;;) break;", &[SyntaxKind::ForStatement]);
    assert_kinds("for (const x of xs) {}", &[SyntaxKind::ForOfStatement]);
    assert_kinds("for (const k in obj) {}", &[SyntaxKind::ForInStatement]);
    assert_kinds("async function f() { for await (const x of xs) {} }", &[SyntaxKind::FunctionDeclaration]);
    assert_kinds("while (x) x--;", &[SyntaxKind::WhileStatement]);
    assert_kinds("do { x++; } while (x < 3)", &[SyntaxKind::DoStatement]);
    assert_kinds("switch (x) { case 1: case 2: f(); break; default: g(); }", &[SyntaxKind::SwitchStatement]);
    assert_kinds("try { f(); } catch (e) { g(); } finally { h(); }", &[SyntaxKind::TryStatement]);
    assert_kinds("try {} catch {}", &[SyntaxKind::TryStatement]);
    assert_kinds("outer: for (;;) { continue outer; }", &[SyntaxKind::LabeledStatement]);
    assert_kinds("throw new Error('x');", &[SyntaxKind::ThrowStatement]);
    assert_kinds("debugger;", &[SyntaxKind::DebuggerStatement]);
    assert_kinds("with (o) {}", &[SyntaxKind::WithStatement]);
    assert_kinds(";", &[SyntaxKind::EmptyStatement]);
}

#[test]
fn in_is_disallowed_in_for_initializers() {
    let arena = Bump::new();
    let file = parse(&arena, "for (var x = a in b;;) {}");
    assert!(!file.parse_diagnostics.is_empty());
    assert_kinds("for (var x = (a in b);;) {}", &[SyntaxKind::ForStatement]);
}

#[test]
fn automatic_semicolons() {
    assert_kinds(
        "a = 1\nb = 2\nreturn_value()",
        &[SyntaxKind::ExpressionStatement, SyntaxKind::ExpressionStatement, SyntaxKind::ExpressionStatement],
    );
    let arena = Bump::new();
    let file = parse(&arena, "a = 1 b = 2");
    assert_eq!(codes(&file), vec![1005]);
}

#[test]
fn return_without_line_break_takes_the_expression() {
    let arena = Bump::new();
    let file = parse(&arena, "function f() { return\n1; }");
    assert!(file.parse_diagnostics.is_empty());
    let Some(Statement::FunctionDeclaration(function)) = file.statements.first() else {
        panic!("expected a function");
    };
    let Some(body) = &function.body else {
        panic!("expected a body");
    };
    assert_eq!(body.statements.len(), 2);
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn expression_forms() {
    for source in [
        "a ? b : c;",
        "`head ${a} middle ${b} tail`;",
        "tag`x${y}`;",
        "({ a, b: 1, [c]: 2, ...d, m() {}, get g() { return 1; }, async *gen() {} });",
        "[1, , ...rest];",
        "new Foo<T>(1);",
        "new Foo;",
        "new.target;",
        "import.meta.url;",
        "import('m');",
        "a?.b?.[c]?.(d);",
        "a!.b;",
        "x as const;",
        "x satisfies T;",
        "typeof a, void 0, delete a.b;",
        "/ab+c/gi.test(s);",
        "(class {});",
        "(function named() {});",
        "a ??= b ||= c &&= d;",
        "a ** -b;",
    ] {
        let arena = Bump::new();
        let file = parse(&arena, source);
        assert!(file.parse_diagnostics.is_empty(), "source: {source}\n{:?}", file.parse_diagnostics);
        assert_eq!(file.statements.len(), 1, "source: {source}");
    }
}

#[test]
fn comma_expression_is_left_associative() {
    let arena = Bump::new();
    let file = parse(&arena, "a, b, c;");
    let Expression::Binary(outer) = single_expression(&file) else {
        panic!("expected a comma expression");
    };
    assert_eq!(outer.operator_token.data.kind, SyntaxKind::CommaToken);
    assert!(matches!(outer.left, Expression::Binary(_)));
    assert!(matches!(outer.right, Expression::Identifier(_)));
}

#[test]
fn assignment_is_right_associative() {
    let arena = Bump::new();
    let file = parse(&arena, "a = b = c;");
    let Expression::Binary(outer) = single_expression(&file) else {
        panic!("expected an assignment");
    };
    assert!(matches!(outer.left, Expression::Identifier(_)));
    assert!(matches!(outer.right, Expression::Binary(_)));
}

#[test]
fn generic_call_versus_comparison() {
    let arena = Bump::new();
    let file = parse(&arena, "f<T>(x);");
    assert!(matches!(single_expression(&file), Expression::Call(call) if call.type_arguments.is_some()));

    let file = parse(&arena, "a < b > c;");
    assert!(file.parse_diagnostics.is_empty());
    assert!(matches!(single_expression(&file), Expression::Binary(_)));
}

#[test]
fn arrow_function_forms() {
    for source in [
        "x => x;",
        "async x => x;",
        "async (x) => x;",
        "<T>(x: T): T => x;",
        "({ a, b }: P = {}) => a;",
        "([a, b]) => a;",
        "(...args) => args;",
        "() => ({});",
    ] {
        let arena = Bump::new();
        let file = parse(&arena, source);
        assert!(file.parse_diagnostics.is_empty(), "source: {source}\n{:?}", file.parse_diagnostics);
        assert_eq!(single_expression(&file).kind(), SyntaxKind::ArrowFunction, "source: {source}");
    }
}

#[test]
fn parenthesized_expression_is_not_an_arrow() {
    let arena = Bump::new();
    let file = parse(&arena, "(a + b) * c;");
    assert!(file.parse_diagnostics.is_empty());
    let Expression::Binary(binary) = single_expression(&file) else {
        panic!("expected a binary expression");
    };
    assert!(matches!(binary.left, Expression::Parenthesized(_)));
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn type_forms() {
    for source in [
        "let a: string | number[] | (() => void);",
        "let b: A & B;",
        "let c: T extends (infer U)[] ? U : never;",
        "let d: { readonly [K in keyof T]?: T[K] };",
        "let e: [a: string, b?: number, ...rest: boolean[]];",
        "let f: typeof import('m');",
        "let g: `prefix-${string}`;",
        "let h: -1 | 'lit' | true | null;",
        "let i: new (...args: any[]) => object;",
        "let j: unique symbol;",
        "let k: readonly string[];",
        "let l: A.B.C<D>;",
        "function m(x: unknown): x is string { return true; }",
        "function n(x: unknown): asserts x {}",
        "let o: abstract new () => void;",
    ] {
        let arena = Bump::new();
        let file = parse(&arena, source);
        assert!(file.parse_diagnostics.is_empty(), "source: {source}\n{:?}", file.parse_diagnostics);
    }
}

#[test]
fn type_expression_entry_point() {
    let arena = Bump::new();
    let parsed = Parser::new(&arena, "test.ts", "Map<string, number[]>").parse_type_expression();
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.node.kind(), SyntaxKind::TypeReference);
}

#[test]
fn single_statement_entry_point_reports_trailing_text() {
    let arena = Bump::new();
    let parsed = Parser::new(&arena, "test.ts", "let a = 1;").parse_single_statement();
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.node.kind(), SyntaxKind::VariableStatement);

    let parsed = Parser::new(&arena, "test.ts", "a b").parse_single_expression();
    assert!(!parsed.diagnostics.is_empty());
}

// ============================================================================
// Recovery
// ============================================================================

#[test]
fn unterminated_if_yields_a_missing_paren_and_one_diagnostic() {
    let arena = Bump::new();
    let file = parse(&arena, "if (x");
    assert_eq!(file.parse_diagnostics.len(), 1);
    let Some(Statement::IfStatement(statement)) = file.statements.first() else {
        panic!("expected an if statement");
    };
    assert_eq!(statement.close_paren_token.data.kind, SyntaxKind::CloseParenToken);
    assert!(statement.close_paren_token.data.is_missing());
}

#[test]
fn stray_tokens_are_skipped() {
    let arena = Bump::new();
    let file = parse(&arena, "let a = 1;\n) ) )\nlet b = 2;");
    assert!(!file.parse_diagnostics.is_empty());
    assert_eq!(file.statements.first().map(|s| s.kind()), Some(SyntaxKind::VariableStatement));
    assert_eq!(file.statements.last().map(|s| s.kind()), Some(SyntaxKind::VariableStatement));
}

#[test]
fn errors_mark_the_next_finished_node() {
    let arena = Bump::new();
    let file = parse(&arena, "let a = ;\nlet b = 1;");
    assert!(!file.parse_diagnostics.is_empty());
    assert!(file.has_parse_errors());
    let last = file.statements.last().map(|s| s.data().has_error());
    assert_eq!(last, Some(false));
}

#[test]
fn diagnostics_at_the_same_position_are_collapsed() {
    let arena = Bump::new();
    let file = parse(&arena, "function f(");
    let mut starts: Vec<_> = file.parse_diagnostics.iter().filter_map(|d| d.start()).collect();
    let before = starts.len();
    starts.dedup();
    assert_eq!(starts.len(), before);
}

#[test]
fn javascript_files_have_no_type_arguments_in_calls() {
    let arena = Bump::new();
    let file = Parser::new(&arena, "test.js", "f<T>(x);").parse_source_file();
    assert!(matches!(single_expression(&file), Expression::Binary(_)));
}

#[test]
fn parent_links_are_a_side_table() {
    use ripple_ast::ParentMap;

    let arena = Bump::new();
    let file = parse(&arena, "function f() { return g(1); }");
    let parents = ParentMap::build(&file);
    assert!(!parents.is_empty());

    let Some(statement) = file.statements.first() else {
        panic!("expected a statement");
    };
    assert_eq!(parents.parent(statement.data().id), Some(file.data.id));

    let Statement::FunctionDeclaration(function) = statement else {
        panic!("expected a function");
    };
    let Some(Statement::ReturnStatement(ret)) = function.body.as_ref().and_then(|b| b.statements.first()) else {
        panic!("expected a return statement");
    };
    let ancestors: Vec<_> = parents.ancestors(ret.data.id).collect();
    assert!(ancestors.contains(&statement.data().id));
    assert_eq!(ancestors.last(), Some(&file.data.id));
}
