//! Properties that hold for every parse, checked over a fixed corpus and
//! its prefixes and edits.

use bumpalo::Bump;
use ripple_ast::node::*;
use ripple_ast::syntax_kind::SyntaxKind;
use ripple_ast::{walk_source_file, HasNodeData, Visit, Visitor};
use ripple_core::intern::StringInterner;
use ripple_core::text::{TextChangeRange, TextPos, TextRange, TextSpan};
use ripple_parser::{reparse, Parser};

const CORPUS: &[(&str, &str)] = &[
    (
        "service.ts",
        "import { Store, type Key } from './store';\n\
         export interface Options<T = unknown> { readonly name: string; retries?: number; map(value: T): T; }\n\
         @injectable()\n\
         export class Service<T> extends Base implements Disposable {\n\
           private cache = new Map<Key, T>();\n\
           constructor(private readonly store: Store, options?: Options<T>) { super(options); }\n\
           async load(key: Key): Promise<T | undefined> {\n\
             const value = this.cache.get(key) ?? (await this.store.read<T>(key));\n\
             if (value === undefined) { throw new Error(`missing ${key}`); }\n\
             return value as T;\n\
           }\n\
           get size(): number { return this.cache.size; }\n\
         }\n",
    ),
    (
        "control.ts",
        "let total = 0;\n\
         for (let i = 0; i < items.length; i++) { total += items[i] * 2 ** i; }\n\
         for (const [k, v] of Object.entries(map)) { if (!v) continue; else total -= k.length; }\n\
         label: while (total > 0) { total--; if (total % 7 === 0) break label; }\n\
         switch (kind) { case 1: case 2: total = -total; break; default: total = ~total; }\n\
         try { risky(); } catch ({ message }) { log(message); } finally { done(); }\n\
         do { total >>>= 1; } while (total);\n\
         const pick = <K extends keyof T, T>(obj: T, ...keys: K[]): Pick<T, K> => keys.reduce((acc, k) => ({ ...acc, [k]: obj[k] }), {} as Pick<T, K>);\n",
    ),
    (
        "types.ts",
        "type Mapped<T> = { readonly [P in keyof T]?: T[P] extends Function ? never : T[P] };\n\
         type Tuple = [first: string, second?: number, ...rest: boolean[]];\n\
         type Fn = new (...args: any[]) => object;\n\
         type Tpl = `prefix-${string}`;\n\
         type Guard = (x: unknown) => x is string;\n\
         declare function assert(value: unknown): asserts value;\n\
         enum Color { Red = 1, Green = Red << 1, Blue = 'blue' }\n\
         namespace Outer.Inner { export type Alias = typeof import('./mod'); }\n",
    ),
    (
        "view.tsx",
        "export function List({ items }: Props) {\n\
           return (\n\
             <ul className=\"list\">\n\
               {items.map((item) => <Item key={item.id} {...item} />)}\n\
               <>{items.length > 0 ? <span>more</span> : null}</>\n\
             </ul>\n\
           );\n\
         }\n",
    ),
    (
        "legacy.js",
        "var self = this;\n\
         function Counter() { this.count = 0; }\n\
         Counter.prototype.inc = function () { return ++this.count; };\n\
         var re = /ab+c/gi, obj = { get a() { return 1; }, set a(v) {}, async *gen() { yield* other(); } };\n\
         module.exports = { Counter: Counter, re: re };\n",
    ),
];

/// Checks that every node lies within its parent.
#[derive(Default)]
struct Containment {
    stack: Vec<TextRange>,
    violations: Vec<String>,
}

impl<'a> Visitor<'a> for Containment {
    fn enter(&mut self, visit: Visit<'a>) -> bool {
        let range = visit.range();
        if range.pos > range.end {
            self.violations.push(format!("{:?} has an inverted range {range:?}", visit.node.data().kind));
        }
        if let Some(parent) = self.stack.last() {
            if range.pos < parent.pos || range.end > parent.end {
                self.violations.push(format!(
                    "{:?} at {range:?} escapes its parent at {parent:?}",
                    visit.node.data().kind
                ));
            }
        }
        self.stack.push(range);
        true
    }

    fn leave(&mut self, _visit: Visit<'a>) {
        self.stack.pop();
    }
}

fn assert_contained(file: &SourceFile<'_>) {
    let mut check = Containment::default();
    check.stack.push(file.data.range);
    walk_source_file(&mut check, file);
    assert!(
        check.violations.is_empty(),
        "{}: {}\n{}",
        file.file_name,
        check.violations.join("\n"),
        file.text
    );
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

fn char_boundaries(text: &str) -> impl Iterator<Item = usize> + '_ {
    (0..=text.len()).filter(|&i| text.is_char_boundary(i))
}

// ============================================================================
// Span containment and termination
// ============================================================================

#[test]
fn corpus_parses_cleanly_with_contained_spans() {
    for (name, source) in CORPUS {
        let arena = Bump::new();
        let file = Parser::new(&arena, name, source).parse_source_file();
        assert!(file.parse_diagnostics.is_empty(), "{name}: {:?}", file.parse_diagnostics);
        assert_contained(&file);
    }
}

#[test]
fn every_prefix_terminates_with_contained_spans() {
    for (name, source) in CORPUS {
        for end in char_boundaries(source) {
            let arena = Bump::new();
            let file = Parser::new(&arena, name, &source[..end]).parse_source_file();
            assert_contained(&file);
            assert_eq!(file.data.range.end as usize, end);
        }
    }
}

#[test]
fn every_suffix_terminates_with_contained_spans() {
    for (name, source) in CORPUS {
        for start in char_boundaries(source).step_by(3) {
            let arena = Bump::new();
            let file = Parser::new(&arena, name, &source[start..]).parse_source_file();
            assert_contained(&file);
        }
    }
}

#[test]
fn garbage_terminates() {
    let inputs = [
        ")))", "]]]", "}}}", "{{{{", "((((", "[[[[", "<<<<", ">>>>", "@@@", "...", "=>=>=>",
        "class class class", "function (((", "`${`${", "/*", "'unterminated", "\"\\", "<div><", "</>",
        "enum {", "a ? : b", "import from from", "export export", "let let = let", "x.", "new", "new.",
        "async async async", "for (;;", "switch (x) { case", "type T = ", "interface I extends {",
        "abstract abstract", "declare declare", "@dec", "#priv", "a?.b?.[c]?.(", "0x", "1e", "\\u",
        "yield yield", "await await", "get get get", "/ab[", "<T,>(", "(a, b) =>", "(...", "{ a, ...b, }",
    ];
    for input in inputs {
        for name in ["garbage.ts", "garbage.tsx", "garbage.js"] {
            let arena = Bump::new();
            let file = Parser::new(&arena, name, input).parse_source_file();
            assert_contained(&file);
        }
    }
}

// ============================================================================
// Speculation leaves no trace
// ============================================================================

#[test]
fn abandoned_speculation_adds_no_diagnostics() {
    let sources = [
        "(a, b);",
        "(a = 1, b);",
        "(x) + (y);",
        "(a ? b : c);",
        "f(a < b, c > d);",
        "x = (y) => z;",
        "const t = a < b;",
        "(async);",
        "async(a, b);",
        "<T>(x);",
        "let v = (a as any).b;",
        "a < b > c;",
    ];
    for source in sources {
        let arena = Bump::new();
        let file = Parser::new(&arena, "test.ts", source).parse_source_file();
        assert!(file.parse_diagnostics.is_empty(), "{source}: {:?}", file.parse_diagnostics);
        assert_eq!(file.statements.len(), 1, "{source}");
    }
}

// ============================================================================
// Incremental reuse
// ============================================================================

fn reparse_matches_fresh_parse(name: &str, old_text: &str, start: usize, length: usize, replacement: &str) {
    let arena = Bump::new();
    let old = Parser::new(&arena, name, old_text).parse_source_file();
    let new_text = format!("{}{}{}", &old_text[..start], replacement, &old_text[start + length..]);
    let change = TextChangeRange::new(TextSpan::new(start as u32, length as u32), replacement.len() as u32);
    let reparsed = match reparse(&arena, &old, &new_text, change) {
        Ok(file) => file,
        Err(err) => panic!("{name}: reparse failed: {err}"),
    };

    let fresh_arena = Bump::new();
    let fresh = Parser::new(&fresh_arena, name, &new_text).parse_source_file();
    assert_eq!(shape(&reparsed), shape(&fresh), "{name} after edit at {start}:\n{new_text}");
    let codes = |f: &SourceFile<'_>| f.parse_diagnostics.iter().map(|d| (d.code(), d.start())).collect::<Vec<_>>();
    assert_eq!(codes(&reparsed), codes(&fresh), "{name} after edit at {start}");
    assert_contained(&reparsed);
}

#[test]
fn deleting_any_statement_matches_a_fresh_parse() {
    for (name, source) in CORPUS {
        let arena = Bump::new();
        let file = Parser::new(&arena, name, source).parse_source_file();
        for child in file.statements.children() {
            let range = child.range();
            reparse_matches_fresh_parse(name, source, range.pos as usize, (range.end - range.pos) as usize, "");
        }
    }
}

#[test]
fn inserting_after_any_statement_matches_a_fresh_parse() {
    for (name, source) in CORPUS {
        let arena = Bump::new();
        let file = Parser::new(&arena, name, source).parse_source_file();
        for child in file.statements.children() {
            reparse_matches_fresh_parse(name, source, child.end() as usize, 0, "\nlet inserted = 0;");
        }
    }
}

#[test]
fn renaming_identifiers_matches_a_fresh_parse() {
    for (name, source) in CORPUS {
        for word in ["value", "total", "item", "key"] {
            for (start, _) in source.match_indices(word) {
                reparse_matches_fresh_parse(name, source, start, word.len(), "renamed");
            }
        }
    }
}

/// Statements ended by line breaks, with trivia and comments between them.
const LINE_ENDED: &str = "let a = 1\n\
                          a \n\
                          b = a /* mid */ + 2  // tail\n\
                          \n\
                          c++\n\
                          if (a) b\n\
                          else c\n\
                          function f() { return\n  a }\n";

#[test]
fn edits_at_every_boundary_match_a_fresh_parse() {
    for at in char_boundaries(LINE_ENDED) {
        for insertion in ["+", " ", "\n", ";", "x"] {
            reparse_matches_fresh_parse("lines.ts", LINE_ENDED, at, 0, insertion);
        }
        if at < LINE_ENDED.len() {
            reparse_matches_fresh_parse("lines.ts", LINE_ENDED, at, 1, "");
        }
    }
}

#[test]
fn untouched_statements_are_the_same_nodes() {
    let source = "let a = 1;\nfunction f() { return a; }\nclass C {}\nconst z = f();\n";
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", source).parse_source_file();
    let Some(edit_start) = source.find("class C").map(|i| i as u32 + 6) else {
        panic!("class not found");
    };
    let new_text = source.replacen("class C", "class D", 1);
    let change = TextChangeRange::new(TextSpan::new(edit_start, 1), 1);
    let new = match reparse(&arena, &old, &new_text, change) {
        Ok(file) => file,
        Err(err) => panic!("reparse failed: {err}"),
    };

    let same: Vec<_> = old
        .statements
        .iter()
        .zip(new.statements.iter())
        .map(|(a, b)| std::ptr::eq(a, b))
        .collect();
    assert_eq!(same, vec![true, true, false, true]);
}

#[test]
fn initialized_bindings_are_never_reused() {
    let source = "function f(a = 1, b, c = 2) {}\nlet x = 1, y, z = 2;\n";
    let arena = Bump::new();
    let old = Parser::new(&arena, "test.ts", source).parse_source_file();
    // Touch the end of each statement in turn; the other one stays whole.
    for (edited, edit_at) in [(0, source.find("{}").map(|i| i + 1)), (1, source.rfind('2'))] {
        let Some(edit_at) = edit_at else {
            panic!("edit point not found");
        };
        let new_text = format!("{} {}", &source[..edit_at], &source[edit_at..]);
        let change = TextChangeRange::new(TextSpan::new(edit_at as u32, 0), 1);
        let new = match reparse(&arena, &old, &new_text, change) {
            Ok(file) => file,
            Err(err) => panic!("reparse failed: {err}"),
        };

        let untouched = 1 - edited;
        let same = match (old.statements.get(untouched), new.statements.get(untouched)) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            _ => false,
        };
        assert!(same, "statement {untouched} should be reused after an edit in {edited}");
        assert!(old.statements.get(edited).zip(new.statements.get(edited)).is_some_and(|(a, b)| !std::ptr::eq(a, b)));

        let (old_bindings, new_bindings) = (bindings(&old, edited), bindings(&new, edited));
        assert_eq!(old_bindings.len(), 3);
        assert_eq!(old_bindings.len(), new_bindings.len());
        for ((old_ptr, has_initializer), (new_ptr, _)) in old_bindings.iter().zip(&new_bindings) {
            if *has_initializer {
                assert_ne!(old_ptr, new_ptr, "statement {edited}");
            }
        }
    }
}

/// Parameters of a function statement or declarators of a variable
/// statement, with whether each has an initializer.
fn bindings(file: &SourceFile<'_>, index: usize) -> Vec<(*const (), bool)> {
    match file.statements.get(index) {
        Some(Statement::FunctionDeclaration(function)) => function
            .parameters
            .iter()
            .map(|p| (p as *const ParameterDeclaration<'_> as *const (), p.initializer.is_some()))
            .collect(),
        Some(Statement::VariableStatement(statement)) => statement
            .declaration_list
            .declarations
            .iter()
            .map(|d| (d as *const VariableDeclaration<'_> as *const (), d.initializer.is_some()))
            .collect(),
        other => panic!("expected a function or variable statement, got {other:?}"),
    }
}

// ============================================================================
// Expression shapes
// ============================================================================

/// Fully parenthesized rendering of binary and parenthesized expressions.
fn render(interner: &StringInterner, expression: &Expression<'_>) -> String {
    match expression {
        Expression::Identifier(id) => interner.resolve(id.escaped_text).to_string(),
        Expression::Binary(binary) => {
            let operator = binary.operator_token.data.kind.punctuation_text().unwrap_or("?");
            format!("({} {} {})", render(interner, binary.left), operator, render(interner, binary.right))
        }
        Expression::Parenthesized(parenthesized) => format!("[{}]", render(interner, parenthesized.expression)),
        other => format!("{:?}", other.kind()),
    }
}

#[test]
fn binary_precedence_and_associativity() {
    let cases = [
        ("a - b * c", "(a - (b * c))"),
        ("a * b - c", "((a * b) - c)"),
        ("a - b - c", "((a - b) - c)"),
        ("a ** b ** c", "(a ** (b ** c))"),
        ("a - b ** c", "(a - (b ** c))"),
        ("a || b && c", "(a || (b && c))"),
        ("a ?? b", "(a ?? b)"),
        ("a = b = c", "(a = (b = c))"),
        ("a, b, c", "((a , b) , c)"),
        ("a | b ^ c & d", "(a | (b ^ (c & d)))"),
        ("a == b < c", "(a == (b < c))"),
        ("a << b + c", "(a << (b + c))"),
        ("(a - b) * c", "([(a - b)] * c)"),
    ];
    for (source, expected) in cases {
        let arena = Bump::new();
        let parsed = Parser::new(&arena, "test.ts", source).parse_single_expression();
        assert!(parsed.diagnostics.is_empty(), "{source}: {:?}", parsed.diagnostics);
        assert_eq!(render(&parsed.interner, parsed.node), expected, "{source}");
    }
}

#[test]
fn arrow_function_disambiguation() {
    let arena = Bump::new();
    let parsed = Parser::new(&arena, "test.ts", "(a, b) => a + b").parse_single_expression();
    assert!(parsed.diagnostics.is_empty());
    let Expression::ArrowFunction(arrow) = parsed.node else {
        panic!("expected an arrow function, got {:?}", parsed.node.kind());
    };
    assert_eq!(arrow.parameters.len(), 2);
    assert!(matches!(arrow.body, ArrowFunctionBody::Expression(_)));

    let arena = Bump::new();
    let parsed = Parser::new(&arena, "test.ts", "(a, b)").parse_single_expression();
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(render(&parsed.interner, parsed.node), "[(a , b)]");

    let arena = Bump::new();
    let parsed = Parser::new(&arena, "test.ts", "() => {}").parse_single_expression();
    assert!(parsed.diagnostics.is_empty());
    let Expression::ArrowFunction(arrow) = parsed.node else {
        panic!("expected an arrow function, got {:?}", parsed.node.kind());
    };
    assert!(arrow.parameters.is_empty());
    assert!(matches!(arrow.body, ArrowFunctionBody::Block(_)));

    for source in ["x => x", "async x => x", "async (x) => x", "(x: number): string => ''", "<T>(x: T) => x"] {
        let arena = Bump::new();
        let parsed = Parser::new(&arena, "test.ts", source).parse_single_expression();
        assert!(parsed.diagnostics.is_empty(), "{source}: {:?}", parsed.diagnostics);
        assert_eq!(parsed.node.kind(), SyntaxKind::ArrowFunction, "{source}");
    }
}

// ============================================================================
// Recovery
// ============================================================================

#[test]
fn mismatched_tag_keeps_both_tags() {
    let arena = Bump::new();
    let parsed = Parser::new(&arena, "test.tsx", "<div>text</div>").parse_single_expression();
    assert!(parsed.diagnostics.is_empty());

    let arena = Bump::new();
    let parsed = Parser::new(&arena, "test.tsx", "<div>text</span>").parse_single_expression();
    assert_eq!(parsed.diagnostics.len(), 1);
    let Expression::JsxElement(element) = parsed.node else {
        panic!("expected an element, got {:?}", parsed.node.kind());
    };
    assert!(!element.opening_element.data.is_missing());
    assert!(!element.closing_element.data.is_missing());
}

#[test]
fn unterminated_if_condition() {
    let arena = Bump::new();
    let file = Parser::new(&arena, "test.ts", "if (x").parse_source_file();
    assert_eq!(file.parse_diagnostics.len(), 1, "{:?}", file.parse_diagnostics);
    let Some(Statement::IfStatement(statement)) = file.statements.first() else {
        panic!("expected an if statement");
    };
    assert!(statement.close_paren_token.data.is_missing());
    assert_eq!(statement.close_paren_token.data.range.pos, 5);
    assert_contained(&file);
}
