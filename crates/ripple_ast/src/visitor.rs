//! Tree traversal.
//!
//! `walk` visits nodes depth-first in source order. Positions handed to the
//! visitor are absolute: the shifts of every enclosing list element are
//! accumulated on the way down, so nodes reused from an older tree report
//! where they sit in the current text.

use crate::node::*;
use crate::node_ref::{for_each_child, ListElement, NodeRef, Slot};
use ripple_core::text::TextRange;

/// A node together with its absolute position.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: NodeRef<'a>,
    /// Accumulated shift applied to `node`'s stored positions.
    pub shift: i32,
    /// `true` when the node is a list element.
    pub in_list: bool,
}

impl<'a> Visit<'a> {
    pub fn range(&self) -> TextRange {
        self.node.data().range.shifted(self.shift)
    }
}

pub trait Visitor<'a> {
    /// Called before a node's children. Return `false` to skip them.
    fn enter(&mut self, visit: Visit<'a>) -> bool {
        let _ = visit;
        true
    }

    /// Called after a node's children (or right after `enter` returned
    /// `false`).
    fn leave(&mut self, visit: Visit<'a>) {
        let _ = visit;
    }
}

/// Walk `node` and its descendants. `shift` is the accumulated shift of
/// `node` itself.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: NodeRef<'a>, shift: i32) {
    walk_visit(
        visitor,
        Visit {
            node,
            shift,
            in_list: false,
        },
    );
}

/// Walk every element of `list`.
pub fn walk_list<'a, T, V>(visitor: &mut V, list: &NodeList<'a, T>, shift: i32)
where
    T: ListElement<'a>,
    V: Visitor<'a> + ?Sized,
{
    for child in list.children() {
        walk_visit(
            visitor,
            Visit {
                node: child.node.as_node_ref(),
                shift: shift + child.shift,
                in_list: true,
            },
        );
    }
}

/// Walk all statements of a source file.
pub fn walk_source_file<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, file: &SourceFile<'a>) {
    walk_list(visitor, &file.statements, 0);
}

fn walk_visit<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, visit: Visit<'a>) {
    if visitor.enter(visit) {
        let shift = visit.shift;
        for_each_child(visit.node, &mut |child, slot| {
            walk_visit(
                visitor,
                Visit {
                    node: child,
                    shift: shift + slot.shift(),
                    in_list: matches!(slot, Slot::Element { .. }),
                },
            );
        });
    }
    visitor.leave(visit);
}

/// Collects every node in pre-order; handy for assertions.
#[derive(Default)]
pub struct Collector<'a> {
    pub visits: Vec<Visit<'a>>,
}

impl<'a> Visitor<'a> for Collector<'a> {
    fn enter(&mut self, visit: Visit<'a>) -> bool {
        self.visits.push(visit);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessors::HasNodeData;
    use crate::syntax_kind::SyntaxKind;
    use crate::types::NodeFlags;
    use bumpalo::Bump;
    use ripple_core::intern::StringInterner;

    fn ident(interner: &StringInterner, name: &str, pos: u32) -> Identifier {
        Identifier {
            data: NodeData::new(SyntaxKind::Identifier, pos, pos + name.len() as u32),
            escaped_text: interner.intern(name),
            original_keyword_kind: None,
        }
    }

    #[test]
    fn shifts_accumulate_into_absolute_ranges() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        // `a;` at 0 and a reused `b;` stored at 0 but shifted to 10.
        let a: &Statement = arena.alloc(Statement::ExpressionStatement(ExpressionStatement {
            data: NodeData::new(SyntaxKind::ExpressionStatement, 0, 2),
            expression: arena.alloc(Expression::Identifier(ident(&interner, "a", 0))),
        }));
        let b: &Statement = arena.alloc(Statement::ExpressionStatement(ExpressionStatement {
            data: NodeData::new(SyntaxKind::ExpressionStatement, 0, 2),
            expression: arena.alloc(Expression::Identifier(ident(&interner, "b", 0))),
        }));
        let elements = arena.alloc_slice_copy(&[Child::new(a), Child::shifted(b, 10)]);
        let list = NodeList::new(TextRange::new(0, 12), elements);

        let mut collector = Collector::default();
        walk_list(&mut collector, &list, 0);

        let ranges: Vec<_> = collector.visits.iter().map(|v| v.range()).collect();
        assert_eq!(
            ranges,
            vec![
                TextRange::new(0, 2),
                TextRange::new(0, 1),
                TextRange::new(10, 12),
                TextRange::new(10, 11),
            ]
        );
        assert!(collector.visits[0].in_list);
        assert!(!collector.visits[1].in_list);
        assert_eq!(a.data().flags, NodeFlags::NONE);
    }

    #[test]
    fn enter_false_skips_children() {
        struct Shallow(usize);
        impl<'a> Visitor<'a> for Shallow {
            fn enter(&mut self, _visit: Visit<'a>) -> bool {
                self.0 += 1;
                false
            }
        }

        let arena = Bump::new();
        let interner = StringInterner::new();
        let stmt: &Statement = arena.alloc(Statement::ExpressionStatement(ExpressionStatement {
            data: NodeData::new(SyntaxKind::ExpressionStatement, 0, 2),
            expression: arena.alloc(Expression::Identifier(ident(&interner, "x", 0))),
        }));
        let mut v = Shallow(0);
        walk(&mut v, NodeRef::Statement(stmt), 0);
        assert_eq!(v.0, 1);
    }
}
