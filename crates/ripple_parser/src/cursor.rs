//! The syntax cursor: finds nodes of a previous tree that can be spliced
//! into the tree being built.
//!
//! The old tree is indexed once by the absolute start of every reusable list
//! element. A position in the new text maps back to the old text by undoing
//! the edit's delta; positions inside the edited region have no counterpart.
//! The affected region starts one node earlier than the edit, since the
//! token before an edit decides how the node ending there was terminated.
//! A reused node is returned as-is with a shift that moves it to its new
//! position, so the old tree is never touched.

use rustc_hash::FxHashMap;
use tracing::trace;

use ripple_ast::node::*;
use ripple_ast::types::NodeFlags;
use ripple_ast::{walk_source_file, HasNodeData, ListElement, NodeRef, Visit, Visitor};
use ripple_core::text::{TextChangeRange, TextPos};

use crate::list::ParsingContext;
use crate::parser::Parser;

#[derive(Debug, Clone, Copy)]
struct CursorEntry<'a> {
    node: NodeRef<'a>,
    /// Absolute range in the old text.
    pos: TextPos,
    end: TextPos,
    /// Whether the node or anything below it carries a parse error.
    has_error: bool,
}

/// Index of the reusable nodes of one old tree.
pub(crate) struct SyntaxCursor<'a> {
    /// Old absolute start -> entries starting there, outermost first.
    nodes: FxHashMap<TextPos, Vec<CursorEntry<'a>>>,
    change: TextChangeRange,
    /// Start of the last node beginning before the edit. Anything ending at
    /// or after it may have scanned its lookahead from the edited text.
    affected_start: TextPos,
}

impl<'a> SyntaxCursor<'a> {
    pub(crate) fn new(old: &SourceFile<'a>, change: TextChangeRange) -> Self {
        let mut builder = IndexBuilder {
            nodes: FxHashMap::default(),
            stack: Vec::new(),
            edit_start: change.span.start,
            affected_start: 0,
        };
        walk_source_file(&mut builder, old);
        trace!(
            edit_start = change.span.start,
            affected_start = builder.affected_start,
            "indexed old tree"
        );
        Self {
            nodes: builder.nodes,
            change,
            affected_start: builder.affected_start,
        }
    }

    /// Map a new-text position to the old text. `None` inside the edit.
    fn old_position(&self, new_pos: TextPos) -> Option<TextPos> {
        let start = self.change.span.start;
        let new_end = start + self.change.new_length;
        if new_pos < start {
            Some(new_pos)
        } else if new_pos >= new_end {
            Some((new_pos as i64 - self.change.delta() as i64) as TextPos)
        } else {
            None
        }
    }

    /// Touching counts as intersecting: a token ending right at the
    /// affected start may scan differently now.
    fn intersects_change(&self, entry: &CursorEntry<'_>) -> bool {
        entry.end >= self.affected_start && entry.pos <= self.change.span.end()
    }
}

/// Whether a node kind can ever be taken from the cursor.
fn is_indexed(node: NodeRef<'_>) -> bool {
    matches!(
        node,
        NodeRef::Statement(_)
            | NodeRef::CaseOrDefaultClause(_)
            | NodeRef::ClassElement(_)
            | NodeRef::TypeElement(_)
            | NodeRef::EnumMember(_)
            | NodeRef::VariableDeclaration(_)
            | NodeRef::Parameter(_)
    )
}

struct IndexBuilder<'a> {
    nodes: FxHashMap<TextPos, Vec<CursorEntry<'a>>>,
    /// Per open node: error seen in its subtree so far, and its entry slot.
    stack: Vec<(bool, Option<(TextPos, usize)>)>,
    edit_start: TextPos,
    /// Greatest node start strictly before `edit_start`.
    affected_start: TextPos,
}

impl<'a> Visitor<'a> for IndexBuilder<'a> {
    fn enter(&mut self, visit: Visit<'a>) -> bool {
        let pos = visit.range().pos;
        if pos < self.edit_start && pos > self.affected_start {
            self.affected_start = pos;
        }
        let slot = if visit.in_list && is_indexed(visit.node) {
            let range = visit.range();
            let entries = self.nodes.entry(range.pos).or_default();
            entries.push(CursorEntry {
                node: visit.node,
                pos: range.pos,
                end: range.end,
                has_error: false,
            });
            Some((range.pos, entries.len() - 1))
        } else {
            None
        };
        self.stack.push((visit.node.data().has_error(), slot));
        true
    }

    fn leave(&mut self, _visit: Visit<'a>) {
        let Some((has_error, slot)) = self.stack.pop() else {
            return;
        };
        if let Some((pos, index)) = slot {
            if let Some(entry) = self.nodes.get_mut(&pos).and_then(|e| e.get_mut(index)) {
                entry.has_error = has_error;
            }
        }
        if let Some(parent) = self.stack.last_mut() {
            parent.0 |= has_error;
        }
    }
}

impl<'a> Parser<'a> {
    /// Take the element at the current position from the old tree, if one
    /// can be reused in `context`, and move the scanner past it.
    pub(crate) fn reuse_node<T: ListElement<'a>>(&mut self, context: ParsingContext) -> Option<Child<'a, T>> {
        if !context.is_reusable() {
            return None;
        }
        // A pending error must land on a freshly parsed node.
        if self.parse_error_before_next_finished_node {
            return None;
        }
        let cursor = self.cursor.as_ref()?;
        let new_pos = self.node_pos();
        let old_pos = cursor.old_position(new_pos)?;
        let candidates = cursor.nodes.get(&old_pos)?;
        let context_flags = self.context_flags & NodeFlags::CONTEXT_FLAGS;

        let mut accepted = None;
        for entry in candidates {
            let Some(node) = T::from_node_ref(entry.node) else {
                continue;
            };
            let data = entry.node.data();
            let rejection = if data.is_missing() {
                Some("missing node")
            } else if cursor.intersects_change(entry) {
                Some("intersects the edit")
            } else if entry.has_error {
                Some("subtree has a parse error")
            } else if data.flags & NodeFlags::CONTEXT_FLAGS != context_flags {
                Some("context flags differ")
            } else if !context.can_reuse(entry.node) {
                Some("not reusable in this list")
            } else {
                None
            };
            match rejection {
                Some(reason) => {
                    trace!(kind = ?data.kind, old_pos = entry.pos, ?context, reason, "node not reused");
                }
                None => {
                    accepted = Some((node, entry.end - entry.pos));
                    break;
                }
            }
        }

        let (node, len) = accepted?;
        let shift = (new_pos as i64 - node.pos() as i64) as i32;
        self.scanner.reset_to((new_pos + len) as usize);
        self.next_token();
        self.reused_node_count += 1;
        trace!(kind = ?node.kind(), new_pos, shift, "reused node");
        Some(Child::shifted(node, shift))
    }
}
