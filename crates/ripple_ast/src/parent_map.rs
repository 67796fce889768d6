//! Parent links as a side table.
//!
//! Nodes never point at their parents. After a tree is complete, a single
//! walk records `child id -> parent id`; statements directly under the
//! source file map to the file's own id.

use rustc_hash::FxHashMap;

use crate::accessors::HasNodeData;
use crate::node::SourceFile;
use crate::types::NodeId;
use crate::visitor::{walk_source_file, Visit, Visitor};

#[derive(Debug, Default)]
pub struct ParentMap {
    parents: FxHashMap<NodeId, NodeId>,
}

impl ParentMap {
    pub fn build(file: &SourceFile<'_>) -> ParentMap {
        let mut builder = Builder {
            map: ParentMap::default(),
            stack: vec![file.data.id],
        };
        walk_source_file(&mut builder, file);
        builder.map
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |p| self.parent(*p))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

struct Builder {
    map: ParentMap,
    stack: Vec<NodeId>,
}

impl<'a> Visitor<'a> for Builder {
    fn enter(&mut self, visit: Visit<'a>) -> bool {
        let id = visit.node.id();
        if let Some(&parent) = self.stack.last() {
            if id != NodeId::INVALID {
                self.map.parents.insert(id, parent);
            }
        }
        self.stack.push(id);
        true
    }

    fn leave(&mut self, _visit: Visit<'a>) {
        self.stack.pop();
    }
}
