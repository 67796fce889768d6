//! ripple_ast: syntax tree definitions.
//!
//! Defines the `SyntaxKind` enum, node flag types, the arena-allocated node
//! structs grouped into closed per-category enums, and the machinery to
//! traverse them (`NodeRef`, `for_each_child`, `Visitor`, `ParentMap`).

pub mod accessors;
pub mod node;
pub mod node_ref;
pub mod parent_map;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

// Re-export key types
pub use accessors::HasNodeData;
pub use node::*;
pub use node_ref::{for_each_child, ListElement, NodeRef, Slot};
pub use parent_map::ParentMap;
pub use syntax_kind::SyntaxKind;
pub use types::*;
pub use visitor::{walk, walk_list, walk_source_file, Visit, Visitor};
