//! ripple_core: Core utilities for the ripple parser.
//!
//! Provides text positions and edit ranges, string interning, and arena
//! helpers shared by every other crate in the workspace.

pub mod arena;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::ArenaExt;
pub use intern::{InternedString, StringInterner};
pub use text::{LineMap, TextChangeRange, TextPos, TextRange, TextSpan};
