//! Arena allocation helpers.
//!
//! All syntax nodes are allocated from a bump arena. A tree produced by an
//! incremental reparse lives in the same arena as the tree it was derived
//! from, so reused subtrees are shared rather than copied.

use bumpalo::Bump;

/// Convenience allocation methods on top of [`Bump`].
pub trait ArenaExt {
    /// Move the contents of a vector into the arena and return the slice.
    fn alloc_vec<T>(&self, items: Vec<T>) -> &[T];
}

impl ArenaExt for Bump {
    #[inline]
    fn alloc_vec<T>(&self, items: Vec<T>) -> &[T] {
        if items.is_empty() {
            return &[];
        }
        self.alloc_slice_fill_iter(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_vec_preserves_order() {
        let arena = Bump::new();
        let slice = arena.alloc_vec(vec![String::from("a"), String::from("b")]);
        assert_eq!(slice, &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_alloc_empty_vec() {
        let arena = Bump::new();
        let slice: &[u32] = arena.alloc_vec(Vec::new());
        assert!(slice.is_empty());
    }
}
