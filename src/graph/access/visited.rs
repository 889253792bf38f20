//! Dense visited set for graph traversals.
//!
//! Traversals key it by vertex position, which is dense in `0..vertex_count`.

const BIT_SHIFT: usize = 6;
const BIT_MASK: usize = 63;

/// A word-packed bitset over vertex positions.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Returns `true` iff `position` was not yet visited, and marks it visited.
    ///
    /// Positions outside the set are never reported as newly visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, position: usize) -> bool {
        if position >= self.len {
            return false;
        }
        let word = &mut self.words[position >> BIT_SHIFT];
        let mask = 1u64 << (position & BIT_MASK);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline]
    pub(crate) fn is_visited(&self, position: usize) -> bool {
        position < self.len && self.words[position >> BIT_SHIFT] & (1u64 << (position & BIT_MASK)) != 0
    }
}
