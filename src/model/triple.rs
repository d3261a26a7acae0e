//! ClosureTriple — one ancestor → descendant fact of the graph path table.

use serde::{Deserialize, Serialize};
use super::TermId;

/// `(ancestor, descendant, distance)`.
///
/// Field order is the sort order: the derived `Ord` is the lexicographic
/// order the graph_path table is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClosureTriple {
    pub ancestor: TermId,
    pub descendant: TermId,
    /// Edge count of one observed walk, not necessarily the shortest.
    pub distance: usize,
}

impl ClosureTriple {
    pub fn new(ancestor: TermId, descendant: TermId, distance: usize) -> Self {
        Self { ancestor, descendant, distance }
    }

    pub fn is_reflexive(&self) -> bool {
        self.ancestor == self.descendant && self.distance == 0
    }
}
