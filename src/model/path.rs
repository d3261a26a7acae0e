//! TermPath — one directed walk from a root.

use super::{ClosureTriple, TermId};

/// A walk root -> ... -> tip. Always holds at least the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermPath {
    nodes: Vec<TermId>,
}

impl TermPath {
    pub fn single(root: TermId) -> Self {
        Self { nodes: vec![root] }
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// No edges: the path holds only its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn start(&self) -> TermId {
        self.nodes[0]
    }

    pub fn end(&self) -> TermId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[TermId] {
        &self.nodes
    }

    pub fn contains(&self, id: TermId) -> bool {
        self.nodes.contains(&id)
    }

    /// Copy of this path extended by `next`. The receiver is untouched so
    /// sibling branches never see each other's extensions.
    pub fn extended(&self, next: TermId) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(next);
        Self { nodes }
    }

    /// Every (ancestor, tip, distance) fact this path witnesses,
    /// from the root down to the tip's self-triple.
    pub fn triples(&self) -> impl Iterator<Item = ClosureTriple> + '_ {
        let tip = self.end();
        let last = self.len();
        self.nodes
            .iter()
            .enumerate()
            .map(move |(i, &ancestor)| ClosureTriple::new(ancestor, tip, last - i))
    }
}
