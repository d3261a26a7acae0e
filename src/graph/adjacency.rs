//! Parent → children multigraph.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::{Relation, TermId};

/// Children of one parent in insertion order. Most ontology terms have a
/// handful of children, so these stay inline.
pub type Children = SmallVec<[TermId; 4]>;

/// Forward adjacency folded from one-hop relations.
///
/// Repeated `(parent, child)` pairs (e.g. one `is_a` and one `part_of`
/// edge between the same terms) are kept as repeated entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    children: HashMap<TermId, Children>,
    edges: usize,
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold relations into the map, relation type ignored.
    pub fn from_relations(relations: &[Relation]) -> Self {
        let mut adjacency = Self::new();
        for rel in relations {
            adjacency.insert(rel.parent, rel.child);
        }
        adjacency
    }

    pub fn insert(&mut self, parent: TermId, child: TermId) {
        self.children.entry(parent).or_default().push(child);
        self.edges += 1;
    }

    /// Children of `parent`, empty for leaves and unknown ids.
    pub fn children(&self, parent: TermId) -> &[TermId] {
        match self.children.get(&parent) {
            Some(children) => children.as_slice(),
            None => &[],
        }
    }

    /// Number of distinct parents.
    pub fn parent_count(&self) -> usize {
        self.children.len()
    }

    /// Total child entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

impl<I> FromIterator<(TermId, I)> for Adjacency
where
    I: IntoIterator<Item = TermId>,
{
    fn from_iter<T: IntoIterator<Item = (TermId, I)>>(iter: T) -> Self {
        let mut adjacency = Self::new();
        for (parent, children) in iter {
            for child in children {
                adjacency.insert(parent, child);
            }
        }
        adjacency
    }
}
