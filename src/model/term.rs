//! Term (node) in the ontology graph.

use serde::{Deserialize, Serialize};

/// Dense integer term identifier, assigned in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermId(pub u64);

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reserved id of the synthetic `is_a` relation term.
pub const IS_A: TermId = TermId(1);

/// A term row. Created once by the parser, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    /// Namespace the term belongs to (e.g. `biological_process`).
    pub namespace: String,
    /// Original textual identifier (e.g. `GO:0008150`).
    pub accession: String,
    pub is_obsolete: bool,
    pub is_root: bool,
    pub is_relation: bool,
}

impl Term {
    pub fn new(id: TermId, name: impl Into<String>, namespace: impl Into<String>, accession: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            namespace: namespace.into(),
            accession: accession.into(),
            is_obsolete: false,
            is_root: false,
            is_relation: false,
        }
    }

    /// The synthetic `is_a` term every ontology starts with.
    pub fn is_a() -> Self {
        Self {
            is_relation: true,
            ..Self::new(IS_A, "is_a", "relationship", "is_a")
        }
    }
}
