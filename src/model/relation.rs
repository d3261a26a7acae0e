//! One-hop relation (edge) between two terms.

use serde::{Deserialize, Serialize};
use super::TermId;

/// A directed parent → child edge labelled with a relation term.
///
/// A child may have several parents and several relation types to the
/// same parent. Relations are never deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub rel_type: TermId,
    pub parent: TermId,
    pub child: TermId,
}

impl Relation {
    pub fn new(rel_type: TermId, parent: TermId, child: TermId) -> Self {
        Self { rel_type, parent, child }
    }
}
