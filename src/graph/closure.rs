//! Closure engine — every ancestor → descendant distance reachable from
//! the roots.
//!
//! ## Semantics
//!
//! Every walk from a root is enumerated, not just shortest ones. Each
//! walk of `L` edges contributes `(walk[i], tip, L - i)` for every
//! position `i`. The resulting set keeps one row per distinct triple, so
//! a pair joined by walks of different lengths appears once per length.
//!
//! ## Resource ceiling
//!
//! The number of walks grows with the number of distinct root-to-node
//! paths, which is exponential in depth for densely connected DAGs. All
//! triples are held in memory until the final sort. Use [`ClosureLimits`]
//! to abort early on inputs that would not fit.
//!
//! ## Cycles
//!
//! The input must be acyclic. A walk that would revisit a term already on
//! it aborts with [`Error::CycleDetected`] instead of recursing forever.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{ClosureTriple, TermId, TermPath};
use crate::{Error, Result};
use super::Adjacency;

/// Optional ceilings on the enumeration. Exceeding one is an error, never
/// a silent truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureLimits {
    /// Maximum edges on any single walk.
    pub max_depth: Option<usize>,
    /// Maximum number of walks across all roots.
    pub max_paths: Option<usize>,
}

impl ClosureLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// All walks from `roots`, in depth-first preorder.
///
/// Roots are visited in the given order and children in adjacency order.
/// The single-node walk of each root comes first in its block.
pub fn enumerate_paths(
    roots: &[TermId],
    adjacency: &Adjacency,
    limits: &ClosureLimits,
) -> Result<Vec<TermPath>> {
    let mut paths = Vec::new();
    walk(roots, adjacency, limits, |path| paths.push(path))?;
    Ok(paths)
}

/// Distinct `(ancestor, descendant, distance)` triples, sorted
/// lexicographically.
pub fn closure(
    roots: &[TermId],
    adjacency: &Adjacency,
    limits: &ClosureLimits,
) -> Result<Vec<ClosureTriple>> {
    let mut seen: HashSet<ClosureTriple> = HashSet::new();
    let walked = walk(roots, adjacency, limits, |path| seen.extend(path.triples()))?;

    let mut triples: Vec<ClosureTriple> = seen.into_iter().collect();
    triples.sort_unstable();

    info!(
        parents = adjacency.parent_count(),
        edges = adjacency.edge_count(),
        paths = walked,
        triples = triples.len(),
        "closure computed"
    );
    Ok(triples)
}

/// Drive the depth-first walk, handing each completed path to `visit`.
/// Returns the number of paths visited.
///
/// Iterative: the stack holds owned paths, so nothing is shared between
/// sibling branches and depth is bounded by heap, not by the call stack.
fn walk<F>(
    roots: &[TermId],
    adjacency: &Adjacency,
    limits: &ClosureLimits,
    mut visit: F,
) -> Result<usize>
where
    F: FnMut(TermPath),
{
    if roots.is_empty() {
        return Err(Error::EmptyRoots);
    }

    let mut walked = 0usize;
    for &root in roots {
        let before = walked;
        let mut stack = vec![TermPath::single(root)];

        while let Some(path) = stack.pop() {
            walked += 1;
            if limits.max_paths.is_some_and(|max| walked > max) {
                return Err(Error::LimitExceeded(format!(
                    "more than {} paths enumerated",
                    walked - 1,
                )));
            }

            // Reversed so the first child is popped first (preorder).
            for &child in adjacency.children(path.end()).iter().rev() {
                if path.contains(child) {
                    let mut cycle = path.nodes().to_vec();
                    cycle.push(child);
                    return Err(Error::CycleDetected { path: cycle });
                }
                if limits.max_depth.is_some_and(|max| path.len() >= max) {
                    return Err(Error::LimitExceeded(format!(
                        "path from root {root} deeper than {} edges",
                        path.len(),
                    )));
                }
                stack.push(path.extended(child));
            }

            visit(path);
        }

        debug!(root = %root, paths = walked - before, "root enumerated");
    }

    Ok(walked)
}
