//! # Graph Closure
//!
//! The adjacency builder and the closure engine. Everything here is a pure
//! function of in-memory inputs: no I/O and no state between calls.
//!
//! ```text
//! [Relation] ──► Adjacency ──► walk every root ──► TermPath* ──► {ClosureTriple} ──► sorted Vec
//! ```

pub mod adjacency;
pub mod closure;

pub use adjacency::Adjacency;
pub use closure::{closure, enumerate_paths, ClosureLimits};
