//! # Ontology Graph Model
//!
//! Plain DTOs shared by the parser, the closure engine and the table
//! emitter. This module is pure data: no I/O, no state.

pub mod term;
pub mod relation;
pub mod path;
pub mod triple;

pub use term::{Term, TermId, IS_A};
pub use relation::Relation;
pub use path::TermPath;
pub use triple::ClosureTriple;
