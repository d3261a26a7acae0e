//! Table export — serialize the three tables as header-free TSV.
//!
//! ```text
//! term.txt        id  name  namespace  accession  is_obsolete  is_root  is_relation
//! term2term.txt   row  relation_type  parent  child  complete
//! graph_path.txt  row  ancestor  descendant  relation_type  distance  relation_distance
//! ```
//!
//! Rows end in `\n`, booleans are written `0`/`1`, row ids count from 1.

use std::io::Write;
use crate::model::*;
use crate::Result;

/// Write the term table in the given order. Returns the row count.
pub fn write_term_table(terms: &[Term], writer: &mut dyn Write) -> Result<usize> {
    for term in terms {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            term.id,
            term.name,
            term.namespace,
            term.accession,
            flag(term.is_obsolete),
            flag(term.is_root),
            flag(term.is_relation),
        )?;
    }
    Ok(terms.len())
}

/// Write the direct relation table. `complete` is always 0.
pub fn write_term2term_table(relations: &[Relation], writer: &mut dyn Write) -> Result<usize> {
    for (row, rel) in (1u64..).zip(relations) {
        writeln!(writer, "{}\t{}\t{}\t{}\t0", row, rel.rel_type, rel.parent, rel.child)?;
    }
    Ok(relations.len())
}

/// Write the graph path table.
///
/// The relation type column is always [`IS_A`], whatever relations the
/// underlying walks followed; the closure treats every edge alike.
pub fn write_graph_path_table(triples: &[ClosureTriple], writer: &mut dyn Write) -> Result<usize> {
    for (row, t) in (1u64..).zip(triples) {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            row, t.ancestor, t.descendant, IS_A, t.distance, t.distance,
        )?;
    }
    Ok(triples.len())
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
