//! # obo-graph-path — OBO ontology to relational tables
//!
//! Converts an ontology in OBO stanza format into three tables ready for
//! bulk loading:
//!
//! - `term` — one row per term, plus the synthetic `is_a` relation term
//! - `term2term` — one row per direct parent → child relation
//! - `graph_path` — every ancestor → descendant distance reachable from
//!   the configured roots (the transitive closure)
//!
//! ## Pipeline
//!
//! ```text
//! OBO text ─► obo::parse ─► Ontology ─► Adjacency ─► graph::closure ─► export::write_*
//! ```
//!
//! Everything up to the export step is pure and in memory. Tables are
//! staged in temp files and only renamed into place once all three are
//! written, so a failed run leaves no table behind.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use obo_graph_path::{convert_str, ConversionConfig};
//!
//! # fn example(text: &str) -> obo_graph_path::Result<()> {
//! let config = ConversionConfig::default().with_root_nodes(["biological_process"]);
//! let tables = convert_str(text, &config)?;
//! for triple in &tables.closure {
//!     println!("{} -> {} ({})", triple.ancestor, triple.descendant, triple.distance);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod obo;
pub mod graph;
pub mod export;
pub mod config;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{info, warn};

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{ClosureTriple, Relation, Term, TermId, TermPath, IS_A};
pub use obo::{Ontology, ParseOptions};
pub use graph::{closure, enumerate_paths, Adjacency, ClosureLimits};
pub use config::{ConversionConfig, OutputLayout};

// ============================================================================
// Pipeline
// ============================================================================

/// All three tables, in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    pub ontology: Ontology,
    /// Sorted, deduplicated closure triples.
    pub closure: Vec<ClosureTriple>,
}

/// Row counts of a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub terms: usize,
    pub roots: usize,
    pub relations: usize,
    pub graph_paths: usize,
}

impl Tables {
    pub fn stats(&self) -> ConversionStats {
        ConversionStats {
            terms: self.ontology.terms.len(),
            roots: self.ontology.root_ids.len(),
            relations: self.ontology.relations.len(),
            graph_paths: self.closure.len(),
        }
    }

    /// Write the tables into `outdir`, which must already exist.
    pub fn write_to_dir(&self, outdir: &Path, layout: &OutputLayout) -> Result<ConversionStats> {
        if !outdir.is_dir() {
            return Err(Error::Config(format!(
                "output directory {} does not exist",
                outdir.display(),
            )));
        }

        // Stage all three before any becomes visible under its final name.
        let staged = [
            stage_table(&outdir.join(&layout.term_file), |w| {
                export::write_term_table(&self.ontology.terms, w)
            })?,
            stage_table(&outdir.join(&layout.term2term_file), |w| {
                export::write_term2term_table(&self.ontology.relations, w)
            })?,
            stage_table(&outdir.join(&layout.graph_path_file), |w| {
                export::write_graph_path_table(&self.closure, w)
            })?,
        ];
        publish(staged)?;

        Ok(self.stats())
    }
}

/// A fully written table in a temp file next to its destination.
struct StagedTable {
    file: NamedTempFile,
    target: PathBuf,
}

fn stage_table<F>(target: &Path, emit: F) -> Result<StagedTable>
where
    F: FnOnce(&mut dyn Write) -> Result<usize>,
{
    let dir = target.parent().ok_or_else(|| {
        Error::Config(format!("{} has no parent directory", target.display()))
    })?;
    info!(path = %target.display(), "creating table");

    let mut file = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(file.as_file_mut());
    let rows = emit(&mut writer)?;
    writer.flush()?;
    drop(writer);

    info!(path = %target.display(), rows, "table staged");
    Ok(StagedTable { file, target: target.to_path_buf() })
}

/// Rename every staged table into place. If one rename fails, the tables
/// already renamed are removed again and the rest are discarded.
fn publish<const N: usize>(staged: [StagedTable; N]) -> Result<()> {
    let mut published: Vec<PathBuf> = Vec::with_capacity(N);
    for StagedTable { file, target } in staged {
        if let Err(err) = file.persist(&target) {
            for path in &published {
                if let Err(cleanup) = fs::remove_file(path) {
                    warn!(path = %path.display(), error = %cleanup, "could not remove table");
                }
            }
            return Err(err.error.into());
        }
        published.push(target);
    }
    Ok(())
}

/// Parse OBO text and compute the closure. No I/O.
pub fn convert_str(input: &str, config: &ConversionConfig) -> Result<Tables> {
    config.validate()?;
    let ontology = obo::parse(input, &config.parse_options())?;

    info!("collecting all paths");
    let adjacency = ontology.adjacency();
    let closure = graph::closure(&ontology.root_ids, &adjacency, &config.limits)?;

    Ok(Tables { ontology, closure })
}

/// Read `obofile`, convert it, and write the three tables into `outdir`.
pub fn convert_file(obofile: &Path, outdir: &Path, config: &ConversionConfig) -> Result<ConversionStats> {
    let input = fs::read_to_string(obofile)?;
    let tables = convert_str(&input, config)?;
    tables.write_to_dir(outdir, &config.output)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unknown term `{accession}` referenced at line {line}")]
    UnknownTerm { accession: String, line: usize },

    #[error("no root nodes found; searched for: {}", .searched.join(", "))]
    NoRootNodes { searched: Vec<String> },

    #[error("closure requires at least one root id")]
    EmptyRoots,

    #[error("cycle detected: {}", join_ids(.path))]
    CycleDetected { path: Vec<TermId> },

    #[error("closure limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_ids(ids: &[TermId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> ")
}

pub type Result<T> = std::result::Result<T, Error>;
