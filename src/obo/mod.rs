//! # OBO Ontology Parser
//!
//! Turns stanza text into an [`Ontology`]: term rows with dense ids, the
//! accession → id map, the root ids, and the one-hop relations.
//!
//! Ids are assigned in file order. Id 1 is always the synthetic `is_a`
//! relation term; parsed stanzas start at 2.

pub mod stanza;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::graph::Adjacency;
use crate::model::{Relation, Term, TermId, IS_A};
use crate::{Error, Result};
use stanza::{read_stanzas, Link, StanzaKind};

/// Namespace used when several roots are configured and a stanza has no
/// `namespace:` tag.
pub const MIXED_NAMESPACE: &str = "all";

/// What the parser needs to know beyond the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Term names that mark traversal roots.
    pub root_nodes: Vec<String>,
    /// Namespace for stanzas without a `namespace:` tag.
    pub default_namespace: String,
}

impl ParseOptions {
    /// Options with the default namespace derived from the roots: the root
    /// name itself when there is exactly one, otherwise [`MIXED_NAMESPACE`].
    pub fn new(root_nodes: Vec<String>) -> Self {
        let default_namespace = match root_nodes.as_slice() {
            [single] => single.clone(),
            _ => MIXED_NAMESPACE.to_string(),
        };
        Self { root_nodes, default_namespace }
    }

    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    fn is_root(&self, name: &str) -> bool {
        self.root_nodes.iter().any(|root| root == name)
    }
}

/// A parsed ontology. Produced once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ontology {
    /// Term rows in id order, `is_a` first.
    pub terms: Vec<Term>,
    /// Accession → id, including `is_a`.
    pub accessions: HashMap<String, TermId>,
    /// Ids of root-flagged terms, in file order.
    pub root_ids: Vec<TermId>,
    /// One-hop relations in file order.
    pub relations: Vec<Relation>,
}

impl Ontology {
    pub fn resolve(&self, accession: &str) -> Option<TermId> {
        self.accessions.get(accession).copied()
    }

    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_relations(&self.relations)
    }
}

/// Parse OBO text.
///
/// Fails with [`Error::NoRootNodes`] if no term name matches a configured
/// root, and with [`Error::UnknownTerm`] if a relation names an accession
/// that no stanza defines.
pub fn parse(input: &str, options: &ParseOptions) -> Result<Ontology> {
    let stanzas = read_stanzas(input)?;

    let mut terms = vec![Term::is_a()];
    let mut accessions: HashMap<String, TermId> = HashMap::new();
    accessions.insert("is_a".to_string(), IS_A);
    let mut root_ids = Vec::new();
    let mut linked = Vec::new();
    let mut next_id = IS_A.0 + 1;

    for stanza in stanzas {
        let Some(name) = stanza.name.clone() else {
            warn!(line = stanza.line, "skipping stanza without a name");
            continue;
        };
        let Some(accession) = stanza.id.clone() else {
            return Err(Error::Parse {
                line: stanza.line,
                message: format!("stanza `{name}` has no id"),
            });
        };

        if accession == "is_a" && stanza.kind == StanzaKind::Typedef {
            warn!(line = stanza.line, "is_a is built in; ignoring its Typedef");
            continue;
        }
        if accessions.contains_key(&accession) {
            return Err(Error::Parse {
                line: stanza.line,
                message: format!("duplicate id `{accession}`"),
            });
        }

        let id = TermId(next_id);
        next_id += 1;

        let namespace = stanza
            .namespace
            .clone()
            .unwrap_or_else(|| options.default_namespace.clone());
        let mut term = Term::new(id, name, namespace, accession.clone());
        term.is_relation = stanza.kind == StanzaKind::Typedef;

        if options.is_root(&term.name) {
            term.is_root = true;
            root_ids.push(id);
            info!(id = %id, name = %term.name, accession = %term.accession, "found root node");
        } else if term.name.starts_with("obsolete") || stanza.obsolete {
            term.is_obsolete = true;
        }

        accessions.insert(accession, id);
        terms.push(term);
        linked.push((id, stanza.links));
    }

    if root_ids.is_empty() {
        return Err(Error::NoRootNodes { searched: options.root_nodes.clone() });
    }

    let lookup = |accession: &str, line: usize| {
        accessions.get(accession).copied().ok_or_else(|| Error::UnknownTerm {
            accession: accession.to_string(),
            line,
        })
    };

    let mut relations = Vec::new();
    for (child, links) in linked {
        for clause in links {
            let relation = match &clause.link {
                Link::IsA { parent } => Relation::new(IS_A, lookup(parent, clause.line)?, child),
                Link::Relationship { rel_type, parent } => Relation::new(
                    lookup(rel_type, clause.line)?,
                    lookup(parent, clause.line)?,
                    child,
                ),
            };
            relations.push(relation);
        }
    }

    info!(
        terms = terms.len(),
        roots = root_ids.len(),
        relations = relations.len(),
        "ontology parsed"
    );

    Ok(Ontology { terms, accessions, root_ids, relations })
}
