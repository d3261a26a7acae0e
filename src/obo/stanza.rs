//! Stanza reader — splits OBO text into stanza records.
//!
//! Only the tags the converter needs are kept. Everything else (header
//! lines, `def:`, `synonym:`, `xref:` ...) is skipped.

use crate::{Error, Result};

/// Stanza header kind, from the `[...]` line that opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StanzaKind {
    Term,
    Typedef,
    Other(String),
}

impl StanzaKind {
    fn from_header(header: &str) -> Self {
        match header {
            "Term" => StanzaKind::Term,
            "Typedef" => StanzaKind::Typedef,
            other => StanzaKind::Other(other.to_string()),
        }
    }
}

/// An `is_a:` or `relationship:` clause, accessions still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    IsA { parent: String },
    Relationship { rel_type: String, parent: String },
}

/// A link together with the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkClause {
    pub line: usize,
    pub link: Link,
}

/// One `[Term]` / `[Typedef]` / ... block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    pub kind: StanzaKind,
    /// 1-based line of the header.
    pub line: usize,
    pub id: Option<String>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// `is_obsolete: true` was present.
    pub obsolete: bool,
    pub links: Vec<LinkClause>,
}

impl Stanza {
    fn new(kind: StanzaKind, line: usize) -> Self {
        Self {
            kind,
            line,
            id: None,
            name: None,
            namespace: None,
            obsolete: false,
            links: Vec::new(),
        }
    }
}

/// Read every stanza of `input` in file order.
///
/// A stanza ends at a blank line, at the next header, or at end of input.
pub fn read_stanzas(input: &str) -> Result<Vec<Stanza>> {
    let mut stanzas = Vec::new();
    let mut current: Option<Stanza> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        if line.is_empty() {
            stanzas.extend(current.take());
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header.strip_suffix(']').ok_or_else(|| Error::Parse {
                line: line_no,
                message: format!("unterminated stanza header `{line}`"),
            })?;
            stanzas.extend(current.take());
            current = Some(Stanza::new(StanzaKind::from_header(header.trim()), line_no));
            continue;
        }

        // Header section or lines after a stanza's closing blank line.
        let Some(stanza) = current.as_mut() else {
            continue;
        };

        let Some((tag, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match tag.trim() {
            "id" => stanza.id = Some(value.to_string()),
            "name" => stanza.name = Some(value.to_string()),
            "namespace" => stanza.namespace = Some(value.to_string()),
            "is_obsolete" => stanza.obsolete = value == "true",
            "is_a" => {
                let mut fields = clause_fields(value);
                let parent = fields.next().ok_or_else(|| Error::Parse {
                    line: line_no,
                    message: "`is_a:` without a parent".into(),
                })?;
                stanza.links.push(LinkClause {
                    line: line_no,
                    link: Link::IsA { parent: parent.to_string() },
                });
            }
            "relationship" => {
                let mut fields = clause_fields(value);
                match (fields.next(), fields.next()) {
                    (Some(rel_type), Some(parent)) => stanza.links.push(LinkClause {
                        line: line_no,
                        link: Link::Relationship {
                            rel_type: rel_type.to_string(),
                            parent: parent.to_string(),
                        },
                    }),
                    _ => {
                        return Err(Error::Parse {
                            line: line_no,
                            message: "`relationship:` needs a relation type and a parent".into(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    stanzas.extend(current.take());
    Ok(stanzas)
}

/// Whitespace-separated fields of a clause, stopping at a `!` comment or
/// a `{...}` qualifier block.
fn clause_fields(value: &str) -> impl Iterator<Item = &str> {
    value
        .split_whitespace()
        .take_while(|field| !field.starts_with('!') && !field.starts_with('{'))
}
