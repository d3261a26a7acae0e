//! Conversion configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config
//! file. Command-line flags are applied on top of whatever was loaded.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::ClosureLimits;
use crate::obo::ParseOptions;
use crate::{Error, Result};

/// Root names searched for when none are configured.
pub const DEFAULT_ROOT_NODES: [&str; 3] = [
    "molecular_function",
    "biological_process",
    "cellular_component",
];

/// Output file names, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    pub term_file: String,
    pub term2term_file: String,
    pub graph_path_file: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            term_file: "term.txt".into(),
            term2term_file: "term2term.txt".into(),
            graph_path_file: "graph_path.txt".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Term names that mark traversal roots.
    pub root_nodes: Vec<String>,
    /// Namespace for terms without one. Derived from `root_nodes` if unset.
    pub default_namespace: Option<String>,
    pub output: OutputLayout,
    pub limits: ClosureLimits,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            root_nodes: DEFAULT_ROOT_NODES.iter().map(|r| r.to_string()).collect(),
            default_namespace: None,
            output: OutputLayout::default(),
            limits: ClosureLimits::default(),
        }
    }
}

impl ConversionConfig {
    pub fn with_root_nodes(mut self, roots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.root_nodes = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_nodes.iter().all(|r| r.trim().is_empty()) {
            return Err(Error::Config("at least one root node name is required".into()));
        }
        let layout = &self.output;
        for file in [&layout.term_file, &layout.term2term_file, &layout.graph_path_file] {
            if file.trim().is_empty() {
                return Err(Error::Config("output file names must not be empty".into()));
            }
        }
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        let roots = self
            .root_nodes
            .iter()
            .filter(|r| !r.trim().is_empty())
            .cloned()
            .collect();
        let options = ParseOptions::new(roots);
        match &self.default_namespace {
            Some(ns) => options.with_default_namespace(ns.clone()),
            None => options,
        }
    }
}
