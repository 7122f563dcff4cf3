//! Graph providers: where a `CodeGraph` comes from

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScnError};
use crate::graph::CodeGraph;
use crate::model::{CodeEdge, CodeNode};

/// Anything that can hand over a fully resolved graph.
///
/// Source parsing and cross-file resolution happen behind this trait.
pub trait GraphProvider {
    fn provide(&self) -> Result<CodeGraph>;
}

/// Serde interchange form of a graph, as written by an upstream analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<CodeNode>,
    #[serde(default)]
    pub edges: Vec<CodeEdge>,
}

impl GraphSnapshot {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Validate into a graph.
    pub fn into_graph(self) -> Result<CodeGraph> {
        CodeGraph::new(self.nodes, self.edges)
    }
}

impl GraphProvider for GraphSnapshot {
    fn provide(&self) -> Result<CodeGraph> {
        self.clone().into_graph()
    }
}

/// Supported on-disk snapshot encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Some(SnapshotFormat::Yaml),
            _ => None,
        }
    }
}

/// A snapshot stored in a file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the snapshot without validating it.
    pub fn load(&self) -> Result<GraphSnapshot> {
        let format = SnapshotFormat::from_path(&self.path)
            .ok_or_else(|| ScnError::UnsupportedFormat(self.path.clone()))?;
        let contents = std::fs::read_to_string(&self.path).map_err(|source| ScnError::Io {
            path: self.path.clone(),
            source,
        })?;

        let snapshot = match format {
            SnapshotFormat::Json => GraphSnapshot::from_json_str(&contents)?,
            SnapshotFormat::Yaml => GraphSnapshot::from_yaml_str(&contents)?,
        };
        tracing::debug!(
            "Loaded snapshot {}: {} nodes, {} edges",
            self.path.display(),
            snapshot.nodes.len(),
            snapshot.edges.len()
        );
        Ok(snapshot)
    }
}

impl GraphProvider for SnapshotFile {
    fn provide(&self) -> Result<CodeGraph> {
        self.load()?.into_graph()
    }
}
