//! Error type for graph construction and snapshot loading

use std::path::PathBuf;

use crate::model::NodeId;

/// Everything that can go wrong before a graph is ready to render.
///
/// Rendering itself never fails: any graph that makes it through
/// [`CodeGraph::new`](crate::CodeGraph::new) serializes.
#[derive(Debug, thiserror::Error)]
pub enum ScnError {
    #[error("duplicate node id `{0}`")]
    DuplicateNode(NodeId),

    #[error("node `{0}` has an empty name")]
    MissingName(NodeId),

    #[error("node `{0}` has an empty file path")]
    MissingFilePath(NodeId),

    #[error("file `{path}` is declared by both `{first}` and `{second}`")]
    DuplicateFile {
        path: String,
        first: NodeId,
        second: NodeId,
    },

    #[error("node `{node}` belongs to `{path}`, which has no file node")]
    OrphanNode { node: NodeId, path: String },

    #[error("edge `{from}` -> `{to}` references unknown node `{missing}`")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    #[error("node `{node}` has invalid parent `{parent}`: {reason}")]
    InvalidParent {
        node: NodeId,
        parent: NodeId,
        reason: &'static str,
    },

    #[error("parent chain of node `{0}` forms a cycle")]
    ParentCycle(NodeId),

    #[error("node `{node}` has invalid line range {start}..{end}")]
    InvalidLineRange { node: NodeId, start: u32, end: u32 },

    #[error("unsupported snapshot format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ScnError>;
