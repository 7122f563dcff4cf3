//! SCN Core: code graph data model, validation and glyph tables

pub mod error;
pub mod graph;
pub mod model;
pub mod snapshot;
pub mod symbols;


#[cfg(test)]
pub mod test_utils;

pub use error::{Result, ScnError};
pub use graph::CodeGraph;
pub use model::{CodeEdge, CodeNode, CssIntent, EdgeKind, NodeId, NodeType, Visibility};
pub use snapshot::{GraphProvider, GraphSnapshot, SnapshotFile, SnapshotFormat};
