//! Immutable code graph: a petgraph arena plus read-only id and path indices

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::{Result, ScnError};
use crate::model::*;

/// A validated, whole-project snapshot of entities and resolved edges.
///
/// Nodes and edges keep their input order. Nodes never point at each
/// other; every lookup goes through an index owned by the graph.
pub struct CodeGraph {
    inner: DiGraph<CodeNode, CodeEdge>,
    /// Index: node id -> arena slot.
    id_index: HashMap<NodeId, NodeIndex>,
    /// Index: file path -> file node slot.
    file_index: HashMap<String, NodeIndex>,
}

impl std::fmt::Debug for CodeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("file_count", &self.file_index.len())
            .finish()
    }
}

impl CodeGraph {
    /// Build a graph, failing on the first broken invariant.
    pub fn new(nodes: Vec<CodeNode>, edges: Vec<CodeEdge>) -> Result<Self> {
        let mut graph = CodeGraph {
            inner: DiGraph::with_capacity(nodes.len(), edges.len()),
            id_index: HashMap::with_capacity(nodes.len()),
            file_index: HashMap::new(),
        };

        for node in nodes {
            graph.insert_node(node)?;
        }
        graph.check_membership()?;
        graph.check_parents()?;
        for edge in edges {
            graph.insert_edge(edge)?;
        }

        tracing::debug!(
            "Built code graph: {} nodes ({} files), {} edges",
            graph.node_count(),
            graph.file_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// A graph with no files. Serializes to the empty string.
    pub fn empty() -> Self {
        CodeGraph {
            inner: DiGraph::new(),
            id_index: HashMap::new(),
            file_index: HashMap::new(),
        }
    }

    fn insert_node(&mut self, node: CodeNode) -> Result<()> {
        if node.name.trim().is_empty() {
            return Err(ScnError::MissingName(node.id));
        }
        if node.file_path.is_empty() {
            return Err(ScnError::MissingFilePath(node.id));
        }
        if node.start_line < 1 || node.end_line < node.start_line {
            return Err(ScnError::InvalidLineRange {
                start: node.start_line,
                end: node.end_line,
                node: node.id,
            });
        }
        if self.id_index.contains_key(&node.id) {
            return Err(ScnError::DuplicateNode(node.id));
        }
        if node.is_file() {
            if let Some(&existing) = self.file_index.get(&node.file_path) {
                return Err(ScnError::DuplicateFile {
                    path: node.file_path.clone(),
                    first: self.inner[existing].id.clone(),
                    second: node.id,
                });
            }
        }

        let id = node.id.clone();
        let path = node.is_file().then(|| node.file_path.clone());
        let idx = self.inner.add_node(node);
        self.id_index.insert(id, idx);
        if let Some(path) = path {
            self.file_index.insert(path, idx);
        }
        Ok(())
    }

    /// Every entity must live in a file the graph declares.
    fn check_membership(&self) -> Result<()> {
        for node in self.nodes().filter(|n| !n.is_file()) {
            if !self.file_index.contains_key(&node.file_path) {
                return Err(ScnError::OrphanNode {
                    node: node.id.clone(),
                    path: node.file_path.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parents must be entities of the same file, and chains must end.
    fn check_parents(&self) -> Result<()> {
        for node in self.nodes() {
            let Some(parent_id) = &node.parent_id else {
                continue;
            };
            let invalid = |reason| ScnError::InvalidParent {
                node: node.id.clone(),
                parent: parent_id.clone(),
                reason,
            };
            if node.is_file() {
                return Err(invalid("file nodes cannot be nested"));
            }
            let parent = self.node(parent_id).ok_or_else(|| invalid("unknown node"))?;
            if parent.is_file() {
                return Err(invalid("parent is a file node"));
            }
            if parent.file_path != node.file_path {
                return Err(invalid("parent lives in another file"));
            }
        }

        for node in self.nodes() {
            let mut seen = HashSet::new();
            let mut current = node;
            while let Some(parent_id) = &current.parent_id {
                if !seen.insert(&current.id) {
                    return Err(ScnError::ParentCycle(node.id.clone()));
                }
                // Parents were checked to exist above.
                match self.node(parent_id) {
                    Some(parent) => current = parent,
                    None => break,
                }
            }
        }
        Ok(())
    }

    fn insert_edge(&mut self, edge: CodeEdge) -> Result<()> {
        let dangling = |missing: &NodeId| ScnError::DanglingEdge {
            from: edge.from_id.clone(),
            to: edge.to_id.clone(),
            missing: missing.clone(),
        };
        let source = *self
            .id_index
            .get(&edge.from_id)
            .ok_or_else(|| dangling(&edge.from_id))?;
        let target = *self
            .id_index
            .get(&edge.to_id)
            .ok_or_else(|| dangling(&edge.to_id))?;
        self.inner.add_edge(source, target, edge);
        Ok(())
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&CodeNode> {
        self.id_index.get(id).map(|&idx| &self.inner[idx])
    }

    /// Get the file node declaring `path`.
    pub fn file_node(&self, path: &str) -> Option<&CodeNode> {
        self.file_index.get(path).map(|&idx| &self.inner[idx])
    }

    /// Whether `id` names a file node.
    pub fn is_file(&self, id: &NodeId) -> bool {
        self.node(id).is_some_and(CodeNode::is_file)
    }

    /// Containment depth: the number of ancestors reachable through `parent_id`.
    pub fn depth(&self, id: &NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id);
        while let Some(parent) = current
            .and_then(|n| n.parent_id.as_ref())
            .and_then(|p| self.node(p))
        {
            depth += 1;
            current = Some(parent);
        }
        depth
    }

    /// Iterate over all nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &CodeNode> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = &CodeEdge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    /// Total number of nodes, files included.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Number of file nodes.
    pub fn file_count(&self) -> usize {
        self.file_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }
}

impl Default for CodeGraph {
    fn default() -> Self {
        Self::empty()
    }
}
