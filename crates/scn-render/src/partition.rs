//! Grouping entities under their files, in render order

use std::collections::HashMap;

use scn_core::{CodeGraph, CodeNode, NodeId};

/// One file and the entities it contains, both in final order.
#[derive(Debug, Clone)]
pub struct FileGroup<'g> {
    pub file: &'g CodeNode,
    pub entities: Vec<&'g CodeNode>,
}

/// Split the graph into file groups.
///
/// Files are ordered by id. Entities follow their parent tree in
/// pre-order, siblings by start line with ties keeping input order,
/// so a node is followed by its descendants.
/// Files without entities still get a group.
pub fn partition(graph: &CodeGraph) -> Vec<FileGroup<'_>> {
    let mut files = Vec::new();
    let mut by_path: HashMap<&str, Vec<&CodeNode>> = HashMap::new();

    for node in graph.nodes() {
        if node.is_file() {
            files.push(node);
        } else {
            by_path.entry(node.file_path.as_str()).or_default().push(node);
        }
    }

    files.sort_by(|a, b| a.id.cmp(&b.id));

    files
        .into_iter()
        .map(|file| {
            let entities = by_path.remove(file.file_path.as_str()).unwrap_or_default();
            FileGroup {
                file,
                entities: tree_order(entities),
            }
        })
        .collect()
}

/// Pre-order walk over `parent_id` links. Parents share the file and
/// chains are acyclic, so every entity is reached exactly once.
fn tree_order<'g>(entities: Vec<&'g CodeNode>) -> Vec<&'g CodeNode> {
    let total = entities.len();
    let mut children: HashMap<Option<&'g NodeId>, Vec<&'g CodeNode>> = HashMap::new();
    for node in entities {
        children.entry(node.parent_id.as_ref()).or_default().push(node);
    }
    for siblings in children.values_mut() {
        // sort_by_key is stable
        siblings.sort_by_key(|n| n.start_line);
    }

    let mut ordered = Vec::with_capacity(total);
    let mut stack: Vec<&'g CodeNode> = children.remove(&None).unwrap_or_default();
    stack.reverse();
    while let Some(node) = stack.pop() {
        ordered.push(node);
        if let Some(mut kids) = children.remove(&Some(&node.id)) {
            kids.reverse();
            stack.extend(kids);
        }
    }
    ordered
}
