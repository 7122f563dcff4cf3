//! Endpoint lookups over the edge list, at file and entity granularity

use std::collections::{HashMap, HashSet};

use scn_core::{CodeGraph, NodeId};

/// Which relation family a lookup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Seen from a file header: `imports` between two distinct files,
    /// plus any edge linking the file to an entity.
    File,
    /// Any edge, seen from a declared entity's side.
    Entity,
}

#[derive(Debug, Default)]
struct Lookup<'g> {
    outgoing: HashMap<&'g NodeId, Vec<&'g NodeId>>,
    incoming: HashMap<&'g NodeId, Vec<&'g NodeId>>,
    seen_outgoing: HashSet<(&'g NodeId, &'g NodeId)>,
    seen_incoming: HashSet<(&'g NodeId, &'g NodeId)>,
}

impl<'g> Lookup<'g> {
    fn add_outgoing(&mut self, from: &'g NodeId, to: &'g NodeId) {
        if self.seen_outgoing.insert((from, to)) {
            self.outgoing.entry(from).or_default().push(to);
        }
    }

    fn add_incoming(&mut self, to: &'g NodeId, from: &'g NodeId) {
        if self.seen_incoming.insert((to, from)) {
            self.incoming.entry(to).or_default().push(from);
        }
    }
}

/// Read-only edge lookups, built once per render and shared by all files.
///
/// Id lists keep edge input order, first occurrence wins.
#[derive(Debug, Default)]
pub struct EdgeIndex<'g> {
    files: Lookup<'g>,
    entities: Lookup<'g>,
}

impl<'g> EdgeIndex<'g> {
    pub fn build(graph: &'g CodeGraph) -> Self {
        let mut index = EdgeIndex::default();
        let mut skipped = 0usize;

        for edge in graph.edges() {
            let from_file = graph.is_file(&edge.from_id);
            let to_file = graph.is_file(&edge.to_id);

            match (from_file, to_file) {
                (true, true) => {
                    if edge.kind.is_file_relation() && edge.from_id != edge.to_id {
                        index.files.add_outgoing(&edge.from_id, &edge.to_id);
                        index.files.add_incoming(&edge.to_id, &edge.from_id);
                    } else {
                        skipped += 1;
                    }
                }
                (false, true) => {
                    index.entities.add_outgoing(&edge.from_id, &edge.to_id);
                    index.files.add_incoming(&edge.to_id, &edge.from_id);
                }
                (true, false) => {
                    index.files.add_outgoing(&edge.from_id, &edge.to_id);
                    index.entities.add_incoming(&edge.to_id, &edge.from_id);
                }
                (false, false) => {
                    index.entities.add_outgoing(&edge.from_id, &edge.to_id);
                    index.entities.add_incoming(&edge.to_id, &edge.from_id);
                }
            }
        }

        if skipped > 0 {
            tracing::debug!("{} file-to-file edges are not file relations and were skipped", skipped);
        }
        tracing::debug!(
            "Indexed edges: {} file sources, {} entity sources, {} entity targets",
            index.files.outgoing.len(),
            index.entities.outgoing.len(),
            index.entities.incoming.len()
        );
        index
    }

    fn lookup(&self, granularity: Granularity) -> &Lookup<'g> {
        match granularity {
            Granularity::File => &self.files,
            Granularity::Entity => &self.entities,
        }
    }

    /// Targets of `id`'s outgoing edges.
    pub fn dependencies(&self, id: &NodeId, granularity: Granularity) -> &[&'g NodeId] {
        self.lookup(granularity)
            .outgoing
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sources of `id`'s incoming edges.
    pub fn callers(&self, id: &NodeId, granularity: Granularity) -> &[&'g NodeId] {
        self.lookup(granularity)
            .incoming
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
