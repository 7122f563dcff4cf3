//! Size summary of a rendered document

use std::fmt;

use serde::Serialize;

use crate::edge_index::{EdgeIndex, Granularity};
use crate::partition::FileGroup;

/// What one render produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub files: usize,
    pub entities: usize,
    /// `->` lines, file headers included.
    pub dependency_lines: usize,
    /// `<-` lines, file headers included.
    pub caller_lines: usize,
    pub bytes: usize,
    pub estimated_tokens: usize,
}

impl DocumentStats {
    pub(crate) fn collect(groups: &[FileGroup<'_>], index: &EdgeIndex<'_>, document: &str) -> Self {
        let mut stats = DocumentStats {
            files: groups.len(),
            bytes: document.len(),
            estimated_tokens: Self::estimate_tokens(document.len()),
            ..Default::default()
        };

        for group in groups {
            stats.count_edges(index, &group.file.id, Granularity::File);
            for node in &group.entities {
                stats.entities += 1;
                stats.count_edges(index, &node.id, Granularity::Entity);
            }
        }
        stats
    }

    fn count_edges(&mut self, index: &EdgeIndex<'_>, id: &scn_core::NodeId, granularity: Granularity) {
        if !index.dependencies(id, granularity).is_empty() {
            self.dependency_lines += 1;
        }
        if !index.callers(id, granularity).is_empty() {
            self.caller_lines += 1;
        }
    }

    /// Rough estimate: ~4 bytes per token.
    pub fn estimate_tokens(bytes: usize) -> usize {
        bytes.div_ceil(4)
    }
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "files: {}", self.files)?;
        writeln!(f, "entities: {}", self.entities)?;
        writeln!(f, "dependency_lines: {}", self.dependency_lines)?;
        writeln!(f, "caller_lines: {}", self.caller_lines)?;
        writeln!(f, "bytes: {}", self.bytes)?;
        write!(f, "estimated_tokens: {}", self.estimated_tokens)
    }
}
