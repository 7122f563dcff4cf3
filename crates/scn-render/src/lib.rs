//! SCN renderer
//!
//! Turns a resolved [`CodeGraph`](scn_core::CodeGraph) into Symbolic
//! Context Notation: one block per file, one line group per entity.
//!
//! ```text
//! CodeGraph
//!     │
//!     ├──> Partitioner   files by id, entities by start line
//!     ├──> Edge index    -> / <- lookups at file and entity level
//!     ├──> Node lines    qualifiers, glyph, id, name, detail, edges
//!     └──> Assembler     file blocks joined by a blank line
//! ```
//!
//! Rendering is pure: the same graph always yields the same bytes.

pub mod assembler;
pub mod edge_index;
pub mod file_block;
pub mod node_line;
pub mod options;
pub mod partition;
pub mod qualifiers;
pub mod stats;


#[cfg(test)]
pub mod test_utils;

pub use assembler::{render, render_with_options, render_with_stats};
pub use edge_index::{EdgeIndex, Granularity};
pub use options::RenderOptions;
pub use partition::{FileGroup, partition};
pub use stats::DocumentStats;
