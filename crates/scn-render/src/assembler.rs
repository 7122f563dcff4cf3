//! Top-level serializer: partition, index, render each file, join

use rayon::prelude::*;
use scn_core::CodeGraph;

use crate::edge_index::EdgeIndex;
use crate::file_block::render_file_block;
use crate::options::RenderOptions;
use crate::partition::{FileGroup, partition};
use crate::stats::DocumentStats;

/// Separator between file blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Serialize `graph` to SCN with default options.
pub fn render(graph: &CodeGraph) -> String {
    render_with_options(graph, &RenderOptions::default())
}

/// Serialize `graph` to SCN.
///
/// Output depends only on the graph; `options` affect how the work is
/// scheduled, never the bytes produced.
pub fn render_with_options(graph: &CodeGraph, options: &RenderOptions) -> String {
    let groups = partition(graph);
    let index = EdgeIndex::build(graph);
    render_groups(graph, &groups, &index, options)
}

/// Serialize `graph` and summarize the result.
pub fn render_with_stats(graph: &CodeGraph, options: &RenderOptions) -> (String, DocumentStats) {
    let groups = partition(graph);
    let index = EdgeIndex::build(graph);
    let document = render_groups(graph, &groups, &index, options);
    let stats = DocumentStats::collect(&groups, &index, &document);
    (document, stats)
}

fn render_groups(
    graph: &CodeGraph,
    groups: &[FileGroup<'_>],
    index: &EdgeIndex<'_>,
    options: &RenderOptions,
) -> String {
    let blocks: Vec<String> = if options.use_parallel(groups.len()) {
        tracing::debug!("Rendering {} files in parallel", groups.len());
        groups
            .par_iter()
            .map(|group| render_file_block(group, index, graph))
            .collect()
    } else {
        groups
            .iter()
            .map(|group| render_file_block(group, index, graph))
            .collect()
    };

    blocks.join(BLOCK_SEPARATOR)
}
