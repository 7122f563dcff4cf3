//! One file's block: header, file-level relations, entity lines

use scn_core::CodeGraph;
use scn_core::symbols::{CALLER_ARROW, DEPENDENCY_ARROW, FILE_GLYPH};

use crate::edge_index::{EdgeIndex, Granularity};
use crate::node_line::{edge_line, render_node};
use crate::partition::FileGroup;

/// Quote a path containing whitespace so it stays one token.
/// Control characters inside the quotes are escaped.
pub fn format_path(path: &str) -> String {
    if !path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return path.to_string();
    }
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');
    for c in path.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() => quoted.extend(c.escape_default()),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Render a file group. Never empty: a file always has its header.
pub fn render_file_block(group: &FileGroup<'_>, index: &EdgeIndex<'_>, graph: &CodeGraph) -> String {
    let file = group.file;
    let mut lines = vec![format!(
        "{} ({}) {}",
        FILE_GLYPH,
        file.id,
        format_path(&file.file_path)
    )];

    lines.extend(edge_line(
        1,
        DEPENDENCY_ARROW,
        index.dependencies(&file.id, Granularity::File),
    ));
    lines.extend(edge_line(
        1,
        CALLER_ARROW,
        index.callers(&file.id, Granularity::File),
    ));

    for node in &group.entities {
        lines.push(render_node(node, graph.depth(&node.id), index));
    }

    lines.join("\n")
}
