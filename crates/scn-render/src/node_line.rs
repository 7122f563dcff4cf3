//! Per-entity lines: the main line plus its dependency and caller lines

use scn_core::symbols::{CALLER_ARROW, DEPENDENCY_ARROW, intent_glyph, type_glyph};
use scn_core::{CodeNode, NodeId, NodeType};

use crate::edge_index::{EdgeIndex, Granularity};
use crate::qualifiers::qualifiers;

/// Two spaces per nesting level.
pub(crate) const INDENT: &str = "  ";

/// `<indent><arrow> (a), (b)`, or `None` when there is nothing to list.
pub(crate) fn edge_line(level: usize, arrow: &str, ids: &[&NodeId]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    let list = ids
        .iter()
        .map(|id| format!("({id})"))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{}{} {}", INDENT.repeat(level), arrow, list))
}

/// Text after the name: the intent group for CSS rules, the snippet otherwise.
fn detail(node: &CodeNode) -> Option<String> {
    if node.node_type == NodeType::CssRule {
        if node.css_intents.is_empty() {
            return None;
        }
        let glyphs: Vec<&str> = node.css_intents.iter().map(|i| intent_glyph(*i)).collect();
        return Some(format!("{{{}}}", glyphs.join(" ")));
    }

    let snippet = one_line(node.code_snippet.as_deref()?);
    (!snippet.is_empty()).then_some(snippet)
}

/// Collapse control characters (line breaks included) into single spaces.
fn one_line(text: &str) -> String {
    text.split(char::is_control)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The main line of `node` at containment `depth`.
pub fn main_line(node: &CodeNode, depth: usize) -> String {
    let detail = detail(node);
    let id = format!("({})", node.id);
    let name = one_line(&node.name);

    let mut parts: Vec<&str> = qualifiers(node);
    parts.push(type_glyph(node.node_type));
    parts.push(&id);
    if !name.is_empty() {
        parts.push(&name);
    }
    if let Some(detail) = &detail {
        parts.push(detail);
    }

    format!("{}{}", INDENT.repeat(depth + 1), parts.join(" "))
}

/// Render one entity: main line, then its dependency and caller lines.
pub fn render_node(node: &CodeNode, depth: usize, index: &EdgeIndex<'_>) -> String {
    let mut lines = vec![main_line(node, depth)];
    let level = depth + 2;

    lines.extend(edge_line(
        level,
        DEPENDENCY_ARROW,
        index.dependencies(&node.id, Granularity::Entity),
    ));
    lines.extend(edge_line(
        level,
        CALLER_ARROW,
        index.callers(&node.id, Granularity::Entity),
    ));

    lines.join("\n")
}
