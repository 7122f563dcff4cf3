//! Test graphs for the renderer

use scn_core::*;

/// `a.ts` defines `helper`; `b.ts` imports it and calls it from `main`.
pub fn two_file_graph() -> CodeGraph {
    let nodes = vec![
        CodeNode::file("1", "a.ts"),
        CodeNode::symbol("1.1", NodeType::Function, "helper", "a.ts", 1, 3),
        CodeNode::file("2", "b.ts"),
        CodeNode::symbol("2.1", NodeType::Function, "main", "b.ts", 3, 8),
    ];
    let edges = vec![
        CodeEdge::new("2", "1", EdgeKind::Imports),
        CodeEdge::new("2.1", "1.1", EdgeKind::Calls),
    ];
    CodeGraph::new(nodes, edges).unwrap()
}

pub fn project_nodes() -> Vec<CodeNode> {
    vec![
        CodeNode::file("1", "src/api.ts"),
        CodeNode::symbol("1.1", NodeType::Interface, "User", "src/api.ts", 1, 4)
            .with_visibility(Visibility::Public),
        CodeNode::symbol("1.2", NodeType::Function, "fetchUser", "src/api.ts", 6, 12)
            .with_visibility(Visibility::Public)
            .with_async()
            .with_throws()
            .with_snippet("(id: string): Promise<User>"),
        CodeNode::symbol("1.3", NodeType::Constant, "BASE_URL", "src/api.ts", 5, 5)
            .with_visibility(Visibility::Private)
            .with_snippet("= \"/api\""),
        CodeNode::file("2", "src/app.ts"),
        CodeNode::symbol("2.1", NodeType::Class, "App", "src/app.ts", 3, 30)
            .with_visibility(Visibility::Public),
        CodeNode::symbol("2.2", NodeType::Method, "render", "src/app.ts", 10, 20)
            .with_visibility(Visibility::Public)
            .with_pure()
            .with_snippet("(): string")
            .with_parent("2.1"),
        CodeNode::file("3", "styles/main.css"),
        CodeNode::symbol("3.1", NodeType::CssRule, ".card", "styles/main.css", 1, 8)
            .with_intents([CssIntent::Layout, CssIntent::Appearance]),
        CodeNode::symbol("3.2", NodeType::CssRule, "h1", "styles/main.css", 10, 12)
            .with_intents([CssIntent::Typography]),
        CodeNode::file("4", "docs/read me.md"),
    ]
}

pub fn project_edges() -> Vec<CodeEdge> {
    vec![
        CodeEdge::new("2", "1", EdgeKind::Imports),
        CodeEdge::new("2.2", "1.2", EdgeKind::Calls),
        CodeEdge::new("2.2", "1.1", EdgeKind::TypeReference),
        CodeEdge::new("1.2", "1.1", EdgeKind::TypeReference),
        CodeEdge::new("1.2", "1.3", EdgeKind::References),
        CodeEdge::new("2.1", "3.1", EdgeKind::References),
    ]
}

/// Three source files, a stylesheet and an entity-free markdown file.
pub fn project_graph() -> CodeGraph {
    CodeGraph::new(project_nodes(), project_edges()).unwrap()
}

/// `count` files, each importing the next, each with two entities calling forward.
///
/// Nodes are inserted back to front so ordering has work to do.
pub fn chain_graph(count: usize) -> CodeGraph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for i in (0..count).rev() {
        let file = format!("f{i:03}");
        let path = format!("src/mod_{i:03}.rs");
        nodes.push(CodeNode::symbol(format!("{file}.2"), NodeType::Struct, "State", path.clone(), 12, 20));
        nodes.push(CodeNode::symbol(format!("{file}.1"), NodeType::Function, "run", path.clone(), 2, 10));
        nodes.push(CodeNode::file(file.clone(), path));

        if i + 1 < count {
            let next = format!("f{:03}", i + 1);
            edges.push(CodeEdge::new(file.clone(), next.clone(), EdgeKind::Imports));
            edges.push(CodeEdge::new(format!("{file}.1"), format!("{next}.1"), EdgeKind::Calls));
            edges.push(CodeEdge::new(format!("{file}.1"), format!("{next}.2"), EdgeKind::Instantiates));
        }
    }

    CodeGraph::new(nodes, edges).unwrap()
}

/// `project_graph` plus edges between files and entities in both directions.
pub fn mixed_graph() -> CodeGraph {
    let mut edges = project_edges();
    edges.push(CodeEdge::new("2.1", "1", EdgeKind::References));
    edges.push(CodeEdge::new("3", "2.2", EdgeKind::References));
    edges.push(CodeEdge::new("1.2", "4", EdgeKind::References));
    CodeGraph::new(project_nodes(), edges).unwrap()
}

/// Edge lines directly under the header of file `id`.
pub fn header_lines<'d>(document: &'d str, id: &str) -> Vec<&'d str> {
    let header = format!("§ ({id}) ");
    let mut lines = document.lines().skip_while(|l| !l.starts_with(&header));
    if lines.next().is_none() {
        return Vec::new();
    }
    lines
        .take_while(|l| l.starts_with("  -> ") || l.starts_with("  <- "))
        .collect()
}

/// Lines nested under the main line of entity `id`.
pub fn lines_under<'d>(document: &'d str, id: &str) -> Vec<&'d str> {
    fn is_edge(line: &str) -> bool {
        let t = line.trim_start();
        t.starts_with("->") || t.starts_with("<-")
    }
    fn indent(line: &str) -> usize {
        line.len() - line.trim_start().len()
    }

    let marker = format!(" ({id}) ");
    let lines: Vec<&'d str> = document.lines().collect();
    let Some(start) = lines
        .iter()
        .position(|&l| !is_edge(l) && !l.starts_with('§') && l.contains(&marker))
    else {
        return Vec::new();
    };

    let own = indent(lines[start]);
    lines[start + 1..]
        .iter()
        .copied()
        .take_while(|&l| indent(l) > own && is_edge(l))
        .collect()
}
