//! Test utilities for scn-core

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::model::*;

/// Two files: `a.ts` defines `helper`, `b.ts` imports it and calls it from `main`.
pub fn two_file_nodes() -> (Vec<CodeNode>, Vec<CodeEdge>) {
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
    (nodes, edges)
}

/// Write a snapshot file into a fresh temporary directory.
pub fn write_snapshot(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(file_name);
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

pub const TWO_FILE_JSON: &str = r#"{
  "nodes": [
    { "id": "1", "filePath": "a.ts", "type": "file", "name": "a.ts", "startLine": 1, "endLine": 3 },
    { "id": "1.1", "filePath": "a.ts", "type": "function", "name": "helper", "startLine": 1, "endLine": 3,
      "visibility": "public", "isPure": true, "codeSnippet": "(): number" },
    { "id": "2", "filePath": "b.ts", "type": "file", "name": "b.ts", "startLine": 1, "endLine": 8 },
    { "id": "2.1", "filePath": "b.ts", "type": "function", "name": "main", "startLine": 3, "endLine": 8 }
  ],
  "edges": [
    { "fromId": "2", "toId": "1", "kind": "imports" },
    { "fromId": "2.1", "toId": "1.1", "kind": "calls" }
  ]
}"#;

pub const TWO_FILE_YAML: &str = r#"
nodes:
  - { id: "1", filePath: a.ts, type: file, name: a.ts, startLine: 1, endLine: 3 }
  - { id: "1.1", filePath: a.ts, type: function, name: helper, startLine: 1, endLine: 3 }
  - { id: "2", filePath: b.ts, type: file, name: b.ts, startLine: 1, endLine: 8 }
  - { id: "2.1", filePath: b.ts, type: function, name: main, startLine: 3, endLine: 8 }
edges:
  - { fromId: "2", toId: "1", kind: imports }
  - { fromId: "2.1", toId: "1.1", kind: calls }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_snapshot() {
        let (_dir, path) = write_snapshot("graph.json", TWO_FILE_JSON);
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), TWO_FILE_JSON);
    }
}
