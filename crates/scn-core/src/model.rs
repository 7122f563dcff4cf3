//! Core data structures for the code graph

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Globally unique, opaque node identifier.
///
/// Ids are never interpreted, only compared: ordering is plain
/// lexicographic string order, so `"10"` sorts before `"2"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

/// Discriminates what kind of code entity a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    // ── Structural ──────────────────────────────────────────
    File,

    // ── Code entities ───────────────────────────────────────
    Class,
    Function,
    Method,
    Interface,
    Enum,
    TypeAlias,
    Namespace,
    Struct,
    Property,
    Field,
    Variable,
    Constant,
    ArrowFunction,
    Constructor,
    Trait,
    Impl,
    Static,
    Union,
    Template,

    // ── Markup / style ──────────────────────────────────────
    HtmlElement,
    CssRule,

    // ── Fallback ────────────────────────────────────────────
    #[serde(other)]
    Unknown,
}

impl NodeType {
    pub fn is_file(self) -> bool {
        self == NodeType::File
    }
}

/// Declared visibility of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    /// Not declared, or a value this format has no glyph for.
    #[default]
    #[serde(other)]
    Unset,
}

impl Visibility {
    pub fn is_unset(&self) -> bool {
        *self == Visibility::Unset
    }
}

/// What a CSS rule's declarations are about.
///
/// Variant order is the canonical render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssIntent {
    Layout,
    Typography,
    Appearance,
}

/// What kind of relationship an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    // ── File relation ───────────────────────────────────────
    Imports,

    // ── Entity relations ────────────────────────────────────
    Calls,
    References,
    Inherits,
    Implements,
    Instantiates,
    TypeReference,

    // ── Fallback ────────────────────────────────────────────
    #[serde(other)]
    Other,
}

impl EdgeKind {
    /// Whether this kind links files rather than declared entities.
    pub fn is_file_relation(self) -> bool {
        self == EdgeKind::Imports
    }
}

/// One file or one declared entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeNode {
    pub id: NodeId,
    /// Own path for file nodes, containing file's path otherwise.
    pub file_path: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
    pub start_line: u32,
    pub end_line: u32,
    #[serde(default, skip_serializing_if = "Visibility::is_unset")]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub can_throw: bool,
    #[serde(default)]
    pub is_pure: bool,
    /// Only meaningful on `css-rule` nodes.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub css_intents: BTreeSet<CssIntent>,
    /// Short signature or value shown after the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    /// Enclosing entity in the same file (nested markup, members).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
}

impl CodeNode {
    /// A file node. Its name is the path itself.
    pub fn file(id: impl Into<NodeId>, path: impl Into<String>) -> Self {
        let path = path.into();
        CodeNode {
            id: id.into(),
            name: path.clone(),
            file_path: path,
            node_type: NodeType::File,
            start_line: 1,
            end_line: 1,
            visibility: Visibility::Unset,
            is_async: false,
            can_throw: false,
            is_pure: false,
            css_intents: BTreeSet::new(),
            code_snippet: None,
            parent_id: None,
        }
    }

    /// A declared entity spanning `start_line..=end_line` of `file_path`.
    pub fn symbol(
        id: impl Into<NodeId>,
        node_type: NodeType,
        name: impl Into<String>,
        file_path: impl Into<String>,
        start_line: u32,
        end_line: u32,
    ) -> Self {
        CodeNode {
            id: id.into(),
            file_path: file_path.into(),
            node_type,
            name: name.into(),
            start_line,
            end_line,
            visibility: Visibility::Unset,
            is_async: false,
            can_throw: false,
            is_pure: false,
            css_intents: BTreeSet::new(),
            code_snippet: None,
            parent_id: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_async(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn with_throws(mut self) -> Self {
        self.can_throw = true;
        self
    }

    pub fn with_pure(mut self) -> Self {
        self.is_pure = true;
        self
    }

    pub fn with_intents(mut self, intents: impl IntoIterator<Item = CssIntent>) -> Self {
        self.css_intents.extend(intents);
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.code_snippet = Some(snippet.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<NodeId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    pub fn is_file(&self) -> bool {
        self.node_type.is_file()
    }
}

/// A directed relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEdge {
    pub from_id: NodeId,
    pub to_id: NodeId,
    pub kind: EdgeKind,
}

impl CodeEdge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, kind: EdgeKind) -> Self {
        CodeEdge {
            from_id: from.into(),
            to_id: to.into(),
            kind,
        }
    }
}
