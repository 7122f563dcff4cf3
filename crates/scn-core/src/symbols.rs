//! Glyph tables for the notation
//!
//! Every glyph here is part of the wire format: consumers parse lines by
//! indentation and leading glyph, so changing one breaks them.

use crate::model::{CssIntent, NodeType, Visibility};

/// File header glyph.
pub const FILE_GLYPH: &str = "§";

/// Placeholder for node types without a glyph of their own.
pub const UNKNOWN_GLYPH: &str = "?";

/// Prefix of a dependency line.
pub const DEPENDENCY_ARROW: &str = "->";

/// Prefix of a caller line.
pub const CALLER_ARROW: &str = "<-";

pub const PUBLIC_GLYPH: &str = "+";
pub const PRIVATE_GLYPH: &str = "-";
pub const ASYNC_GLYPH: &str = "...";
pub const THROWS_GLYPH: &str = "!";
pub const PURE_GLYPH: &str = "o";

/// Glyph rendered in front of an entity's id.
///
/// Total over [`NodeType`]; anything without a dedicated glyph,
/// `File` included, degrades to [`UNKNOWN_GLYPH`].
pub fn type_glyph(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Class | NodeType::Namespace | NodeType::Struct => "◇",
        NodeType::Function
        | NodeType::Method
        | NodeType::ArrowFunction
        | NodeType::Constructor => "~",
        NodeType::Interface => "{}",
        NodeType::Enum => "☰",
        NodeType::TypeAlias => "=:",
        NodeType::HtmlElement => "⛶",
        NodeType::CssRule => "¶",
        NodeType::Property | NodeType::Field | NodeType::Variable | NodeType::Constant => "@",
        NodeType::File
        | NodeType::Trait
        | NodeType::Impl
        | NodeType::Static
        | NodeType::Union
        | NodeType::Template
        | NodeType::Unknown => UNKNOWN_GLYPH,
    }
}

pub fn visibility_glyph(visibility: Visibility) -> Option<&'static str> {
    match visibility {
        Visibility::Public => Some(PUBLIC_GLYPH),
        Visibility::Private => Some(PRIVATE_GLYPH),
        Visibility::Unset => None,
    }
}

pub fn intent_glyph(intent: CssIntent) -> &'static str {
    match intent {
        CssIntent::Layout => "📐",
        CssIntent::Typography => "✍",
        CssIntent::Appearance => "💧",
    }
}
