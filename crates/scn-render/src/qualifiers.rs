//! Qualifier tokens for an entity's main line

use scn_core::CodeNode;
use scn_core::symbols::{ASYNC_GLYPH, PURE_GLYPH, THROWS_GLYPH, visibility_glyph};

/// Qualifier glyphs in wire order: visibility, async, throws, pure.
///
/// Node type is not consulted; whatever flags are set get rendered.
pub fn qualifiers(node: &CodeNode) -> Vec<&'static str> {
    let mut tokens = Vec::with_capacity(4);
    if let Some(glyph) = visibility_glyph(node.visibility) {
        tokens.push(glyph);
    }
    if node.is_async {
        tokens.push(ASYNC_GLYPH);
    }
    if node.can_throw {
        tokens.push(THROWS_GLYPH);
    }
    if node.is_pure {
        tokens.push(PURE_GLYPH);
    }
    tokens
}
