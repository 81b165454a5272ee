use crate::parsing::rope::span::Span;

use super::kinds::FenceKind;

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// An ATX heading (`#` to `######`).
    Heading { level: u8 },
    /// A fenced code block (``` or ~~~). Raw zone: no inline parsing.
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
    },
}

impl BlockKind {
    /// Whether inline constructs (code spans, hashtags) are parsed in this block.
    pub fn has_inline_content(&self) -> bool {
        matches!(self, BlockKind::Paragraph | BlockKind::Heading { .. })
    }
}

/// A parsed block node with its kind and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including markers, fences and the final
    /// line ending.
    pub span: Span,
    /// Content span: the text inline parsing (or code rendering) sees.
    ///
    /// Excludes heading markers, fence lines and the final line ending.
    pub content_span: Span,
}
