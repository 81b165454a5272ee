use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the rope.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A hashtag such as `#project/alpha`.
    Hashtag {
        /// The raw text of the occurrence, leading `#` included.
        full: Span,
        /// The tag body following `#`. Never empty.
        tag: Span,
    },
}

impl InlineNode {
    /// The full source extent of the node.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } | InlineNode::Hashtag { full, .. } => *full,
        }
    }

    /// Short kind name, used in dumps and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineNode::Text(_) => "Text",
            InlineNode::CodeSpan { .. } => "CodeSpan",
            InlineNode::Hashtag { .. } => "Hashtag",
        }
    }
}
