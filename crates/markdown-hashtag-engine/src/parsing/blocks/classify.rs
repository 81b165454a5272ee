use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceKind, Heading};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, line ending included.
    pub line: Span,
    /// The line without its line ending.
    pub content: Span,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence: Option<FenceKind>,
    /// Heading level and text span, if the line is an ATX heading.
    pub heading: Option<(u8, Span)>,
    /// Offset of the first non-blank byte, for paragraph starts.
    pub indent: usize,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let content = lr.content_span();
        let text = &lr.text[..content.len()];
        let indent = text.len() - text.trim_start_matches([' ', '\t']).len();
        let base = lr.span.start;

        LineClass {
            line: lr.span,
            content,
            is_blank: text.trim().is_empty(),
            fence: CodeFence::sig(text),
            heading: Heading::open(text).map(|h| {
                (
                    h.level,
                    Span::new(base + h.content.start, base + h.content.end),
                )
            }),
            indent,
        }
    }
}
