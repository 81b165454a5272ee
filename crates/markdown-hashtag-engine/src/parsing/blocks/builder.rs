use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceKind},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        content_start: usize,
        content_end: usize,
        last_line_end: usize,
    },
    Fence {
        kind: FenceKind,
        start: usize,
        content_start: usize,
        last_line_end: usize,
    },
}

/// Phase 2 of block parsing: turns classified lines into [`BlockNode`]s.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if let LeafState::Fence { .. } = self.leaf {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        // Precedence: fence, then heading, then paragraph text.
        if let Some(kind) = c.fence {
            self.flush_paragraph();
            self.leaf = LeafState::Fence {
                kind,
                start: c.line.start,
                content_start: c.line.end,
                last_line_end: c.line.end,
            };
            return;
        }

        if let Some((level, content_span)) = c.heading {
            self.flush_paragraph();
            self.out.push(BlockNode {
                kind: BlockKind::Heading { level },
                span: c.line,
                content_span,
            });
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        if let LeafState::Fence {
            kind,
            start,
            content_start,
            last_line_end,
        } = self.leaf
        {
            // Unterminated fence: runs to the end of the document.
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode { kind },
                span: Span::new(start, last_line_end),
                content_span: Span::new(content_start, last_line_end),
            });
        }
        self.out
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            kind,
            start,
            content_start,
            ..
        } = self.leaf
        else {
            return;
        };

        if CodeFence::closes(kind, c.fence) {
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode { kind },
                span: Span::new(start, c.line.end),
                content_span: Span::new(content_start, c.line.start),
            });
            self.leaf = LeafState::None;
        } else {
            self.leaf = LeafState::Fence {
                kind,
                start,
                content_start,
                last_line_end: c.line.end,
            };
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        self.leaf = match self.leaf {
            LeafState::Paragraph {
                start,
                content_start,
                ..
            } => LeafState::Paragraph {
                start,
                content_start,
                content_end: c.content.end,
                last_line_end: c.line.end,
            },
            _ => LeafState::Paragraph {
                start: c.line.start,
                content_start: c.content.start + c.indent,
                content_end: c.content.end,
                last_line_end: c.line.end,
            },
        };
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph {
            start,
            content_start,
            content_end,
            last_line_end,
        } = self.leaf
        {
            self.out.push(BlockNode {
                kind: BlockKind::Paragraph,
                span: Span::new(start, last_line_end),
                content_span: Span::new(content_start, content_end),
            });
            self.leaf = LeafState::None;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
