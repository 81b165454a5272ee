pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use inline::Variant;
use rope::{lines_with_spans, slice::slice_to_string};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Inline parse for a block node. Raw blocks (fenced code) yield nothing.
pub fn parse_inline_for_block(
    rope: &Rope,
    b: &BlockNode,
    variant: Variant,
) -> Vec<inline::InlineNode> {
    if !b.kind.has_inline_content() {
        return vec![];
    }
    let s = slice_to_string(rope, b.content_span);
    inline::parse_inline(b.content_span.start, &s, variant)
}
