use xi_rope::Rope;

use crate::parsing::{
    blocks::BlockNode,
    inline::{InlineNode, Variant, kinds::Hashtag},
    parse_inline_for_block,
    rope::slice::slice_to_string,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block and content spans are within rope bounds
/// - Content spans are contained within their block spans
/// - Inline nodes tile the content span in order
/// - Every hashtag's raw text is `#` immediately followed by a non-empty tag
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[BlockNode], variant: Variant) {
    let n = rope.len();
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.content_span.start <= b.content_span.end,
            "content span inverted: {:?}",
            b.content_span
        );
        assert!(
            b.span.contains(b.content_span),
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );

        let mut at = b.content_span.start;
        for node in parse_inline_for_block(rope, b, variant) {
            let sp = node.span();
            assert_eq!(sp.start, at, "inline nodes leave a gap before {node:?}");
            at = sp.end;

            if let InlineNode::Hashtag { full, tag } = node {
                assert!(!tag.is_empty(), "empty hashtag at {full:?}");
                assert_eq!(
                    (full.start + 1, full.end),
                    (tag.start, tag.end),
                    "tag {tag:?} is not the body of {full:?}"
                );
                let raw = slice_to_string(rope, full);
                assert_eq!(raw.as_bytes()[0], Hashtag::TRIGGER, "hashtag {raw:?}");
            }
        }
        if b.kind.has_inline_content() {
            assert_eq!(at, b.content_span.end, "inline nodes stop short of content end");
        }
    }
}
