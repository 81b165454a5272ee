use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Hashtag, Variant},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (a paragraph's or heading's content span)
/// - `variant`: Which hashtag syntax to recognize
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them.
/// `` `#not-a-tag` `` is parsed as a code span.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str, variant: Variant) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_code_span(&mut cur).or_else(|| try_parse_hashtag(&mut cur, variant));
        if let Some(node) = node {
            let span = node.span();
            flush_text(&mut out, text_start, span.start);
            text_start = span.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the code span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse a hashtag starting at the current position.
///
/// Only the rest of the current line is offered to the matcher, so a tag
/// never spans a line break. Returns `None` if not at `#` or if the text
/// after it is not a valid tag for `variant`; the cursor is then untouched.
pub fn try_parse_hashtag(cur: &mut Cursor<'_>, variant: Variant) -> Option<InlineNode> {
    if cur.peek() != Some(Hashtag::TRIGGER) {
        return None;
    }

    let body = &cur.rest_of_line()[1..];
    let len = Hashtag::match_body(variant, body).filter(|&n| n > 0)?;

    let start = cur.pos();
    cur.bump_n(1 + len);
    let end = cur.pos();

    Some(InlineNode::Hashtag {
        full: Span { start, end },
        tag: Span {
            start: start + 1,
            end,
        },
    })
}
