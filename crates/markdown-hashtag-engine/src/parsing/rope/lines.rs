use xi_rope::Rope;

use super::span::Span;

/// A single physical line of the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope, line ending included.
    pub span: Span,
    /// The line text, line ending included.
    pub text: String,
}

impl LineRef {
    /// Length of the line without its trailing `\n` or `\r\n`.
    pub fn content_len(&self) -> usize {
        self.text.trim_end_matches(['\r', '\n']).len()
    }

    /// Byte span of the line without its line ending.
    pub fn content_span(&self) -> Span {
        Span::new(self.span.start, self.span.start + self.content_len())
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so line endings stay attached and spans tile the rope
/// without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span::new(start, offset),
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("one\ntwo\r\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span::new(0, 4));
        assert_eq!(lines[1].span, Span::new(4, 9));
        assert_eq!(lines[2].span, Span::new(9, 14));
    }

    #[test]
    fn content_span_drops_line_ending() {
        let rope = Rope::from("two\r\n");
        let line = lines_with_spans(&rope).next().unwrap();
        assert_eq!(line.content_span(), Span::new(0, 3));
    }
}
