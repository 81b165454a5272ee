use std::ops::Range;

/// A byte range `[start, end)` into the source text.
///
/// Parsed nodes store spans rather than copied text, so slicing the source
/// with a node's span reproduces exactly what the author wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slices `src` with this span.
    ///
    /// `src` must be the text the span was produced from; spans always fall
    /// on char boundaries of that text.
    pub fn text(self, src: &str) -> &str {
        &src[self.range()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 6).len(), 4);
        assert!(Span::new(3, 3).is_empty());
        assert!(Span::new(5, 3).is_empty());
    }

    #[test]
    fn containment() {
        let outer = Span::new(0, 10);
        assert!(outer.contains(Span::new(0, 10)));
        assert!(outer.contains(Span::new(3, 4)));
        assert!(!outer.contains(Span::new(9, 11)));
    }

    #[test]
    fn text_slices_source() {
        assert_eq!(Span::new(1, 4).text("#foo bar"), "foo");
    }
}
