use std::ops::Range;

/// ATX heading syntax.
///
/// A heading needs one to six `#` followed by a space, a tab or the end of
/// the line. `#tag` at the start of a line is therefore *not* a heading and
/// falls through to paragraph (and hashtag) parsing.
pub struct Heading;

/// A recognized heading opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingOpen {
    pub level: u8,
    /// Byte range of the heading text within the line.
    pub content: Range<usize>,
}

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Recognizes an ATX heading in `line` (line ending already stripped).
    pub fn open(line: &str) -> Option<HeadingOpen> {
        let b = line.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if !matches!(b.get(level), None | Some(b' ' | b'\t')) {
            return None;
        }

        let mut start = level;
        while matches!(b.get(start), Some(b' ' | b'\t')) {
            start += 1;
        }
        let mut end = line.trim_end_matches([' ', '\t']).len().max(start);

        // Optional closing sequence: a run of `#` that is the whole content
        // or is preceded by whitespace.
        let run = b[start..end]
            .iter()
            .rev()
            .take_while(|&&c| c == Self::MARKER)
            .count();
        if run > 0 {
            let before = end - run;
            if before == start || matches!(b[before - 1], b' ' | b'\t') {
                end = line[..before].trim_end_matches([' ', '\t']).len().max(start);
            }
        }

        Some(HeadingOpen {
            level: level as u8,
            content: start..end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("### Deep", 3, "Deep")]
    #[case("## Closed ##", 2, "Closed")]
    #[case("# Tagged #idea", 1, "Tagged #idea")]
    #[case("# #idea", 1, "#idea")]
    #[case("#", 1, "")]
    #[case("## ##", 2, "")]
    fn recognizes_headings(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        let open = Heading::open(line).expect("heading");
        assert_eq!(open.level, level);
        assert_eq!(&line[open.content], text);
    }

    #[rstest]
    #[case("#tag")]
    #[case("####### seven")]
    #[case("plain text")]
    #[case("")]
    fn rejects_non_headings(#[case] line: &str) {
        assert_eq!(Heading::open(line), None);
    }
}
