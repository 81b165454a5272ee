//! Hashtag syntax: the trigger byte and the tag body matcher.
//!
//! The matcher is a pure function over the text that follows `#` on the
//! current line. It reports how many bytes of that text belong to the tag,
//! or `None` when the `#` does not start a tag at all.

use unicode_categories::UnicodeCategories;
use unicode_segmentation::UnicodeSegmentation;

use super::variant::Variant;

/// Hashtag inline type with owned trigger constant and body matcher.
pub struct Hashtag;

impl Hashtag {
    /// The byte that starts every hashtag.
    pub const TRIGGER: u8 = b'#';

    /// Symbols allowed inside a tag besides letters and digits.
    pub const SYMBOLS: [char; 3] = ['_', '-', '/'];

    /// Matches a tag body at the start of `body`, the text right after `#`.
    ///
    /// Returns the byte length of the tag body, which is never zero. `body`
    /// should not extend past the current line; a line break always ends the
    /// tag anyway.
    pub fn match_body(variant: Variant, body: &str) -> Option<usize> {
        match variant {
            Variant::Default => match_default(body),
            Variant::Obsidian => match_obsidian(body),
        }
    }

    /// Whether `c` may appear inside a tag under either variant.
    pub fn is_tag_char(c: char) -> bool {
        is_letter(c) || is_digit(c) || Self::SYMBOLS.contains(&c)
    }
}

/// General category L: Lu, Ll, Lt, Lm or Lo.
fn is_letter(c: char) -> bool {
    c.is_letter()
}

/// General category Nd. Fractions, superscripts and letter numbers are not
/// digits.
fn is_digit(c: char) -> bool {
    c.is_number_decimal_digit()
}

/// Letter first, then the longest run of tag characters.
fn match_default(body: &str) -> Option<usize> {
    let first = body.chars().next().filter(|&c| is_letter(c))?;
    let head = first.len_utf8();
    let rest = &body[head..];
    let tail = rest
        .find(|c: char| !Hashtag::is_tag_char(c))
        .unwrap_or(rest.len());
    Some(head + tail)
}

/// Grapheme-wise scan up to the first whitespace, stopping at the first
/// single-code-point cluster that is neither a tag character nor an emoji.
fn match_obsidian(body: &str) -> Option<usize> {
    let window = match body.find(char::is_whitespace) {
        Some(ws) => &body[..ws],
        None => body,
    };
    let end = scan_clusters(window);
    let tag = &window[..end];
    tag.chars().any(|c| !is_digit(c)).then_some(end)
}

fn scan_clusters(window: &str) -> usize {
    window
        .grapheme_indices(true)
        .find(|(_, cluster)| terminates(cluster))
        .map_or(window.len(), |(at, _)| at)
}

fn terminates(cluster: &str) -> bool {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => !Hashtag::is_tag_char(c) && emojis::get(cluster).is_none(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tag(variant: Variant, body: &str) -> Option<&str> {
        Hashtag::match_body(variant, body).map(|n| &body[..n])
    }

    #[rstest]
    #[case("", None)]
    #[case("foo", Some("foo"))]
    #[case("foo bar", Some("foo"))]
    #[case("foo\n#bar", Some("foo"))]
    #[case("foo-bar", Some("foo-bar"))]
    #[case("foo_bar", Some("foo_bar"))]
    #[case("foo/bar", Some("foo/bar"))]
    #[case("foo123", Some("foo123"))]
    #[case("f.", Some("f"))]
    #[case("tag%tag", Some("tag"))]
    #[case("1foo", None)]
    #[case(" foo", None)]
    #[case("_foo", None)]
    #[case("日本語 text", Some("日本語"))]
    #[case("café,", Some("café"))]
    #[case("✅/🚧", None)]
    #[case("foo✅", Some("foo"))]
    fn default_variant(#[case] body: &str, #[case] want: Option<&str>) {
        assert_eq!(tag(Variant::Default, body), want);
    }

    #[rstest]
    #[case("", None)]
    #[case("123tag", Some("123tag"))]
    #[case("123", None)]
    #[case("123 tag", None)]
    #[case("321/123", Some("321/123"))]
    #[case("tag%tag", Some("tag"))]
    #[case("asd_123", Some("asd_123"))]
    #[case("asd-123", Some("asd-123"))]
    #[case("asd/123", Some("asd/123"))]
    #[case("✅/🚧", Some("✅/🚧"))]
    #[case("done✅ later", Some("done✅"))]
    #[case("👍🏽great", Some("👍🏽great"))]
    #[case("foo\nbar", Some("foo"))]
    #[case("foo.bar", Some("foo"))]
    #[case(".foo", None)]
    #[case(" foo", None)]
    fn obsidian_variant(#[case] body: &str, #[case] want: Option<&str>) {
        assert_eq!(tag(Variant::Obsidian, body), want);
    }

    /// Letters are general category L and digits are Nd, nothing wider.
    #[rstest]
    #[case::letter_number_cannot_start(Variant::Default, "Ⅻ rest", None)]
    #[case::roman_numeral_small(Variant::Default, "ⅰv rest", None)]
    #[case::spacing_mark_cannot_start(Variant::Default, "\u{93E}x rest", None)]
    #[case::modifier_letter_starts(Variant::Default, "ʰi", Some("ʰi"))]
    #[case::fraction_ends_default_tag(Variant::Default, "a½b", Some("a"))]
    #[case::superscript_ends_obsidian_tag(Variant::Obsidian, "x²y", Some("x"))]
    #[case::fraction_alone(Variant::Obsidian, "½", None)]
    #[case::digits_before_fraction(Variant::Obsidian, "12½", None)]
    #[case::other_scripts_digits(Variant::Obsidian, "٣٤", None)]
    #[case::other_scripts_digits_and_letter(Variant::Obsidian, "٣٤a", Some("٣٤a"))]
    fn unicode_classes(#[case] variant: Variant, #[case] body: &str, #[case] want: Option<&str>) {
        assert_eq!(tag(variant, body), want);
    }

    #[test]
    fn terminator_right_after_first_letter_keeps_single_letter_tag() {
        assert_eq!(Hashtag::match_body(Variant::Default, "a!"), Some(1));
    }

    #[test]
    fn multi_byte_first_letter_counts_its_full_width() {
        assert_eq!(Hashtag::match_body(Variant::Default, "é"), Some(2));
    }

    #[test]
    fn combining_sequence_is_one_cluster_under_obsidian() {
        // "e" + COMBINING ACUTE ACCENT, then a full stop.
        let body = "cafe\u{301}.";
        assert_eq!(tag(Variant::Obsidian, body), Some("cafe\u{301}"));
    }

    /// Cutting the window at the first whitespace must give the same answer
    /// as scanning the whole line, whenever that whitespace is a cluster of
    /// its own.
    #[rstest]
    #[case("foo bar")]
    #[case("foo\tbar")]
    #[case("✅ done")]
    #[case("123 abc")]
    #[case("abc/def ghi%")]
    #[case("a\u{3000}b")]
    #[case("x\n")]
    #[case("no_space_at_all")]
    fn whitespace_window_matches_full_scan(#[case] body: &str) {
        let full = scan_clusters(body);
        let full_scan = body[..full]
            .chars()
            .any(|c| !is_digit(c))
            .then_some(full);
        assert_eq!(Hashtag::match_body(Variant::Obsidian, body), full_scan);
    }

    #[test]
    fn crlf_ends_obsidian_tag() {
        // "\r\n" is a single two-code-point cluster; only the whitespace
        // window keeps it from being swallowed.
        assert_eq!(tag(Variant::Obsidian, "foo\r\nbar"), Some("foo"));
    }
}
