//! Escaping for the three contexts markup is written in: element text,
//! double-quoted attribute values and link destinations.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

/// Bytes percent-encoded in a link destination: everything except ASCII
/// alphanumerics and the URL punctuation CommonMark leaves alone.
const DESTINATION: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Escapes `&`, `<` and `>` for element text.
pub fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes `&`, `<`, `>` and `"` for a double-quoted attribute value.
pub fn attribute(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Percent-encodes a link destination.
///
/// HTML entity and numeric character references are resolved first, so
/// `a&amp;b` and `a&b` produce the same URL. Existing `%XX` escapes are kept
/// as they are; every other byte outside the safe set is encoded.
pub fn url(dest: &str) -> String {
    let resolved = html_escape::decode_html_entities(dest);
    let bytes = resolved.as_bytes();

    let mut out = String::with_capacity(bytes.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && is_hex(bytes.get(i + 1)) && is_hex(bytes.get(i + 2)) {
            out.extend(percent_encode(&bytes[start..i], DESTINATION));
            out.push_str(&resolved[i..i + 3]);
            i += 3;
            start = i;
        } else {
            i += 1;
        }
    }
    out.extend(percent_encode(&bytes[start..], DESTINATION));
    out
}

fn is_hex(b: Option<&u8>) -> bool {
    b.is_some_and(u8::is_ascii_hexdigit)
}
