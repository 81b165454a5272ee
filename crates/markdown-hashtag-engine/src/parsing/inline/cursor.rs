/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Operates over a block's content while tracking the absolute byte position
/// in the original rope (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the rope (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The rest of the current line, from the cursor up to and including
    /// the next `\n` (or to the end of input).
    ///
    /// Constructs that must not cross a line boundary match against this.
    /// The cursor must sit on a char boundary.
    pub fn rest_of_line(&self) -> &'a str {
        let rest = &self.s[self.i.min(self.s.len())..];
        match rest.find('\n') {
            Some(nl) => &rest[..=nl],
            None => rest,
        }
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
