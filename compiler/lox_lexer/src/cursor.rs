//! Byte cursor over the source text.
//!
//! Reads past the end yield `0x00`, so lookahead never needs a bounds check
//! at the call site. Interior null bytes also read as `0x00`; use
//! [`Cursor::is_eof`] to tell them apart.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte at the current position, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume and return the current byte.
    #[inline]
    pub(crate) fn bump(&mut self) -> u8 {
        let byte = self.current();
        self.pos += 1;
        byte
    }

    /// Consume the current byte if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false` so the loop stops at EOF.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Decode the full character starting at byte offset `start` and move
    /// the cursor just past it.
    ///
    /// Used for characters outside ASCII, which never start a token.
    pub(crate) fn finish_char(&mut self, start: usize) -> char {
        match self.source.get(start..).and_then(|rest| rest.chars().next()) {
            Some(ch) => {
                self.pos = start + ch.len_utf8();
                ch
            }
            None => char::REPLACEMENT_CHARACTER,
        }
    }

    /// Source text from `start` to the current position.
    ///
    /// Both ends must fall on character boundaries; the scanner only cuts
    /// tokens at ASCII bytes, which guarantees that.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default()
    }
}
