//! A positioned, read-only view over the input text.
//!
//! The cursor borrows the full input and tracks a byte offset into it. All
//! lexical rules consume characters through [`Cursor::advance`] (or its
//! single-character form [`Cursor::bump`]); the offset only ever moves
//! forward and always lands on a UTF-8 character boundary. The backing text
//! is never copied — [`Cursor::view`] shares it at a new offset, and only
//! [`Cursor::slice`] produces an owned substring.

/// Read-only view over the input with a movable position.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Cursor { text, offset: 0 }
    }

    /// Current byte offset into the backing text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left between the offset and the end of the input.
    pub fn remaining(&self) -> usize {
        self.text.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// The unconsumed tail of the input, shared with the backing text.
    pub fn remainder(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Character `k` positions past the offset, if the input reaches that far.
    pub fn peek(&self, k: usize) -> Option<char> {
        self.remainder().chars().nth(k)
    }

    /// Move the offset forward by `n` characters, stopping at end of input.
    pub fn advance(&mut self, n: usize) {
        for c in self.remainder().chars().take(n) {
            self.offset += c.len_utf8();
        }
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.remainder().chars().next()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Owned copy of `len` characters starting `start` characters past the
    /// offset. Truncated if the input ends first.
    pub fn slice(&self, start: usize, len: usize) -> String {
        self.remainder().chars().skip(start).take(len).collect()
    }

    /// A new cursor over the same backing text, positioned `start`
    /// characters past this one's offset.
    pub fn view(&self, start: usize) -> Cursor<'a> {
        let mut consumed = 0;
        for c in self.remainder().chars().take(start) {
            consumed += c.len_utf8();
        }
        Cursor {
            text: self.text,
            offset: self.offset + consumed,
        }
    }

    /// Advance past whitespace (space, tab, line feed, carriage return).
    ///
    /// With the `comments` feature enabled this also skips `//` line
    /// comments and `/* ... */` block comments, re-checking for whitespace
    /// after each one until neither remains. An unterminated block comment
    /// consumes to near the end of input; whatever is left over is for the
    /// parser to reject.
    pub fn skip_whitespace(&mut self) {
        self.skip_plain_whitespace();
        #[cfg(feature = "comments")]
        while self.skip_comment() {
            self.skip_plain_whitespace();
        }
    }

    fn skip_plain_whitespace(&mut self) {
        while matches!(self.peek(0), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance(1);
        }
    }

    #[cfg(feature = "comments")]
    fn skip_comment(&mut self) -> bool {
        if self.peek(0) != Some('/') {
            return false;
        }
        match self.peek(1) {
            Some('/') => {
                self.advance(2);
                // Leave the newline itself for the whitespace pass.
                while let Some(c) = self.peek(0) {
                    if c == '\n' {
                        break;
                    }
                    self.advance(1);
                }
                true
            }
            Some('*') => {
                self.advance(2);
                while self.peek(1).is_some() {
                    if self.peek(0) == Some('*') && self.peek(1) == Some('/') {
                        self.advance(2);
                        return true;
                    }
                    self.advance(1);
                }
                true
            }
            _ => false,
        }
    }
}
