use std::fmt;

/// An immutable cursor over the input buffer of a single parse.
///
/// Advancing a cursor produces a new cursor at a later offset; the original
/// stays valid and cheap to copy (it is a byte slice reference plus two
/// `usize`/`bool` fields). Log lines are single-line input, so a byte offset
/// is all the location information this crate ever needs — no line/column
/// translation.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
    trace_enabled: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str, trace_enabled: bool) -> Self {
        Self { input: input.as_bytes(), offset: 0, trace_enabled }
    }

    pub fn from_bytes(input: &'a [u8], trace_enabled: bool) -> Self {
        Self { input, offset: 0, trace_enabled }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.trace_enabled
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// The unconsumed tail of the input buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    pub fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Returns a cursor advanced by `n` bytes. `n` must not overrun the buffer.
    pub fn advance(&self, n: usize) -> Self {
        debug_assert!(self.offset + n <= self.input.len());
        Self { input: self.input, offset: self.offset + n, trace_enabled: self.trace_enabled }
    }

}

impl<'a> fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor(offset={}, remaining={:?})", self.offset, String::from_utf8_lossy(self.remaining()))
    }
}

impl<'a> fmt::Display for Cursor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}", self.offset)
    }
}
