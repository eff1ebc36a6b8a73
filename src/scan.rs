//! Cursor based byte scanner.
//!
//! [`Scanner`] never copies, every consumed token is a subslice of the scanned buffer and lives as
//! long as that buffer does.
//!
//! An end of line is either `\r\n`, a lone `\r` or a lone `\n`.
use crate::matches;

/// Byte scanner with an explicit cursor.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create new [`Scanner`] positioned at the start of `bytes`.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Returns the unconsumed bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Returns the cursor position, which is also the amount of bytes parsed.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    // ===== Consume =====

    /// Consume bytes until `stop` returns `true` or the buffer is exhausted.
    pub fn consume_until_mask(&mut self, stop: fn(u8) -> bool) -> &'a [u8] {
        let rest = self.rest();
        let len = rest.iter().position(|&b| stop(b)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume bytes while `keep` returns `true`.
    pub fn consume_while(&mut self, keep: fn(u8) -> bool) -> &'a [u8] {
        let rest = self.rest();
        let len = rest.iter().position(|&b| !keep(b)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume bytes until `byte` or the buffer is exhausted, `byte` itself is not consumed.
    pub fn consume_until(&mut self, byte: u8) -> &'a [u8] {
        let rest = self.rest();
        let len = rest.iter().position(|&b| b == byte).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume a run of ASCII letters.
    #[inline]
    pub fn consume_word(&mut self) -> &'a [u8] {
        self.consume_while(matches::is_word)
    }

    /// Consume until whitespace or end of line.
    #[inline]
    pub fn consume_until_whitespace(&mut self) -> &'a [u8] {
        self.consume_until_mask(matches::is_eol_or_whitespace)
    }

    /// Consume until end of line.
    #[inline]
    pub fn consume_until_eol(&mut self) -> &'a [u8] {
        self.consume_until_mask(matches::is_eol)
    }

    /// Consume until an ASCII digit on the current line.
    #[inline]
    pub fn consume_until_digit(&mut self) -> &'a [u8] {
        self.consume_until_mask(|b| b.is_ascii_digit() || matches::is_eol(b))
    }

    /// Skip `' '` and `\t`.
    #[inline]
    pub fn consume_whitespace(&mut self) {
        self.consume_while(matches::is_whitespace);
    }

    /// Consume at most `len` bytes.
    pub fn consume_length(&mut self, len: usize) -> &'a [u8] {
        let rest = self.rest();
        let len = len.min(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume a run of ASCII digits as a decimal integer.
    ///
    /// Returns `None` if there is no digit at the cursor or the value does not fit in [`u32`].
    pub fn consume_integer(&mut self) -> Option<u32> {
        let start = self.pos;
        let digits = self.consume_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            return None;
        }
        let value = digits.iter().try_fold(0u32, |acc, &b| {
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        });
        if value.is_none() {
            self.pos = start;
        }
        value
    }

    // ===== Expect =====

    /// Consume `byte` if it is the next byte.
    pub fn expect(&mut self, byte: u8) -> bool {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume an end of line if it is at the cursor.
    pub fn expect_eol(&mut self) -> bool {
        match self.peek() {
            Some(b'\r') => {
                self.pos += 1;
                self.expect(b'\n');
                true
            }
            Some(b'\n') => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume through `byte` on the current line, returning the bytes before it.
    ///
    /// Returns `None` and leaves the cursor untouched if an end of line or the end of the buffer
    /// comes first.
    pub fn get_thru(&mut self, byte: u8) -> Option<&'a [u8]> {
        let rest = self.rest();
        let len = rest.iter().position(|&b| b == byte || matches::is_eol(b))?;
        if rest[len] != byte {
            return None;
        }
        self.pos += len + 1;
        Some(&rest[..len])
    }

    /// Consume through the next end of line, returning the line content.
    ///
    /// Returns `None` and leaves the cursor untouched if the buffer ends first.
    pub fn get_thru_eol(&mut self) -> Option<&'a [u8]> {
        let start = self.pos;
        let line = self.consume_until_eol();
        if self.expect_eol() {
            Some(line)
        } else {
            self.pos = start;
            None
        }
    }
}
