//! Byte scanner for reference strings.
//!
//! Wraps an ASCII byte slice and provides methods for reading letters and
//! digit runs with position tracking and error handling.

use crate::error::GridError;

/// Scanner over an ASCII reference string.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Reads one grid letter, uppercased.
    pub fn read_letter(&mut self, context: &'static str) -> Result<u8, GridError> {
        let byte = self.peek().ok_or(GridError::UnexpectedEnd { context })?;
        let upper = byte.to_ascii_uppercase();
        if upper == b'I' {
            return Err(GridError::LetterI { position: self.pos });
        }
        if !upper.is_ascii_uppercase() {
            return Err(GridError::InvalidLetter {
                position: self.pos,
                found: char::from(byte),
            });
        }
        self.pos += 1;
        Ok(upper)
    }

    /// Reads the longest run of ASCII digits (possibly empty).
    pub fn read_digits(&mut self) -> &'a [u8] {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }

    /// Skips ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }
}

/// Folds a run of ASCII digits into its value.
pub fn digits_value(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'))
}
