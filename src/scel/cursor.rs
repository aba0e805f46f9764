//! Byte cursor with offset tracking, little-endian primitives and UTF-16LE text.
//!
//! Every read is bounds-checked and fails with
//! [`ScelError::TruncatedBuffer`] instead of returning a short result.

use std::borrow::Cow;

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::UTF_16LE;

use super::types::error::{Result, ScelError};

/// Sequential reader over an immutable byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a cursor positioned at an absolute `offset`.
    ///
    /// The offset itself is not validated; the first read past the end fails.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self { data, pos: offset }
    }

    /// Current absolute byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remaining unread length.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns the next `n` bytes without advancing, or `None` if fewer remain.
    pub fn peek_bytes(&self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        self.data.get(self.pos..end)
    }

    /// Reads exactly `n` bytes and returns a view into the underlying data.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let slice = self.peek_bytes(n).ok_or(ScelError::TruncatedBuffer {
            offset: self.pos,
            needed: n,
            available: self.remaining(),
        })?;
        self.pos += n;
        Ok(slice)
    }

    /// Skips exactly `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    /// Reads a UTF-16LE string declared as `byte_len` bytes long.
    ///
    /// Odd lengths are followed by one padding byte in the file; the string is
    /// decoded as if that byte were zero and the cursor moves past it.
    pub fn read_utf16(&mut self, byte_len: usize) -> Result<String> {
        let padded_len = byte_len + byte_len % 2;
        let raw = &self.read_bytes(padded_len)?[..byte_len];
        let text = if byte_len % 2 == 1 {
            let mut even = raw.to_vec();
            even.push(0);
            decode_utf16le(&even).into_owned()
        } else {
            decode_utf16le(raw).into_owned()
        };
        Ok(text)
    }

    /// Reads a UTF-16LE string up to the next `0x0000` code unit.
    ///
    /// The terminator is searched on 2-byte boundaries relative to the start
    /// of the string and is consumed along with the text. Unlike a byte-wise
    /// search for `00 00`, this does not stop inside a pair such as `61 00 00 4E`.
    /// Running off the end without a terminator is a [`ScelError::TruncatedBuffer`].
    pub fn read_utf16_nul(&mut self) -> Result<String> {
        let start = self.pos;
        let tail = self.data.get(start..).unwrap_or_default();
        let end = tail
            .chunks_exact(2)
            .position(|unit| unit == [0, 0])
            .map(|unit_index| unit_index * 2)
            .ok_or(ScelError::TruncatedBuffer {
                offset: start,
                needed: tail.len() + 2,
                available: tail.len(),
            })?;
        let text = decode_utf16le(&tail[..end]).into_owned();
        self.pos = start + end + 2;
        Ok(text)
    }
}

/// Decodes UTF-16LE without BOM sniffing; unpaired surrogates become U+FFFD.
fn decode_utf16le(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _had_errors) = UTF_16LE.decode_without_bom_handling(bytes);
    text
}
