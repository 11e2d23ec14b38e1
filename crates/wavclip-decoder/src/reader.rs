//! Bounds-checked little-endian field access.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{DecodeError, DecodeResult};

/// Read-only view over a WAV buffer that turns every fixed-offset field
/// access into a checked operation.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteReader<'a> {
    /// Wraps a byte buffer.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Total buffer length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `width` bytes starting at `offset`, or a malformed header
    /// error naming `field`.
    pub fn slice(&self, offset: usize, width: usize, field: &'static str) -> DecodeResult<&'a [u8]> {
        offset
            .checked_add(width)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or_else(|| DecodeError::truncated(field, offset, width, self.bytes.len()))
    }

    /// Reads a u16 LE at `offset`.
    pub fn read_u16(&self, offset: usize, field: &'static str) -> DecodeResult<u16> {
        self.slice(offset, 2, field).map(LittleEndian::read_u16)
    }

    /// Reads a u32 LE at `offset`.
    pub fn read_u32(&self, offset: usize, field: &'static str) -> DecodeResult<u32> {
        self.slice(offset, 4, field).map(LittleEndian::read_u32)
    }

    /// Returns true if the four bytes at `offset` equal `tag`.
    pub fn has_tag(&self, offset: usize, tag: &[u8; 4]) -> bool {
        self.slice(offset, 4, "chunk tag")
            .map(|found| found == tag)
            .unwrap_or(false)
    }

    /// Number of bytes from `offset` to the end of the buffer.
    pub fn remaining_from(&self, offset: usize) -> usize {
        self.bytes.len().saturating_sub(offset)
    }
}
