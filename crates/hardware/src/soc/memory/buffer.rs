//! Memory Buffer Implementation.
//!
//! This module provides the flat, byte-addressable memory of the simulated machine.
//! It provides:
//! 1. **Bounds Checking:** Every access is validated against the capacity for its full
//!    span before any byte is touched.
//! 2. **Little-Endian Words:** Explicit 8-byte encode/decode at arbitrary byte offsets.
//! 3. **Image Loading:** Bulk copies used by the loader before the first cycle.

use crate::common::constants::WORD_SIZE;
use crate::common::{AccessType, Fault};

/// Fixed-capacity, zero-initialised byte memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the whole memory contents.
    pub const fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Zero-fills the whole memory.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Validates that `[addr, addr + len)` lies inside memory and returns it as a range.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if any byte of the span is out of range,
    /// including when `addr + len` overflows.
    pub fn check(
        &self,
        addr: u64,
        len: usize,
        access: AccessType,
    ) -> Result<std::ops::Range<usize>, Fault> {
        let fault = Fault::MemoryFault { addr, len, access };
        let start = usize::try_from(addr).map_err(|_| fault)?;
        let end = start.checked_add(len).ok_or(fault)?;
        if end > self.capacity() {
            return Err(fault);
        }
        Ok(start..end)
    }

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if `addr` is out of range.
    pub fn read_u8(&self, addr: u64, access: AccessType) -> Result<u8, Fault> {
        let range = self.check(addr, 1, access)?;
        Ok(self.bytes[range.start])
    }

    /// Borrows `len` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if the span is out of range.
    pub fn read_slice(&self, addr: u64, len: usize, access: AccessType) -> Result<&[u8], Fault> {
        let range = self.check(addr, len, access)?;
        Ok(&self.bytes[range])
    }

    /// Reads a little-endian quad word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if any of the eight bytes is out of range.
    pub fn read_u64(&self, addr: u64) -> Result<u64, Fault> {
        let range = self.check(addr, WORD_SIZE, AccessType::Read)?;
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(&self.bytes[range]);
        Ok(u64::from_le_bytes(word))
    }

    /// Writes a little-endian quad word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if any of the eight bytes is out of range; in
    /// that case memory is left untouched.
    pub fn write_u64(&mut self, addr: u64, val: u64) -> Result<(), Fault> {
        let range = self.check(addr, WORD_SIZE, AccessType::Write)?;
        self.bytes[range].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Copies `data` into memory starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if the span is out of range; in that case
    /// memory is left untouched.
    pub fn write_slice(&mut self, addr: u64, data: &[u8]) -> Result<(), Fault> {
        let range = self.check(addr, data.len(), AccessType::Write)?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }
}
