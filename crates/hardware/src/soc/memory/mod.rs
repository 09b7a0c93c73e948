//! Simulated Memory.
//!
//! This module implements the flat memory of the simulated machine. It provides:
//! 1. **Buffer:** Zero-initialised backing storage with bounds-checked byte and
//!    quad-word accessors.
//!
//! Memory has no base address and no devices: offset 0 is the first byte the
//! loader writes and the address of the first instruction fetched.

/// Bounds-checked byte buffer backing simulated memory.
pub mod buffer;

pub use self::buffer::Memory;
