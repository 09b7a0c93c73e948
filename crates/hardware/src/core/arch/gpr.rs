//! Y86-64 General-Purpose Register File.
//!
//! This module implements the fifteen general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains the `%rax`-`%r14` slots as 64-bit unsigned values.
//! 2. **Typed Access:** Indexes slots by [`Register`], so no out-of-range index can exist.

use crate::isa::abi::{NUM_REGS, Register};

/// General-Purpose Register file.
///
/// Every slot is addressable only through a [`Register`]; the reserved "no register"
/// nibble never reaches this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    #[inline]
    pub const fn read(&self, reg: Register) -> u64 {
        self.regs[reg.index()]
    }

    /// Writes a value to a general-purpose register.
    #[inline]
    pub const fn write(&mut self, reg: Register, val: u64) {
        self.regs[reg.index()] = val;
    }

    /// Returns every slot in encoding order.
    pub const fn as_array(&self) -> &[u64; NUM_REGS] {
        &self.regs
    }
}
