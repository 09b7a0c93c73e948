//! Register File.
//!
//! This module provides the `RegisterFile` struct, the interface the Decode and
//! Writeback stages use for architectural registers. It provides:
//! 1. **Abstraction:** A single set of methods for reading and writing register values.
//! 2. **Observability:** A `Display` dump of the register state for tracing and tests.

use std::fmt;

use crate::core::arch::gpr::Gpr;
use crate::isa::abi::Register;

/// Register file holding the fifteen general-purpose registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a value from a general-purpose register.
    #[inline]
    pub const fn read(&self, reg: Register) -> u64 {
        self.gpr.read(reg)
    }

    /// Writes a value to a general-purpose register.
    #[inline]
    pub const fn write(&mut self, reg: Register, val: u64) {
        self.gpr.write(reg, val);
    }

    /// Returns `(register, value)` pairs in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, u64)> + '_ {
        Register::ALL
            .iter()
            .copied()
            .zip(self.gpr.as_array().iter().copied())
    }
}

impl fmt::Display for RegisterFile {
    /// Formats registers in pairs with hexadecimal values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut column = 0;
        for (reg, val) in self.iter() {
            write!(f, "{:<5}={val:#018x}", reg.name())?;
            column += 1;
            if column % 2 == 0 {
                writeln!(f)?;
            } else {
                f.write_str(" ")?;
            }
        }
        if column % 2 != 0 {
            writeln!(f)?;
        }
        Ok(())
    }
}
