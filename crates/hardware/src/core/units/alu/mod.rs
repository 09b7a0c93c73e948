//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by `OPq` in the Execute stage.
//! It computes the 64-bit result and the complete set of condition flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Xor

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (and, xor).
pub mod logic;

use crate::core::arch::Flags;
use crate::isa::instruction::AluOp;

/// Bit holding the sign of a 64-bit result.
const SIGN_BIT: u64 = 1 << 63;

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation and derives the resulting flags.
    ///
    /// Every flag is assigned on every call: `zf` and `sf` from the result,
    /// `of` from the arithmetic overflow rule, and `of = false` for the logical
    /// operations.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`valA`)
    /// * `b`  - Second operand (`valB`)
    ///
    /// # Examples
    ///
    /// ```
    /// use y86sim_core::core::units::alu::Alu;
    /// use y86sim_core::isa::instruction::AluOp;
    ///
    /// let (result, flags) = Alu::execute(AluOp::Add, 5, 3);
    /// assert_eq!(result, 8);
    /// assert!(!flags.zf && !flags.sf);
    ///
    /// let (result, flags) = Alu::execute(AluOp::Xor, 0xFF, 0xFF);
    /// assert_eq!(result, 0);
    /// assert!(flags.zf);
    /// ```
    pub const fn execute(op: AluOp, a: u64, b: u64) -> (u64, Flags) {
        let (result, of) = match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Xor => (logic::execute(op, a, b), false),
        };
        let flags = Flags {
            sf: result & SIGN_BIT != 0,
            zf: result == 0,
            of,
        };
        (result, flags)
    }
}
