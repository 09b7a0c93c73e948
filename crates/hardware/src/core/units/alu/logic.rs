//! ALU logical operations.
//!
//! Implements bitwise AND and XOR over the full 64 bits. Logical operations
//! never overflow.

use crate::isa::instruction::AluOp;

/// Executes a logical operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    match op {
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Add | AluOp::Sub => 0,
    }
}
