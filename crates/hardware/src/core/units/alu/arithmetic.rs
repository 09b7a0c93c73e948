//! ALU arithmetic operations.
//!
//! Implements 64-bit wrapping addition and subtraction together with the
//! overflow rule used by the flags: a result that wrapped past either operand.

use crate::isa::instruction::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be `Add` or `Sub`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// `(result, overflow)`. `result` is taken modulo 2^64. For `Add`, overflow is set
/// when the result is smaller than either input; for `Sub`, when it is larger than
/// either input. Non-arithmetic operations return `(0, false)`.
pub const fn execute(op: AluOp, a: u64, b: u64) -> (u64, bool) {
    match op {
        AluOp::Add => {
            let r = a.wrapping_add(b);
            (r, r < a || r < b)
        }
        AluOp::Sub => {
            let r = a.wrapping_sub(b);
            (r, r > a || r > b)
        }
        AluOp::And | AluOp::Xor => (0, false),
    }
}
