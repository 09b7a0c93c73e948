//! Y86-64 opcode and function-code values.
//!
//! The high nibble of an instruction's first byte selects its class; for
//! `cmovXX`, `jXX` and `OPq` the low nibble selects the condition or ALU
//! operation.

/// `halt`
pub const OP_HALT: u8 = 0x0;
/// `nop`
pub const OP_NOP: u8 = 0x1;
/// `cmovXX rA, rB` (`rrmovq` when the condition is "always").
pub const OP_CMOV: u8 = 0x2;
/// `irmovq V, rB`
pub const OP_IRMOVQ: u8 = 0x3;
/// `rmmovq rA, D(rB)`
pub const OP_RMMOVQ: u8 = 0x4;
/// `mrmovq D(rB), rA`
pub const OP_MRMOVQ: u8 = 0x5;
/// `OPq rA, rB`
pub const OP_OPQ: u8 = 0x6;
/// `jXX Dest`
pub const OP_JXX: u8 = 0x7;
/// `call Dest`
pub const OP_CALL: u8 = 0x8;
/// `ret`
pub const OP_RET: u8 = 0x9;
/// `pushq rA`
pub const OP_PUSHQ: u8 = 0xA;
/// `popq rA`
pub const OP_POPQ: u8 = 0xB;

/// Condition: always.
pub const COND_ALWAYS: u8 = 0x0;
/// Condition: less or equal.
pub const COND_LE: u8 = 0x1;
/// Condition: less.
pub const COND_L: u8 = 0x2;
/// Condition: equal.
pub const COND_E: u8 = 0x3;
/// Condition: not equal.
pub const COND_NE: u8 = 0x4;
/// Condition: greater or equal.
pub const COND_GE: u8 = 0x5;
/// Condition: greater.
pub const COND_G: u8 = 0x6;

/// ALU function: add.
pub const ALU_ADD: u8 = 0x0;
/// ALU function: subtract.
pub const ALU_SUB: u8 = 0x1;
/// ALU function: bitwise and.
pub const ALU_AND: u8 = 0x2;
/// ALU function: bitwise xor.
pub const ALU_XOR: u8 = 0x3;
