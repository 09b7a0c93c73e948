//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Word size and the default memory capacity.
//! 2. **Instruction Constants:** Nibble masks and shifts for opcode and register bytes.
//! 3. **Encoding Lengths:** Byte lengths of the four instruction layouts.

/// Default size of simulated memory in bytes (1 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 0x400;

/// Size of every data access and every encoded constant, in bytes.
pub const WORD_SIZE: usize = 8;

/// Amount by which `call`/`pushq` decrement and `ret`/`popq` increment `%rsp`.
pub const STACK_STEP: u64 = WORD_SIZE as u64;

/// Bit shift for the high nibble of a byte (class code, or `rA`).
pub const HIGH_NIBBLE_SHIFT: u32 = 4;

/// Mask for the low nibble of a byte (function code, or `rB`).
pub const LOW_NIBBLE_MASK: u8 = 0x0F;

/// Register nibble meaning "no register operand".
pub const REG_NONE: u8 = 0xF;

/// Length of `halt`, `nop` and `ret`.
pub const LEN_OPCODE_ONLY: u64 = 1;

/// Length of `cmovXX`, `OPq`, `pushq` and `popq` (opcode + register byte).
pub const LEN_REGISTERS: u64 = 2;

/// Length of `jXX` and `call` (opcode + destination).
pub const LEN_DEST: u64 = 1 + WORD_SIZE as u64;

/// Length of `irmovq`, `rmmovq` and `mrmovq` (opcode + register byte + constant).
pub const LEN_REGISTERS_CONST: u64 = 2 + WORD_SIZE as u64;
