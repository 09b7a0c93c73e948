//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the Y86-64 register names, opcode and function-code constants, the
//! decoded instruction model with its encoder, the decoder used by Fetch, and a
//! disassembler for diagnostics.

/// Register names and nibble mappings.
pub mod abi;

/// Byte-level instruction decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction classes, condition and ALU codes, and the encoder.
pub mod instruction;

/// Class nibbles and function codes.
pub mod opcodes;

pub use self::abi::Register;
pub use self::instruction::{AluOp, Condition, InstClass, Instruction};
