//! Instruction Disassembler for Y86-64.
//!
//! Converts a decoded [`Instruction`] (or raw bytes) into AT&T-style assembly
//! text for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use y86sim_core::isa::abi::Register;
//! use y86sim_core::isa::disasm::disassemble;
//! use y86sim_core::isa::instruction::Instruction;
//!
//! let text = disassemble(&Instruction::IrMov { rb: Register::Rax, imm: 5 });
//! assert_eq!(text, "irmovq $0x5, %rax");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::{AluOp, Condition, Instruction};

/// Mnemonic suffix for a condition; empty for the unconditional form.
const fn cond_suffix(cond: Condition) -> &'static str {
    match cond {
        Condition::Always => "",
        Condition::Le => "le",
        Condition::L => "l",
        Condition::E => "e",
        Condition::Ne => "ne",
        Condition::Ge => "ge",
        Condition::G => "g",
    }
}

/// Mnemonic for an ALU operation.
const fn alu_mnemonic(op: AluOp) -> &'static str {
    match op {
        AluOp::Add => "addq",
        AluOp::Sub => "subq",
        AluOp::And => "andq",
        AluOp::Xor => "xorq",
    }
}

/// Disassembles a decoded instruction.
///
/// Unconditional moves print as `rrmovq` and unconditional jumps as `jmp`.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::Halt => "halt".to_owned(),
        Instruction::Nop => "nop".to_owned(),
        Instruction::CMov { cond: Condition::Always, ra, rb } => format!("rrmovq {ra}, {rb}"),
        Instruction::CMov { cond, ra, rb } => format!("cmov{} {ra}, {rb}", cond_suffix(cond)),
        Instruction::IrMov { rb, imm } => format!("irmovq ${imm:#x}, {rb}"),
        Instruction::RmMov { ra, rb, disp } => format!("rmmovq {ra}, {disp:#x}({rb})"),
        Instruction::MrMov { ra, rb, disp } => format!("mrmovq {disp:#x}({rb}), {ra}"),
        Instruction::Op { op, ra, rb } => format!("{} {ra}, {rb}", alu_mnemonic(op)),
        Instruction::Jump { cond: Condition::Always, dest } => format!("jmp {dest:#x}"),
        Instruction::Jump { cond, dest } => format!("j{} {dest:#x}", cond_suffix(cond)),
        Instruction::Call { dest } => format!("call {dest:#x}"),
        Instruction::Ret => "ret".to_owned(),
        Instruction::Push { ra } => format!("pushq {ra}"),
        Instruction::Pop { ra } => format!("popq {ra}"),
    }
}

/// Disassembles the instruction at the start of `bytes`.
///
/// Returns `"unknown"` for encodings that do not decode.
pub fn disassemble_bytes(bytes: &[u8]) -> String {
    decode(bytes).map_or_else(|_| "unknown".to_owned(), |inst| disassemble(&inst))
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&disassemble(self))
    }
}
