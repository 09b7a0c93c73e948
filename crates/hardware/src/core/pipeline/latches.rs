//! Per-cycle instruction context.
//!
//! This module defines the scratch state carried from one stage to the next within a
//! single cycle: Fetch → Decode → Execute → Memory → Writeback → PC update.
//!
//! 1. **Instruction Flow:** Fetch creates the context; every later stage fills or reads
//!    the fields named after the classic `valA`/`valB`/`valE`/`valM`/`valP` signals.
//! 2. **No Carry-Over:** A fresh context is built every cycle, so nothing leaks
//!    between instructions.

use crate::isa::instruction::Instruction;

/// Scratch state for the instruction executing in the current cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionContext {
    /// Address the instruction was fetched from.
    pub pc: u64,
    /// Decoded instruction (class, sub-code, registers, constant).
    pub inst: Instruction,
    /// Address of the next sequential instruction.
    pub val_p: u64,
    /// First operand read by Decode.
    pub val_a: u64,
    /// Second operand read by Decode.
    pub val_b: u64,
    /// ALU result or effective address computed by Execute.
    pub val_e: u64,
    /// Quad word loaded by the Memory stage.
    pub val_m: u64,
    /// Condition result for `cmovXX` and `jXX`.
    pub cnd: bool,
    /// Set by Execute when the instruction is `halt`.
    pub halt: bool,
}

impl InstructionContext {
    /// Creates the context Fetch hands to Decode.
    pub const fn new(pc: u64, inst: Instruction, val_p: u64) -> Self {
        Self {
            pc,
            inst,
            val_p,
            val_a: 0,
            val_b: 0,
            val_e: 0,
            val_m: 0,
            cnd: false,
            halt: false,
        }
    }

    /// The constant word carried by the encoding (`valC`), or 0 if there is none.
    pub const fn val_c(&self) -> u64 {
        match self.inst {
            Instruction::IrMov { imm: c, .. }
            | Instruction::RmMov { disp: c, .. }
            | Instruction::MrMov { disp: c, .. }
            | Instruction::Jump { dest: c, .. }
            | Instruction::Call { dest: c } => c,
            Instruction::Halt
            | Instruction::Nop
            | Instruction::CMov { .. }
            | Instruction::Op { .. }
            | Instruction::Ret
            | Instruction::Push { .. }
            | Instruction::Pop { .. } => 0,
        }
    }
}
