//! Program Counter Update (PC) Stage.
//!
//! This module implements the last stage of the instruction cycle. It selects
//! the address of the next instruction from the values produced earlier in
//! the cycle.

use crate::core::pipeline::InstructionContext;
use crate::isa::instruction::Instruction;

/// Computes the next Program Counter.
///
/// | Instruction | Next PC                     |
/// |-------------|-----------------------------|
/// | `halt`      | `0`                         |
/// | `jXX`       | `cnd ? Dest : valP`         |
/// | `call`      | `Dest`                      |
/// | `ret`       | `valM`                      |
/// | otherwise   | `valP`                      |
pub const fn pc_update_stage(ctx: &InstructionContext) -> u64 {
    match ctx.inst {
        Instruction::Halt => 0,
        Instruction::Jump { dest, .. } => {
            if ctx.cnd {
                dest
            } else {
                ctx.val_p
            }
        }
        Instruction::Call { dest } => dest,
        Instruction::Ret => ctx.val_m,
        Instruction::Nop
        | Instruction::CMov { .. }
        | Instruction::IrMov { .. }
        | Instruction::RmMov { .. }
        | Instruction::MrMov { .. }
        | Instruction::Op { .. }
        | Instruction::Push { .. }
        | Instruction::Pop { .. } => ctx.val_p,
    }
}
