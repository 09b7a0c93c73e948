//! Writeback (WB) Stage.
//!
//! This module implements the fifth stage of the instruction cycle.
//! It commits results to the register file: ALU results, immediates, loaded
//! values and adjusted stack pointers. Conditional moves commit only when
//! their condition held.

use tracing::trace;

use crate::common::RegisterFile;
use crate::core::pipeline::InstructionContext;
use crate::isa::abi::Register;
use crate::isa::instruction::Instruction;

/// Executes the writeback stage.
///
/// `popq` writes `%rsp` first and the popped value second, so `popq %rsp`
/// leaves the popped value in `%rsp`.
///
/// # Arguments
///
/// * `ctx`  - Instruction context after the Memory stage
/// * `regs` - Register file
pub fn wb_stage(ctx: &InstructionContext, regs: &mut RegisterFile) {
    match ctx.inst {
        Instruction::CMov { rb, .. } => {
            if ctx.cnd {
                commit(regs, ctx.pc, rb, ctx.val_e);
            }
        }
        Instruction::IrMov { rb, .. } | Instruction::Op { rb, .. } => {
            commit(regs, ctx.pc, rb, ctx.val_e);
        }
        Instruction::MrMov { ra, .. } => commit(regs, ctx.pc, ra, ctx.val_m),
        Instruction::Call { .. } | Instruction::Ret | Instruction::Push { .. } => {
            commit(regs, ctx.pc, Register::Rsp, ctx.val_e);
        }
        Instruction::Pop { ra } => {
            commit(regs, ctx.pc, Register::Rsp, ctx.val_e);
            commit(regs, ctx.pc, ra, ctx.val_m);
        }
        Instruction::Halt
        | Instruction::Nop
        | Instruction::RmMov { .. }
        | Instruction::Jump { .. } => {}
    }
}

#[inline]
fn commit(regs: &mut RegisterFile, pc: u64, reg: Register, val: u64) {
    trace!("WB  pc={:#x} {} <= {:#x}", pc, reg, val);
    regs.write(reg, val);
}
