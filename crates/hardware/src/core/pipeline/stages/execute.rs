//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction cycle. It performs the following:
//! 1. **Arithmetic Execution:** Runs `OPq` through the ALU and updates the flags.
//! 2. **Address Generation:** Computes effective addresses and adjusted stack pointers.
//! 3. **Condition Resolution:** Evaluates the condition of `cmovXX` and `jXX`.
//! 4. **Halt Detection:** Raises the halt flag for `halt`.

use tracing::trace;

use crate::common::constants::STACK_STEP;
use crate::core::arch::Flags;
use crate::core::pipeline::InstructionContext;
use crate::core::units::alu::Alu;
use crate::isa::instruction::Instruction;

/// Executes the instruction execute stage.
///
/// Produces `valE` and, for conditional instructions, `cnd`. Only `OPq` writes
/// `flags`; every other class leaves them untouched.
///
/// # Arguments
///
/// * `ctx`   - Instruction context after Decode
/// * `flags` - Condition flags, read by conditional forms and written by `OPq`
pub fn execute_stage(ctx: &mut InstructionContext, flags: &mut Flags) {
    match ctx.inst {
        Instruction::Halt => ctx.halt = true,
        Instruction::Nop => {}
        Instruction::CMov { cond, .. } => {
            ctx.val_e = ctx.val_a;
            ctx.cnd = flags.satisfies(cond);
        }
        Instruction::IrMov { imm, .. } => ctx.val_e = imm,
        Instruction::RmMov { disp, .. } | Instruction::MrMov { disp, .. } => {
            ctx.val_e = ctx.val_b.wrapping_add(disp);
        }
        Instruction::Op { op, .. } => {
            let (result, new_flags) = Alu::execute(op, ctx.val_a, ctx.val_b);
            ctx.val_e = result;
            *flags = new_flags;
            trace!("EX  pc={:#x} {:?} -> {}", ctx.pc, op, new_flags);
        }
        Instruction::Jump { cond, .. } => ctx.cnd = flags.satisfies(cond),
        Instruction::Call { .. } | Instruction::Push { .. } => {
            ctx.val_e = ctx.val_b.wrapping_sub(STACK_STEP);
        }
        Instruction::Ret | Instruction::Pop { .. } => {
            ctx.val_e = ctx.val_b.wrapping_add(STACK_STEP);
        }
    }

    trace!(
        "EX  pc={:#x} valE={:#x} cnd={}",
        ctx.pc, ctx.val_e, ctx.cnd
    );
}
