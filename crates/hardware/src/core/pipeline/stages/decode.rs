//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction cycle. It reads
//! the source operands named by the instruction, plus the implicit `%rsp` for
//! stack instructions, from the Register File into `valA`/`valB`.

use tracing::trace;

use crate::common::RegisterFile;
use crate::core::pipeline::InstructionContext;
use crate::isa::abi::Register;
use crate::isa::instruction::Instruction;

/// Executes the instruction decode stage.
///
/// | Instruction | `valA`   | `valB`   |
/// |-------------|----------|----------|
/// | `cmovXX`    | `R[rA]`  |          |
/// | `rmmovq`    | `R[rA]`  | `R[rB]`  |
/// | `mrmovq`    |          | `R[rB]`  |
/// | `OPq`       | `R[rA]`  | `R[rB]`  |
/// | `call`      |          | `R[rsp]` |
/// | `ret`       | `R[rsp]` | `R[rsp]` |
/// | `pushq`     | `R[rA]`  | `R[rsp]` |
/// | `popq`      | `R[rsp]` | `R[rsp]` |
///
/// # Arguments
///
/// * `ctx`  - Instruction context produced by Fetch
/// * `regs` - Register file (read only)
pub fn decode_stage(ctx: &mut InstructionContext, regs: &RegisterFile) {
    match ctx.inst {
        Instruction::CMov { ra, .. } => {
            ctx.val_a = regs.read(ra);
        }
        Instruction::RmMov { ra, rb, .. } | Instruction::Op { ra, rb, .. } => {
            ctx.val_a = regs.read(ra);
            ctx.val_b = regs.read(rb);
        }
        Instruction::MrMov { rb, .. } => {
            ctx.val_b = regs.read(rb);
        }
        Instruction::Call { .. } => {
            ctx.val_b = regs.read(Register::Rsp);
        }
        Instruction::Ret | Instruction::Pop { .. } => {
            let sp = regs.read(Register::Rsp);
            ctx.val_a = sp;
            ctx.val_b = sp;
        }
        Instruction::Push { ra } => {
            ctx.val_a = regs.read(ra);
            ctx.val_b = regs.read(Register::Rsp);
        }
        Instruction::Halt | Instruction::Nop | Instruction::IrMov { .. } | Instruction::Jump { .. } => {}
    }

    trace!(
        "ID  pc={:#x} valA={:#x} valB={:#x}",
        ctx.pc, ctx.val_a, ctx.val_b
    );
}
