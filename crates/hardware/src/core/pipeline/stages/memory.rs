//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction cycle.
//! It performs at most one quad-word load or store per cycle. Stores use the
//! effective address from Execute; `ret` and `popq` read the old top of stack
//! (`valA`) before the stack pointer moves.

use tracing::trace;

use crate::common::Fault;
use crate::core::pipeline::InstructionContext;
use crate::isa::instruction::Instruction;
use crate::soc::Memory;

/// Executes the memory stage.
///
/// | Instruction         | Access               |
/// |---------------------|----------------------|
/// | `rmmovq`, `pushq`   | `M[valE] <- valA`    |
/// | `call`              | `M[valE] <- valP`    |
/// | `mrmovq`            | `valM <- M[valE]`    |
/// | `ret`, `popq`       | `valM <- M[valA]`    |
///
/// # Arguments
///
/// * `ctx`    - Instruction context after Execute
/// * `memory` - Simulated memory
///
/// # Errors
///
/// Returns [`Fault::MemoryFault`] if the eight-byte span is out of range. The
/// check happens before the access, so a faulting store writes nothing.
pub fn mem_stage(ctx: &mut InstructionContext, memory: &mut Memory) -> Result<(), Fault> {
    match ctx.inst {
        Instruction::RmMov { .. } | Instruction::Push { .. } => {
            trace!(
                "MEM pc={:#x} STORE addr={:#x} data={:#x}",
                ctx.pc, ctx.val_e, ctx.val_a
            );
            memory.write_u64(ctx.val_e, ctx.val_a)?;
        }
        Instruction::Call { .. } => {
            trace!(
                "MEM pc={:#x} STORE addr={:#x} data={:#x}",
                ctx.pc, ctx.val_e, ctx.val_p
            );
            memory.write_u64(ctx.val_e, ctx.val_p)?;
        }
        Instruction::MrMov { .. } => {
            ctx.val_m = memory.read_u64(ctx.val_e)?;
            trace!(
                "MEM pc={:#x} LOAD addr={:#x} data={:#x}",
                ctx.pc, ctx.val_e, ctx.val_m
            );
        }
        Instruction::Ret | Instruction::Pop { .. } => {
            ctx.val_m = memory.read_u64(ctx.val_a)?;
            trace!(
                "MEM pc={:#x} LOAD addr={:#x} data={:#x}",
                ctx.pc, ctx.val_a, ctx.val_m
            );
        }
        Instruction::Halt
        | Instruction::Nop
        | Instruction::CMov { .. }
        | Instruction::IrMov { .. }
        | Instruction::Op { .. }
        | Instruction::Jump { .. } => {}
    }
    Ok(())
}
