//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction cycle.
//! It reads the opcode byte at the current Program Counter (PC), determines
//! the encoded length from the instruction class, reads the remaining bytes,
//! and decodes them into the instruction context together with `valP`.

use tracing::trace;

use crate::common::{AccessType, Fault};
use crate::core::pipeline::InstructionContext;
use crate::isa::decode::{classify, decode};
use crate::soc::Memory;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `memory` - Simulated memory holding the program
/// * `pc`     - Address of the instruction to fetch
///
/// # Errors
///
/// * [`Fault::MemoryFault`] if any byte of the instruction lies outside memory
/// * [`Fault::IllegalInstruction`] if the bytes do not encode a valid instruction
pub fn fetch_stage(memory: &Memory, pc: u64) -> Result<InstructionContext, Fault> {
    let opcode = memory.read_u8(pc, AccessType::Fetch)?;
    let class = classify(opcode).map_err(|reason| Fault::IllegalInstruction { pc, reason })?;
    let len = class.length();

    let bytes = memory.read_slice(pc, len as usize, AccessType::Fetch)?;
    let inst = decode(bytes).map_err(|reason| Fault::IllegalInstruction { pc, reason })?;
    let val_p = pc.wrapping_add(len);

    trace!("IF  pc={:#x} {} (sz={})", pc, inst, len);

    Ok(InstructionContext::new(pc, inst, val_p))
}
