//! Instruction cycle implementation.
//!
//! This module contains the sequential six-stage instruction cycle.
//! It includes the following components:
//! 1. **Latches:** The per-cycle instruction context passed from stage to stage.
//! 2. **Stages:** Fetch, Decode, Execute, Memory, Writeback, and PC Update.

/// Per-cycle instruction context shared by the stages.
pub mod latches;

/// Stage implementations (fetch, decode, execute, memory, writeback, pc update).
pub mod stages;

pub use self::latches::InstructionContext;
