//! Core processor implementation.
//!
//! This module contains the CPU implementation: the architectural state, the
//! six-stage instruction cycle, and the execution units it uses.

/// Architecture-specific components (condition flags, register storage).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction cycle implementation (context and stages).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunOutcome, Status};
