//! Y86-64 architectural state components.
//!
//! This module contains the architectural elements persisted across cycles.
//! It includes the following modules:
//! 1. **Flags:** Sign, zero and overflow flags and the condition evaluator.
//! 2. **GPRs:** General-Purpose Register file implementation.

/// Condition flags and condition-code evaluation.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
