//! System Components.
//!
//! This module organizes the components outside the CPU core. The Y86-64
//! machine has a single one: the flat byte-addressable memory shared by
//! instruction fetch and data accesses.

/// Flat simulated memory.
pub mod memory;

pub use memory::Memory;
