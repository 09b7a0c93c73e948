//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Reporting:** Telling the host which kind of access left the address space.
//! 2. **Tracing:** Labelling memory events emitted by the Fetch and Memory stages.

use std::fmt;

use serde::Serialize;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when an access falls outside simulated memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when the Fetch stage reads opcode, register-specifier or constant bytes.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during `mrmovq`, `popq` and `ret` when reading a quad word.
    Read,

    /// Data write access.
    ///
    /// Occurs during `rmmovq`, `pushq` and `call`, and when a host loads an image.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
