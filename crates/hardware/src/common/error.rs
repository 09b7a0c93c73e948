//! Fault and Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Architectural Faults:** Conditions that stop the simulated machine (illegal
//!    instructions and out-of-range memory accesses).
//! 2. **Host Errors:** Configuration and image-loading failures, wrapped together with
//!    faults in [`SimError`] for callers driving a whole simulation.

use thiserror::Error;

use super::data::AccessType;

/// Why an instruction could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalReason {
    /// The high nibble of the opcode byte names no instruction class.
    #[error("unknown opcode byte {0:#04x}")]
    UnknownOpcode(u8),

    /// The low nibble of the opcode byte is not a valid function for its class.
    #[error("invalid function code in opcode byte {0:#04x}")]
    UnknownFunction(u8),

    /// A register nibble holds the "no register" value where the form needs a register.
    #[error("missing register operand in specifier {0:#04x}")]
    MissingRegister(u8),

    /// Fewer bytes were supplied than the instruction form occupies.
    #[error("truncated encoding: need {needed} bytes, have {available}")]
    Truncated {
        /// Encoded length of the instruction form.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },
}

/// Architectural fault raised while executing a cycle.
///
/// Every fault is terminal for the run: the CPU enters the faulted state and
/// refuses to step further until it is reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Fetch found an encoding with no defined meaning.
    ///
    /// The state of the machine is that of the start of the faulting cycle.
    #[error("illegal instruction at pc {pc:#x}: {reason}")]
    IllegalInstruction {
        /// Address of the faulting instruction.
        pc: u64,
        /// What was wrong with the encoding.
        reason: IllegalReason,
    },

    /// A fetch, load or store touched bytes outside simulated memory.
    ///
    /// Bounds are checked before the access, so memory is never partially written.
    #[error("memory fault: {access} of {len} bytes at {addr:#x}")]
    MemoryFault {
        /// First byte of the attempted access.
        addr: u64,
        /// Number of bytes in the attempted access.
        len: usize,
        /// Kind of access attempted.
        access: AccessType,
    },
}

/// Errors raised while validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed into a configuration.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Memory must hold at least one byte.
    #[error("memory size must be non-zero")]
    ZeroMemory,
}

/// Top-level error for hosts driving a [`Simulator`](crate::sim::Simulator).
#[derive(Debug, Error)]
pub enum SimError {
    /// The simulated machine faulted.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A program image does not fit in memory at the requested offset.
    #[error("image of {len} bytes at offset {offset:#x} exceeds memory capacity of {capacity} bytes")]
    ImageTooLarge {
        /// Size of the image in bytes.
        len: usize,
        /// Offset at which loading was requested.
        offset: u64,
        /// Capacity of simulated memory in bytes.
        capacity: usize,
    },
}
