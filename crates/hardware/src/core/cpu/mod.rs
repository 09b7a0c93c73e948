//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, condition flags, and the program counter.
//! 2. **Memory:** Owns the flat byte memory holding program and data.
//! 3. **Lifecycle:** Tracks whether the machine is running, halted, or faulted.

/// Instruction cycle sequencing and the run loop.
pub mod execution;

use std::fmt;

use crate::common::{Fault, RegisterFile};
use crate::config::Config;
use crate::core::arch::Flags;
use crate::core::pipeline::InstructionContext;
use crate::soc::Memory;
use crate::stats::SimStats;

pub use self::execution::RunOutcome;

/// Lifecycle state of the simulated machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The next call to `step` executes an instruction.
    Running,
    /// A `halt` instruction completed; `step` does nothing further.
    Halted,
    /// A cycle faulted; `step` returns this fault until the CPU is reset.
    Faulted(Fault),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Halted => f.write_str("halted"),
            Self::Faulted(fault) => write!(f, "faulted ({fault})"),
        }
    }
}

/// Main CPU structure containing all architectural state.
///
/// A freshly constructed CPU has every register, flag, byte of memory and the
/// PC set to zero, and is ready to run.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Condition flags (ZF, SF, OF).
    pub flags: Flags,
    /// Program and data memory.
    pub memory: Memory,
    /// Program Counter.
    pub pc: u64,
    /// Lifecycle state.
    pub status: Status,
    /// Emit a `debug` event for each retired instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    /// Context of the most recently completed cycle.
    pub last: Option<InstructionContext>,
}

impl Cpu {
    /// Creates a CPU with the default memory capacity.
    pub fn new() -> Self {
        Self::with_memory_size(crate::common::constants::DEFAULT_MEMORY_SIZE)
    }

    /// Creates a CPU whose memory holds `size` bytes.
    pub fn with_memory_size(size: usize) -> Self {
        Self {
            regs: RegisterFile::new(),
            flags: Flags::new(),
            memory: Memory::new(size),
            pc: 0,
            status: Status::Running,
            trace: false,
            stats: SimStats::default(),
            last: None,
        }
    }

    /// Creates a CPU according to the provided configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    pub fn with_config(config: &Config) -> Self {
        let mut cpu = Self::with_memory_size(config.memory.size);
        cpu.trace = config.general.trace_instructions;
        cpu
    }

    /// Returns the machine to its initial state.
    ///
    /// Registers, flags, PC and memory are zeroed and statistics cleared.
    /// The memory capacity and trace setting are kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.flags = Flags::new();
        self.memory.clear();
        self.pc = 0;
        self.status = Status::Running;
        self.stats = SimStats::default();
        self.last = None;
    }

    /// Returns the current lifecycle state.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` once a `halt` has completed.
    pub const fn is_halted(&self) -> bool {
        matches!(self.status, Status::Halted)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
