//! Y86-64 instruction set simulator library.
//!
//! This crate implements a sequential, cycle-per-instruction Y86-64 simulator with the following:
//! 1. **Core:** Six-stage instruction cycle (fetch, decode, execute, memory, writeback, PC update),
//!    register file, and condition flags.
//! 2. **Memory:** A flat, bounds-checked, little-endian byte memory.
//! 3. **ISA:** Decoding, encoding and disassembly of the twelve instruction classes.
//! 4. **Simulation:** Image loader, configuration, run loop, and statistics collection.
//!
//! # Example
//!
//! ```
//! use y86sim_core::isa::instruction::{encode_program, AluOp, Instruction};
//! use y86sim_core::isa::abi::Register;
//! use y86sim_core::{Config, Simulator};
//!
//! let image = encode_program(&[
//!     Instruction::IrMov { rb: Register::Rax, imm: 5 },
//!     Instruction::IrMov { rb: Register::Rbx, imm: 3 },
//!     Instruction::Op { op: AluOp::Add, ra: Register::Rax, rb: Register::Rbx },
//!     Instruction::Halt,
//! ]);
//!
//! let mut sim = Simulator::new(&Config::default()).unwrap();
//! let outcome = sim.run_image(&image).unwrap();
//! assert_eq!(outcome.cycles(), 4);
//! assert_eq!(sim.cpu.regs.read(Register::Rbx), 8);
//! ```

/// Common types and constants (faults, errors, registers, access types).
pub mod common;
/// Simulator configuration (defaults and JSON parsing).
pub mod config;
/// CPU core (instruction cycle, arch state, execution units).
pub mod core;
/// Instruction set (registers, opcodes, decode, encode, disassembly).
pub mod isa;
/// Image loader and simulator façade.
pub mod sim;
/// System components (memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Architectural faults and host-facing errors.
pub use crate::common::{Fault, SimError};
/// Main CPU type; holds registers, flags, memory, PC, and stats.
pub use crate::core::{Cpu, RunOutcome, Status};
/// Configured CPU plus run loop; construct with `Simulator::new`.
pub use crate::sim::Simulator;
