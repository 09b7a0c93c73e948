//! Common utilities and types used throughout the Y86-64 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word size, memory capacity and encoding lengths.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Architectural faults and host-facing errors.
//! 4. **Register Management:** The register file used by Decode and Writeback.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Fault and error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::AccessType;
pub use error::{ConfigError, Fault, IllegalReason, SimError};
pub use reg::RegisterFile;
