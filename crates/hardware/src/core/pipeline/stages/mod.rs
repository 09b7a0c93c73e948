//! Instruction cycle stage implementations.
//!
//! This module contains the individual implementations of the six stages every
//! instruction passes through within one cycle. It includes:
//! 1. **Fetch:** Reads and decodes the instruction at the PC.
//! 2. **Decode:** Reads source operands from the Register File.
//! 3. **Execute:** Runs the ALU, computes addresses and evaluates conditions.
//! 4. **Memory:** Performs the quad-word load or store.
//! 5. **Writeback:** Commits results to the Register File.
//! 6. **PC Update:** Selects the next Program Counter.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Program counter update stage implementation.
pub mod pc_update;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// PC update stage entry point.
pub use pc_update::pc_update_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
