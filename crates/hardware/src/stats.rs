//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the Y86-64 simulator. It provides:
//! 1. **Cycle counts:** Total cycles and retired instructions, with derived CPI and MIPS.
//! 2. **Instruction mix:** Counts by category (ALU, move, load, store, branch, call, return, stack).
//! 3. **Control flow:** Taken jumps and conditional moves whose write was suppressed.

use std::time::Instant;

use serde::Serialize;

use crate::core::pipeline::InstructionContext;
use crate::isa::instruction::{Condition, Instruction};

/// Simulation statistics structure tracking all execution metrics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total cycles attempted, including a final faulting cycle.
    pub cycles: u64,
    /// Number of instructions that completed all six stages.
    pub instructions_retired: u64,

    /// Count of `OPq` instructions retired.
    pub inst_alu: u64,
    /// Count of `irmovq` and `cmovXX` instructions retired.
    pub inst_move: u64,
    /// Count of `mrmovq` instructions retired.
    pub inst_load: u64,
    /// Count of `rmmovq` instructions retired.
    pub inst_store: u64,
    /// Count of `jXX` instructions retired.
    pub inst_branch: u64,
    /// Count of `call` instructions retired.
    pub inst_call: u64,
    /// Count of `ret` instructions retired.
    pub inst_return: u64,
    /// Count of `pushq` and `popq` instructions retired.
    pub inst_stack: u64,
    /// Count of `nop` instructions retired.
    pub inst_nop: u64,
    /// Count of `halt` instructions retired.
    pub inst_system: u64,

    /// Conditional jumps (not `jmp`) whose condition held.
    pub branches_taken: u64,
    /// Conditional jumps (not `jmp`) whose condition failed.
    pub branches_not_taken: u64,
    /// `cmovXX` instructions that left their destination unchanged.
    pub cmov_suppressed: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_move: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_call: 0,
            inst_return: 0,
            inst_stack: 0,
            inst_nop: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            cmov_suppressed: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"control"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

impl SimStats {
    /// Counts one retired instruction by category.
    pub const fn record(&mut self, ctx: &InstructionContext) {
        self.instructions_retired += 1;
        match ctx.inst {
            Instruction::Halt => self.inst_system += 1,
            Instruction::Nop => self.inst_nop += 1,
            Instruction::CMov { cond, .. } => {
                self.inst_move += 1;
                if !ctx.cnd && !matches!(cond, Condition::Always) {
                    self.cmov_suppressed += 1;
                }
            }
            Instruction::IrMov { .. } => self.inst_move += 1,
            Instruction::RmMov { .. } => self.inst_store += 1,
            Instruction::MrMov { .. } => self.inst_load += 1,
            Instruction::Op { .. } => self.inst_alu += 1,
            Instruction::Jump { cond, .. } => {
                self.inst_branch += 1;
                if !matches!(cond, Condition::Always) {
                    if ctx.cnd {
                        self.branches_taken += 1;
                    } else {
                        self.branches_not_taken += 1;
                    }
                }
            }
            Instruction::Call { .. } => self.inst_call += 1,
            Instruction::Ret => self.inst_return += 1,
            Instruction::Push { .. } | Instruction::Pop { .. } => self.inst_stack += 1,
        }
    }

    /// Serializes the counters to a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization failure.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"instruction_mix"`
    /// or `"control"`. Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);

        if want("summary") {
            let cpi = cyc as f64 / instr as f64;
            let mips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1_000_000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("Y86-64 SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_cpi                  {cpi:.4}");
            println!("sim_mips                 {mips:.2}");
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let total = instr as f64;
            let line = |name: &str, count: u64| {
                println!(
                    "  {:<22} {} ({:.2}%)",
                    name,
                    count,
                    (count as f64 / total) * 100.0
                );
            };
            println!("INSTRUCTION MIX");
            line("op.alu", self.inst_alu);
            line("op.move", self.inst_move);
            line("op.load", self.inst_load);
            line("op.store", self.inst_store);
            line("op.branch", self.inst_branch);
            line("op.call", self.inst_call);
            line("op.return", self.inst_return);
            line("op.stack", self.inst_stack);
            line("op.nop", self.inst_nop);
            line("op.system", self.inst_system);
            println!("----------------------------------------------------------");
        }
        if want("control") {
            let conditional = self.branches_taken + self.branches_not_taken;
            let taken_rate = if conditional > 0 {
                100.0 * (self.branches_taken as f64 / conditional as f64)
            } else {
                0.0
            };
            println!("CONTROL FLOW");
            println!("  jcc.taken              {}", self.branches_taken);
            println!("  jcc.not_taken          {}", self.branches_not_taken);
            println!("  jcc.taken_rate         {taken_rate:.2}%");
            println!("  cmov.suppressed        {}", self.cmov_suppressed);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
