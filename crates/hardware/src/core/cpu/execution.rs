//! Main Execution Loop.
//!
//! This module implements the core execution cycle of the CPU. It performs the following:
//! 1. **Stage Sequencing:** Runs the six stages in order for exactly one instruction per cycle.
//! 2. **Fault Containment:** Commits a cycle's state only if no stage faulted.
//! 3. **Run Control:** Repeats cycles until halt, fault, or an optional cycle budget.
//! 4. **Observability:** Records statistics and emits tracing events.

use tracing::{debug, warn};

use super::{Cpu, Status};
use crate::common::Fault;
use crate::core::pipeline::InstructionContext;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, pc_update_stage, wb_stage,
};

/// How a call to [`Cpu::run`] ended without faulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A `halt` completed.
    Halted {
        /// Cycles executed by this call, including the `halt`.
        cycles: u64,
    },
    /// The cycle budget was exhausted with the machine still running.
    CycleLimit {
        /// Cycles executed by this call.
        cycles: u64,
    },
}

impl RunOutcome {
    /// Number of cycles executed by the run.
    pub const fn cycles(self) -> u64 {
        match self {
            Self::Halted { cycles } | Self::CycleLimit { cycles } => cycles,
        }
    }
}

impl Cpu {
    /// Executes one full instruction cycle.
    ///
    /// Does nothing once halted. A fault moves the CPU to [`Status::Faulted`]
    /// and leaves registers, flags, memory and PC exactly as they were at the
    /// start of the cycle; every later call returns the same fault until
    /// [`Cpu::reset`].
    ///
    /// # Returns
    ///
    /// The status after the cycle: [`Status::Halted`] if this cycle executed
    /// `halt`, otherwise [`Status::Running`].
    ///
    /// # Errors
    ///
    /// The [`Fault`] raised by Fetch or the Memory stage.
    pub fn step(&mut self) -> Result<Status, Fault> {
        match self.status {
            Status::Halted => return Ok(Status::Halted),
            Status::Faulted(fault) => return Err(fault),
            Status::Running => {}
        }

        self.stats.cycles += 1;
        match self.cycle() {
            Ok(ctx) => {
                self.stats.record(&ctx);
                if self.trace {
                    debug!(
                        "retired pc={:#x} {} next={:#x} [{}]",
                        ctx.pc, ctx.inst, self.pc, self.flags
                    );
                }
                if ctx.halt {
                    self.status = Status::Halted;
                }
                self.last = Some(ctx);
                Ok(self.status)
            }
            Err(fault) => {
                warn!("cpu faulted: {}", fault);
                self.status = Status::Faulted(fault);
                Err(fault)
            }
        }
    }

    /// Runs the six stages for the instruction at the current PC.
    ///
    /// Flags are staged in a local copy and committed with the PC, after the
    /// last stage that can fault.
    fn cycle(&mut self) -> Result<InstructionContext, Fault> {
        let mut ctx = fetch_stage(&self.memory, self.pc)?;
        decode_stage(&mut ctx, &self.regs);

        let mut flags = self.flags;
        execute_stage(&mut ctx, &mut flags);
        mem_stage(&mut ctx, &mut self.memory)?;

        wb_stage(&ctx, &mut self.regs);
        self.flags = flags;
        self.pc = pc_update_stage(&ctx);
        Ok(ctx)
    }

    /// Repeats [`Cpu::step`] until halt, fault, or `max_cycles` cycles have run.
    ///
    /// A CPU that is already halted returns `Halted { cycles: 0 }`. With
    /// `max_cycles` of `None` the run is unbounded.
    ///
    /// # Errors
    ///
    /// The first [`Fault`] encountered; a CPU already faulted returns its fault
    /// without executing anything.
    pub fn run(&mut self, max_cycles: Option<u64>) -> Result<RunOutcome, Fault> {
        match self.status {
            Status::Halted => return Ok(RunOutcome::Halted { cycles: 0 }),
            Status::Faulted(fault) => return Err(fault),
            Status::Running => {}
        }

        let mut cycles = 0;
        loop {
            if max_cycles.is_some_and(|limit| cycles >= limit) {
                return Ok(RunOutcome::CycleLimit { cycles });
            }
            let status = self.step()?;
            cycles += 1;
            if status == Status::Halted {
                return Ok(RunOutcome::Halted { cycles });
            }
        }
    }
}
