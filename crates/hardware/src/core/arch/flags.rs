//! Condition Flags.
//!
//! This module implements the three condition flags and the condition-code
//! evaluator shared by `cmovXX` and `jXX`. It performs the following:
//! 1. **Storage:** Sign, zero and overflow booleans, all false at reset.
//! 2. **Evaluation:** Maps a [`Condition`] and the current flags to a take/skip decision.

use std::fmt;

use serde::Serialize;

use crate::isa::instruction::Condition;

/// Condition flags written by `OPq` and read by `cmovXX`/`jXX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Flags {
    /// Sign flag: bit 63 of the last ALU result.
    pub sf: bool,
    /// Zero flag: the last ALU result was zero.
    pub zf: bool,
    /// Overflow flag.
    pub of: bool,
}

impl Flags {
    /// Creates flags with every bit cleared.
    pub const fn new() -> Self {
        Self {
            sf: false,
            zf: false,
            of: false,
        }
    }

    /// Evaluates `cond` against the flags.
    ///
    /// `l` is `sf && zf` and `ge` is `!sf || zf`; these are the machine's
    /// definitions and intentionally differ from the x86 `sf ^ of` forms.
    pub const fn satisfies(self, cond: Condition) -> bool {
        let Self { sf, zf, .. } = self;
        match cond {
            Condition::Always => true,
            Condition::Le => sf || zf,
            Condition::L => sf && zf,
            Condition::E => zf,
            Condition::Ne => !zf,
            Condition::Ge => !sf || zf,
            Condition::G => !sf && !zf,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZF={} SF={} OF={}",
            u8::from(self.zf),
            u8::from(self.sf),
            u8::from(self.of)
        )
    }
}
