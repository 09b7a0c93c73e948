//! Y86-64 register identifiers and ABI names.
//!
//! Defines the fifteen architectural registers, their 4-bit encodings and
//! their assembler-style names. Nibble `0xF` is reserved for "no register"
//! and has no [`Register`] value.

use std::fmt;

use serde::Serialize;

use crate::common::constants::REG_NONE;

/// Number of architectural registers.
pub const NUM_REGS: usize = 15;

/// One of the fifteen general-purpose registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Register {
    /// `%rax`
    Rax = 0x0,
    /// `%rcx`
    Rcx = 0x1,
    /// `%rdx`
    Rdx = 0x2,
    /// `%rbx`
    Rbx = 0x3,
    /// `%rsp`, the stack pointer used implicitly by `call`, `ret`, `pushq` and `popq`.
    Rsp = 0x4,
    /// `%rbp`
    Rbp = 0x5,
    /// `%rsi`
    Rsi = 0x6,
    /// `%rdi`
    Rdi = 0x7,
    /// `%r8`
    R8 = 0x8,
    /// `%r9`
    R9 = 0x9,
    /// `%r10`
    R10 = 0xA,
    /// `%r11`
    R11 = 0xB,
    /// `%r12`
    R12 = 0xC,
    /// `%r13`
    R13 = 0xD,
    /// `%r14`
    R14 = 0xE,
}

impl Register {
    /// All registers in encoding order.
    pub const ALL: [Self; NUM_REGS] = [
        Self::Rax,
        Self::Rcx,
        Self::Rdx,
        Self::Rbx,
        Self::Rsp,
        Self::Rbp,
        Self::Rsi,
        Self::Rdi,
        Self::R8,
        Self::R9,
        Self::R10,
        Self::R11,
        Self::R12,
        Self::R13,
        Self::R14,
    ];

    /// Decodes a register nibble.
    ///
    /// Returns `None` for the reserved `0xF` value. Only the low four bits of
    /// `nibble` are considered, so every input maps to a register or to `None`.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        let nibble = nibble & 0x0F;
        if nibble == REG_NONE {
            None
        } else {
            Some(Self::ALL[nibble as usize])
        }
    }

    /// Returns the 4-bit encoding of the register.
    #[inline]
    pub const fn nibble(self) -> u8 {
        self as u8
    }

    /// Returns the slot index of the register in the register file.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the assembler name, e.g. `%rsp`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rax => "%rax",
            Self::Rcx => "%rcx",
            Self::Rdx => "%rdx",
            Self::Rbx => "%rbx",
            Self::Rsp => "%rsp",
            Self::Rbp => "%rbp",
            Self::Rsi => "%rsi",
            Self::Rdi => "%rdi",
            Self::R8 => "%r8",
            Self::R9 => "%r9",
            Self::R10 => "%r10",
            Self::R11 => "%r11",
            Self::R12 => "%r12",
            Self::R13 => "%r13",
            Self::R14 => "%r14",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encodes an optional register as a nibble, mapping `None` to `0xF`.
#[inline]
pub const fn nibble_of(reg: Option<Register>) -> u8 {
    match reg {
        Some(r) => r.nibble(),
        None => REG_NONE,
    }
}
