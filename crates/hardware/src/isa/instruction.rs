//! Instruction forms and their binary encoding.
//!
//! Provides the closed set of Y86-64 instruction classes, the condition and
//! ALU sub-codes, and the fully decoded [`Instruction`] with operands. The
//! encoder here is the inverse of [`decode`](super::decode::decode).

use serde::Serialize;

use super::abi::{Register, nibble_of};
use super::opcodes;
use crate::common::constants::{
    HIGH_NIBBLE_SHIFT, LEN_DEST, LEN_OPCODE_ONLY, LEN_REGISTERS, LEN_REGISTERS_CONST,
};

/// Instruction class selected by the high nibble of the opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InstClass {
    /// Stop the machine.
    Halt,
    /// No operation.
    Nop,
    /// Conditional register-to-register move.
    CMov,
    /// Immediate-to-register move.
    IrMov,
    /// Register-to-memory store.
    RmMov,
    /// Memory-to-register load.
    MrMov,
    /// Arithmetic/logical operation.
    Op,
    /// Unconditional or conditional jump.
    Jump,
    /// Subroutine call.
    Call,
    /// Subroutine return.
    Ret,
    /// Push a register onto the stack.
    Push,
    /// Pop the stack into a register.
    Pop,
}

impl InstClass {
    /// Maps a class nibble to its class, or `None` if no class is assigned.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            opcodes::OP_HALT => Some(Self::Halt),
            opcodes::OP_NOP => Some(Self::Nop),
            opcodes::OP_CMOV => Some(Self::CMov),
            opcodes::OP_IRMOVQ => Some(Self::IrMov),
            opcodes::OP_RMMOVQ => Some(Self::RmMov),
            opcodes::OP_MRMOVQ => Some(Self::MrMov),
            opcodes::OP_OPQ => Some(Self::Op),
            opcodes::OP_JXX => Some(Self::Jump),
            opcodes::OP_CALL => Some(Self::Call),
            opcodes::OP_RET => Some(Self::Ret),
            opcodes::OP_PUSHQ => Some(Self::Push),
            opcodes::OP_POPQ => Some(Self::Pop),
            _ => None,
        }
    }

    /// Returns the class nibble.
    pub const fn nibble(self) -> u8 {
        match self {
            Self::Halt => opcodes::OP_HALT,
            Self::Nop => opcodes::OP_NOP,
            Self::CMov => opcodes::OP_CMOV,
            Self::IrMov => opcodes::OP_IRMOVQ,
            Self::RmMov => opcodes::OP_RMMOVQ,
            Self::MrMov => opcodes::OP_MRMOVQ,
            Self::Op => opcodes::OP_OPQ,
            Self::Jump => opcodes::OP_JXX,
            Self::Call => opcodes::OP_CALL,
            Self::Ret => opcodes::OP_RET,
            Self::Push => opcodes::OP_PUSHQ,
            Self::Pop => opcodes::OP_POPQ,
        }
    }

    /// Encoded length of every instruction of this class, in bytes.
    pub const fn length(self) -> u64 {
        match self {
            Self::Halt | Self::Nop | Self::Ret => LEN_OPCODE_ONLY,
            Self::CMov | Self::Op | Self::Push | Self::Pop => LEN_REGISTERS,
            Self::Jump | Self::Call => LEN_DEST,
            Self::IrMov | Self::RmMov | Self::MrMov => LEN_REGISTERS_CONST,
        }
    }

    /// Whether the low nibble of the opcode byte carries a function code.
    pub const fn has_function(self) -> bool {
        matches!(self, Self::CMov | Self::Op | Self::Jump)
    }
}

/// Condition tested by `cmovXX` and `jXX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    /// Unconditional.
    Always,
    /// Less or equal.
    Le,
    /// Less.
    L,
    /// Equal.
    E,
    /// Not equal.
    Ne,
    /// Greater or equal.
    Ge,
    /// Greater.
    G,
}

impl Condition {
    /// All conditions in encoding order.
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Le,
        Self::L,
        Self::E,
        Self::Ne,
        Self::Ge,
        Self::G,
    ];

    /// Maps a function nibble to a condition.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            opcodes::COND_ALWAYS => Some(Self::Always),
            opcodes::COND_LE => Some(Self::Le),
            opcodes::COND_L => Some(Self::L),
            opcodes::COND_E => Some(Self::E),
            opcodes::COND_NE => Some(Self::Ne),
            opcodes::COND_GE => Some(Self::Ge),
            opcodes::COND_G => Some(Self::G),
            _ => None,
        }
    }

    /// Returns the function nibble.
    pub const fn nibble(self) -> u8 {
        match self {
            Self::Always => opcodes::COND_ALWAYS,
            Self::Le => opcodes::COND_LE,
            Self::L => opcodes::COND_L,
            Self::E => opcodes::COND_E,
            Self::Ne => opcodes::COND_NE,
            Self::Ge => opcodes::COND_GE,
            Self::G => opcodes::COND_G,
        }
    }
}

/// Operation performed by `OPq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise and.
    And,
    /// Bitwise exclusive or.
    Xor,
}

impl AluOp {
    /// All operations in encoding order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::And, Self::Xor];

    /// Maps a function nibble to an operation.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            opcodes::ALU_ADD => Some(Self::Add),
            opcodes::ALU_SUB => Some(Self::Sub),
            opcodes::ALU_AND => Some(Self::And),
            opcodes::ALU_XOR => Some(Self::Xor),
            _ => None,
        }
    }

    /// Returns the function nibble.
    pub const fn nibble(self) -> u8 {
        match self {
            Self::Add => opcodes::ALU_ADD,
            Self::Sub => opcodes::ALU_SUB,
            Self::And => opcodes::ALU_AND,
            Self::Xor => opcodes::ALU_XOR,
        }
    }
}

/// A fully decoded instruction with its operands.
///
/// Register operands are always real registers: the "no register" nibble is
/// rejected at decode time wherever a form needs a register, and ignored where
/// it doesn't.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Instruction {
    /// `halt`
    Halt,
    /// `nop`
    Nop,
    /// `cmovXX rA, rB`
    CMov {
        /// Condition under which the move happens.
        cond: Condition,
        /// Source register.
        ra: Register,
        /// Destination register.
        rb: Register,
    },
    /// `irmovq V, rB`
    IrMov {
        /// Destination register.
        rb: Register,
        /// Immediate value.
        imm: u64,
    },
    /// `rmmovq rA, D(rB)`
    RmMov {
        /// Register holding the value to store.
        ra: Register,
        /// Base register.
        rb: Register,
        /// Displacement added to the base.
        disp: u64,
    },
    /// `mrmovq D(rB), rA`
    MrMov {
        /// Destination register.
        ra: Register,
        /// Base register.
        rb: Register,
        /// Displacement added to the base.
        disp: u64,
    },
    /// `OPq rA, rB`
    Op {
        /// Operation to apply.
        op: AluOp,
        /// First operand.
        ra: Register,
        /// Second operand and destination.
        rb: Register,
    },
    /// `jXX Dest`
    Jump {
        /// Condition under which the jump is taken.
        cond: Condition,
        /// Absolute target address.
        dest: u64,
    },
    /// `call Dest`
    Call {
        /// Absolute target address.
        dest: u64,
    },
    /// `ret`
    Ret,
    /// `pushq rA`
    Push {
        /// Register to push.
        ra: Register,
    },
    /// `popq rA`
    Pop {
        /// Register receiving the popped value.
        ra: Register,
    },
}

impl Instruction {
    /// Returns the class of the instruction.
    pub const fn class(&self) -> InstClass {
        match self {
            Self::Halt => InstClass::Halt,
            Self::Nop => InstClass::Nop,
            Self::CMov { .. } => InstClass::CMov,
            Self::IrMov { .. } => InstClass::IrMov,
            Self::RmMov { .. } => InstClass::RmMov,
            Self::MrMov { .. } => InstClass::MrMov,
            Self::Op { .. } => InstClass::Op,
            Self::Jump { .. } => InstClass::Jump,
            Self::Call { .. } => InstClass::Call,
            Self::Ret => InstClass::Ret,
            Self::Push { .. } => InstClass::Push,
            Self::Pop { .. } => InstClass::Pop,
        }
    }

    /// Encoded length in bytes.
    pub const fn length(&self) -> u64 {
        self.class().length()
    }

    /// Returns the opcode byte (class nibble and function nibble).
    pub const fn opcode_byte(&self) -> u8 {
        let ifun = match self {
            Self::CMov { cond, .. } | Self::Jump { cond, .. } => cond.nibble(),
            Self::Op { op, .. } => op.nibble(),
            _ => 0,
        };
        (self.class().nibble() << HIGH_NIBBLE_SHIFT) | ifun
    }

    /// Appends the encoding of the instruction to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.opcode_byte());
        match *self {
            Self::Halt | Self::Nop | Self::Ret => {}
            Self::CMov { ra, rb, .. } | Self::Op { ra, rb, .. } => {
                out.push(register_byte(Some(ra), Some(rb)));
            }
            Self::IrMov { rb, imm } => {
                out.push(register_byte(None, Some(rb)));
                out.extend_from_slice(&imm.to_le_bytes());
            }
            Self::RmMov { ra, rb, disp } | Self::MrMov { ra, rb, disp } => {
                out.push(register_byte(Some(ra), Some(rb)));
                out.extend_from_slice(&disp.to_le_bytes());
            }
            Self::Jump { dest, .. } | Self::Call { dest } => {
                out.extend_from_slice(&dest.to_le_bytes());
            }
            Self::Push { ra } | Self::Pop { ra } => {
                out.push(register_byte(Some(ra), None));
            }
        }
    }

    /// Returns the encoding of the instruction.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.length() as usize);
        self.encode_into(&mut out);
        out
    }
}

/// Packs two optional registers into a register-specifier byte (`rA:rB`).
#[inline]
pub const fn register_byte(ra: Option<Register>, rb: Option<Register>) -> u8 {
    (nibble_of(ra) << HIGH_NIBBLE_SHIFT) | nibble_of(rb)
}

/// Encodes a sequence of instructions back to back, starting at offset 0.
pub fn encode_program(program: &[Instruction]) -> Vec<u8> {
    let mut out = Vec::with_capacity(program.iter().map(|i| i.length() as usize).sum());
    for inst in program {
        inst.encode_into(&mut out);
    }
    out
}
