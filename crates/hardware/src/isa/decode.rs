//! Instruction decoder.
//!
//! Converts raw instruction bytes into an [`Instruction`]. It performs the following:
//! 1. **Class Selection:** Maps the high nibble of the opcode byte to an [`InstClass`].
//! 2. **Function Validation:** Rejects unknown condition/ALU codes and stray function
//!    bits on classes that carry none.
//! 3. **Operand Extraction:** Splits the register byte and reads the little-endian
//!    constant, rejecting the "no register" nibble where a register is required.

use super::abi::Register;
use super::instruction::{AluOp, Condition, InstClass, Instruction};
use crate::common::IllegalReason;
use crate::common::constants::{HIGH_NIBBLE_SHIFT, LOW_NIBBLE_MASK, WORD_SIZE};

/// Splits an opcode byte into its class and function nibbles.
#[inline]
pub const fn split_opcode(byte: u8) -> (u8, u8) {
    (byte >> HIGH_NIBBLE_SHIFT, byte & LOW_NIBBLE_MASK)
}

/// Determines the instruction class from an opcode byte.
///
/// This is the first step of Fetch: the class fixes how many more bytes must be
/// read before the instruction can be decoded.
pub const fn classify(byte: u8) -> Result<InstClass, IllegalReason> {
    let (icode, ifun) = split_opcode(byte);
    match InstClass::from_nibble(icode) {
        None => Err(IllegalReason::UnknownOpcode(byte)),
        Some(class) if !class.has_function() && ifun != 0 => {
            Err(IllegalReason::UnknownFunction(byte))
        }
        Some(class) => Ok(class),
    }
}

/// Decodes one instruction from the start of `bytes`.
///
/// `bytes` must hold at least the encoded length of the instruction; trailing
/// bytes are ignored.
///
/// # Errors
///
/// Returns the [`IllegalReason`] describing why the bytes do not form a valid
/// instruction.
pub fn decode(bytes: &[u8]) -> Result<Instruction, IllegalReason> {
    let Some(&opcode) = bytes.first() else {
        return Err(IllegalReason::Truncated {
            needed: 1,
            available: 0,
        });
    };
    let class = classify(opcode)?;
    let needed = class.length() as usize;
    if bytes.len() < needed {
        return Err(IllegalReason::Truncated {
            needed,
            available: bytes.len(),
        });
    }
    let (_, ifun) = split_opcode(opcode);

    let inst = match class {
        InstClass::Halt => Instruction::Halt,
        InstClass::Nop => Instruction::Nop,
        InstClass::Ret => Instruction::Ret,
        InstClass::CMov => {
            let (ra, rb) = registers(bytes[1]);
            Instruction::CMov {
                cond: condition(opcode, ifun)?,
                ra: required(ra, bytes[1])?,
                rb: required(rb, bytes[1])?,
            }
        }
        InstClass::IrMov => {
            let (_, rb) = registers(bytes[1]);
            Instruction::IrMov {
                rb: required(rb, bytes[1])?,
                imm: read_word(&bytes[2..]),
            }
        }
        InstClass::RmMov => {
            let (ra, rb) = registers(bytes[1]);
            Instruction::RmMov {
                ra: required(ra, bytes[1])?,
                rb: required(rb, bytes[1])?,
                disp: read_word(&bytes[2..]),
            }
        }
        InstClass::MrMov => {
            let (ra, rb) = registers(bytes[1]);
            Instruction::MrMov {
                ra: required(ra, bytes[1])?,
                rb: required(rb, bytes[1])?,
                disp: read_word(&bytes[2..]),
            }
        }
        InstClass::Op => {
            let (ra, rb) = registers(bytes[1]);
            Instruction::Op {
                op: AluOp::from_nibble(ifun).ok_or(IllegalReason::UnknownFunction(opcode))?,
                ra: required(ra, bytes[1])?,
                rb: required(rb, bytes[1])?,
            }
        }
        InstClass::Jump => Instruction::Jump {
            cond: condition(opcode, ifun)?,
            dest: read_word(&bytes[1..]),
        },
        InstClass::Call => Instruction::Call {
            dest: read_word(&bytes[1..]),
        },
        InstClass::Push => {
            let (ra, _) = registers(bytes[1]);
            Instruction::Push {
                ra: required(ra, bytes[1])?,
            }
        }
        InstClass::Pop => {
            let (ra, _) = registers(bytes[1]);
            Instruction::Pop {
                ra: required(ra, bytes[1])?,
            }
        }
    };
    Ok(inst)
}

/// Splits a register-specifier byte into `(rA, rB)`.
#[inline]
const fn registers(byte: u8) -> (Option<Register>, Option<Register>) {
    (
        Register::from_nibble(byte >> HIGH_NIBBLE_SHIFT),
        Register::from_nibble(byte & LOW_NIBBLE_MASK),
    )
}

#[inline]
const fn required(reg: Option<Register>, specifier: u8) -> Result<Register, IllegalReason> {
    match reg {
        Some(r) => Ok(r),
        None => Err(IllegalReason::MissingRegister(specifier)),
    }
}

#[inline]
const fn condition(opcode: u8, ifun: u8) -> Result<Condition, IllegalReason> {
    match Condition::from_nibble(ifun) {
        Some(c) => Ok(c),
        None => Err(IllegalReason::UnknownFunction(opcode)),
    }
}

/// Reads the little-endian constant at the start of `bytes`.
///
/// Callers have already checked that at least one word is available.
#[inline]
fn read_word(bytes: &[u8]) -> u64 {
    let mut word = [0u8; WORD_SIZE];
    word.copy_from_slice(&bytes[..WORD_SIZE]);
    u64::from_le_bytes(word)
}
