//! Instruction Decode Properties.
//!
//! Verifies that `classify()` and `decode()` correctly extract the class,
//! function code, register nibbles, and little-endian constants for every
//! instruction form, and reject every malformed encoding.
//!
//! # Coverage Matrix
//!
//! - 1-byte:  halt, nop, ret
//! - 2-byte:  cmovXX, OPq, pushq, popq
//! - 9-byte:  jXX, call
//! - 10-byte: irmovq, rmmovq, mrmovq

use proptest::prelude::*;
use rstest::rstest;
use y86sim_core::common::IllegalReason;
use y86sim_core::isa::abi::Register;
use y86sim_core::isa::decode::{classify, decode, split_opcode};
use y86sim_core::isa::instruction::{AluOp, Condition, InstClass, Instruction};

// ──────────────────────────────────────────────────────────
// 1. Opcode classification
// ──────────────────────────────────────────────────────────

#[test]
fn split_opcode_nibbles() {
    assert_eq!(split_opcode(0x63), (0x6, 0x3));
    assert_eq!(split_opcode(0xA0), (0xA, 0x0));
}

#[rstest]
#[case(0x00, InstClass::Halt)]
#[case(0x10, InstClass::Nop)]
#[case(0x20, InstClass::CMov)]
#[case(0x26, InstClass::CMov)]
#[case(0x30, InstClass::IrMov)]
#[case(0x40, InstClass::RmMov)]
#[case(0x50, InstClass::MrMov)]
#[case(0x60, InstClass::Op)]
#[case(0x63, InstClass::Op)]
#[case(0x70, InstClass::Jump)]
#[case(0x76, InstClass::Jump)]
#[case(0x80, InstClass::Call)]
#[case(0x90, InstClass::Ret)]
#[case(0xA0, InstClass::Push)]
#[case(0xB0, InstClass::Pop)]
fn classify_valid(#[case] byte: u8, #[case] class: InstClass) {
    assert_eq!(classify(byte), Ok(class));
}

#[test]
fn classify_rejects_unassigned_classes() {
    for icode in 0xCu8..=0xF {
        for ifun in 0..=0xF {
            let byte = (icode << 4) | ifun;
            assert_eq!(classify(byte), Err(IllegalReason::UnknownOpcode(byte)));
        }
    }
}

#[test]
fn classify_rejects_function_bits_on_plain_classes() {
    for icode in [0x0u8, 0x1, 0x3, 0x4, 0x5, 0x8, 0x9, 0xA, 0xB] {
        for ifun in 1..=0xF {
            let byte = (icode << 4) | ifun;
            assert_eq!(classify(byte), Err(IllegalReason::UnknownFunction(byte)));
        }
    }
}

// ──────────────────────────────────────────────────────────
// 2. Operand extraction
// ──────────────────────────────────────────────────────────

#[test]
fn decode_irmovq_little_endian_immediate() {
    let bytes = [0x30, 0xF2, 0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01];
    assert_eq!(
        decode(&bytes),
        Ok(Instruction::IrMov {
            rb: Register::Rdx,
            imm: 0x0123_4567_89AB_CDEF,
        })
    );
}

#[test]
fn decode_irmovq_ignores_ra_nibble() {
    let bytes = [0x30, 0x52, 1, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(
        decode(&bytes),
        Ok(Instruction::IrMov {
            rb: Register::Rdx,
            imm: 1
        })
    );
}

#[test]
fn decode_memory_forms() {
    let disp = 0x18u64.to_le_bytes();
    let mut rm = vec![0x40, 0x67];
    rm.extend_from_slice(&disp);
    assert_eq!(
        decode(&rm),
        Ok(Instruction::RmMov {
            ra: Register::Rsi,
            rb: Register::Rdi,
            disp: 0x18,
        })
    );
    rm[0] = 0x50;
    assert_eq!(
        decode(&rm),
        Ok(Instruction::MrMov {
            ra: Register::Rsi,
            rb: Register::Rdi,
            disp: 0x18,
        })
    );
}

#[rstest]
#[case(0x60, AluOp::Add)]
#[case(0x61, AluOp::Sub)]
#[case(0x62, AluOp::And)]
#[case(0x63, AluOp::Xor)]
fn decode_op_function(#[case] opcode: u8, #[case] op: AluOp) {
    assert_eq!(
        decode(&[opcode, 0x9A]),
        Ok(Instruction::Op {
            op,
            ra: Register::R9,
            rb: Register::R10,
        })
    );
}

#[rstest]
#[case(0x0, Condition::Always)]
#[case(0x1, Condition::Le)]
#[case(0x2, Condition::L)]
#[case(0x3, Condition::E)]
#[case(0x4, Condition::Ne)]
#[case(0x5, Condition::Ge)]
#[case(0x6, Condition::G)]
fn decode_conditions(#[case] ifun: u8, #[case] cond: Condition) {
    assert_eq!(
        decode(&[0x20 | ifun, 0x01]),
        Ok(Instruction::CMov {
            cond,
            ra: Register::Rax,
            rb: Register::Rcx,
        })
    );
    let mut jump = vec![0x70 | ifun];
    jump.extend_from_slice(&0x40u64.to_le_bytes());
    assert_eq!(decode(&jump), Ok(Instruction::Jump { cond, dest: 0x40 }));
}

#[test]
fn decode_stack_forms_ignore_rb_nibble() {
    assert_eq!(decode(&[0xA0, 0x3F]), Ok(Instruction::Push { ra: Register::Rbx }));
    assert_eq!(decode(&[0xA0, 0x30]), Ok(Instruction::Push { ra: Register::Rbx }));
    assert_eq!(decode(&[0xB0, 0xEF]), Ok(Instruction::Pop { ra: Register::R14 }));
}

#[test]
fn decode_ignores_trailing_bytes() {
    assert_eq!(decode(&[0x90, 0xFF, 0xFF]), Ok(Instruction::Ret));
}

// ──────────────────────────────────────────────────────────
// 3. Rejection
// ──────────────────────────────────────────────────────────

#[test]
fn decode_rejects_bad_function_codes() {
    assert_eq!(decode(&[0x27, 0x01]), Err(IllegalReason::UnknownFunction(0x27)));
    assert_eq!(decode(&[0x64, 0x01]), Err(IllegalReason::UnknownFunction(0x64)));
    let mut jump = vec![0x7F];
    jump.extend_from_slice(&[0; 8]);
    assert_eq!(decode(&jump), Err(IllegalReason::UnknownFunction(0x7F)));
}

#[test]
fn decode_rejects_missing_registers() {
    assert_eq!(decode(&[0x60, 0xF1]), Err(IllegalReason::MissingRegister(0xF1)));
    assert_eq!(decode(&[0x20, 0x1F]), Err(IllegalReason::MissingRegister(0x1F)));
    assert_eq!(decode(&[0xB0, 0xF0]), Err(IllegalReason::MissingRegister(0xF0)));
    let mut ir = vec![0x30, 0xFF];
    ir.extend_from_slice(&[0; 8]);
    assert_eq!(decode(&ir), Err(IllegalReason::MissingRegister(0xFF)));
}

#[test]
fn decode_rejects_truncated_input() {
    assert_eq!(
        decode(&[]),
        Err(IllegalReason::Truncated {
            needed: 1,
            available: 0
        })
    );
    assert_eq!(
        decode(&[0x30, 0xF0, 0, 0]),
        Err(IllegalReason::Truncated {
            needed: 10,
            available: 4
        })
    );
    assert_eq!(
        decode(&[0x80]),
        Err(IllegalReason::Truncated {
            needed: 9,
            available: 1
        })
    );
}

proptest! {
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..16)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn decoded_length_matches_class(bytes in prop::collection::vec(any::<u8>(), 10..=10)) {
        if let Ok(inst) = decode(&bytes) {
            prop_assert_eq!(Ok(inst.class()), classify(bytes[0]));
            prop_assert_eq!(inst.encode().len() as u64, inst.length());
        }
    }
}
