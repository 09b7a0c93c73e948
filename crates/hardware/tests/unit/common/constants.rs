//! Constant Tests.
//!
//! Pins the encoding lengths and memory constants the rest of the suite relies on.

use y86sim_core::common::constants::*;
use y86sim_core::isa::instruction::InstClass;

#[test]
fn default_memory_is_one_kib() {
    assert_eq!(DEFAULT_MEMORY_SIZE, 1024);
}

#[test]
fn word_and_stack_step_are_eight_bytes() {
    assert_eq!(WORD_SIZE, 8);
    assert_eq!(STACK_STEP, 8);
}

#[test]
fn encoding_lengths() {
    assert_eq!(LEN_OPCODE_ONLY, 1);
    assert_eq!(LEN_REGISTERS, 2);
    assert_eq!(LEN_DEST, 9);
    assert_eq!(LEN_REGISTERS_CONST, 10);
}

#[test]
fn class_lengths_match_layouts() {
    let expected = [
        (InstClass::Halt, 1),
        (InstClass::Nop, 1),
        (InstClass::CMov, 2),
        (InstClass::IrMov, 10),
        (InstClass::RmMov, 10),
        (InstClass::MrMov, 10),
        (InstClass::Op, 2),
        (InstClass::Jump, 9),
        (InstClass::Call, 9),
        (InstClass::Ret, 1),
        (InstClass::Push, 2),
        (InstClass::Pop, 2),
    ];
    for (class, len) in expected {
        assert_eq!(class.length(), len, "{class:?}");
    }
}
