//! Whole-Program Scenarios.
//!
//! Small Y86-64 programs run from address 0 to `halt`, checking the final
//! architectural state. Together they exercise every instruction class.

use pretty_assertions::assert_eq;
use y86sim_core::common::{AccessType, Fault};
use y86sim_core::core::{RunOutcome, Status};
use y86sim_core::isa::abi::Register::*;
use y86sim_core::isa::instruction::{Condition, Instruction};

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

fn run(image: &[u8]) -> TestContext {
    let mut ctx = TestContext::new().load_bytes(image);
    let _ = ctx.run_to_halt();
    ctx
}

// ══════════════════════════════════════════════════════════
// 1. Arithmetic
// ══════════════════════════════════════════════════════════

#[test]
fn add_five_and_three() {
    let mut ctx = TestContext::new().load_program(&[
        Instruction::IrMov { rb: Rax, imm: 5 },
        Instruction::IrMov { rb: Rbx, imm: 3 },
        Instruction::Op {
            op: y86sim_core::isa::instruction::AluOp::Add,
            ra: Rbx,
            rb: Rax,
        },
        Instruction::Halt,
    ]);
    assert_eq!(ctx.run_to_halt(), 4);
    assert_eq!(ctx.get_reg(Rax), 8);
    assert_eq!(ctx.get_reg(Rbx), 3);
    assert!(!ctx.cpu.flags.zf && !ctx.cpu.flags.sf && !ctx.cpu.flags.of);
    assert_eq!(ctx.cpu.pc, 0);
    assert_eq!(ctx.cpu.status(), Status::Halted);
}

#[test]
fn subtract_takes_first_operand_minus_second() {
    let image = ProgramBuilder::new()
        .irmovq(10, Rax)
        .irmovq(3, Rbx)
        .subq(Rax, Rbx)
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rbx), 7);
}

#[test]
fn counted_loop_sums_one_to_five() {
    let image = ProgramBuilder::new()
        .irmovq(5, Rcx)
        .irmovq(u64::MAX, Rsi)
        .xorq(Rax, Rax)
        .label("loop")
        .addq(Rcx, Rax)
        .addq(Rsi, Rcx)
        .jump_to(Condition::Ne, "loop")
        .halt()
        .build();
    let mut ctx = TestContext::new().load_bytes(&image);
    assert_eq!(ctx.run_to_halt(), 3 + 5 * 3 + 1);
    assert_eq!(ctx.get_reg(Rax), 15);
    assert_eq!(ctx.get_reg(Rcx), 0);
    assert_eq!(ctx.cpu.stats.branches_taken, 4);
    assert_eq!(ctx.cpu.stats.branches_not_taken, 1);
}

// ══════════════════════════════════════════════════════════
// 2. Control flow
// ══════════════════════════════════════════════════════════

#[test]
fn je_falls_through_when_not_equal() {
    let image = ProgramBuilder::new()
        .irmovq(1, Rax)
        .irmovq(2, Rbx)
        .subq(Rax, Rbx)
        .jump_to(Condition::E, "skip")
        .irmovq(7, Rcx)
        .label("skip")
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rcx), 7);
}

#[test]
fn je_jumps_when_equal() {
    let image = ProgramBuilder::new()
        .irmovq(4, Rax)
        .xorq(Rax, Rax)
        .jump_to(Condition::E, "skip")
        .irmovq(7, Rcx)
        .label("skip")
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rcx), 0);
}

#[test]
fn jl_uses_sign_and_zero() {
    // 1 - 2 leaves SF=1, ZF=0: `jl` is not taken, `jle` is.
    let image = ProgramBuilder::new()
        .irmovq(1, Rax)
        .irmovq(2, Rbx)
        .subq(Rax, Rbx)
        .jump_to(Condition::L, "less")
        .irmovq(1, Rdx)
        .label("less")
        .jump_to(Condition::Le, "done")
        .irmovq(1, Rsi)
        .label("done")
        .halt()
        .build();
    let ctx = run(&image);
    assert!(ctx.cpu.flags.sf && !ctx.cpu.flags.zf);
    assert_eq!(ctx.get_reg(Rdx), 1);
    assert_eq!(ctx.get_reg(Rsi), 0);
}

#[test]
fn call_and_ret() {
    let image = ProgramBuilder::new()
        .irmovq(0x200, Rsp)
        .call_to("func")
        .irmovq(1, Rdx)
        .halt()
        .label("func")
        .irmovq(42, Rax)
        .ret()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rax), 42);
    assert_eq!(ctx.get_reg(Rdx), 1);
    assert_eq!(ctx.get_reg(Rsp), 0x200);
    // Return address is the byte after the 9-byte call at offset 10.
    assert_eq!(ctx.read_quad(0x1F8), 19);
    assert_eq!(ctx.cpu.stats.inst_call, 1);
    assert_eq!(ctx.cpu.stats.inst_return, 1);
}

#[test]
fn nested_calls_unwind_in_order() {
    let image = ProgramBuilder::new()
        .irmovq(0x300, Rsp)
        .irmovq(1, R8)
        .call_to("outer")
        .halt()
        .label("outer")
        .addq(R8, Rax)
        .call_to("inner")
        .addq(R8, Rax)
        .ret()
        .label("inner")
        .addq(R8, Rax)
        .addq(R8, Rax)
        .ret()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rax), 4);
    assert_eq!(ctx.get_reg(Rsp), 0x300);
}

// ══════════════════════════════════════════════════════════
// 3. Moves and memory
// ══════════════════════════════════════════════════════════

#[test]
fn store_then_load() {
    let image = ProgramBuilder::new()
        .irmovq(0x100, Rbx)
        .irmovq(0x1234_5678_9ABC_DEF0, Rax)
        .rmmovq(Rax, 8, Rbx)
        .mrmovq(8, Rbx, Rcx)
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rcx), 0x1234_5678_9ABC_DEF0);
    assert_eq!(ctx.read_quad(0x108), 0x1234_5678_9ABC_DEF0);
    assert_eq!(ctx.cpu.memory.as_slice()[0x108], 0xF0);
}

#[test]
fn load_data_placed_in_image() {
    let image = ProgramBuilder::new()
        .mrmovq(0x40, Rdx, Rax)
        .halt()
        .at(0x40)
        .quad(0xCAFE)
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rax), 0xCAFE);
}

#[test]
fn rrmovq_copies() {
    let image = ProgramBuilder::new()
        .irmovq(0x77, R10)
        .rrmovq(R10, R11)
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(R11), 0x77);
}

#[test]
fn cmov_never_writes_when_condition_fails() {
    // xorq leaves ZF=1, SF=0.
    let image = ProgramBuilder::new()
        .irmovq(9, Rax)
        .irmovq(4, Rbx)
        .irmovq(4, Rdi)
        .xorq(Rcx, Rcx)
        .cmov(Condition::Ne, Rax, Rbx)
        .cmov(Condition::L, Rax, Rdi)
        .cmov(Condition::E, Rax, Rdx)
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rbx), 4);
    assert_eq!(ctx.get_reg(Rdi), 4);
    assert_eq!(ctx.get_reg(Rdx), 9);
    assert_eq!(ctx.cpu.stats.cmov_suppressed, 2);
}

#[test]
fn cmov_does_not_touch_flags() {
    let image = ProgramBuilder::new()
        .xorq(Rax, Rax)
        .rrmovq(Rax, Rbx)
        .halt()
        .build();
    let ctx = run(&image);
    assert!(ctx.cpu.flags.zf);
}

// ══════════════════════════════════════════════════════════
// 4. Stack
// ══════════════════════════════════════════════════════════

#[test]
fn push_then_pop() {
    let image = ProgramBuilder::new()
        .irmovq(0x200, Rsp)
        .irmovq(0xABC, Rax)
        .pushq(Rax)
        .popq(Rbx)
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rbx), 0xABC);
    assert_eq!(ctx.get_reg(Rsp), 0x200);
    assert_eq!(ctx.read_quad(0x1F8), 0xABC);
}

#[test]
fn push_rsp_stores_old_value() {
    let image = ProgramBuilder::new()
        .irmovq(0x100, Rsp)
        .pushq(Rsp)
        .popq(Rax)
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rax), 0x100);
}

#[test]
fn pop_rsp_takes_popped_value() {
    let image = ProgramBuilder::new()
        .irmovq(0x100, Rsp)
        .irmovq(0x55, Rax)
        .pushq(Rax)
        .popq(Rsp)
        .halt()
        .build();
    let ctx = run(&image);
    assert_eq!(ctx.get_reg(Rsp), 0x55);
}

// ══════════════════════════════════════════════════════════
// 5. Faults in programs
// ══════════════════════════════════════════════════════════

#[test]
fn ret_with_stack_outside_memory_faults() {
    let image = ProgramBuilder::new().irmovq(0x1000, Rsp).ret().build();
    let mut ctx = TestContext::new().load_bytes(&image);
    assert_eq!(
        ctx.cpu.run(None),
        Err(Fault::MemoryFault {
            addr: 0x1000,
            len: 8,
            access: AccessType::Read,
        })
    );
    assert_eq!(ctx.cpu.pc, 10);
    assert_eq!(ctx.get_reg(Rsp), 0x1000);
}

#[test]
fn push_with_zero_stack_pointer_faults() {
    let image = ProgramBuilder::new().pushq(Rax).build();
    let mut ctx = TestContext::new().load_bytes(&image);
    assert_eq!(
        ctx.step(),
        Err(Fault::MemoryFault {
            addr: u64::MAX - 7,
            len: 8,
            access: AccessType::Write,
        })
    );
    assert_eq!(ctx.get_reg(Rsp), 0);
}

#[test]
fn jump_outside_memory_faults_on_next_fetch() {
    let image = ProgramBuilder::new().jump(Condition::Always, 0x500).build();
    let mut ctx = TestContext::new().load_bytes(&image);
    assert_eq!(ctx.step(), Ok(Status::Running));
    assert_eq!(ctx.cpu.pc, 0x500);
    assert_eq!(
        ctx.step(),
        Err(Fault::MemoryFault {
            addr: 0x500,
            len: 1,
            access: AccessType::Fetch,
        })
    );
}

#[test]
fn infinite_loop_hits_budget() {
    let image = ProgramBuilder::new()
        .label("top")
        .nop()
        .jump_to(Condition::Always, "top")
        .build();
    let mut ctx = TestContext::new().load_bytes(&image);
    assert_eq!(ctx.run(100), Ok(RunOutcome::CycleLimit { cycles: 100 }));
    assert_eq!(ctx.cpu.stats.inst_nop, 50);
}
