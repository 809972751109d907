//! End-to-end scenarios: assemble a small program as raw instruction
//! words, run it through the public fetch/execute loop, and check the
//! resulting architectural state.

use rv64emu::{Cpu, MEM_BASE};

fn image_of(words: &[u32]) -> Vec<u8> {
    let mut image = Vec::with_capacity(words.len() * 4);
    for w in words {
        image.extend_from_slice(&w.to_le_bytes());
    }
    image
}

/// Generous enough for every scenario below, which all halt in well
/// under a hundred steps; a runaway jump/branch should fail the test
/// with this message, not hang the suite.
const MAX_STEPS: usize = 10_000;

fn run(words: &[u32]) -> Cpu {
    let mut cpu = Cpu::new(&image_of(words)).expect("image fits in guest memory");
    for _ in 0..MAX_STEPS {
        if cpu.pc == 0 {
            return cpu;
        }
        let inst = cpu.fetch().expect("fetch from mapped program text");
        if inst == 0 {
            return cpu;
        }
        cpu.execute(inst).expect("every opcode here is supported");
    }
    panic!("program did not halt within {MAX_STEPS} steps");
}

#[test]
fn addi_chain() {
    let cpu = run(&[0x0050_0093, 0x0250_8113, 0x0000_0000]);
    assert_eq!(cpu.register(1), 5);
    assert_eq!(cpu.register(2), 42);
}

#[test]
fn lui_plus_addi_assembles_a_32_bit_constant() {
    let cpu = run(&[0x1234_52b7, 0x6782_8293, 0x0000_0000]);
    assert_eq!(cpu.register(5), 0x1234_5678);
}

#[test]
fn store_then_load_round_trips_a_pointer() {
    // x1 = MEM_BASE + 0x1000 (set directly: any value built purely from
    // LUI would be sign-extended past bit 31, which MEM_BASE already
    // sets). sd x1, 0(x1); ld x2, 0(x1).
    let sd_x1_0_x1: u32 = 0x0010_b023; // rs1=1, rs2=1, imm=0, funct3=3
    let ld_x2_0_x1: u32 = 0x0000_b103; // rs1=1, rd=2, imm=0, funct3=3

    let mut cpu = Cpu::new(&[]).unwrap();
    cpu.set_register(1, MEM_BASE + 0x1000);
    cpu.execute(sd_x1_0_x1).unwrap();
    cpu.execute(ld_x2_0_x1).unwrap();
    assert_eq!(cpu.register(2), cpu.register(1));
}

#[test]
fn branch_taken_skips_the_next_instruction() {
    // addi x1,x0,1; beq x1,x1,+8; addi x2,x0,99; addi x3,x0,7; 0
    let cpu = run(&[
        0x0010_0093,
        0x0010_8463,
        0x0630_0113,
        0x0070_0193,
        0x0000_0000,
    ]);
    assert_eq!(cpu.register(2), 0);
    assert_eq!(cpu.register(3), 7);
}

#[test]
fn jal_and_jalr_return() {
    // addr0: jal x1, +8   -- call the subroutine at addr8, link = addr4
    // addr4: 0            -- the return lands here and halts immediately
    // addr8: jalr x0, x1, 0 -- subroutine: jump back to the link register
    //
    // Laying the halt word at the return address (rather than after the
    // subroutine) keeps this forward-progressing: the subroutine is only
    // ever reached through the call, and returning falls straight into
    // the halt instead of back into the subroutine.
    let cpu = run(&[0x0080_00ef, 0x0000_0000, 0x0000_8067]);
    assert_eq!(cpu.register(1), MEM_BASE + 4);
}

#[test]
fn csrrw_then_csrrs_round_trips_mscratch() {
    let mut cpu = Cpu::new(&[]).unwrap();
    cpu.set_register(1, 0xdead_beef);
    cpu.execute(0x3400_9073).unwrap(); // csrrw x0, mscratch, x1
    cpu.execute(0x3400_2173).unwrap(); // csrrs x2, mscratch, x0
    assert_eq!(cpu.register(2), 0xdead_beef);
}
