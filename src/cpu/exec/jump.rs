//! JAL (0x6F), JALR (0x67), AUIPC (0x17), and LUI (0x37).
//!
//! All four treat `pc` (already advanced by `fetch`) relative to the
//! address of the instruction itself, `pc - 4`.

use crate::cpu::fields;
use crate::cpu::Cpu;

pub fn jal(cpu: &mut Cpu, inst: u32, pc: u64) {
    let rd = fields::rd(inst);
    let inst_addr = pc - 4;
    cpu.x.set(rd, pc);
    cpu.pc = (inst_addr as i64).wrapping_add(fields::imm_j(inst)) as u64;
}

pub fn jalr(cpu: &mut Cpu, inst: u32, pc: u64) {
    let rd = fields::rd(inst);
    let rs1 = fields::rs1(inst);
    let target = (cpu.x.get(rs1) as i64).wrapping_add(fields::imm_i(inst)) as u64 & !1u64;
    cpu.x.set(rd, pc);
    cpu.pc = target;
}

pub fn auipc(cpu: &mut Cpu, inst: u32, pc: u64) {
    let rd = fields::rd(inst);
    let inst_addr = pc - 4;
    cpu.x.set(rd, (inst_addr as i64).wrapping_add(fields::imm_u(inst)) as u64);
}

pub fn lui(cpu: &mut Cpu, inst: u32) {
    let rd = fields::rd(inst);
    cpu.x.set(rd, fields::imm_u(inst) as u64);
}
