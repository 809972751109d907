//! OP (0x33, including the M-extension's `MUL`) and OP-32 (0x3B).

use crate::cpu::fields;
use crate::cpu::Cpu;
use crate::error::{CpuError, DecodeError};

pub fn op(cpu: &mut Cpu, inst: u32, pc: u64) -> Result<(), CpuError> {
    let rd = fields::rd(inst);
    let a = cpu.x.get(fields::rs1(inst));
    let b = cpu.x.get(fields::rs2(inst));
    let funct3 = fields::funct3(inst);
    let funct7 = fields::funct7(inst);
    let result = match (funct3, funct7) {
        (0x0, 0x00) => a.wrapping_add(b),
        (0x0, 0x20) => a.wrapping_sub(b),
        (0x0, 0x01) => a.wrapping_mul(b),
        (0x1, 0x00) => a << (b & 0x3f),
        (0x2, 0x00) => ((a as i64) < (b as i64)) as u64,
        (0x3, 0x00) => (a < b) as u64,
        (0x4, 0x00) => a ^ b,
        (0x5, 0x00) => a >> (b & 0x3f),
        (0x5, 0x20) => ((a as i64) >> (b & 0x3f)) as u64,
        (0x6, 0x00) => a | b,
        (0x7, 0x00) => a & b,
        _ => return Err(decode_err(pc, inst, funct3, funct7).into()),
    };
    cpu.x.set(rd, result);
    Ok(())
}

pub fn op_32(cpu: &mut Cpu, inst: u32, pc: u64) -> Result<(), CpuError> {
    let rd = fields::rd(inst);
    let a = cpu.x.get(fields::rs1(inst)) as i32;
    let b = cpu.x.get(fields::rs2(inst)) as i32;
    let funct3 = fields::funct3(inst);
    let funct7 = fields::funct7(inst);
    let result: i32 = match (funct3, funct7) {
        (0x0, 0x00) => a.wrapping_add(b),
        (0x0, 0x20) => a.wrapping_sub(b),
        (0x1, 0x00) => a.wrapping_shl(b as u32 & 0x1f),
        (0x5, 0x00) => ((a as u32) >> (b as u32 & 0x1f)) as i32,
        (0x5, 0x20) => a.wrapping_shr(b as u32 & 0x1f),
        _ => return Err(decode_err(pc, inst, funct3, funct7).into()),
    };
    cpu.x.set(rd, result as i64 as u64);
    Ok(())
}

fn decode_err(pc: u64, inst: u32, funct3: u32, funct7: u32) -> DecodeError {
    DecodeError {
        pc,
        inst,
        opcode: fields::opcode(inst) as u8,
        funct3: funct3 as u8,
        funct7: funct7 as u8,
    }
}
