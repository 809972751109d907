//! LOAD (0x03) and STORE (0x23).

use crate::cpu::fields;
use crate::cpu::Cpu;
use crate::error::{CpuError, DecodeError};
use crate::memory::Width;

pub fn load(cpu: &mut Cpu, inst: u32, pc: u64) -> Result<(), CpuError> {
    let rd = fields::rd(inst);
    let rs1 = fields::rs1(inst);
    let addr = (cpu.x.get(rs1) as i64).wrapping_add(fields::imm_i(inst)) as u64;
    let funct3 = fields::funct3(inst);
    let value = match funct3 {
        0x0 => cpu.bus.load(addr, Width::Byte)? as i8 as i64 as u64,
        0x1 => cpu.bus.load(addr, Width::Halfword)? as i16 as i64 as u64,
        0x2 => cpu.bus.load(addr, Width::Word)? as i32 as i64 as u64,
        0x3 => cpu.bus.load(addr, Width::Doubleword)?,
        0x4 => cpu.bus.load(addr, Width::Byte)?,
        0x5 => cpu.bus.load(addr, Width::Halfword)?,
        0x6 => cpu.bus.load(addr, Width::Word)?,
        _ => return Err(decode_err(pc, inst, funct3).into()),
    };
    cpu.x.set(rd, value);
    Ok(())
}

pub fn store(cpu: &mut Cpu, inst: u32, pc: u64) -> Result<(), CpuError> {
    let rs1 = fields::rs1(inst);
    let rs2 = fields::rs2(inst);
    let addr = (cpu.x.get(rs1) as i64).wrapping_add(fields::imm_s(inst)) as u64;
    let value = cpu.x.get(rs2);
    let funct3 = fields::funct3(inst);
    match funct3 {
        0x0 => cpu.bus.store(addr, Width::Byte, value),
        0x1 => cpu.bus.store(addr, Width::Halfword, value),
        0x2 => cpu.bus.store(addr, Width::Word, value),
        0x3 => cpu.bus.store(addr, Width::Doubleword, value),
        _ => return Err(decode_err(pc, inst, funct3).into()),
    }
    Ok(())
}

fn decode_err(pc: u64, inst: u32, funct3: u32) -> DecodeError {
    DecodeError {
        pc,
        inst,
        opcode: fields::opcode(inst) as u8,
        funct3: funct3 as u8,
        funct7: fields::funct7(inst) as u8,
    }
}
