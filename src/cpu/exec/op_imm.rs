//! OP-IMM (0x13) and OP-IMM-32 (0x1B).

use crate::cpu::fields;
use crate::cpu::Cpu;
use crate::error::{CpuError, DecodeError};

pub fn op_imm(cpu: &mut Cpu, inst: u32, _pc: u64) -> Result<(), CpuError> {
    let rd = fields::rd(inst);
    let rs1 = fields::rs1(inst);
    let rs1_val = cpu.x.get(rs1);
    let imm = fields::imm_i(inst);
    let funct3 = fields::funct3(inst);
    let result = match funct3 {
        0x0 => (rs1_val as i64).wrapping_add(imm) as u64,
        0x1 => rs1_val << fields::shamt64(inst),
        0x2 => ((rs1_val as i64) < imm) as u64,
        0x3 => (rs1_val < imm as u64) as u64,
        0x4 => rs1_val ^ imm as u64,
        0x5 => {
            let shamt = fields::shamt64(inst);
            if fields::funct7(inst) & 0b0111_1110 == 0x00 {
                rs1_val >> shamt
            } else {
                ((rs1_val as i64) >> shamt) as u64
            }
        }
        0x6 => rs1_val | imm as u64,
        0x7 => rs1_val & imm as u64,
        _ => unreachable!("funct3 is a 3-bit field"),
    };
    cpu.x.set(rd, result);
    Ok(())
}

pub fn op_imm_32(cpu: &mut Cpu, inst: u32, pc: u64) -> Result<(), CpuError> {
    let rd = fields::rd(inst);
    let rs1 = fields::rs1(inst);
    let rs1_val = cpu.x.get(rs1) as i32;
    let imm = fields::imm_i(inst) as i32;
    let funct3 = fields::funct3(inst);
    let result: i32 = match funct3 {
        0x0 => rs1_val.wrapping_add(imm),
        0x1 => rs1_val.wrapping_shl(fields::shamt32(inst)),
        0x5 => {
            let shamt = fields::shamt32(inst);
            if fields::funct7(inst) == 0x00 {
                ((rs1_val as u32) >> shamt) as i32
            } else {
                rs1_val.wrapping_shr(shamt)
            }
        }
        _ => return Err(decode_err(pc, inst, funct3).into()),
    };
    cpu.x.set(rd, result as i64 as u64);
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
