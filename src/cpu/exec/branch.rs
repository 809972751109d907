//! BRANCH (0x63).
//!
//! `pc` has already been advanced past this instruction by `fetch`, so
//! the branch offset is relative to `pc - 4`, the address of the
//! branch instruction itself.

use crate::cpu::fields;
use crate::cpu::Cpu;
use crate::error::{CpuError, DecodeError};

pub fn branch(cpu: &mut Cpu, inst: u32, pc: u64) -> Result<(), CpuError> {
    let a = cpu.x.get(fields::rs1(inst));
    let b = cpu.x.get(fields::rs2(inst));
    let funct3 = fields::funct3(inst);
    let taken = match funct3 {
        0x0 => a == b,
        0x1 => a != b,
        0x4 => (a as i64) < (b as i64),
        0x5 => (a as i64) >= (b as i64),
        0x6 => a < b,
        0x7 => a >= b,
        _ => {
            return Err(DecodeError {
                pc,
                inst,
                opcode: fields::opcode(inst) as u8,
                funct3: funct3 as u8,
                funct7: fields::funct7(inst) as u8,
            }
            .into())
        }
    };
    if taken {
        let inst_addr = pc - 4;
        cpu.pc = (inst_addr as i64).wrapping_add(fields::imm_b(inst)) as u64;
    }
    Ok(())
}
