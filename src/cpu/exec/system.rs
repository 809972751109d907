//! SYSTEM / CSR (0x73).
//!
//! This core implements only the six Zicsr read-modify-write
//! instructions; `ECALL`/`EBREAK` and the privileged `xRET`/`WFI`
//! encodings that share this opcode are not decoded.

use crate::cpu::fields;
use crate::cpu::Cpu;
use crate::error::{CpuError, DecodeError};

pub fn system(cpu: &mut Cpu, inst: u32, pc: u64) -> Result<(), CpuError> {
    let rd = fields::rd(inst);
    let addr = fields::csr(inst);
    let funct3 = fields::funct3(inst);

    match funct3 {
        0x1 => {
            // CSRRW: unconditional read-then-write from rs1.
            let rs1 = fields::rs1(inst);
            let old = cpu.load_csr(addr);
            cpu.store_csr(addr, cpu.x.get(rs1));
            cpu.x.set(rd, old);
        }
        0x2 => {
            let rs1 = fields::rs1(inst);
            let old = cpu.load_csr(addr);
            if rs1 != 0 {
                cpu.store_csr(addr, old | cpu.x.get(rs1));
            }
            cpu.x.set(rd, old);
        }
        0x3 => {
            let rs1 = fields::rs1(inst);
            let old = cpu.load_csr(addr);
            if rs1 != 0 {
                cpu.store_csr(addr, old & !cpu.x.get(rs1));
            }
            cpu.x.set(rd, old);
        }
        0x5 => {
            let zimm = fields::rs1(inst) as u64;
            let old = cpu.load_csr(addr);
            cpu.store_csr(addr, zimm);
            cpu.x.set(rd, old);
        }
        0x6 => {
            let zimm = fields::rs1(inst) as u64;
            let old = cpu.load_csr(addr);
            if zimm != 0 {
                cpu.store_csr(addr, old | zimm);
            }
            cpu.x.set(rd, old);
        }
        0x7 => {
            let zimm = fields::rs1(inst) as u64;
            let old = cpu.load_csr(addr);
            if zimm != 0 {
                cpu.store_csr(addr, old & !zimm);
            }
            cpu.x.set(rd, old);
        }
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
    }
    Ok(())
}
