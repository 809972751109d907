//! The CPU: architectural state, fetch, and the top-level decode/execute dispatch.

pub mod csr;
pub mod exec;
pub mod fields;
pub mod registers;

use crate::bus::Bus;
use crate::error::{CpuError, LoadImageError};
use crate::memory::{Width, MEM_BASE, MEM_SIZE};
use registers::Registers;

const OP_LOAD: u32 = 0x03;
const OP_IMM: u32 = 0x13;
const OP_AUIPC: u32 = 0x17;
const OP_IMM_32: u32 = 0x1b;
const OP_STORE: u32 = 0x23;
const OP_OP: u32 = 0x33;
const OP_LUI: u32 = 0x37;
const OP_OP_32: u32 = 0x3b;
const OP_BRANCH: u32 = 0x63;
const OP_JALR: u32 = 0x67;
const OP_JAL: u32 = 0x6f;
const OP_SYSTEM: u32 = 0x73;

/// Architectural state of one RV64I hart.
#[derive(Debug)]
pub struct Cpu {
    pub pc: u64,
    pub(crate) x: Registers,
    pub(crate) csrs: [u64; csr::NUM_CSRS],
    pub(crate) bus: Bus,
}

impl Cpu {
    /// Build a hart with `image` loaded at [`MEM_BASE`], `pc` starting
    /// there, and `x2` (the stack pointer) pointing one-past the top
    /// of RAM.
    pub fn new(image: &[u8]) -> Result<Self, LoadImageError> {
        if image.len() > MEM_SIZE {
            return Err(LoadImageError::TooLarge { size: image.len() });
        }
        let mut cpu = Self {
            pc: MEM_BASE,
            x: Registers::new(),
            csrs: [0u64; csr::NUM_CSRS],
            bus: Bus::with_image(image),
        };
        cpu.x.set(2, MEM_BASE + MEM_SIZE as u64);
        Ok(cpu)
    }

    /// Read general-purpose register `which` (0-31).
    pub fn register(&self, which: u8) -> u64 {
        self.x.get(which)
    }

    /// Write general-purpose register `which` (0-31); writes to `x0` are discarded.
    pub fn set_register(&mut self, which: u8, value: u64) {
        self.x.set(which, value);
    }

    /// Fetch the instruction word at `pc`, advancing `pc` by 4.
    pub fn fetch(&mut self) -> Result<u32, CpuError> {
        let inst = self.bus.load(self.pc, Width::Word)? as u32;
        self.pc += 4;
        Ok(inst)
    }

    /// Decode and run one instruction word. `self.pc` must already be
    /// the address *following* `inst`, as left by [`Cpu::fetch`].
    pub fn execute(&mut self, inst: u32) -> Result<(), CpuError> {
        let pc = self.pc;
        let opcode = fields::opcode(inst);
        match opcode {
            OP_LOAD => exec::load_store::load(self, inst, pc)?,
            OP_STORE => exec::load_store::store(self, inst, pc)?,
            OP_IMM => exec::op_imm::op_imm(self, inst, pc)?,
            OP_IMM_32 => exec::op_imm::op_imm_32(self, inst, pc)?,
            OP_OP => exec::op::op(self, inst, pc)?,
            OP_OP_32 => exec::op::op_32(self, inst, pc)?,
            OP_AUIPC => exec::jump::auipc(self, inst, pc),
            OP_LUI => exec::jump::lui(self, inst),
            OP_JAL => exec::jump::jal(self, inst, pc),
            OP_JALR => exec::jump::jalr(self, inst, pc),
            OP_BRANCH => exec::branch::branch(self, inst, pc)?,
            OP_SYSTEM => exec::system::system(self, inst, pc)?,
            _ => {
                return Err(crate::error::DecodeError {
                    pc,
                    inst,
                    opcode: opcode as u8,
                    funct3: fields::funct3(inst) as u8,
                    funct7: fields::funct7(inst) as u8,
                }
                .into())
            }
        }
        debug_assert_eq!(self.x.get(0), 0);
        Ok(())
    }

    /// One line with `pc` and all 32 registers, hex, space-separated.
    pub fn dump_registers(&self) -> String {
        let mut line = format!("{:016x}", self.pc);
        for value in self.x.all() {
            line.push(' ');
            line.push_str(&format!("{value:016x}"));
        }
        line
    }

    /// A second diagnostic line with the CSRs of interest to a debugger.
    pub fn dump_csrs(&self) -> String {
        format!(
            "mstatus={:016x} mtvec={:016x} mepc={:016x} mcause={:016x} \
             sstatus={:016x} stvec={:016x} sepc={:016x} scause={:016x}",
            self.load_csr(csr::MSTATUS),
            self.load_csr(csr::MTVEC),
            self.load_csr(csr::MEPC),
            self.load_csr(csr::MCAUSE),
            self.load_csr(csr::SSTATUS),
            self.load_csr(csr::STVEC),
            self.load_csr(csr::SEPC),
            self.load_csr(csr::SCAUSE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_pc_and_stack_pointer_to_the_top_of_ram() {
        let cpu = Cpu::new(&[]).unwrap();
        assert_eq!(cpu.pc, MEM_BASE);
        assert_eq!(cpu.register(2), MEM_BASE + MEM_SIZE as u64);
    }

    #[test]
    fn new_rejects_an_image_larger_than_mem_size() {
        let oversized = vec![0u8; MEM_SIZE + 1];
        assert!(matches!(
            Cpu::new(&oversized),
            Err(LoadImageError::TooLarge { size }) if size == MEM_SIZE + 1
        ));
    }

    #[test]
    fn fetch_advances_pc_by_four() {
        let mut cpu = Cpu::new(&[0x13, 0x00, 0x00, 0x00]).unwrap(); // addi x0,x0,0
        let inst = cpu.fetch().unwrap();
        assert_eq!(inst, 0x0000_0013);
        assert_eq!(cpu.pc, MEM_BASE + 4);
    }

    #[test]
    fn execute_rejects_an_unsupported_opcode() {
        let mut cpu = Cpu::new(&[]).unwrap();
        cpu.pc = MEM_BASE + 4;
        let err = cpu.execute(0b0101011).unwrap_err(); // opcode 0x2b is unassigned here
        assert!(matches!(err, CpuError::Decode(_)));
    }

    #[test]
    fn x0_stays_zero_after_an_instruction_targets_it() {
        let mut cpu = Cpu::new(&[]).unwrap();
        cpu.pc = MEM_BASE + 4;
        cpu.execute(0x0010_0013).unwrap(); // addi x0, x0, 1
        assert_eq!(cpu.register(0), 0);
    }
}
