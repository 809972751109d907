//! Instruction bit-field extraction and immediate reconstruction.
//!
//! This is the single highest-risk area of the decoder (sign
//! extension bugs are easy to introduce and easy to miss), so every
//! immediate constructor below is unit-tested against at least one
//! negative value.

/// opcode: inst\[6:0\]
pub fn opcode(inst: u32) -> u32 {
    inst & 0x7f
}

/// rd: inst\[11:7\]
pub fn rd(inst: u32) -> u8 {
    ((inst >> 7) & 0x1f) as u8
}

/// funct3: inst\[14:12\]
pub fn funct3(inst: u32) -> u32 {
    (inst >> 12) & 0x7
}

/// rs1: inst\[19:15\]
pub fn rs1(inst: u32) -> u8 {
    ((inst >> 15) & 0x1f) as u8
}

/// rs2: inst\[24:20\]
pub fn rs2(inst: u32) -> u8 {
    ((inst >> 20) & 0x1f) as u8
}

/// funct7: inst\[31:25\]
pub fn funct7(inst: u32) -> u32 {
    (inst >> 25) & 0x7f
}

/// I-type immediate: sext(inst\[31:20\]), as a 64-bit signed value.
pub fn imm_i(inst: u32) -> i64 {
    ((inst as i32) >> 20) as i64
}

/// S-type immediate: sext({inst\[31:25\], inst\[11:7\]}).
pub fn imm_s(inst: u32) -> i64 {
    let hi = (((inst & 0xfe00_0000) as i32) >> 20) as i64;
    let lo = ((inst >> 7) & 0x1f) as i64;
    hi | lo
}

/// B-type immediate: sext({inst\[31\], inst\[7\], inst\[30:25\], inst\[11:8\], 0}).
pub fn imm_b(inst: u32) -> i64 {
    let sign = (((inst & 0x8000_0000) as i32) >> 19) as i64;
    let bit11 = ((inst & 0x80) << 4) as i64;
    let bits10_5 = ((inst >> 20) & 0x7e0) as i64;
    let bits4_1 = ((inst >> 7) & 0x1e) as i64;
    sign | bit11 | bits10_5 | bits4_1
}

/// U-type immediate: sext(inst\[31:12\] << 12).
pub fn imm_u(inst: u32) -> i64 {
    ((inst & 0xffff_f000) as i32) as i64
}

/// J-type immediate: sext({inst\[31\], inst\[19:12\], inst\[20\], inst\[30:21\], 0}).
pub fn imm_j(inst: u32) -> i64 {
    let sign = (((inst & 0x8000_0000) as i32) >> 11) as i64;
    let bits19_12 = (inst & 0xf_f000) as i64;
    let bit11 = ((inst >> 9) & 0x800) as i64;
    let bits10_1 = ((inst >> 20) & 0x7fe) as i64;
    sign | bits19_12 | bit11 | bits10_1
}

/// Shift amount for RV64 `*i` shift-immediate instructions: low 6
/// bits of the I-immediate.
pub fn shamt64(inst: u32) -> u32 {
    (imm_i(inst) as u64 & 0x3f) as u32
}

/// Shift amount for the word-sized `*iw` shift-immediate instructions:
/// low 5 bits of the I-immediate.
pub fn shamt32(inst: u32) -> u32 {
    (imm_i(inst) as u64 & 0x1f) as u32
}

/// The 12-bit CSR address, inst\[31:20\] (unsigned, unlike [`imm_i`]).
pub fn csr(inst: u32) -> u16 {
    ((inst >> 20) & 0xfff) as u16
}
