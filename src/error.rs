//! Error types for the emulator core.
//!
//! Each fallible component gets its own small `thiserror`-derived enum
//! rather than a single catch-all; this keeps the error returned by a
//! function specific to what that function can actually get wrong.

use thiserror::Error;

use crate::memory::MEM_SIZE;

/// A memory access used an access width other than 8, 16, 32, or 64 bits.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported access width {0} bits (expected 8, 16, 32, or 64)")]
pub struct UnsupportedWidth(pub u32);

/// The bus could not route a load or store to any device.
///
/// Stores to unmapped addresses are dropped silently and so never
/// produce this error; only loads do.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("load from unmapped address {addr:#018x}")]
pub struct BusFault {
    pub addr: u64,
}

/// The decoder found an opcode, funct3, or funct7 combination this
/// core does not implement.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "unsupported instruction 0x{inst:08x} at pc {pc:#018x} \
     (opcode={opcode:#04x}, funct3={funct3:#x}, funct7={funct7:#x})"
)]
pub struct DecodeError {
    pub pc: u64,
    pub inst: u32,
    pub opcode: u8,
    pub funct3: u8,
    pub funct7: u8,
}

/// Everything that can go wrong while fetching or executing one instruction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    #[error(transparent)]
    Bus(#[from] BusFault),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure to load a flat binary image into guest memory.
#[derive(Debug, Error)]
pub enum LoadImageError {
    #[error("failed to read binary {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("binary is {size} bytes, which exceeds MEM_SIZE ({MEM_SIZE} bytes)")]
    TooLarge { size: usize },
}
