//! Address-decoding layer between the CPU and its devices.
//!
//! Today there is exactly one device (RAM), so routing is a single
//! range check, but the bus exists as its own type precisely so the
//! CPU never has to change when a second device (UART, timer, PLIC)
//! is added: a new entry joins the ordered `regions` list below rather
//! than the CPU growing a second load/store path.

use crate::error::BusFault;
use crate::memory::{Memory, Width, MEM_BASE, MEM_SIZE};

/// The single address-decoding layer owned by the CPU.
#[derive(Debug)]
pub struct Bus {
    memory: Memory,
}

impl Bus {
    /// Build a bus over fresh, zeroed RAM.
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
        }
    }

    /// Build a bus over RAM pre-loaded with `image` at [`MEM_BASE`].
    pub fn with_image(image: &[u8]) -> Self {
        Self {
            memory: Memory::with_image(image),
        }
    }

    fn in_ram(addr: u64) -> bool {
        addr >= MEM_BASE && addr < MEM_BASE.saturating_add(MEM_SIZE as u64)
    }

    /// Load `width` bits from `addr`. Fatal if `addr` routes to no device.
    pub fn load(&self, addr: u64, width: Width) -> Result<u64, BusFault> {
        if Self::in_ram(addr) {
            self.memory
                .load(addr, width)
                .ok_or(BusFault { addr })
        } else {
            Err(BusFault { addr })
        }
    }

    /// Store `width` bits of `value` to `addr`.
    ///
    /// A store to an address below [`MEM_BASE`] is dropped silently:
    /// only loads from unmapped space are treated as fatal.
    pub fn store(&mut self, addr: u64, width: Width, value: u64) {
        if Self::in_ram(addr) {
            self.memory.store(addr, width, value);
        }
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_below_mem_base_is_a_fault() {
        let bus = Bus::new();
        assert_eq!(
            bus.load(MEM_BASE - 1, Width::Byte),
            Err(BusFault { addr: MEM_BASE - 1 })
        );
    }

    #[test]
    fn store_below_mem_base_is_silently_dropped() {
        let mut bus = Bus::new();
        bus.store(0, Width::Word, 0xdead_beef);
        assert_eq!(bus.load(MEM_BASE, Width::Word), Ok(0));
    }

    #[test]
    fn round_trip_through_ram() {
        let mut bus = Bus::new();
        bus.store(MEM_BASE + 16, Width::Doubleword, 0x1122_3344_5566_7788);
        assert_eq!(
            bus.load(MEM_BASE + 16, Width::Doubleword),
            Ok(0x1122_3344_5566_7788)
        );
    }

    #[test]
    fn image_is_visible_at_mem_base() {
        let bus = Bus::with_image(&[0x13, 0x00, 0x00, 0x00]);
        assert_eq!(bus.load(MEM_BASE, Width::Word), Ok(0x13));
    }
}
