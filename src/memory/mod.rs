use crate::cpu::CpuError;

pub const MEMORY_SIZE: usize = 0x10000;

/// Programs are loaded into the upper half of the address space.
pub const PROGRAM_START: u16 = 0x8000;

/// Location the CPU reads its initial program counter from on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

pub struct Memory {
    ram: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            ram: [0; MEMORY_SIZE],
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.ram[addr as usize] = data;
    }

    /// Little-endian word read. The high byte address wraps, so a read at
    /// 0xFFFF takes its high byte from 0x0000.
    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn write_u16(&mut self, addr: u16, data: u16) {
        self.write(addr, (data & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (data >> 8) as u8);
    }

    /// Copies `program` to PROGRAM_START and points the reset vector at it.
    /// A program that would run past the top of memory is rejected before
    /// any byte is copied.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        let start = PROGRAM_START as usize;
        if program.len() > MEMORY_SIZE - start {
            return Err(CpuError::ProgramTooLarge(program.len()));
        }
        self.ram[start..start + program.len()].copy_from_slice(program);
        self.write_u16(RESET_VECTOR, PROGRAM_START);
        Ok(())
    }
}
