use crate::cpu::{Cpu, CpuError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndirectX,
    IndirectY,
    NoneAddressing,
}

impl AddressingMode {
    /// Computes the effective address an instruction operates on, reading
    /// operand bytes from the current program counter. Reads memory and
    /// registers but mutates nothing.
    ///
    /// NoneAddressing never has an effective address; asking for one is a
    /// decode error the dispatch loop treats as fatal.
    pub fn resolve(self, cpu: &Cpu) -> Result<u16, CpuError> {
        match self {
            AddressingMode::Immediate => Ok(cpu.pc),

            AddressingMode::ZeroPage => Ok(cpu.memory.read(cpu.pc) as u16),

            AddressingMode::ZeroPageX => {
                let base = cpu.memory.read(cpu.pc);
                Ok(base.wrapping_add(cpu.x) as u16)
            }

            AddressingMode::ZeroPageY => {
                let base = cpu.memory.read(cpu.pc);
                Ok(base.wrapping_add(cpu.y) as u16)
            }

            AddressingMode::Absolute => Ok(cpu.memory.read_u16(cpu.pc)),

            AddressingMode::AbsoluteX => {
                let base = cpu.memory.read_u16(cpu.pc);
                Ok(base.wrapping_add(cpu.x as u16))
            }

            AddressingMode::AbsoluteY => {
                let base = cpu.memory.read_u16(cpu.pc);
                Ok(base.wrapping_add(cpu.y as u16))
            }

            AddressingMode::IndirectX => {
                let ptr = cpu.memory.read(cpu.pc).wrapping_add(cpu.x);
                Ok(zero_page_deref(cpu, ptr))
            }

            AddressingMode::IndirectY => {
                // The pointer itself is unindexed; Y is added to the
                // dereferenced 16-bit address.
                let ptr = cpu.memory.read(cpu.pc);
                Ok(zero_page_deref(cpu, ptr).wrapping_add(cpu.y as u16))
            }

            AddressingMode::NoneAddressing => {
                Err(CpuError::UnsupportedAddressing(self))
            }
        }
    }
}

/// Reads a little-endian word from a zero-page pointer. The high byte stays
/// in page zero: a pointer at 0xFF takes its high byte from 0x00.
fn zero_page_deref(cpu: &Cpu, ptr: u8) -> u16 {
    let lo = cpu.memory.read(ptr as u16) as u16;
    let hi = cpu.memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}
