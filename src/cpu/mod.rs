use std::fmt;

use bitflags::bitflags;

use crate::memory::{Memory, RESET_VECTOR};

pub mod addressing;
pub mod opcodes;


pub use addressing::AddressingMode;
use opcodes::Mnemonic;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b00000001;
        const ZERO = 0b00000010;
        const INTERRUPT_DISABLE = 0b00000100;
        const DECIMAL = 0b00001000;
        const BREAK = 0b00010000;
        const UNUSED = 0b00100000;
        const OVERFLOW = 0b01000000;
        const NEGATIVE = 0b10000000;
    }
}

/// Fatal decode failures. These abort a `run` with an explicit error value
/// rather than continuing on a bogus address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// An instruction asked for an effective address in a mode that has
    /// none.
    UnsupportedAddressing(AddressingMode),
    /// The program does not fit between PROGRAM_START and the top of
    /// memory.
    ProgramTooLarge(usize),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::UnsupportedAddressing(mode) => {
                write!(f, "no effective address for addressing mode {:?}", mode)
            }
            CpuError::ProgramTooLarge(len) => {
                write!(f, "program of {} bytes does not fit in memory", len)
            }
        }
    }
}

impl std::error::Error for CpuError {}

/// Why the dispatch loop stopped. A BRK is a clean halt; an opcode byte
/// with no table entry is reported separately so callers can tell the two
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    Break,
    UnknownOpcode(u8),
}

pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub status: StatusFlags,
    pub memory: Memory,
    cycles: u64,
}

impl Cpu {
    pub fn new() -> Self {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            status: StatusFlags::empty(),
            memory: Memory::new(),
            cycles: 0,
        }
    }

    /// Reinitializes the accumulator, X register, and status flags, then
    /// picks up the program counter from the reset vector. Y survives a
    /// reset.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.status = StatusFlags::empty();
        self.pc = self.memory.read_u16(RESET_VECTOR);
    }

    /// Loads `program`, resets, and executes until the CPU halts. Returns
    /// why it halted, or the decode error that aborted the run.
    pub fn run(&mut self, program: &[u8]) -> Result<HaltReason, CpuError> {
        self.memory.load(program)?;
        self.reset();

        loop {
            if let Some(halt) = self.step()? {
                return Ok(halt);
            }
        }
    }

    /// One fetch-decode-execute step. `Ok(Some(_))` means the CPU reached
    /// a terminal state; `Ok(None)` means it is still running.
    fn step(&mut self) -> Result<Option<HaltReason>, CpuError> {
        let code = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let Some(opcode) = opcodes::lookup(code) else {
            log::warn!(
                "unknown opcode 0x{:02X} at PC 0x{:04X}, halting",
                code,
                self.pc.wrapping_sub(1)
            );
            return Ok(Some(HaltReason::UnknownOpcode(code)));
        };

        log::trace!(
            "{:?} (0x{:02X}) at PC 0x{:04X}",
            opcode.mnemonic,
            code,
            self.pc.wrapping_sub(1)
        );

        match opcode.mnemonic {
            Mnemonic::Brk => return Ok(Some(HaltReason::Break)),
            Mnemonic::And => self.and(opcode.mode)?,
            Mnemonic::Asl => self.asl(opcode.mode)?,
            Mnemonic::Lda => self.lda(opcode.mode)?,
            Mnemonic::Sta => self.sta(opcode.mode)?,
            Mnemonic::Tax => self.tax(),
            Mnemonic::Inx => self.inx(),
        }

        self.pc = self.pc.wrapping_add(opcode.len as u16 - 1);
        self.cycles += opcode.cycles as u64;
        Ok(None)
    }

    /// Flags-only AND: the masked value sets Zero/Negative but is never
    /// written back to the accumulator.
    fn and(&mut self, mode: AddressingMode) -> Result<(), CpuError> {
        let addr = mode.resolve(self)?;
        let result = self.memory.read(addr) & self.a;
        self.set_zero_negative_flags(result);
        Ok(())
    }

    /// Arithmetic shift left. The accumulator form carries no operand;
    /// addressed forms read-modify-write memory. Old bit 7 lands in Carry.
    fn asl(&mut self, mode: AddressingMode) -> Result<(), CpuError> {
        match mode {
            AddressingMode::NoneAddressing => {
                self.status.set(StatusFlags::CARRY, self.a & 0x80 != 0);
                self.a <<= 1;
                self.set_zero_negative_flags(self.a);
            }
            _ => {
                let addr = mode.resolve(self)?;
                let value = self.memory.read(addr);
                self.status.set(StatusFlags::CARRY, value & 0x80 != 0);
                let shifted = value << 1;
                self.memory.write(addr, shifted);
                self.set_zero_negative_flags(shifted);
            }
        }
        Ok(())
    }

    fn lda(&mut self, mode: AddressingMode) -> Result<(), CpuError> {
        let addr = mode.resolve(self)?;
        self.a = self.memory.read(addr);
        self.set_zero_negative_flags(self.a);
        Ok(())
    }

    fn sta(&mut self, mode: AddressingMode) -> Result<(), CpuError> {
        let addr = mode.resolve(self)?;
        self.memory.write(addr, self.a);
        Ok(())
    }

    fn tax(&mut self) {
        self.x = self.a;
        self.set_zero_negative_flags(self.x);
    }

    fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.set_zero_negative_flags(self.x);
    }

    fn set_zero_negative_flags(&mut self, value: u8) {
        self.status.set(StatusFlags::ZERO, value == 0);
        self.status.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// Base cycles consumed so far. Page-crossing penalties are not
    /// modeled.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
