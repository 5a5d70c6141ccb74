use std::collections::HashMap;
use std::sync::OnceLock;

use crate::cpu::addressing::AddressingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    And,
    Asl,
    Lda,
    Sta,
    Tax,
    Inx,
    Brk,
}

/// Static metadata for one opcode byte: how long the encoded instruction
/// is (opcode included), its base cycle cost, and how the operand address
/// is formed.
#[derive(Debug, Clone, Copy)]
pub struct Opcode {
    pub code: u8,
    pub mnemonic: Mnemonic,
    pub len: u8,
    pub cycles: u8,
    pub mode: AddressingMode,
}

const fn op(code: u8, mnemonic: Mnemonic, len: u8, cycles: u8, mode: AddressingMode) -> Opcode {
    Opcode {
        code,
        mnemonic,
        len,
        cycles,
        mode,
    }
}

/// Base cycle costs exclude page-crossing penalties, which this core does
/// not model.
pub const CPU_OPCODES: &[Opcode] = &[
    op(0x29, Mnemonic::And, 2, 2, AddressingMode::Immediate),
    op(0x25, Mnemonic::And, 2, 3, AddressingMode::ZeroPage),
    op(0x35, Mnemonic::And, 2, 4, AddressingMode::ZeroPageX),
    op(0x2D, Mnemonic::And, 3, 4, AddressingMode::Absolute),
    op(0x3D, Mnemonic::And, 3, 4, AddressingMode::AbsoluteX),
    op(0x39, Mnemonic::And, 3, 4, AddressingMode::AbsoluteY),
    op(0x21, Mnemonic::And, 2, 6, AddressingMode::IndirectX),
    op(0x31, Mnemonic::And, 2, 5, AddressingMode::IndirectY),
    //
    op(0x0A, Mnemonic::Asl, 1, 2, AddressingMode::NoneAddressing),
    op(0x06, Mnemonic::Asl, 2, 5, AddressingMode::ZeroPage),
    op(0x16, Mnemonic::Asl, 2, 6, AddressingMode::ZeroPageX),
    op(0x0E, Mnemonic::Asl, 3, 6, AddressingMode::Absolute),
    op(0x1E, Mnemonic::Asl, 3, 7, AddressingMode::AbsoluteX),
    //
    op(0xA9, Mnemonic::Lda, 2, 2, AddressingMode::Immediate),
    op(0xA5, Mnemonic::Lda, 2, 3, AddressingMode::ZeroPage),
    op(0xB5, Mnemonic::Lda, 2, 4, AddressingMode::ZeroPageX),
    op(0xAD, Mnemonic::Lda, 3, 4, AddressingMode::Absolute),
    op(0xBD, Mnemonic::Lda, 3, 4, AddressingMode::AbsoluteX),
    op(0xB9, Mnemonic::Lda, 3, 4, AddressingMode::AbsoluteY),
    op(0xA1, Mnemonic::Lda, 2, 6, AddressingMode::IndirectX),
    op(0xB1, Mnemonic::Lda, 2, 5, AddressingMode::IndirectY),
    //
    op(0x85, Mnemonic::Sta, 2, 3, AddressingMode::ZeroPage),
    op(0x95, Mnemonic::Sta, 2, 4, AddressingMode::ZeroPageX),
    op(0x8D, Mnemonic::Sta, 3, 4, AddressingMode::Absolute),
    op(0x9D, Mnemonic::Sta, 3, 5, AddressingMode::AbsoluteX),
    op(0x99, Mnemonic::Sta, 3, 5, AddressingMode::AbsoluteY),
    op(0x81, Mnemonic::Sta, 2, 6, AddressingMode::IndirectX),
    op(0x91, Mnemonic::Sta, 2, 6, AddressingMode::IndirectY),
    //
    op(0xAA, Mnemonic::Tax, 1, 2, AddressingMode::NoneAddressing),
    op(0xE8, Mnemonic::Inx, 1, 2, AddressingMode::NoneAddressing),
    op(0x00, Mnemonic::Brk, 1, 7, AddressingMode::NoneAddressing),
];

static OPCODE_MAP: OnceLock<HashMap<u8, &'static Opcode>> = OnceLock::new();

/// Looks up an opcode byte in the shared table. The map is built once and
/// read-only afterwards; building it rejects duplicate opcode entries.
pub fn lookup(code: u8) -> Option<&'static Opcode> {
    let map = OPCODE_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(CPU_OPCODES.len());
        for opcode in CPU_OPCODES {
            let previous = map.insert(opcode.code, opcode);
            assert!(
                previous.is_none(),
                "duplicate opcode table entry for 0x{:02X}",
                opcode.code
            );
        }
        map
    });
    map.get(&code).copied()
}
