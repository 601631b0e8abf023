//! Instruction Set Definitions.
//!
//! Contains the closed opcode table, addressing modes, the decoded instruction
//! representation, and the decoder/disassembler built on top of them.
//!
//! # Layout
//!
//! * `opcode`: The ten opcodes with their arity, operand roles and mnemonics.
//! * `mode`: Position, Immediate and Relative addressing.
//! * `instruction`: A decoded instruction word and its encoder.
//! * `decode`: Instruction word parsing and validation.
//! * `disasm`: Human-readable rendering for traces and listings.

/// Instruction word decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Decoded instruction representation and encoding.
pub mod instruction;

/// Addressing mode definitions.
pub mod mode;

/// Opcode table (arity, operand roles, mnemonics).
pub mod opcode;

pub use decode::decode;
pub use instruction::Instruction;
pub use mode::AddressingMode;
pub use opcode::{OpClass, Opcode, Role};
