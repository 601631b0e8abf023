//! Instruction Disassembler.
//!
//! Converts instructions into a compact textual form for debug tracing, the CLI
//! `disasm` command and test diagnostics.
//!
//! # Operand syntax
//!
//! - `[12]` position operand (memory at 12)
//! - `#12` immediate operand
//! - `[rb+12]` / `[rb-3]` relative operand
//!
//! # Usage
//!
//! ```
//! use intcode_vm::isa::disasm::disassemble_program;
//! let lines = disassemble_program(&[1002, 4, 3, 4, 33]);
//! assert_eq!(lines[0], "0000: mul [4], #3, [4]");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::mode::AddressingMode;

/// Renders one operand according to its addressing mode.
fn operand(mode: AddressingMode, literal: i64) -> String {
    match mode {
        AddressingMode::Position => format!("[{literal}]"),
        AddressingMode::Immediate => format!("#{literal}"),
        AddressingMode::Relative if literal < 0 => format!("[rb{literal}]"),
        AddressingMode::Relative => format!("[rb+{literal}]"),
    }
}

/// Formats a decoded instruction with its parameter literals.
///
/// `literals` holds the words following the opcode word; missing literals render as `?`.
pub fn format_instruction(inst: &Instruction, literals: &[i64]) -> String {
    let mnemonic = inst.opcode.mnemonic();
    if inst.modes().is_empty() {
        return mnemonic.to_owned();
    }
    let operands: Vec<String> = inst
        .modes()
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            literals
                .get(i)
                .map_or_else(|| "?".to_owned(), |lit| operand(*mode, *lit))
        })
        .collect();
    format!("{mnemonic} {}", operands.join(", "))
}

/// Disassembles the instruction starting at `offset` in `words`.
///
/// # Returns
///
/// The rendered text and the number of words consumed. Words that do not decode, or
/// instructions truncated by the end of `words`, render as `.data <word>` and consume
/// one word.
pub fn disassemble_at(words: &[i64], offset: usize) -> (String, usize) {
    let Some(&word) = words.get(offset) else {
        return (String::from(".end"), 0);
    };
    match decode(word) {
        Ok(inst) => {
            let width = inst.width() as usize;
            match words.get(offset + 1..offset + width) {
                Some(literals) => (format_instruction(&inst, literals), width),
                None => (format!(".data {word}"), 1),
            }
        }
        Err(_) => (format!(".data {word}"), 1),
    }
}

/// Produces a linear listing of a whole program, one line per instruction or data word.
///
/// Linear sweep cannot tell code from data; self-modifying programs will show the
/// instructions as they are stored, not as they will execute.
pub fn disassemble_program(words: &[i64]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut offset = 0;
    while offset < words.len() {
        let (text, consumed) = disassemble_at(words, offset);
        lines.push(format!("{offset:04}: {text}"));
        offset += consumed.max(1);
    }
    lines
}
