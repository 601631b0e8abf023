//! Instruction Decoder.
//!
//! Turns the raw word at the instruction pointer into an [`Instruction`]. The
//! decoder validates everything that can be validated without touching memory:
//! the opcode must be in the closed table, every mode digit within the opcode's
//! arity must be 0, 1 or 2, and destination parameters may not be immediate.
//! Mode digits beyond the arity are ignored.

use crate::common::constants::{MAX_PARAMS, MODE_RADIX, OPCODE_RADIX};
use crate::common::error::DecodeError;
use crate::isa::instruction::Instruction;
use crate::isa::mode::AddressingMode;
use crate::isa::opcode::{Opcode, Role};

/// Decodes an instruction word.
///
/// # Arguments
///
/// * `word` - The raw value stored at the instruction pointer.
///
/// # Errors
///
/// * [`DecodeError::UnknownOpcode`] if the low two digits are not an opcode. Negative
///   words always fall here.
/// * [`DecodeError::InvalidMode`] if a mode digit is outside `{0, 1, 2}`.
/// * [`DecodeError::ImmediateDestination`] if a destination parameter is immediate.
pub fn decode(word: i64) -> Result<Instruction, DecodeError> {
    let code = word % OPCODE_RADIX;
    let opcode = Opcode::from_code(code).ok_or(DecodeError::UnknownOpcode { word, opcode: code })?;

    let mut modes = [AddressingMode::Position; MAX_PARAMS];
    let mut mode_digits = word / OPCODE_RADIX;
    for (param, role) in opcode.roles().iter().enumerate() {
        let digit = mode_digits % MODE_RADIX;
        let mode =
            AddressingMode::from_digit(digit).ok_or(DecodeError::InvalidMode { word, param, digit })?;
        if mode == AddressingMode::Immediate && *role == Role::Address {
            return Err(DecodeError::ImmediateDestination {
                word,
                opcode,
                param,
            });
        }
        modes[param] = mode;
        mode_digits /= MODE_RADIX;
    }

    Ok(Instruction::new(opcode, &modes))
}
