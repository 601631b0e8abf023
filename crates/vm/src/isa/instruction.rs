//! Decoded instruction representation.
//!
//! An instruction word packs the opcode into its two lowest decimal digits and one
//! addressing-mode digit per parameter above them, least significant first:
//!
//! ```text
//!   1002  ->  opcode 02 (Multiply), modes [0, 1, 0]
//!   ^^^^
//!   ||++-- opcode
//!   |+---- mode of parameter 0
//!   +----- mode of parameter 1 (parameter 2 defaults to 0)
//! ```

use crate::common::constants::{MAX_PARAMS, MODE_RADIX, OPCODE_RADIX};
use crate::isa::mode::AddressingMode;
use crate::isa::opcode::{Opcode, Role};

/// An opcode together with the addressing mode of each of its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The operation.
    pub opcode: Opcode,
    modes: [AddressingMode; MAX_PARAMS],
}

impl Instruction {
    /// Builds an instruction from an opcode and explicit modes.
    ///
    /// Modes past the opcode's arity are ignored and missing ones default to
    /// [`AddressingMode::Position`]. No role validation happens here; see
    /// [`crate::isa::decode::decode`] for the checked path.
    pub fn new(opcode: Opcode, modes: &[AddressingMode]) -> Self {
        let mut packed = [AddressingMode::Position; MAX_PARAMS];
        for (slot, mode) in packed.iter_mut().zip(modes).take(opcode.arity()) {
            *slot = *mode;
        }
        Self {
            opcode,
            modes: packed,
        }
    }

    /// Modes of the parameters, exactly `opcode.arity()` long.
    #[inline]
    pub fn modes(&self) -> &[AddressingMode] {
        &self.modes[..self.opcode.arity()]
    }

    /// Mode of parameter `index`.
    #[inline]
    pub fn mode(&self, index: usize) -> AddressingMode {
        self.modes[index]
    }

    /// Role of parameter `index`.
    #[inline]
    pub fn role(&self, index: usize) -> Role {
        self.opcode.roles()[index]
    }

    /// Number of memory words the instruction occupies.
    #[inline]
    pub fn width(&self) -> i64 {
        self.opcode.width()
    }

    /// Encodes the instruction back into an instruction word.
    ///
    /// Trailing Position modes are omitted, so `Add` with all-Position parameters
    /// encodes as `1`, not `0001`.
    pub fn encode(&self) -> i64 {
        let mode_digits = self
            .modes()
            .iter()
            .rev()
            .fold(0, |acc, mode| acc * MODE_RADIX + mode.digit());
        mode_digits * OPCODE_RADIX + self.opcode.code()
    }
}
