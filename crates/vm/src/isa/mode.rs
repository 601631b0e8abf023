//! Addressing modes.
//!
//! Each parameter of an instruction carries one decimal mode digit:
//!
//! | Digit | Mode | Value role | Address role |
//! |---|---|---|---|
//! | 0 | Position | `mem[p]` | `p` |
//! | 1 | Immediate | `p` | rejected by the decoder |
//! | 2 | Relative | `mem[p + rb]` | `p + rb` |

use std::fmt;

/// How a parameter literal is turned into an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AddressingMode {
    /// The literal is an address into memory.
    #[default]
    Position,
    /// The literal is the operand itself.
    Immediate,
    /// The literal is an offset from the relative base register.
    Relative,
}

impl AddressingMode {
    /// All modes in digit order.
    pub const ALL: [Self; 3] = [Self::Position, Self::Immediate, Self::Relative];

    /// Maps a mode digit to a mode.
    ///
    /// # Returns
    ///
    /// `None` for any digit outside `{0, 1, 2}`.
    #[inline]
    pub const fn from_digit(digit: i64) -> Option<Self> {
        match digit {
            0 => Some(Self::Position),
            1 => Some(Self::Immediate),
            2 => Some(Self::Relative),
            _ => None,
        }
    }

    /// Returns the mode digit used in the instruction encoding.
    #[inline]
    pub const fn digit(self) -> i64 {
        match self {
            Self::Position => 0,
            Self::Immediate => 1,
            Self::Relative => 2,
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::Immediate => "immediate",
            Self::Relative => "relative",
        };
        f.write_str(name)
    }
}
