//! Global Machine Constants.
//!
//! This module defines constants used across the machine. It includes:
//! 1. **Encoding Constants:** Radices used to split an instruction word.
//! 2. **Arity Constants:** The widest parameter list any opcode takes.
//! 3. **Reporting Constants:** Sizes used when dumping machine state.

/// Divisor separating the opcode (low two decimal digits) from the mode digits.
pub const OPCODE_RADIX: i64 = 100;

/// Radix of a single addressing-mode digit.
pub const MODE_RADIX: i64 = 10;

/// Largest number of parameters taken by any opcode.
pub const MAX_PARAMS: usize = 3;

/// Number of memory words shown by the `Display` dump of a machine.
pub const DUMP_PREVIEW_WORDS: u64 = 16;
