//! Memory address type.
//!
//! Intcode words are signed, but memory is indexed from zero upwards. This module
//! defines the strong type used once a word has been checked for sign, so that the
//! memory layer never has to reason about negative indices:
//! 1. **Type Safety:** Separates raw program words from validated addresses.
//! 2. **Conversion:** Checked construction from a signed word.

use std::fmt;

/// A validated, non-negative address into machine memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub u64);

impl Addr {
    /// Creates a new address from a raw 64-bit value.
    #[inline]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Converts a signed program word into an address.
    ///
    /// # Returns
    ///
    /// `None` if `word` is negative.
    #[inline]
    pub const fn from_word(word: i64) -> Option<Self> {
        if word < 0 { None } else { Some(Self(word as u64)) }
    }

    /// Returns the raw 64-bit address value.
    #[inline]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the address `n` words after this one.
    #[inline]
    pub const fn offset(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
