//! Program Loading.
//!
//! The only wire format of the machine is program text: signed decimal integers
//! separated by commas, loaded verbatim at address 0. This module provides:
//! 1. **Parsing:** Text to [`Program`], tolerant of surrounding whitespace, line breaks
//!    and a trailing comma.
//! 2. **File loading:** Reads and parses a program file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::common::error::ProgramError;

/// An intcode program: the initial contents of memory.
///
/// A program is immutable; every machine built from it receives its own copy of the
/// words, so self-modifying code never leaks between machines.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Program(Vec<i64>);

impl Program {
    /// Wraps an already-parsed word sequence.
    pub const fn new(words: Vec<i64>) -> Self {
        Self(words)
    }

    /// Parses comma-separated program text.
    ///
    /// # Errors
    ///
    /// [`ProgramError::Empty`] if no integers are present, [`ProgramError::InvalidInteger`]
    /// for the first token that is not a signed decimal integer.
    pub fn parse(text: &str) -> Result<Self, ProgramError> {
        let trimmed = text.trim().trim_end_matches(',');
        if trimmed.is_empty() {
            return Err(ProgramError::Empty);
        }
        trimmed
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map_err(|source| ProgramError::InvalidInteger {
                        index,
                        token: token.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Reads and parses a program file.
    ///
    /// # Errors
    ///
    /// [`ProgramError::Io`] if the file cannot be read, otherwise as [`Program::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProgramError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ProgramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// The program words.
    pub fn words(&self) -> &[i64] {
        &self.0
    }

    /// Number of words in the program.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the program has no words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with `value` stored at `addr`, extending with zeros if needed.
    ///
    /// Used to patch inputs into a program before it runs (noun/verb style puzzles).
    #[must_use]
    pub fn patched(&self, addr: usize, value: i64) -> Self {
        let mut words = self.0.clone();
        if addr >= words.len() {
            words.resize(addr + 1, 0);
        }
        words[addr] = value;
        Self(words)
    }
}

impl From<Vec<i64>> for Program {
    fn from(words: Vec<i64>) -> Self {
        Self(words)
    }
}

impl From<&[i64]> for Program {
    fn from(words: &[i64]) -> Self {
        Self(words.to_vec())
    }
}

impl FromStr for Program {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
