//! Error definitions.
//!
//! This module defines the error taxonomy of the machine. It provides:
//! 1. **Decode Errors:** Malformed instruction words (opcode, mode digit, destination mode).
//! 2. **Execution Errors:** Fatal conditions raised while running, tagged with the instruction pointer.
//! 3. **Program Errors:** Failures while parsing or loading program text.
//! 4. **Pipeline Errors:** Failures of a multi-machine run, tagged with the failing machine index.
//! 5. **Config Errors:** Failures while reading a JSON configuration.
//!
//! Every error is fatal to the machine that raised it; nothing here is retried.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::opcode::Opcode;

/// A malformed instruction word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The low two digits of the word do not name an opcode.
    #[error("unknown opcode {opcode} in instruction word {word}")]
    UnknownOpcode {
        /// The full instruction word.
        word: i64,
        /// The rejected opcode digits.
        opcode: i64,
    },

    /// A mode digit is outside `{0, 1, 2}`.
    #[error("invalid addressing mode {digit} for parameter {param} in instruction word {word}")]
    InvalidMode {
        /// The full instruction word.
        word: i64,
        /// Zero-based parameter index.
        param: usize,
        /// The rejected mode digit.
        digit: i64,
    },

    /// A destination parameter was declared immediate.
    #[error(
        "immediate mode not allowed for destination parameter {param} of {opcode} (word {word})"
    )]
    ImmediateDestination {
        /// The full instruction word.
        word: i64,
        /// The decoded opcode.
        opcode: Opcode,
        /// Zero-based parameter index.
        param: usize,
    },
}

/// A fatal condition raised by a running machine.
///
/// Every variant records the instruction pointer of the instruction that failed;
/// the machine state is left exactly as it was before that instruction started.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The word at `ip` could not be decoded.
    #[error("decode error at ip {ip}: {source}")]
    Decode {
        /// Instruction pointer of the malformed word.
        ip: i64,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// An input instruction ran with no value available.
    #[error("input exhausted at ip {ip}")]
    InputExhausted {
        /// Instruction pointer of the input instruction.
        ip: i64,
    },

    /// An output instruction wrote to a closed port.
    #[error("output port closed at ip {ip}")]
    OutputClosed {
        /// Instruction pointer of the output instruction.
        ip: i64,
    },

    /// An instruction pointer or effective address was negative.
    #[error("negative address {address} at ip {ip}")]
    NegativeAddress {
        /// Instruction pointer of the offending instruction.
        ip: i64,
        /// The negative address.
        address: i64,
    },

    /// An address exceeded the configured memory ceiling.
    #[error("address {address} exceeds memory limit {limit} at ip {ip}")]
    AddressLimit {
        /// Instruction pointer of the offending instruction.
        ip: i64,
        /// The rejected address.
        address: u64,
        /// The configured ceiling.
        limit: u64,
    },

    /// The configured instruction budget ran out.
    #[error("step limit of {limit} instructions exceeded at ip {ip}")]
    StepLimit {
        /// Instruction pointer of the next instruction.
        ip: i64,
        /// The configured budget.
        limit: u64,
    },

    /// The machine already executed a halt instruction.
    #[error("machine already halted at ip {ip}")]
    Halted {
        /// Instruction pointer of the halt instruction.
        ip: i64,
    },
}

impl ExecError {
    /// Returns the instruction pointer recorded in the error.
    pub const fn ip(&self) -> i64 {
        match self {
            Self::Decode { ip, .. }
            | Self::InputExhausted { ip }
            | Self::OutputClosed { ip }
            | Self::NegativeAddress { ip, .. }
            | Self::AddressLimit { ip, .. }
            | Self::StepLimit { ip, .. }
            | Self::Halted { ip } => *ip,
        }
    }
}

/// Failure to parse or load program text.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// The text contained no integers.
    #[error("program is empty")]
    Empty,

    /// A comma-separated token is not a signed decimal integer.
    #[error("invalid integer {token:?} at position {index}")]
    InvalidInteger {
        /// Zero-based position of the token.
        index: usize,
        /// The offending token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The program file could not be read.
    #[error("could not read program file {}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Failure of a multi-machine run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No phase settings were supplied, so there are no machines to run.
    #[error("pipeline needs at least one phase setting")]
    NoPhases,

    /// A machine failed; the first failure observed is reported.
    #[error("machine {index} failed: {source}")]
    Engine {
        /// Zero-based index of the failing machine.
        index: usize,
        /// Underlying execution failure.
        #[source]
        source: ExecError,
    },

    /// A stage of a linear chain produced other than exactly one output.
    #[error("machine {index} produced {count} outputs, expected exactly one")]
    OutputCount {
        /// Zero-based index of the stage.
        index: usize,
        /// Number of outputs produced.
        count: usize,
    },

    /// The feedback loop halted without delivering a value back to the first machine.
    #[error("feedback loop finished without producing a signal")]
    NoSignal,

    /// A machine thread panicked.
    #[error("machine {index} panicked")]
    Panicked {
        /// Zero-based index of the machine.
        index: usize,
    },
}

/// Failure to read a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document is malformed or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration file {}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
