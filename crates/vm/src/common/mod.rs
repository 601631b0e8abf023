//! Common utilities and types used throughout the intcode machine.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Address Type:** A strong type for non-negative memory addresses.
//! 2. **Constants:** Decoding radices, parameter arity limits and dump sizes.
//! 3. **Error Handling:** Decode, execution, program, pipeline and config errors.

/// Memory address newtype.
pub mod addr;

/// Common constants used throughout the machine.
pub mod constants;

/// Error types for every layer of the machine.
pub mod error;

pub use addr::Addr;
pub use error::{ConfigError, DecodeError, ExecError, PipelineError, ProgramError};
