//! Machine core.
//!
//! This module holds everything a single machine owns:
//! 1. **Memory:** The sparse, zero-initialized address space.
//! 2. **CPU:** Instruction pointer, relative base, statistics and the execution loop.

/// Machine state and the fetch-decode-execute loop.
pub mod cpu;

/// Sparse word memory.
pub mod memory;

pub use cpu::{Cpu, Status};
pub use memory::Memory;
