//! Intcode virtual machine library.
//!
//! This crate implements the intcode machine and the plumbing around it:
//! 1. **ISA:** The closed ten-opcode table, addressing modes, decoder and disassembler.
//! 2. **Core:** Sparse zero-initialized memory and the fetch-decode-execute loop with
//!    a relative base register.
//! 3. **Ports:** Input/output capabilities, fixed-list queues and blocking rendezvous ports.
//! 4. **Simulation:** Program loading and the linear/feedback pipeline orchestrator.
//! 5. **Support:** Configuration, execution statistics and error types.
//!
//! # Example
//!
//! ```
//! use intcode_vm::{Cpu, Program};
//!
//! let program = Program::parse("3,0,4,0,99").unwrap();
//! let mut cpu = Cpu::new(&program, &Default::default());
//! assert_eq!(cpu.run_with(&[7]).unwrap(), vec![7]);
//! ```

/// Common types and constants (addresses, errors).
pub mod common;
/// Machine configuration (defaults and JSON loading).
pub mod config;
/// Machine core (memory, CPU state, execution loop).
pub mod core;
/// Instruction set (opcodes, modes, decode, disassembly).
pub mod isa;
/// Input and output ports.
pub mod port;
/// Program loader and pipeline orchestrator.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Machine type; holds registers, memory and statistics.
pub use crate::core::Cpu;
/// Parsed program text.
pub use crate::sim::Program;
