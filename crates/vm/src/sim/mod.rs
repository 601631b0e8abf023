//! Program loading and multi-machine orchestration.
//!
//! Provides the program text loader and the pipeline orchestrator that wires
//! several machines together through rendezvous ports.

/// Program text parsing and file loading.
pub mod loader;

/// Linear and feedback pipelines of machines.
pub mod pipeline;

pub use loader::Program;
pub use pipeline::{Pipeline, Topology, permutations};
