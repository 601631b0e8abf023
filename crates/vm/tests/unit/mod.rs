//! # Unit Components
//!
//! Tests grouped by library module: shared types, configuration, the instruction
//! set, the machine core, ports, the simulation layer and statistics.
