//! CPU Definition and Initialization.
//!
//! This module defines the [`Cpu`] structure, the container for the whole state of one
//! machine. It coordinates the following:
//! 1. **Registers:** The instruction pointer and the relative base.
//! 2. **Memory:** The machine's private address space, loaded from a [`Program`].
//! 3. **Limits:** Optional instruction budget and address ceiling from the [`Config`].
//! 4. **Observability:** Execution statistics and per-instruction tracing.
//!
//! Memory is never shared: two machines built from the same program each get a copy.

/// Instruction execution and the run loop.
pub mod execution;

use std::fmt;

use crate::common::addr::Addr;
use crate::common::constants::DUMP_PREVIEW_WORDS;
use crate::config::Config;
use crate::core::memory::Memory;
use crate::sim::loader::Program;
use crate::stats::ExecStats;

pub use execution::Status;

/// One intcode machine.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Instruction pointer.
    pub ip: i64,
    /// Relative base register, added to Relative-mode operands.
    pub relative_base: i64,
    /// The machine's address space.
    pub memory: Memory,
    /// Execution statistics.
    pub stats: ExecStats,
    /// Emit a trace event per instruction.
    pub trace: bool,

    max_steps: Option<u64>,
    max_address: Option<u64>,
    halted: bool,
}

impl Cpu {
    /// Creates a machine with `program` loaded at address 0.
    ///
    /// # Arguments
    ///
    /// * `program` - Initial memory contents; copied.
    /// * `config` - Tracing, instruction budget and memory settings.
    pub fn new(program: &Program, config: &Config) -> Self {
        Self {
            ip: 0,
            relative_base: 0,
            memory: Memory::new(program.words(), &config.memory),
            stats: ExecStats::default(),
            trace: config.general.trace_instructions,
            max_steps: config.general.max_steps,
            max_address: config.memory.max_address,
            halted: false,
        }
    }

    /// Creates a machine from raw words with the default configuration.
    pub fn from_words(words: &[i64]) -> Self {
        Self::new(&Program::from(words), &Config::default())
    }

    /// Whether the machine has executed a halt instruction.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Reads the word at `addr`.
    pub fn read(&self, addr: u64) -> i64 {
        self.memory.read(Addr::new(addr))
    }

    /// Overwrites the word at `addr` before or between runs.
    pub fn write(&mut self, addr: u64, value: i64) {
        self.memory.write(Addr::new(addr), value);
    }

    /// Prints the machine state to stdout.
    pub fn dump_state(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "IP = {}  RB = {}  halted = {}  retired = {}",
            self.ip, self.relative_base, self.halted, self.stats.instructions_retired
        )?;
        let shown = self.memory.extent().min(DUMP_PREVIEW_WORDS);
        let words = self.memory.snapshot(Addr::new(0), shown);
        write!(f, "mem[0..{shown}] = {words:?}")?;
        if self.memory.extent() > shown {
            write!(f, " ... ({} words)", self.memory.extent())?;
        }
        Ok(())
    }
}
