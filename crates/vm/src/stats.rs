//! Execution statistics collection and reporting.
//!
//! This module tracks what a machine did while it ran. It provides:
//! 1. **Throughput:** Retired instructions and host execution rate.
//! 2. **Instruction mix:** Counts by class (arithmetic, comparison, jump, io, relative base).
//! 3. **Control flow:** Conditional jumps taken versus fallen through.
//! 4. **I/O:** Values consumed from the input port and produced on the output port.

use std::time::Instant;

use crate::isa::opcode::{OpClass, Opcode};

/// Execution statistics for one machine.
#[derive(Clone, Debug)]
pub struct ExecStats {
    /// Set by the first executed step; `None` until the machine runs.
    start_time: Option<Instant>,
    /// Number of instructions executed to completion, halt included.
    pub instructions_retired: u64,

    /// Add and Multiply instructions retired.
    pub inst_arith: u64,
    /// LessThan and Equals instructions retired.
    pub inst_compare: u64,
    /// Conditional jump instructions retired.
    pub inst_jump: u64,
    /// Input and Output instructions retired.
    pub inst_io: u64,
    /// AdjustRelativeBase instructions retired.
    pub inst_rbase: u64,
    /// Halt instructions retired (0 or 1).
    pub inst_halt: u64,

    /// Conditional jumps whose condition held.
    pub jumps_taken: u64,
    /// Values read from the input port.
    pub inputs_consumed: u64,
    /// Values written to the output port.
    pub outputs_produced: u64,
}

impl Default for ExecStats {
    fn default() -> Self {
        Self {
            start_time: None,
            instructions_retired: 0,
            inst_arith: 0,
            inst_compare: 0,
            inst_jump: 0,
            inst_io: 0,
            inst_rbase: 0,
            inst_halt: 0,
            jumps_taken: 0,
            inputs_consumed: 0,
            outputs_produced: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"control"`, `"io"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control", "io"];

impl ExecStats {
    /// Starts the host clock if it is not already running.
    #[inline]
    pub fn mark_start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
    }

    /// Host seconds since the first step, or zero if the machine never ran.
    pub fn host_seconds(&self) -> f64 {
        self.start_time
            .map_or(0.0, |start| start.elapsed().as_secs_f64())
    }

    /// Records one retired instruction.
    #[inline]
    pub fn record(&mut self, opcode: Opcode) {
        self.instructions_retired += 1;
        match opcode.class() {
            OpClass::Arithmetic => self.inst_arith += 1,
            OpClass::Comparison => self.inst_compare += 1,
            OpClass::Jump => self.inst_jump += 1,
            OpClass::Io => self.inst_io += 1,
            OpClass::RelativeBase => self.inst_rbase += 1,
            OpClass::Halt => self.inst_halt += 1,
        }
    }

    /// Renders the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty slice
    /// renders every section.
    pub fn report(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.host_seconds();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let mut out = String::new();

        if want("summary") {
            let mips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1_000_000.0
            } else {
                0.0
            };
            out.push_str("==========================================================\n");
            out.push_str("INTCODE EXECUTION STATISTICS\n");
            out.push_str("==========================================================\n");
            out.push_str(&format!("host_seconds             {seconds:.4} s\n"));
            out.push_str(&format!(
                "sim_insts                {}\n",
                self.instructions_retired
            ));
            out.push_str(&format!("sim_mips                 {mips:.2}\n"));
            out.push_str("----------------------------------------------------------\n");
        }
        if want("instruction_mix") {
            out.push_str("INSTRUCTION MIX\n");
            for (name, count) in [
                ("op.arith", self.inst_arith),
                ("op.compare", self.inst_compare),
                ("op.jump", self.inst_jump),
                ("op.io", self.inst_io),
                ("op.rbase", self.inst_rbase),
                ("op.halt", self.inst_halt),
            ] {
                out.push_str(&format!("  {name:<22} {count} ({:.2}%)\n", pct(count)));
            }
            out.push_str("----------------------------------------------------------\n");
        }
        if want("control") {
            let taken_rate = if self.inst_jump > 0 {
                100.0 * (self.jumps_taken as f64 / self.inst_jump as f64)
            } else {
                0.0
            };
            out.push_str("CONTROL FLOW\n");
            out.push_str(&format!("  jump.lookups           {}\n", self.inst_jump));
            out.push_str(&format!("  jump.taken             {}\n", self.jumps_taken));
            out.push_str(&format!("  jump.taken_rate        {taken_rate:.2}%\n"));
            out.push_str("----------------------------------------------------------\n");
        }
        if want("io") {
            out.push_str("I/O\n");
            out.push_str(&format!("  io.inputs              {}\n", self.inputs_consumed));
            out.push_str(&format!("  io.outputs             {}\n", self.outputs_produced));
            out.push_str("==========================================================\n");
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.report(sections));
    }

    /// Prints every statistics section to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
