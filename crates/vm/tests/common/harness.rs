use intcode_vm::common::ExecError;
use intcode_vm::config::Config;
use intcode_vm::core::{Cpu, Status};
use intcode_vm::port::InputQueue;
use intcode_vm::sim::Program;

/// Installs a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`, so `RUST_LOG=trace cargo test` shows every executed instruction.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A machine with a fixed input list and a collected output list.
pub struct TestContext {
    pub cpu: Cpu,
    pub input: InputQueue,
    pub output: Vec<i64>,
}

impl TestContext {
    pub fn new(words: &[i64]) -> Self {
        Self::with_config(words, &Config::default())
    }

    pub fn with_config(words: &[i64], config: &Config) -> Self {
        init_tracing();
        let mut config = config.clone();
        // Trace events are filtered by RUST_LOG; always generate them so the path is exercised.
        config.general.trace_instructions = true;
        Self {
            cpu: Cpu::new(&Program::from(words), &config),
            input: InputQueue::default(),
            output: Vec::new(),
        }
    }

    pub fn with_input(mut self, values: &[i64]) -> Self {
        for value in values {
            self.input.push(*value);
        }
        self
    }

    pub fn step(&mut self) -> Result<Status, ExecError> {
        self.cpu.step(&mut self.input, &mut self.output)
    }

    pub fn run(&mut self) -> Result<(), ExecError> {
        self.cpu.run(&mut self.input, &mut self.output)
    }

    /// Reads a memory word.
    pub fn mem(&self, addr: u64) -> i64 {
        self.cpu.read(addr)
    }
}

/// Runs `words` to completion with `inputs` and returns the outputs.
pub fn run_program(words: &[i64], inputs: &[i64]) -> Result<Vec<i64>, ExecError> {
    let mut ctx = TestContext::new(words).with_input(inputs);
    ctx.run()?;
    Ok(ctx.output)
}
