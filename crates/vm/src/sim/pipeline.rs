//! Pipeline Orchestrator.
//!
//! Runs several copies of one program wired output-to-input. Machine `i` is seeded
//! with phase setting `phases[i]` and the first machine additionally receives the
//! external input signal. Two topologies are supported:
//! 1. **Linear:** Machines run one after another on the calling thread; each must
//!    produce exactly one output, which becomes the next machine's second input.
//! 2. **Feedback:** Machine `i` reads port `i` and writes port `(i + 1) % n`, so the
//!    last machine feeds the first. All machines run concurrently on scoped threads
//!    and the result is the last value delivered into port 0.
//!
//! In the feedback topology a halting machine closes its output port, so its
//! consumer is never left waiting on a producer that is gone. It also abandons its
//! input port, so its producer is never left waiting on a consumer that is gone.
//! Values sent into an abandoned port 0 still count towards the result. The first machine to
//! fail closes every port, which unblocks all siblings; their follow-on errors are
//! discarded and only the first failure is reported.

use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;
use std::thread;

use crate::common::error::{ExecError, PipelineError};
use crate::config::Config;
use crate::core::cpu::Cpu;
use crate::port::channel::Port;
use crate::sim::loader::Program;

/// How the machines of a pipeline are connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Each machine's single output feeds the next machine; no cycle.
    Linear,
    /// The last machine's output feeds back into the first.
    Feedback,
}

/// Why a feedback machine stopped early.
#[derive(Debug)]
enum Failure {
    Exec(ExecError),
    Panic,
}

/// A program replicated across a chain of machines.
#[derive(Clone, Debug)]
pub struct Pipeline {
    program: Program,
    config: Config,
}

impl Pipeline {
    /// Creates a pipeline running `program` on every machine.
    pub const fn new(program: Program, config: Config) -> Self {
        Self { program, config }
    }

    /// Runs the pipeline once with the given topology.
    ///
    /// # Arguments
    ///
    /// * `phases` - One phase setting per machine; its length is the machine count.
    /// * `input` - External input delivered to the first machine after its phase.
    ///
    /// # Errors
    ///
    /// See [`Pipeline::run_linear`] and [`Pipeline::run_feedback`].
    pub fn run(&self, phases: &[i64], input: i64, topology: Topology) -> Result<i64, PipelineError> {
        match topology {
            Topology::Linear => self.run_linear(phases, input),
            Topology::Feedback => self.run_feedback(phases, input),
        }
    }

    /// Runs the machines one after another, threading a single signal through them.
    ///
    /// # Errors
    ///
    /// [`PipelineError::NoPhases`] for an empty phase list,
    /// [`PipelineError::Engine`] if a machine fails,
    /// [`PipelineError::OutputCount`] if a machine does not produce exactly one output.
    pub fn run_linear(&self, phases: &[i64], input: i64) -> Result<i64, PipelineError> {
        if phases.is_empty() {
            return Err(PipelineError::NoPhases);
        }
        let mut signal = input;
        for (index, phase) in phases.iter().enumerate() {
            let mut cpu = Cpu::new(&self.program, &self.config);
            let outputs = cpu
                .run_with(&[*phase, signal])
                .map_err(|source| PipelineError::Engine { index, source })?;
            signal = match outputs.as_slice() {
                [value] => *value,
                other => {
                    return Err(PipelineError::OutputCount {
                        index,
                        count: other.len(),
                    });
                }
            };
            tracing::debug!(index, phase, signal, "linear stage finished");
        }
        Ok(signal)
    }

    /// Runs every machine concurrently in a ring until all have halted.
    ///
    /// # Errors
    ///
    /// [`PipelineError::NoPhases`] for an empty phase list,
    /// [`PipelineError::Engine`] with the first machine to fail,
    /// [`PipelineError::Panicked`] if a machine thread panicked,
    /// [`PipelineError::NoSignal`] if nothing was ever sent into port 0.
    pub fn run_feedback(&self, phases: &[i64], input: i64) -> Result<i64, PipelineError> {
        let n = phases.len();
        if n == 0 {
            return Err(PipelineError::NoPhases);
        }

        let capacity = self.config.pipeline.port_capacity;
        let ports: Vec<Port> = (0..n).map(|i| Port::new(i, capacity)).collect();
        for (port, phase) in ports.iter().zip(phases) {
            port.preload(*phase);
        }
        ports[0].preload(input);

        let first_failure: OnceLock<(usize, Failure)> = OnceLock::new();

        thread::scope(|scope| {
            for index in 0..n {
                let mut cpu = Cpu::new(&self.program, &self.config);
                let mut inbox = ports[index].clone();
                let mut outbox = ports[(index + 1) % n].clone();
                let ports = &ports;
                let first_failure = &first_failure;
                let _ = scope.spawn(move || {
                    let outcome =
                        panic::catch_unwind(AssertUnwindSafe(|| cpu.run(&mut inbox, &mut outbox)));
                    let failure = match outcome {
                        Ok(Ok(())) => {
                            inbox.abandon();
                            outbox.close();
                            return;
                        }
                        Ok(Err(error)) => Failure::Exec(error),
                        Err(_) => Failure::Panic,
                    };
                    if first_failure.set((index, failure)).is_ok() {
                        tracing::warn!(index, "machine failed, shutting the loop down");
                    }
                    for port in ports {
                        port.close();
                    }
                });
            }
        });

        match first_failure.into_inner() {
            Some((index, Failure::Exec(source))) => {
                return Err(PipelineError::Engine { index, source });
            }
            Some((index, Failure::Panic)) => return Err(PipelineError::Panicked { index }),
            None => {}
        }
        ports[0].last_sent().ok_or(PipelineError::NoSignal)
    }

    /// Tries every ordering of `phases` and returns the strongest final signal.
    ///
    /// # Returns
    ///
    /// The best signal and the phase ordering that produced it. Ties keep the first
    /// ordering found.
    ///
    /// # Errors
    ///
    /// [`PipelineError::NoPhases`] for an empty phase list, or the first error from
    /// any individual run.
    pub fn max_signal(
        &self,
        phases: &[i64],
        input: i64,
        topology: Topology,
    ) -> Result<(i64, Vec<i64>), PipelineError> {
        let mut best: Option<(i64, Vec<i64>)> = None;
        for ordering in permutations(phases) {
            let signal = self.run(&ordering, input, topology)?;
            if best.as_ref().is_none_or(|(b, _)| signal > *b) {
                tracing::debug!(signal, ?ordering, "new best phase ordering");
                best = Some((signal, ordering));
            }
        }
        best.ok_or(PipelineError::NoPhases)
    }
}

/// Every ordering of `values`, in lexicographic order of positions.
///
/// An empty input yields no orderings.
pub fn permutations(values: &[i64]) -> Vec<Vec<i64>> {
    if values.len() <= 1 {
        return if values.is_empty() {
            Vec::new()
        } else {
            vec![values.to_vec()]
        };
    }
    let mut all = Vec::new();
    for (i, head) in values.iter().enumerate() {
        let mut rest = values.to_vec();
        let _ = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, *head);
            all.push(tail);
        }
    }
    all
}
