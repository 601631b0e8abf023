//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the machine:
//! 1. **Fetch/Decode:** Reads the word at the instruction pointer and decodes it.
//! 2. **Operand Resolution:** Applies Position, Immediate or Relative addressing per
//!    parameter, according to the parameter's role.
//! 3. **Execute:** Dispatches on the opcode, talking to the attached ports for I/O.
//! 4. **Commit:** Advances the instruction pointer unless a jump already set it.
//!
//! An instruction either commits completely or fails before any state changes:
//! every operand and the destination are resolved, and input is obtained, before
//! memory or registers are written.

use crate::common::addr::Addr;
use crate::common::error::ExecError;
use crate::isa::decode::decode;
use crate::isa::disasm::format_instruction;
use crate::isa::instruction::Instruction;
use crate::isa::mode::AddressingMode;
use crate::isa::opcode::Opcode;
use crate::port::queue::InputQueue;
use crate::port::traits::{InputPort, OutputPort};

use super::Cpu;

/// Outcome of a successfully executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// More instructions follow.
    Running,
    /// A halt instruction executed; the machine is finished.
    Halted,
}

impl Cpu {
    /// Validates a signed word as an address for the instruction at the current `ip`.
    fn checked_addr(&self, word: i64) -> Result<Addr, ExecError> {
        let addr = Addr::from_word(word).ok_or(ExecError::NegativeAddress {
            ip: self.ip,
            address: word,
        })?;
        match self.max_address {
            Some(limit) if addr.val() > limit => Err(ExecError::AddressLimit {
                ip: self.ip,
                address: addr.val(),
                limit,
            }),
            _ => Ok(addr),
        }
    }

    /// Raw literal of parameter `index` of the instruction at `ip`.
    #[inline]
    fn literal(&self, pc: Addr, index: usize) -> i64 {
        self.memory.read(pc.offset(index as u64 + 1))
    }

    /// Resolves a value-role parameter.
    fn value(&self, pc: Addr, inst: &Instruction, index: usize) -> Result<i64, ExecError> {
        let literal = self.literal(pc, index);
        match inst.mode(index) {
            AddressingMode::Immediate => Ok(literal),
            AddressingMode::Position => Ok(self.memory.read(self.checked_addr(literal)?)),
            AddressingMode::Relative => {
                let addr = self.checked_addr(literal.wrapping_add(self.relative_base))?;
                Ok(self.memory.read(addr))
            }
        }
    }

    /// Resolves an address-role (destination) parameter.
    fn dest(&self, pc: Addr, inst: &Instruction, index: usize) -> Result<Addr, ExecError> {
        let literal = self.literal(pc, index);
        match inst.mode(index) {
            AddressingMode::Relative => self.checked_addr(literal.wrapping_add(self.relative_base)),
            // The decoder rejects Immediate destinations.
            AddressingMode::Position | AddressingMode::Immediate => self.checked_addr(literal),
        }
    }

    /// Emits a trace event for the instruction about to execute.
    fn trace_instruction(&self, pc: Addr, inst: &Instruction) {
        let literals = self.memory.snapshot(pc.offset(1), inst.opcode.arity() as u64);
        tracing::trace!(
            ip = self.ip,
            rb = self.relative_base,
            inst = %format_instruction(inst, &literals),
            "exec"
        );
    }

    /// Executes exactly one instruction.
    ///
    /// # Arguments
    ///
    /// * `input` - Source for the Input opcode.
    /// * `output` - Sink for the Output opcode.
    ///
    /// # Returns
    ///
    /// [`Status::Halted`] after a halt instruction, [`Status::Running`] otherwise.
    ///
    /// # Errors
    ///
    /// Any [`ExecError`]; the machine state is unchanged by the failing instruction.
    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Status, ExecError>
    where
        I: InputPort + ?Sized,
        O: OutputPort + ?Sized,
    {
        let ip = self.ip;
        if self.halted {
            return Err(ExecError::Halted { ip });
        }
        if let Some(limit) = self.max_steps {
            if self.stats.instructions_retired >= limit {
                return Err(ExecError::StepLimit { ip, limit });
            }
        }
        self.stats.mark_start();

        let pc = self.checked_addr(ip)?;
        let inst = decode(self.memory.read(pc)).map_err(|source| ExecError::Decode { ip, source })?;
        if self.trace {
            self.trace_instruction(pc, &inst);
        }

        let mut next_ip = ip.wrapping_add(inst.width());
        match inst.opcode {
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => {
                let a = self.value(pc, &inst, 0)?;
                let b = self.value(pc, &inst, 1)?;
                let dst = self.dest(pc, &inst, 2)?;
                let result = match inst.opcode {
                    Opcode::Add => a.wrapping_add(b),
                    Opcode::Multiply => a.wrapping_mul(b),
                    Opcode::LessThan => i64::from(a < b),
                    _ => i64::from(a == b),
                };
                self.memory.write(dst, result);
            }
            Opcode::Input => {
                let dst = self.dest(pc, &inst, 0)?;
                let value = input.next_value().ok_or(ExecError::InputExhausted { ip })?;
                self.memory.write(dst, value);
                self.stats.inputs_consumed += 1;
            }
            Opcode::Output => {
                let value = self.value(pc, &inst, 0)?;
                output
                    .push_value(value)
                    .map_err(|_| ExecError::OutputClosed { ip })?;
                self.stats.outputs_produced += 1;
            }
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => {
                let cond = self.value(pc, &inst, 0)?;
                let target = self.value(pc, &inst, 1)?;
                if (cond != 0) == (inst.opcode == Opcode::JumpIfTrue) {
                    next_ip = target;
                    self.stats.jumps_taken += 1;
                }
            }
            Opcode::AdjustRelativeBase => {
                let delta = self.value(pc, &inst, 0)?;
                self.relative_base = self.relative_base.wrapping_add(delta);
            }
            Opcode::Halt => {
                self.halted = true;
                self.stats.record(inst.opcode);
                return Ok(Status::Halted);
            }
        }

        self.ip = next_ip;
        self.stats.record(inst.opcode);
        Ok(Status::Running)
    }

    /// Runs until a halt instruction or an error.
    ///
    /// # Errors
    ///
    /// The first [`ExecError`] raised; execution stops immediately.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<(), ExecError>
    where
        I: InputPort + ?Sized,
        O: OutputPort + ?Sized,
    {
        tracing::debug!(ip = self.ip, "machine started");
        loop {
            match self.step(input, output) {
                Ok(Status::Running) => {}
                Ok(Status::Halted) => {
                    tracing::debug!(
                        ip = self.ip,
                        retired = self.stats.instructions_retired,
                        "machine halted"
                    );
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(error = %e, "machine failed");
                    return Err(e);
                }
            }
        }
    }

    /// Runs to completion with a fixed input list and returns every output.
    ///
    /// # Errors
    ///
    /// As [`Cpu::run`]; running out of `inputs` is [`ExecError::InputExhausted`].
    pub fn run_with(&mut self, inputs: &[i64]) -> Result<Vec<i64>, ExecError> {
        let mut input = InputQueue::new(inputs);
        let mut output = Vec::new();
        self.run(&mut input, &mut output)?;
        Ok(output)
    }
}
