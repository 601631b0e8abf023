//! Port capability traits.
//!
//! This module defines the two capabilities consumed by the Input and Output opcodes:
//! 1. **Input:** Produce the next value on demand, or report exhaustion.
//! 2. **Output:** Accept a value, or report that nobody will ever read it.
//!
//! Exhaustion is `None`, never a sentinel value, so a zero input is always a real zero.

use std::collections::VecDeque;

use thiserror::Error;

/// The consumer side of an output port has gone away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("port closed")]
pub struct PortClosed;

/// A source of input values.
pub trait InputPort {
    /// Returns the next value, blocking if the implementation blocks.
    ///
    /// # Returns
    ///
    /// `None` once the port is exhausted; the machine treats that as fatal.
    fn next_value(&mut self) -> Option<i64>;
}

/// A sink for output values.
pub trait OutputPort {
    /// Accepts one value, blocking if the implementation blocks.
    ///
    /// # Errors
    ///
    /// [`PortClosed`] if the value can never be delivered.
    fn push_value(&mut self, value: i64) -> Result<(), PortClosed>;
}

impl<P: InputPort + ?Sized> InputPort for &mut P {
    fn next_value(&mut self) -> Option<i64> {
        (**self).next_value()
    }
}

impl<P: OutputPort + ?Sized> OutputPort for &mut P {
    fn push_value(&mut self, value: i64) -> Result<(), PortClosed> {
        (**self).push_value(value)
    }
}

impl<P: InputPort + ?Sized> InputPort for Box<P> {
    fn next_value(&mut self) -> Option<i64> {
        (**self).next_value()
    }
}

impl<P: OutputPort + ?Sized> OutputPort for Box<P> {
    fn push_value(&mut self, value: i64) -> Result<(), PortClosed> {
        (**self).push_value(value)
    }
}

impl InputPort for VecDeque<i64> {
    fn next_value(&mut self) -> Option<i64> {
        self.pop_front()
    }
}

/// Collects every output in order.
impl OutputPort for Vec<i64> {
    fn push_value(&mut self, value: i64) -> Result<(), PortClosed> {
        self.push(value);
        Ok(())
    }
}
