//! Fixed-list input ports.
//!
//! [`InputQueue`] hands out a pre-supplied list in order and reports exhaustion once
//! it is empty. [`IterInput`] does the same for any iterator, so inputs can be
//! generated lazily. Outputs are usually collected into a `Vec<i64>`, which
//! implements [`OutputPort`](crate::port::OutputPort) directly.

use std::collections::VecDeque;

use crate::port::traits::InputPort;

/// A fixed list of inputs consumed front to back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputQueue {
    values: VecDeque<i64>,
}

impl InputQueue {
    /// Creates a queue holding `values`.
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    /// Appends a value to the back of the queue.
    pub fn push(&mut self, value: i64) {
        self.values.push_back(value);
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Whether every value has been consumed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<i64> for InputQueue {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl InputPort for InputQueue {
    fn next_value(&mut self) -> Option<i64> {
        self.values.pop_front()
    }
}

/// Adapts an iterator into an input port; exhaustion is the end of the iterator.
#[derive(Clone, Debug)]
pub struct IterInput<I>(pub I);

impl<I: Iterator<Item = i64>> InputPort for IterInput<I> {
    fn next_value(&mut self) -> Option<i64> {
        self.0.next()
    }
}
