//! Bounded Rendezvous Port.
//!
//! A [`Port`] connects exactly one producer machine to exactly one consumer machine.
//! It holds at most `capacity` values (one by default):
//! 1. **Send:** Blocks while the port is full; fails once the port is closed.
//! 2. **Receive:** Blocks while the port is empty; after close, drains whatever is
//!    still buffered and then reports exhaustion instead of blocking.
//! 3. **Close:** Wakes every blocked party. Used when the producer halts and by the
//!    orchestrator to unblock a loop after a machine fails.
//! 4. **Abandon:** Marks the consumer as gone. Later sends are recorded in
//!    `last_sent` and dropped instead of blocking on a slot nobody will free.
//!
//! Values flow FIFO. Handles are cheap clones sharing one buffer.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::port::traits::{InputPort, OutputPort, PortClosed};

/// Mutable port state guarded by the mutex.
#[derive(Debug, Default)]
struct State {
    queue: VecDeque<i64>,
    closed: bool,
    abandoned: bool,
    last_sent: Option<i64>,
}

#[derive(Debug)]
struct Shared {
    id: usize,
    capacity: usize,
    state: Mutex<State>,
    readable: Condvar,
    writable: Condvar,
}

/// A bounded blocking FIFO between two machines.
#[derive(Clone, Debug)]
pub struct Port {
    inner: Arc<Shared>,
}

impl Port {
    /// Creates an open, empty port. A capacity of 0 is treated as 1.
    pub fn new(id: usize, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Shared {
                id,
                capacity: capacity.max(1),
                state: Mutex::new(State::default()),
                readable: Condvar::new(),
                writable: Condvar::new(),
            }),
        }
    }

    /// Identifier given at construction, used in log events.
    pub fn id(&self) -> usize {
        self.inner.id
    }

    /// Locks the state. Poisoning is ignored: the queue is consistent after every operation.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Places a value in the port before any machine runs, ignoring capacity.
    ///
    /// Seeds such as phase settings go through here so that seeding never blocks.
    /// Seeds are not recorded as sent values.
    pub fn preload(&self, value: i64) {
        let mut state = self.lock();
        state.queue.push_back(value);
        self.inner.readable.notify_one();
    }

    /// Sends a value, blocking while the port is full.
    ///
    /// # Errors
    ///
    /// [`PortClosed`] if the port is closed before the value could be placed.
    /// Sending into an abandoned port succeeds without buffering the value.
    pub fn send(&self, value: i64) -> Result<(), PortClosed> {
        let capacity = self.inner.capacity;
        let mut state = self
            .inner
            .writable
            .wait_while(self.lock(), |s| {
                !s.closed && !s.abandoned && s.queue.len() >= capacity
            })
            .unwrap_or_else(PoisonError::into_inner);
        if state.closed {
            return Err(PortClosed);
        }
        state.last_sent = Some(value);
        if state.abandoned {
            return Ok(());
        }
        state.queue.push_back(value);
        self.inner.readable.notify_one();
        Ok(())
    }

    /// Receives the next value, blocking while the port is empty and open.
    ///
    /// # Returns
    ///
    /// `None` once the port is closed and drained.
    pub fn recv(&self) -> Option<i64> {
        let mut state = self
            .inner
            .readable
            .wait_while(self.lock(), |s| !s.closed && s.queue.is_empty())
            .unwrap_or_else(PoisonError::into_inner);
        let value = state.queue.pop_front();
        if value.is_some() {
            self.inner.writable.notify_one();
        }
        value
    }

    /// Closes the port and wakes every blocked sender and receiver. Idempotent.
    pub fn close(&self) {
        let mut state = self.lock();
        if !state.closed {
            state.closed = true;
            tracing::debug!(port = self.inner.id, buffered = state.queue.len(), "port closed");
        }
        drop(state);
        self.inner.readable.notify_all();
        self.inner.writable.notify_all();
    }

    /// Marks the consumer as gone and wakes any blocked sender. Idempotent.
    ///
    /// Buffered values are discarded. The producer may keep sending and
    /// [`Port::last_sent`] keeps tracking what it sent.
    pub fn abandon(&self) {
        let mut state = self.lock();
        if !state.abandoned {
            state.abandoned = true;
            state.queue.clear();
            tracing::debug!(port = self.inner.id, "port abandoned by consumer");
        }
        drop(state);
        self.inner.writable.notify_all();
    }

    /// Whether [`Port::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// The most recent value delivered through [`Port::send`], if any.
    pub fn last_sent(&self) -> Option<i64> {
        self.lock().last_sent
    }

    /// Number of values currently buffered.
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    /// Whether no values are buffered.
    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }
}

impl InputPort for Port {
    fn next_value(&mut self) -> Option<i64> {
        self.recv()
    }
}

impl OutputPort for Port {
    fn push_value(&mut self, value: i64) -> Result<(), PortClosed> {
        self.send(value)
    }
}
