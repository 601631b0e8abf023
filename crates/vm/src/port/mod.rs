//! I/O Ports.
//!
//! A port is the only way a machine talks to the outside world. The machine sees two
//! capabilities, [`InputPort`] and [`OutputPort`]; what sits behind them is up to the
//! caller:
//! 1. **Queues:** A fixed list of inputs and a collecting output buffer, for single runs.
//! 2. **Channels:** A bounded rendezvous [`Port`] shared by a producer machine and a
//!    consumer machine, for pipelines and feedback loops.
//! 3. **Anything else:** Puzzle drivers implement the traits on their own types.

/// Bounded blocking rendezvous port.
pub mod channel;

/// Fixed-list input and collecting output.
pub mod queue;

/// Port capability traits.
pub mod traits;

pub use channel::Port;
pub use queue::{InputQueue, IterInput};
pub use traits::{InputPort, OutputPort, PortClosed};
