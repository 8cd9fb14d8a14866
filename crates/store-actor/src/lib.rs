//! # Store Actor
//!
//! Building blocks for a process-wide state store made of independent
//! **slices**, each owned by its own actor task.
//!
//! A slice is a plain state machine: it receives commands, mutates itself
//! synchronously, and hands out snapshots of its current state. The actor
//! wrapper gives every slice the concurrency guarantees of the actor model:
//!
//! - Commands are processed **sequentially**, one at a time, so each mutation
//!   is atomic with respect to the event that triggered it. No locks.
//! - State is owned exclusively by the actor task; the rest of the program
//!   only ever sees cloned snapshots.
//! - Asynchronous work (network calls, timers) lives *outside* the slice:
//!   callers dispatch a "pending" command, run the async operation in a
//!   detached task, then dispatch the "fulfilled" or "rejected" command when
//!   it settles. Whichever settlement arrives last wins, and re-applying a
//!   settlement is harmless, so no cancellation machinery is needed.
//!
//! ## Layers
//!
//! 1. [`Slice`] - your state, commands, and snapshot type
//! 2. [`SliceActor`] - the run loop that owns the state
//! 3. [`SliceClient`] - cheap-to-clone handle for dispatching and reading
//!
//! ```rust
//! use store_actor::{Slice, SliceActor};
//!
//! #[derive(Default)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! #[derive(Debug)]
//! enum CounterCommand {
//!     Add(i64),
//! }
//!
//! impl Slice for Counter {
//!     type Command = CounterCommand;
//!     type Snapshot = i64;
//!
//!     fn apply(&mut self, command: CounterCommand) {
//!         match command {
//!             CounterCommand::Add(n) => self.value += n,
//!         }
//!     }
//!
//!     fn snapshot(&self) -> i64 {
//!         self.value
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SliceActor::new(Counter::default(), 8);
//!     tokio::spawn(actor.run());
//!
//!     client.dispatch(CounterCommand::Add(2)).await.unwrap();
//!     assert_eq!(client.read().await.unwrap(), 2);
//! }
//! ```
//!
//! The [`resource`] module provides [`Remote<T>`](resource::Remote), the
//! shared shape for remote-backed slice state (data + loading + error), and
//! the [`mock`] module provides helpers for testing code that talks to a
//! [`SliceClient`] without spawning any actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod resource;
pub mod slice;
pub mod tracing;

pub use actor::SliceActor;
pub use client::SliceClient;
pub use error::StoreError;
pub use message::{Response, SliceRequest};
pub use resource::Remote;
pub use slice::Slice;
