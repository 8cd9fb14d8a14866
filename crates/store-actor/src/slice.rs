//! # Slice Trait
//!
//! The contract every state slice must satisfy to be managed by a
//! [`SliceActor`](crate::SliceActor).
//!
//! A slice bundles three things: the state itself (the implementing type),
//! the commands that mutate it, and the snapshot other code reads. By
//! defining this once, the actor run loop, the client, and the mock helpers
//! work for every slice in the store without slice-specific plumbing.

use std::fmt::Debug;

/// A self-contained region of application state.
///
/// # Synchronous by design
/// `apply` is deliberately *not* async: a command must mutate the slice in
/// one indivisible step, with no await point in the middle that would let
/// another command observe half-applied state. Asynchronous effects belong
/// in the caller, which dispatches plain settlement commands when its I/O
/// resolves.
pub trait Slice: Send + 'static {
    /// A mutation request. One enum per slice, mirroring its operations.
    type Command: Send + Debug;

    /// The value handed to readers. Usually a clone of the state.
    type Snapshot: Send + Debug;

    /// Apply a command to the state. Must not fail: invalid commands
    /// (out-of-range index, unknown id) are defined as no-ops by the slices
    /// themselves, never as errors.
    fn apply(&mut self, command: Self::Command);

    /// Produce the current snapshot.
    fn snapshot(&self) -> Self::Snapshot;
}
