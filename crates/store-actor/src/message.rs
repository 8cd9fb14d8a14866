//! # Slice Messages
//!
//! The message types exchanged between a [`SliceClient`](crate::SliceClient)
//! and its [`SliceActor`](crate::SliceActor).

use crate::error::StoreError;
use crate::slice::Slice;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by slice actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a slice actor.
///
/// A slice supports exactly two operations: dispatch a command and read a
/// snapshot. The `Dispatch` acknowledgement carries no payload; it only
/// tells the caller the mutation has been applied, which is what lets a
/// caller sequence "mutate, then read" deterministically.
#[derive(Debug)]
pub enum SliceRequest<S: Slice> {
    Dispatch {
        command: S::Command,
        respond_to: Response<()>,
    },
    Read {
        respond_to: Response<S::Snapshot>,
    },
}
