//! # Store Errors
//!
//! Channel-level failures shared by every slice client. These only occur
//! when an actor task has gone away; they are distinct from the remote
//! failures a slice records on its own `error` field.

/// Errors that can occur when communicating with a slice actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("slice actor closed")]
    ActorClosed,
    #[error("slice actor dropped response channel")]
    ActorDropped,
}
