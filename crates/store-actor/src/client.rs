//! # Slice Client
//!
//! The handle for talking to a [`SliceActor`](crate::SliceActor). Holds only
//! a channel sender, so cloning is cheap and clones can be handed to any
//! task that needs to dispatch commands or read snapshots.

use crate::error::StoreError;
use crate::message::SliceRequest;
use crate::slice::Slice;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a single slice.
pub struct SliceClient<S: Slice> {
    sender: mpsc::Sender<SliceRequest<S>>,
}

// Derived Clone would require S: Clone; the sender alone is what's cloned.
impl<S: Slice> Clone for SliceClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Slice> SliceClient<S> {
    pub fn new(sender: mpsc::Sender<SliceRequest<S>>) -> Self {
        Self { sender }
    }

    /// Applies a command to the slice, resolving once the mutation has been
    /// processed by the actor.
    pub async fn dispatch(&self, command: S::Command) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Dispatch {
                command,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Reads the slice's current snapshot.
    pub async fn read(&self) -> Result<S::Snapshot, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Read { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
