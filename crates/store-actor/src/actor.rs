//! # Slice Actor
//!
//! The actor that owns a slice's state and processes its messages. This is
//! the "server" half: it holds the receiver end of the channel and applies
//! every command sequentially, which is what makes each mutation atomic with
//! respect to the event that triggered it.

use crate::client::SliceClient;
use crate::message::SliceRequest;
use crate::slice::Slice;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The actor wrapping a single [`Slice`].
///
/// # Concurrency Model
/// One actor task per slice. Commands from any number of cloned clients are
/// serialized through the mpsc channel and applied one at a time, so the
/// slice never needs a `Mutex` and readers never observe a half-applied
/// mutation.
pub struct SliceActor<S: Slice> {
    receiver: mpsc::Receiver<SliceRequest<S>>,
    state: S,
}

impl<S: Slice> SliceActor<S> {
    /// Creates a new `SliceActor` around `state` and its associated
    /// [`SliceClient`].
    ///
    /// `buffer_size` is the capacity of the mpsc channel; senders wait when
    /// it is full.
    pub fn new(state: S, buffer_size: usize) -> (Self, SliceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = SliceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until every client
    /// has been dropped.
    pub async fn run(mut self) {
        // Just the type name, not the full module path.
        let slice_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(slice_type, "Slice actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SliceRequest::Dispatch {
                    command,
                    respond_to,
                } => {
                    debug!(slice_type, ?command, "Dispatch");
                    self.state.apply(command);
                    let _ = respond_to.send(Ok(()));
                }
                SliceRequest::Read { respond_to } => {
                    debug!(slice_type, "Read");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
            }
        }

        info!(slice_type, "Slice actor shutdown");
    }
}
