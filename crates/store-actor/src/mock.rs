//! # Mock Helpers
//!
//! Utilities for testing code that talks to a [`SliceClient`] without
//! spawning an actor.
//!
//! # Testing Strategy
//! When the unit under test is the logic *around* a client (a typed wrapper
//! that decides which commands to dispatch), we don't need a real
//! `SliceActor`. `create_mock_client` gives back a client plus the receiver
//! end of its channel; the test inspects the requests arriving on the
//! receiver and answers them by hand, simulating the actor's behavior
//! deterministically.
//!
//! For tests of the slice state machines themselves, skip the channel
//! entirely and call [`Slice::apply`] directly.

use crate::client::SliceClient;
use crate::error::StoreError;
use crate::message::SliceRequest;
use crate::slice::Slice;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting on its requests.
pub fn create_mock_client<S: Slice>(
    buffer_size: usize,
) -> (SliceClient<S>, mpsc::Receiver<SliceRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SliceClient::new(sender), receiver)
}

/// Receives the next request and asserts it is a `Dispatch`, returning the
/// command and the responder.
pub async fn expect_dispatch<S: Slice>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<(S::Command, oneshot::Sender<Result<(), StoreError>>)> {
    match receiver.recv().await {
        Some(SliceRequest::Dispatch {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is a `Read`, returning the
/// responder.
pub async fn expect_read<S: Slice>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<oneshot::Sender<Result<S::Snapshot, StoreError>>> {
    match receiver.recv().await {
        Some(SliceRequest::Read { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Toggle {
        on: bool,
    }

    #[derive(Debug, PartialEq)]
    enum ToggleCommand {
        Set(bool),
    }

    impl Slice for Toggle {
        type Command = ToggleCommand;
        type Snapshot = bool;

        fn apply(&mut self, command: ToggleCommand) {
            match command {
                ToggleCommand::Set(v) => self.on = v,
            }
        }

        fn snapshot(&self) -> bool {
            self.on
        }
    }

    #[tokio::test]
    async fn mock_client_round_trips_a_dispatch() {
        let (client, mut receiver) = create_mock_client::<Toggle>(8);

        let dispatch_task =
            tokio::spawn(async move { client.dispatch(ToggleCommand::Set(true)).await });

        let (command, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("expected Dispatch request");
        assert_eq!(command, ToggleCommand::Set(true));
        responder.send(Ok(())).unwrap();

        assert!(dispatch_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn mock_client_round_trips_a_read() {
        let (client, mut receiver) = create_mock_client::<Toggle>(8);

        let read_task = tokio::spawn(async move { client.read().await });

        let responder = expect_read(&mut receiver)
            .await
            .expect("expected Read request");
        responder.send(Ok(true)).unwrap();

        assert!(read_task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn dropped_mock_surfaces_actor_closed() {
        let (client, receiver) = create_mock_client::<Toggle>(8);
        drop(receiver);

        let result = client.dispatch(ToggleCommand::Set(false)).await;
        assert!(matches!(result, Err(StoreError::ActorClosed)));
    }
}
