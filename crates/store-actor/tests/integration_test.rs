//! Integration tests for the slice actor run loop: a real actor around a
//! small slice, exercised through its client.

use store_actor::{Remote, Slice, SliceActor, StoreError};

/// A minimal remote-backed slice, the shape every application slice follows.
#[derive(Default)]
struct NamesSlice {
    names: Remote<Vec<String>>,
}

#[derive(Debug)]
enum NamesCommand {
    FetchPending,
    FetchFulfilled(Vec<String>),
    FetchRejected(String),
}

impl Slice for NamesSlice {
    type Command = NamesCommand;
    type Snapshot = Remote<Vec<String>>;

    fn apply(&mut self, command: NamesCommand) {
        match command {
            NamesCommand::FetchPending => self.names.begin(),
            NamesCommand::FetchFulfilled(names) => self.names.resolve(names),
            NamesCommand::FetchRejected(message) => self.names.fail(message),
        }
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.names.clone()
    }
}

#[tokio::test]
async fn dispatch_then_read_observes_the_mutation() {
    let (actor, client) = SliceActor::new(NamesSlice::default(), 8);
    let handle = tokio::spawn(actor.run());

    client.dispatch(NamesCommand::FetchPending).await.unwrap();
    let snapshot = client.read().await.unwrap();
    assert!(snapshot.loading);
    assert!(snapshot.data.is_empty());

    client
        .dispatch(NamesCommand::FetchFulfilled(vec!["alice".to_string()]))
        .await
        .unwrap();
    let snapshot = client.read().await.unwrap();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.data, vec!["alice".to_string()]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn failure_preserves_previously_loaded_data() {
    let (actor, client) = SliceActor::new(NamesSlice::default(), 8);
    tokio::spawn(actor.run());

    client
        .dispatch(NamesCommand::FetchFulfilled(vec!["bob".to_string()]))
        .await
        .unwrap();
    client.dispatch(NamesCommand::FetchPending).await.unwrap();
    client
        .dispatch(NamesCommand::FetchRejected("network down".to_string()))
        .await
        .unwrap();

    let snapshot = client.read().await.unwrap();
    assert_eq!(snapshot.error.as_deref(), Some("network down"));
    assert_eq!(snapshot.data, vec!["bob".to_string()]);
}

#[tokio::test]
async fn commands_from_cloned_clients_are_serialized() {
    let (actor, client) = SliceActor::new(NamesSlice::default(), 32);
    tokio::spawn(actor.run());

    let mut tasks = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .dispatch(NamesCommand::FetchFulfilled(vec![format!("n{i}")]))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    // Exactly one settlement won; the state is whichever applied last,
    // never an interleaving of two.
    let snapshot = client.read().await.unwrap();
    assert_eq!(snapshot.data.len(), 1);
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn dropping_all_clients_shuts_the_actor_down() {
    let (actor, client) = SliceActor::new(NamesSlice::default(), 8);
    let handle = tokio::spawn(actor.run());

    let clone = client.clone();
    drop(client);
    drop(clone);

    handle.await.unwrap();
}

#[tokio::test]
async fn client_after_shutdown_reports_actor_closed() {
    let (actor, client) = SliceActor::new(NamesSlice::default(), 8);
    drop(actor);

    let result = client.dispatch(NamesCommand::FetchPending).await;
    assert!(matches!(result, Err(StoreError::ActorClosed)));
}
