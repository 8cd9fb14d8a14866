//! # System Lifecycle & Orchestration
//!
//! Wiring for the whole store: create the slice actors, hand each client
//! the gateway it drives, spawn the actor tasks, and coordinate shutdown.
//!
//! Shutdown follows the channel-closure pattern: dropping every client
//! closes the senders, each actor's `recv()` returns `None`, and the tasks
//! finish after draining their queues. Detached settlement tasks hold
//! client clones, so a shutdown initiated while a call is in flight still
//! lets the settlement land first.

use crate::clients::{CatalogClient, ConstructorClient, FeedClient, HistoryClient, SessionClient};
use crate::gateway::{CatalogGateway, FeedGateway, HistoryGateway, OrderGateway, SessionGateway};
use crate::router::{Route, Router};
use crate::slices::catalog::CatalogSlice;
use crate::slices::constructor::ConstructorSlice;
use crate::slices::feed::FeedSlice;
use crate::slices::history::HistorySlice;
use crate::slices::order_lookup::OrderLookupSlice;
use crate::slices::session::SessionSlice;
use std::sync::Arc;
use store_actor::SliceActor;
use tracing::info;

pub use store_actor::tracing::setup_tracing;

const CHANNEL_BUFFER: usize = 32;

/// The running store: every slice actor spawned, every client wired, plus
/// the navigation state that decides what renders over what.
pub struct BurgerSystem {
    pub catalog: CatalogClient,
    pub constructor: ConstructorClient,
    pub feed: FeedClient,
    pub history: HistoryClient,
    pub session: SessionClient,
    /// Navigation starts at the constructor page. Callers resolve
    /// presentations against the session snapshot's `is_authenticated`.
    pub router: Router,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BurgerSystem {
    /// Spawns all six slice actors against one backend implementing every
    /// gateway trait.
    pub fn new<B>(backend: Arc<B>) -> Self
    where
        B: CatalogGateway
            + OrderGateway
            + FeedGateway
            + HistoryGateway
            + SessionGateway
            + 'static,
    {
        let (catalog_actor, catalog_slice) = SliceActor::new(CatalogSlice::default(), CHANNEL_BUFFER);
        let (constructor_actor, constructor_slice) =
            SliceActor::new(ConstructorSlice::default(), CHANNEL_BUFFER);
        let (feed_actor, feed_slice) = SliceActor::new(FeedSlice::default(), CHANNEL_BUFFER);
        let (lookup_actor, lookup_slice) =
            SliceActor::new(OrderLookupSlice::default(), CHANNEL_BUFFER);
        let (history_actor, history_slice) =
            SliceActor::new(HistorySlice::default(), CHANNEL_BUFFER);
        let (session_actor, session_slice) =
            SliceActor::new(SessionSlice::default(), CHANNEL_BUFFER);

        let handles = vec![
            tokio::spawn(catalog_actor.run()),
            tokio::spawn(constructor_actor.run()),
            tokio::spawn(feed_actor.run()),
            tokio::spawn(lookup_actor.run()),
            tokio::spawn(history_actor.run()),
            tokio::spawn(session_actor.run()),
        ];

        Self {
            catalog: CatalogClient::new(catalog_slice, backend.clone()),
            constructor: ConstructorClient::new(constructor_slice, backend.clone()),
            feed: FeedClient::new(feed_slice, lookup_slice, backend.clone()),
            history: HistoryClient::new(history_slice, backend.clone()),
            session: SessionClient::new(session_slice, backend),
            router: Router::enter(Route::Constructor),
            handles,
        }
    }

    /// Gracefully shuts the store down: drop every client, then await the
    /// actor tasks.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store");

        drop(self.catalog);
        drop(self.constructor);
        drop(self.feed);
        drop(self.history);
        drop(self.session);

        for handle in self.handles {
            handle.await.map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}
