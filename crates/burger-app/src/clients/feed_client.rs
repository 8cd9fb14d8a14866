//! # Feed Client
//!
//! Drives the public feed list and the independent single-order lookup.
//! The two resources never share loading state: refreshing the list while a
//! lookup is in flight (or the other way round) perturbs neither.

use crate::gateway::{FeedGateway, FeedPage, GatewayError};
use crate::model::Order;
use crate::slices::feed::{FeedCommand, FeedSlice};
use crate::slices::order_lookup::{OrderLookupCommand, OrderLookupSlice};
use std::sync::Arc;
use store_actor::{Remote, SliceClient, StoreError};
use tokio::task::JoinHandle;
use tracing::instrument;

#[derive(Clone)]
pub struct FeedClient {
    feed_slice: SliceClient<FeedSlice>,
    lookup_slice: SliceClient<OrderLookupSlice>,
    gateway: Arc<dyn FeedGateway>,
}

impl FeedClient {
    pub fn new(
        feed_slice: SliceClient<FeedSlice>,
        lookup_slice: SliceClient<OrderLookupSlice>,
        gateway: Arc<dyn FeedGateway>,
    ) -> Self {
        Self {
            feed_slice,
            lookup_slice,
            gateway,
        }
    }

    /// Refreshes the global feed.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<JoinHandle<()>, StoreError> {
        self.feed_slice.dispatch(FeedCommand::FetchPending).await?;

        let slice = self.feed_slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.fetch_feed().await {
                Ok(page) => FeedCommand::FetchFulfilled(page),
                Err(e) => FeedCommand::FetchRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    /// Fetches one order by number through a dedicated request - never a
    /// client-side filter of the list, which may not have been fetched yet.
    #[instrument(skip(self))]
    pub async fn lookup(&self, number: u32) -> Result<JoinHandle<()>, StoreError> {
        self.lookup_slice
            .dispatch(OrderLookupCommand::FetchPending)
            .await?;

        let slice = self.lookup_slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.order_by_number(number).await {
                Ok(Some(order)) => OrderLookupCommand::FetchFulfilled(order),
                // A miss is an ordinary rejection, not a distinct error kind.
                Ok(None) => {
                    OrderLookupCommand::FetchRejected(GatewayError::OrderNotFound.to_string())
                }
                Err(e) => OrderLookupCommand::FetchRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    pub async fn snapshot(&self) -> Result<Remote<FeedPage>, StoreError> {
        self.feed_slice.read().await
    }

    pub async fn lookup_snapshot(&self) -> Result<Remote<Option<Order>>, StoreError> {
        self.lookup_slice.read().await
    }
}
