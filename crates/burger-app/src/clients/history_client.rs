//! # History Client
//!
//! Fetches the user's own orders. Callers consult the session state before
//! refreshing; the client itself is an unconditional executor like the
//! other remote operations.

use crate::gateway::HistoryGateway;
use crate::model::Order;
use crate::slices::history::{HistoryCommand, HistorySlice};
use std::sync::Arc;
use store_actor::{Remote, SliceClient, StoreError};
use tokio::task::JoinHandle;
use tracing::instrument;

#[derive(Clone)]
pub struct HistoryClient {
    slice: SliceClient<HistorySlice>,
    gateway: Arc<dyn HistoryGateway>,
}

impl HistoryClient {
    pub fn new(slice: SliceClient<HistorySlice>, gateway: Arc<dyn HistoryGateway>) -> Self {
        Self { slice, gateway }
    }

    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(HistoryCommand::FetchPending).await?;

        let slice = self.slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.own_orders().await {
                Ok(orders) => HistoryCommand::FetchFulfilled(orders),
                Err(e) => HistoryCommand::FetchRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    pub async fn snapshot(&self) -> Result<Remote<Vec<Order>>, StoreError> {
        self.slice.read().await
    }
}
