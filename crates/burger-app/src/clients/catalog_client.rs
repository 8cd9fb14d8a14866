//! # Catalog Client
//!
//! Loads the ingredient catalog once at startup and serves snapshots of it.

use crate::gateway::CatalogGateway;
use crate::model::Ingredient;
use crate::slices::catalog::{CatalogCommand, CatalogSlice};
use std::sync::Arc;
use store_actor::{Remote, SliceClient, StoreError};
use tokio::task::JoinHandle;
use tracing::instrument;

#[derive(Clone)]
pub struct CatalogClient {
    slice: SliceClient<CatalogSlice>,
    catalog: Arc<dyn CatalogGateway>,
}

impl CatalogClient {
    pub fn new(slice: SliceClient<CatalogSlice>, catalog: Arc<dyn CatalogGateway>) -> Self {
        Self { slice, catalog }
    }

    /// Starts the catalog fetch. Retryable: a failed load can simply be
    /// invoked again.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(CatalogCommand::FetchPending).await?;

        let slice = self.slice.clone();
        let catalog = self.catalog.clone();
        Ok(tokio::spawn(async move {
            let command = match catalog.fetch_ingredients().await {
                Ok(ingredients) => CatalogCommand::FetchFulfilled(ingredients),
                Err(e) => CatalogCommand::FetchRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    pub async fn snapshot(&self) -> Result<Remote<Vec<Ingredient>>, StoreError> {
        self.slice.read().await
    }
}
