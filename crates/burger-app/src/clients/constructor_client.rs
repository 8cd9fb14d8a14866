//! # Constructor Client
//!
//! High-level API for building the draft burger and submitting it.
//!
//! Composition mutations are synchronous dispatches. Submission is the
//! three-state async lifecycle: the slice is a dumb executor, and the
//! business preconditions (authenticated session, bun present) live here in
//! [`ConstructorClient::place_order`] - when one fails, no submission is
//! attempted and no error state is recorded.

use crate::gateway::OrderGateway;
use crate::model::{DraftItem, DraftItemId, Ingredient};
use crate::slices::constructor::{ConstructorCommand, ConstructorSlice, ConstructorState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use store_actor::{SliceClient, StoreError};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Outcome of a place-order attempt.
#[derive(Debug)]
pub enum OrderAttempt {
    /// The request was handed to the order gateway; the handle resolves
    /// when the submission settles.
    Submitted(JoinHandle<()>),
    /// Withheld: no authenticated session. The caller should route to
    /// login.
    LoginRequired,
    /// Withheld: a burger needs a bun.
    MissingBun,
}

/// Client for the constructor slice.
#[derive(Clone)]
pub struct ConstructorClient {
    slice: SliceClient<ConstructorSlice>,
    orders: Arc<dyn OrderGateway>,
    next_item_id: Arc<AtomicU64>,
}

impl ConstructorClient {
    pub fn new(slice: SliceClient<ConstructorSlice>, orders: Arc<dyn OrderGateway>) -> Self {
        Self {
            slice,
            orders,
            next_item_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Adds a catalog ingredient to the draft, assigning the
    /// composition-local id here so every insertion of the same ingredient
    /// stays individually addressable.
    #[instrument(skip(self, ingredient), fields(ingredient = %ingredient.id))]
    pub async fn add_ingredient(&self, ingredient: Ingredient) -> Result<DraftItemId, StoreError> {
        let local_id = DraftItemId(self.next_item_id.fetch_add(1, Ordering::SeqCst));
        self.slice
            .dispatch(ConstructorCommand::AddIngredient(DraftItem {
                local_id,
                ingredient,
            }))
            .await?;
        Ok(local_id)
    }

    #[instrument(skip(self))]
    pub async fn remove_filling(&self, local_id: DraftItemId) -> Result<(), StoreError> {
        self.slice
            .dispatch(ConstructorCommand::RemoveFilling(local_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn move_up(&self, index: usize) -> Result<(), StoreError> {
        self.slice.dispatch(ConstructorCommand::MoveUp(index)).await
    }

    #[instrument(skip(self))]
    pub async fn move_down(&self, index: usize) -> Result<(), StoreError> {
        self.slice
            .dispatch(ConstructorCommand::MoveDown(index))
            .await
    }

    pub async fn snapshot(&self) -> Result<ConstructorState, StoreError> {
        self.slice.read().await
    }

    /// Dismisses the result overlay: lowers the submitting flag and clears
    /// the receipt. Does not touch any in-flight submission; a late
    /// settlement still lands.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.slice
            .dispatch(ConstructorCommand::SetSubmitting(false))
            .await?;
        self.slice.dispatch(ConstructorCommand::ClearReceipt).await
    }

    /// The call-site gate in front of [`submit`](Self::submit): withholds
    /// the attempt entirely when the session is unauthenticated or the
    /// draft has no bun.
    #[instrument(skip(self))]
    pub async fn place_order(&self, authenticated: bool) -> Result<OrderAttempt, StoreError> {
        if !authenticated {
            debug!("order withheld: not authenticated");
            return Ok(OrderAttempt::LoginRequired);
        }
        let snapshot = self.slice.read().await?;
        if snapshot.draft.bun.is_none() {
            debug!("order withheld: no bun");
            return Ok(OrderAttempt::MissingBun);
        }

        // Raise the loading overlay before the remote call starts.
        self.slice
            .dispatch(ConstructorCommand::SetSubmitting(true))
            .await?;
        let handle = self.submit(snapshot.draft.request_sequence()).await?;
        Ok(OrderAttempt::Submitted(handle))
    }

    /// Unconditionally submits a linear identity sequence. No validation
    /// here: callers enforce preconditions before invoking this.
    #[instrument(skip(self, request), fields(items = request.len()))]
    pub async fn submit(
        &self,
        request: Vec<crate::model::IngredientId>,
    ) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(ConstructorCommand::SubmitPending).await?;

        let slice = self.slice.clone();
        let orders = self.orders.clone();
        Ok(tokio::spawn(async move {
            let command = match orders.submit_order(request).await {
                Ok(order) => ConstructorCommand::SubmitFulfilled(order),
                Err(e) => ConstructorCommand::SubmitRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }
}
