//! # Constructor Slice
//!
//! The in-progress burger and the lifecycle of submitting it.
//!
//! The draft holds at most one bun plus a user-ordered list of fillings.
//! Adding a bun silently replaces the previous one; fillings append and are
//! reordered only through explicit neighbor swaps. Price and the submission
//! request are derived on every read, never cached.
//!
//! Submission is a dumb executor: the slice transitions pending →
//! fulfilled/rejected and performs no business-rule checks of its own.
//! Whether a submission is allowed at all (bun present, user authenticated)
//! is decided by the caller before the pending command is ever dispatched.
//! The draft is cleared only by a fulfilled settlement - never
//! optimistically - so a failed submission leaves everything in place for a
//! retry.

use crate::model::{DraftItem, DraftItemId, Ingredient, IngredientId, Order};
use store_actor::Slice;

/// The mutable composition: one optional bun, ordered fillings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BurgerDraft {
    pub bun: Option<Ingredient>,
    pub fillings: Vec<DraftItem>,
}

impl BurgerDraft {
    /// Total price: the bun counts twice (both halves), fillings once each.
    /// Recomputed on every read so it always reflects the current draft.
    pub fn price(&self) -> u64 {
        let bun = self.bun.as_ref().map_or(0, |b| b.price * 2);
        let fillings: u64 = self.fillings.iter().map(|f| f.ingredient.price).sum();
        bun + fillings
    }

    /// The linear catalog-identity sequence sent to the backend:
    /// `[bun, fillings.., bun]` when a bun is present, just the fillings
    /// otherwise. Built fresh at submit time.
    pub fn request_sequence(&self) -> Vec<IngredientId> {
        let fillings = self.fillings.iter().map(|f| f.ingredient.id.clone());
        match &self.bun {
            Some(bun) => std::iter::once(bun.id.clone())
                .chain(fillings)
                .chain(std::iter::once(bun.id.clone()))
                .collect(),
            None => fillings.collect(),
        }
    }
}

/// Constructor slice state: the draft plus the submission resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorState {
    pub draft: BurgerDraft,
    /// Mirrors the pending submission, but independently settable so the UI
    /// can raise the loading overlay before the remote call starts and
    /// lower it without waiting for one to settle.
    pub submitting: bool,
    /// The receipt shown in the success overlay. Set only on a fulfilled
    /// submission, cleared only by `ClearReceipt`.
    pub receipt: Option<Order>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum ConstructorCommand {
    /// Bun kind replaces the bun slot; anything else appends to fillings.
    AddIngredient(DraftItem),
    /// No-op when the id is not present.
    RemoveFilling(DraftItemId),
    /// Swap with the previous neighbor. No-op at index 0 or out of range.
    MoveUp(usize),
    /// Swap with the next neighbor. No-op at the last index or out of range.
    MoveDown(usize),
    SetSubmitting(bool),
    ClearReceipt,
    SubmitPending,
    SubmitFulfilled(Order),
    SubmitRejected(String),
}

/// The slice itself; state and snapshot coincide.
#[derive(Debug, Clone, Default)]
pub struct ConstructorSlice {
    state: ConstructorState,
}

impl Slice for ConstructorSlice {
    type Command = ConstructorCommand;
    type Snapshot = ConstructorState;

    fn apply(&mut self, command: ConstructorCommand) {
        let state = &mut self.state;
        match command {
            ConstructorCommand::AddIngredient(item) => {
                if item.ingredient.is_bun() {
                    state.draft.bun = Some(item.ingredient);
                } else {
                    state.draft.fillings.push(item);
                }
            }
            ConstructorCommand::RemoveFilling(local_id) => {
                state.draft.fillings.retain(|f| f.local_id != local_id);
            }
            ConstructorCommand::MoveUp(index) => {
                if index > 0 && index < state.draft.fillings.len() {
                    state.draft.fillings.swap(index - 1, index);
                }
            }
            ConstructorCommand::MoveDown(index) => {
                let len = state.draft.fillings.len();
                if len > 0 && index < len - 1 {
                    state.draft.fillings.swap(index, index + 1);
                }
            }
            ConstructorCommand::SetSubmitting(value) => {
                state.submitting = value;
            }
            ConstructorCommand::ClearReceipt => {
                state.receipt = None;
            }
            ConstructorCommand::SubmitPending => {
                state.submitting = true;
                state.error = None;
            }
            ConstructorCommand::SubmitFulfilled(order) => {
                state.submitting = false;
                state.error = None;
                state.receipt = Some(order);
                state.draft = BurgerDraft::default();
            }
            ConstructorCommand::SubmitRejected(message) => {
                state.submitting = false;
                state.error = Some(message);
            }
        }
    }

    fn snapshot(&self) -> ConstructorState {
        self.state.clone()
    }
}
