//! # Catalog Slice
//!
//! The flat list of selectable ingredients. Fetched once at startup and
//! read-only afterwards; the only commands are the fetch lifecycle.

use crate::model::Ingredient;
use store_actor::{Remote, Slice};

#[derive(Debug)]
pub enum CatalogCommand {
    FetchPending,
    FetchFulfilled(Vec<Ingredient>),
    FetchRejected(String),
}

#[derive(Debug, Default)]
pub struct CatalogSlice {
    ingredients: Remote<Vec<Ingredient>>,
}

impl Slice for CatalogSlice {
    type Command = CatalogCommand;
    type Snapshot = Remote<Vec<Ingredient>>;

    fn apply(&mut self, command: CatalogCommand) {
        match command {
            CatalogCommand::FetchPending => self.ingredients.begin(),
            CatalogCommand::FetchFulfilled(ingredients) => self.ingredients.resolve(ingredients),
            CatalogCommand::FetchRejected(message) => self.ingredients.fail(message),
        }
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.ingredients.clone()
    }
}
