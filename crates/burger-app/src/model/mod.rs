//! # Domain Model
//!
//! Pure data structures shared across slices, clients, and gateways.
//! Everything here is a value: catalog ingredients are immutable after
//! load, orders arrive fully formed from the backend, and draft items only
//! ever change by being replaced.

pub mod ingredient;
pub mod order;
pub mod user;

pub use ingredient::{DraftItem, DraftItemId, Ingredient, IngredientId, IngredientKind};
pub use order::{Order, OrderStatus};
pub use user::User;
