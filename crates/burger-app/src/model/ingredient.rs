//! Catalog ingredients and the draft items built from them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog identifier for an ingredient. This is the identity the backend
/// knows; it is what goes into a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientId(pub String);

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Ingredient category. `Bun` is singular: a burger holds at most one,
/// counted as both halves. Everything else is a filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Bun,
    Sauce,
    Main,
}

/// A selectable catalog entry. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: IngredientId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientKind,
    pub price: u64,
    pub image: String,
    pub image_mobile: String,
    pub image_large: String,
}

impl Ingredient {
    pub fn is_bun(&self) -> bool {
        self.kind == IngredientKind::Bun
    }
}

/// Identity of one item inside the in-progress burger, distinct from the
/// catalog id because the same ingredient may be added several times.
/// Assigned at insertion, unique within the draft, never sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftItemId(pub u64);

impl Display for DraftItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draft_{}", self.0)
    }
}

/// An ingredient placed into the draft burger, tagged with its local id.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub local_id: DraftItemId,
    pub ingredient: Ingredient,
}
