//! Orders as the backend reports them.

use crate::model::IngredientId;
use serde::{Deserialize, Serialize};

/// Server-side processing state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Pending,
    Done,
}

/// A placed order. The `number` is the user-facing identity used for
/// lookups; `id` is the backend's record id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub number: u32,
    pub status: OrderStatus,
    pub name: String,
    pub ingredients: Vec<IngredientId>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
