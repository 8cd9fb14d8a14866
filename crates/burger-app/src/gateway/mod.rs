//! # Gateway Boundaries
//!
//! Contracts for the remote backend, consumed by the typed clients. The
//! engine never talks to the network itself; it only knows these traits.
//! Implementations are thin I/O wrappers, and [`memory::InMemoryBackend`]
//! is the in-process one used by the demo binary and the tests.
//!
//! Failures cross this boundary as [`GatewayError`]; the clients flatten
//! them to message strings on the owning slice's `error` field and never
//! propagate them further.

pub mod memory;

use crate::model::{Ingredient, IngredientId, Order, User};
use async_trait::async_trait;

/// Failure reported by a gateway call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    Remote(String),
    #[error("Order not found")]
    OrderNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// One page of the public order feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedPage {
    pub orders: Vec<Order>,
    pub total: u64,
    pub total_today: u64,
}

/// Login payload.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Source of the ingredient catalog. Called once at startup.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, GatewayError>;
}

/// Order creation boundary. Takes the linear identity sequence derived from
/// a draft and returns the created order.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit_order(&self, ingredients: Vec<IngredientId>) -> Result<Order, GatewayError>;
}

/// Public feed boundary: the global order list plus a dedicated
/// single-order lookup (a direct navigation may ask for one order before
/// any list was ever fetched).
#[async_trait]
pub trait FeedGateway: Send + Sync {
    async fn fetch_feed(&self) -> Result<FeedPage, GatewayError>;
    async fn order_by_number(&self, number: u32) -> Result<Option<Order>, GatewayError>;
}

/// Personal order history boundary. Callers are expected to consult the
/// session state before fetching; the gateway itself does not gate.
#[async_trait]
pub trait HistoryGateway: Send + Sync {
    async fn own_orders(&self) -> Result<Vec<Order>, GatewayError>;
}

/// Session boundary. Token persistence lives behind this trait; the engine
/// only consumes the resulting user and the call's settlement.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    async fn login(&self, credentials: Credentials) -> Result<User, GatewayError>;
    async fn register(&self, data: RegisterData) -> Result<User, GatewayError>;
    async fn fetch_user(&self) -> Result<User, GatewayError>;
    async fn update_user(&self, update: ProfileUpdate) -> Result<User, GatewayError>;
    async fn logout(&self) -> Result<(), GatewayError>;
}
