//! # Typed Clients
//!
//! One client per slice, hiding the message passing behind a domain API.
//! Each client holds its `SliceClient` plus the gateway it drives.
//!
//! Remote operations follow one pattern: dispatch the pending command, then
//! spawn a detached task that performs the gateway call and dispatches the
//! settlement command. There is no cancellation - a superseding call does
//! not abort a prior one, and whichever settlement applies last wins. Each
//! operation returns its settlement `JoinHandle` so callers that need
//! quiescence (tests, the demo binary) can await it; interactive callers
//! just drop it.

pub mod catalog_client;
pub mod constructor_client;
pub mod feed_client;
pub mod history_client;
pub mod session_client;

pub use catalog_client::CatalogClient;
pub use constructor_client::{ConstructorClient, OrderAttempt};
pub use feed_client::FeedClient;
pub use history_client::HistoryClient;
pub use session_client::SessionClient;
