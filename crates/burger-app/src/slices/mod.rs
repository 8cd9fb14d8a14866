//! # State Slices
//!
//! The store is partitioned into six independently-owned slices, each a
//! [`Slice`](store_actor::Slice) run by its own actor. Every mutation goes
//! through a command; presentation code only ever reads snapshots.
//!
//! - [`catalog`]: the ingredient list, loaded once.
//! - [`constructor`]: the in-progress burger and its submission lifecycle.
//! - [`feed`]: the public order feed with its counters.
//! - [`order_lookup`]: a single order fetched by number, independent of any
//!   list.
//! - [`history`]: the user's own orders.
//! - [`session`]: authentication state.

pub mod catalog;
pub mod constructor;
pub mod feed;
pub mod history;
pub mod order_lookup;
pub mod session;
