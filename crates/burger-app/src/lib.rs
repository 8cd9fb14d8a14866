//! # Burger App Library
//!
//! The state engine of a burger ordering application, built on the
//! [`store_actor`] slice framework.
//!
//! - **[model]**: pure domain data (ingredients, orders, users).
//! - **[gateway]**: boundary traits for the remote backend, plus an
//!   in-memory implementation for demos and tests.
//! - **[slices]**: the state machines - catalog, burger constructor,
//!   order feed, single-order lookup, order history, and session.
//! - **[clients]**: typed wrappers that hide the message passing and drive
//!   fire-and-forget gateway calls.
//! - **[router]**: path routing with overlay-over-background presentation.
//! - **[lifecycle]**: orchestration that spawns and wires the whole system.

pub mod clients;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod router;
pub mod slices;
