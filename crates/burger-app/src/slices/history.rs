//! # History Slice
//!
//! The user's own orders. Same shape and lifecycle as the feed list, minus
//! the counters. Fetching is gated on authentication by the caller, not
//! here.

use crate::model::Order;
use store_actor::{Remote, Slice};

#[derive(Debug)]
pub enum HistoryCommand {
    FetchPending,
    FetchFulfilled(Vec<Order>),
    FetchRejected(String),
}

#[derive(Debug, Default)]
pub struct HistorySlice {
    orders: Remote<Vec<Order>>,
}

impl Slice for HistorySlice {
    type Command = HistoryCommand;
    type Snapshot = Remote<Vec<Order>>;

    fn apply(&mut self, command: HistoryCommand) {
        match command {
            HistoryCommand::FetchPending => self.orders.begin(),
            HistoryCommand::FetchFulfilled(orders) => self.orders.resolve(orders),
            HistoryCommand::FetchRejected(message) => self.orders.fail(message),
        }
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.orders.clone()
    }
}
