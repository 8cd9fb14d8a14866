//! # Order Lookup Slice
//!
//! A single order fetched by number. This resource is independent of the
//! feed and history lists: a detail view reached by direct navigation asks
//! for one order before any list was ever fetched, and an in-flight lookup
//! must not perturb list loading state.
//!
//! A lookup that matches nothing settles as an ordinary rejection, not a
//! distinct error kind.

use crate::model::Order;
use store_actor::{Remote, Slice};

#[derive(Debug)]
pub enum OrderLookupCommand {
    FetchPending,
    FetchFulfilled(Order),
    FetchRejected(String),
}

#[derive(Debug, Default)]
pub struct OrderLookupSlice {
    order: Remote<Option<Order>>,
}

impl Slice for OrderLookupSlice {
    type Command = OrderLookupCommand;
    type Snapshot = Remote<Option<Order>>;

    fn apply(&mut self, command: OrderLookupCommand) {
        match command {
            OrderLookupCommand::FetchPending => self.order.begin(),
            OrderLookupCommand::FetchFulfilled(order) => self.order.resolve(Some(order)),
            OrderLookupCommand::FetchRejected(message) => self.order.fail(message),
        }
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.order.clone()
    }
}
