//! # Feed Slice
//!
//! The public order feed: the global order list plus the `total` and
//! `total_today` counters, refreshed by polling. The [`feed_info`]
//! projection partitions the list by status for the feed dashboard; it is a
//! pure read-time computation, never stored.

use crate::gateway::FeedPage;
use crate::model::{Order, OrderStatus};
use store_actor::{Remote, Slice};

/// The dashboard cap: only the first 20 numbers per status are shown.
const FEED_INFO_CAP: usize = 20;

#[derive(Debug)]
pub enum FeedCommand {
    FetchPending,
    FetchFulfilled(FeedPage),
    FetchRejected(String),
}

#[derive(Debug, Default)]
pub struct FeedSlice {
    feed: Remote<FeedPage>,
}

impl Slice for FeedSlice {
    type Command = FeedCommand;
    type Snapshot = Remote<FeedPage>;

    fn apply(&mut self, command: FeedCommand) {
        match command {
            FeedCommand::FetchPending => self.feed.begin(),
            FeedCommand::FetchFulfilled(page) => self.feed.resolve(page),
            FeedCommand::FetchRejected(message) => self.feed.fail(message),
        }
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.feed.clone()
    }
}

/// Order numbers partitioned by status for the feed dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedInfo {
    pub ready: Vec<u32>,
    pub pending: Vec<u32>,
}

/// Partitions orders into done and pending numbers, preserving input order,
/// capped at [`FEED_INFO_CAP`] each.
pub fn feed_info(orders: &[Order]) -> FeedInfo {
    let by_status = |status: OrderStatus| -> Vec<u32> {
        orders
            .iter()
            .filter(|o| o.status == status)
            .map(|o| o.number)
            .take(FEED_INFO_CAP)
            .collect()
    };
    FeedInfo {
        ready: by_status(OrderStatus::Done),
        pending: by_status(OrderStatus::Pending),
    }
}
