//! Storage Backend Module
//!
//! Defines the storage interface consumed by the expiration monitor and
//! an in-memory implementation of it.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Auction, AuctionStatus};

// == Storage Interface ==
/// Durable store of auction records, keyed by id.
///
/// The connection behind an implementation is shared: the expiration
/// monitor's sweep and external callers may use it concurrently, so all
/// methods take `&self`.
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// Persists a new auction record.
    async fn insert(&self, auction: Auction) -> Result<()>;

    /// Looks up a single auction by id.
    async fn find_by_id(&self, id: &str) -> Result<Auction>;

    /// Returns all auctions currently in the given status.
    async fn find_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>>;

    /// Overwrites the status of the auction with the given id.
    async fn update_status(&self, id: &str, status: AuctionStatus) -> Result<()>;

    /// Marks the auction Completed regardless of its current status.
    ///
    /// The write is unconditional, which makes the operation idempotent:
    /// closing an already-completed auction succeeds and leaves the
    /// record unchanged. Both the monitor's sweep and manual callers go
    /// through this one contract.
    async fn close(&self, id: &str) -> Result<()> {
        self.update_status(id, AuctionStatus::Completed).await
    }
}
