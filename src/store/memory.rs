//! In-Memory Store Module
//!
//! HashMap-backed implementation of the storage interface, used by the
//! daemon and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::models::{Auction, AuctionStatus};
use crate::store::AuctionStore;

// == Memory Store ==
/// Auction store keeping all records in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Records keyed by auction id
    auctions: RwLock<HashMap<String, Auction>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of stored auctions.
    pub async fn len(&self) -> usize {
        self.auctions.read().await.len()
    }

    /// Returns true if no auctions are stored.
    pub async fn is_empty(&self) -> bool {
        self.auctions.read().await.is_empty()
    }
}

#[async_trait]
impl AuctionStore for MemoryStore {
    async fn insert(&self, auction: Auction) -> Result<()> {
        let mut auctions = self.auctions.write().await;
        if auctions.contains_key(&auction.id) {
            return Err(StoreError::Storage(format!(
                "Duplicate auction id: {}",
                auction.id
            )));
        }
        auctions.insert(auction.id.clone(), auction);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Auction> {
        self.auctions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn find_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>> {
        let auctions = self.auctions.read().await;
        Ok(auctions
            .values()
            .filter(|auction| auction.status == status)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &str, status: AuctionStatus) -> Result<()> {
        let mut auctions = self.auctions.write().await;
        match auctions.get_mut(id) {
            Some(auction) => {
                auction.status = status;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
