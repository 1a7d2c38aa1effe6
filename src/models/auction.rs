//! Auction Record Module
//!
//! Defines the auction entity and its status lifecycle.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Auction Status ==
/// Lifecycle status of an auction.
///
/// Transitions are monotonic: `New` -> `Active` happens outside this
/// crate, `Active` -> `Completed` happens through the close operation.
/// A completed auction never becomes active again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionStatus {
    New,
    Active,
    Completed,
}

// == Product Condition ==
/// Condition of the product being auctioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

// == Auction ==
/// A single auction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    /// Unique identifier
    pub id: String,
    /// Name of the product on auction
    pub product_name: String,
    /// Product category
    pub category: String,
    /// Free-form product description
    pub description: String,
    /// Condition of the product
    pub condition: ProductCondition,
    /// Current lifecycle status
    pub status: AuctionStatus,
    /// Creation timestamp (Unix seconds), immutable after creation
    pub created_at: i64,
}

impl Auction {
    // == Constructor ==
    /// Creates a new auction with a fresh id, stamped with the current
    /// time and immediately in `Active` status.
    pub fn new(
        product_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        condition: ProductCondition,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.into(),
            category: category.into(),
            description: description.into(),
            condition,
            status: AuctionStatus::Active,
            created_at: Utc::now().timestamp(),
        }
    }
}
