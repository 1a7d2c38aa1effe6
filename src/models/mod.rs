//! Domain Models
//!
//! Defines the auction record stored by the backend.

mod auction;

pub use auction::{Auction, AuctionStatus, ProductCondition};
