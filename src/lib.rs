//! Auction Keeper - auction persistence with automatic expiration
//!
//! Stores auction records and closes them automatically once their
//! configured active window has elapsed.

pub mod config;
pub mod error;
pub mod models;
pub mod monitor;
pub mod store;

pub use config::Config;
pub use monitor::ExpirationMonitor;
pub use store::{AuctionStore, MemoryStore};
