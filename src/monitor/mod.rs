//! Expiration Monitoring Module
//!
//! Contains the background task that closes auctions once their active
//! window has elapsed.

mod expiration;

#[cfg(test)]
mod property_tests;

pub use expiration::ExpirationMonitor;
