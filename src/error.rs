//! Error types for the auction keeper
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Failures reported by the storage backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No auction exists with the given id
    #[error("Auction not found: {0}")]
    NotFound(String),

    /// Backend query or update failure
    #[error("Storage error: {0}")]
    Storage(String),
}

// == Monitor Error Enum ==
/// Failures reported by the expiration monitor lifecycle.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// `start` was called while the sweep loop is already running
    #[error("Expiration monitor already started")]
    AlreadyStarted,
}

// == Result Type Alias ==
/// Convenience Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
