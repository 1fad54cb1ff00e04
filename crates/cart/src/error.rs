//! Unified error handling for the cart library.
//!
//! All fallible cart operations return [`Result`]. Storage failures are
//! unrecoverable for the triggering operation: there is no retry and no
//! rollback of the in-memory list, so memory and storage may diverge after
//! a failed write.

use thiserror::Error;

use crate::storage::StorageError;

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persistent storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The line-item list could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Cart operations were accessed outside an active provider scope.
    #[error("cart must be used within an active CartProvider")]
    OutsideProvider,
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
