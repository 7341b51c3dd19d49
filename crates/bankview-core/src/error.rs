use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the synchronization layer.
///
/// Every variant is recoverable: stores fold these into their error slot
/// and the next refresh or mutation starts clean.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The session holds no token; nothing was sent to the backend.
    #[error("No authentication token found")]
    MissingToken,
    /// The backend answered with a non-success status. Carries the
    /// body's `message` when present, else the per-operation fallback.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed (DNS, connect, timeout).
    #[error("{0}")]
    Network(String),
    /// The response arrived but its payload could not be decoded.
    #[error("{0}")]
    Decode(String),
    /// Another mutation on this store is still in flight.
    #[error("Another request is still in flight")]
    Busy,
    /// The action has no backing endpoint yet.
    #[error("{0}")]
    Unsupported(String),
}

pub type SyncResult<T> = StdResult<T, SyncError>;

/// Client-side validation failure; never reaches the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("`{0}` is required")]
    Missing(&'static str),
    #[error("`{0}` must be a number")]
    NotNumeric(&'static str),
}

/// Why a dialog submission could not start.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("A submission is already in flight")]
    Busy,
    #[error("The dialog is not open")]
    Closed,
    #[error(transparent)]
    Form(#[from] FormError),
}
