/// Core error types for Setlist
use thiserror::Error;
use crate::types::PlaylistId;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures reported by a remote playlist store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No playlist with this id (or it was deleted concurrently)
    #[error("Playlist not found: {0}")]
    NotFound(PlaylistId),

    /// Caller is not authenticated or does not own the playlist
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The playlist is already published and rejects further changes
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The write conflicts with another document (e.g. duplicate name)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Transport-level failure, the request may not have reached the store
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with something we could not interpret
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl StoreError {
    /// Create an unauthorized error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a protocol error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol(err.to_string())
    }
}
