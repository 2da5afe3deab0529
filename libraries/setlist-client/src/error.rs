//! Error types for the Setlist client.

use setlist_core::{PlaylistId, StoreError};
use thiserror::Error;

/// Errors that can occur when talking to a Setlist server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-GraphQL error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed (bad credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Caller is not authenticated or not the author
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The playlist is published and can no longer be changed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Playlist does not exist
    #[error("Playlist not found: {0}")]
    NotFound(String),

    /// Another playlist of this author already has the name
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other GraphQL error message
    #[error("GraphQL error: {0}")]
    GraphQL(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for StoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => StoreError::network(e.to_string()),
            ClientError::ServerUnreachable(msg) => StoreError::network(msg),
            ClientError::AuthRequired => StoreError::unauthorized("Authentication required"),
            ClientError::AuthFailed(msg) | ClientError::Unauthorized(msg) => {
                StoreError::unauthorized(msg)
            }
            ClientError::Forbidden(msg) => StoreError::forbidden(msg),
            ClientError::NotFound(id) => StoreError::NotFound(PlaylistId::new(id)),
            ClientError::Conflict(msg) => StoreError::conflict(msg),
            ClientError::ServerError { status, message } => {
                StoreError::protocol(format!("HTTP {}: {}", status, message))
            }
            ClientError::GraphQL(msg) | ClientError::InvalidUrl(msg) | ClientError::ParseError(msg) => {
                StoreError::protocol(msg)
            }
        }
    }
}
